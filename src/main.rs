use clap::Parser;
use gef_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // No subcommand: print help rather than doing nothing silently
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}

fn show_help_and_commands() {
    println!("gef-processor - parse and validate GEF geotechnical files");
    println!();
    println!("Usage: gef-processor <COMMAND>");
    println!();
    println!("Commands:");
    println!("  inspect   Parse one GEF file and print its structured content");
    println!("  validate  Parse files and report warnings only");
    println!();
    println!("Run 'gef-processor <COMMAND> --help' for details.");
}
