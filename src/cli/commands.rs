//! Command implementations for the GEF processor CLI
//!
//! Main command execution logic, terminal reporting and logging setup.

use colored::*;
use tracing::{debug, info};

use crate::app::adapters::filesystem;
use crate::app::models::{FileType, GefData};
use crate::app::services::code_tables;
use crate::cli::args::{Args, Commands, InspectArgs, ValidateArgs};
use crate::config::{Locale, ParseOptions};
use crate::{Error, GefParser, Result};

/// Outcome counters for the validate command
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationStats {
    pub files_checked: usize,
    pub files_with_warnings: usize,
    pub files_failed: usize,
    pub total_warnings: usize,
}

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    match args.command {
        Some(Commands::Inspect(inspect)) => run_inspect(&inspect),
        Some(Commands::Validate(validate)) => {
            let stats = run_validate(&validate)?;
            if stats.files_failed > 0 {
                Err(Error::Validation {
                    failed: stats.files_failed,
                    checked: stats.files_checked,
                })
            } else {
                Ok(())
            }
        }
        None => Ok(()),
    }
}

/// Set up structured logging from the verbosity flags
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gef_processor={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("logging initialized at level {}", args.log_level());
}

fn run_inspect(args: &InspectArgs) -> Result<()> {
    let options = ParseOptions {
        locale: Locale::from_tag(&args.locale),
        ..Default::default()
    };
    let parser = GefParser::new(options);
    let data = parser.parse_file(&args.file)?;

    if args.json {
        let json = serde_json::to_string_pretty(&data)
            .map_err(|error| Error::serialization("failed to render parse result", error))?;
        println!("{json}");
    } else {
        print_summary(&data);
    }
    Ok(())
}

fn print_summary(data: &GefData) {
    let processed = data.processed();

    println!("{}", processed.filename.bold());
    println!("  type:      {}", data.file_type().to_string().cyan());
    println!("  extension: {}", processed.extension);
    if let Some(system) = &processed.coordinate_system {
        println!("  position:  {system}");
    }
    if let Some(system) = &processed.height_system {
        println!("  datum:     {system}");
    }
    if let Some(wgs84) = &processed.wgs84 {
        println!("  wgs84:     {:.6}, {:.6}", wgs84.latitude, wgs84.longitude);
    }

    match data {
        GefData::Cpt {
            data: rows,
            chart_axes,
            pre_excavation_layers,
            ..
        } => {
            println!("  rows:      {}", rows.len());
            println!("  axes:      {}", chart_axes.len());
            if !pre_excavation_layers.is_empty() {
                println!(
                    "  pre-excavated to {:.2} m",
                    pre_excavation_layers[0].depth_bottom
                );
            }
        }
        GefData::Bore {
            layers, specimens, ..
        } => {
            println!("  layers:    {}", layers.len());
            for layer in layers {
                let lithology = code_tables::soil::decompose_soil_code(&layer.soil_code)
                    .map(|(main, _)| main.description_en)
                    .unwrap_or("unknown lithology");
                let colors: Vec<&str> = layer
                    .additional_codes
                    .iter()
                    .filter_map(|code| code_tables::soil::color_code(code))
                    .map(|color| color.description_en)
                    .collect();
                let mut line = format!(
                    "    {:>5.2} - {:>5.2} m  {:<6} {}",
                    layer.depth_top, layer.depth_bottom, layer.soil_code, lithology
                );
                if !colors.is_empty() {
                    line.push_str(&format!(", {}", colors.join("/")));
                }
                if let Some(description) = &layer.description {
                    line.push_str(&format!(" ({description})"));
                }
                println!("{line}");
            }
            if !specimens.is_empty() {
                println!("  specimens: {}", specimens.len());
            }
        }
    }

    if let Some(company) = &data.headers().company_id {
        let country = company
            .country_code
            .as_deref()
            .and_then(code_tables::soil::country)
            .map(|entry| entry.name_en);
        match country {
            Some(country) => println!("  company:   {} ({country})", company.name),
            None => println!("  company:   {}", company.name),
        }
    }

    for group in &processed.groups {
        println!("  {:?}:", group.category);
        for item in &group.items {
            match &item.unit {
                Some(unit) => println!("    {}: {} {}", item.label, item.value, unit),
                None => println!("    {}: {}", item.label, item.value),
            }
        }
    }

    if data.warnings().is_empty() {
        println!("  {}", "no warnings".green());
    } else {
        for warning in data.warnings() {
            println!("  {} {}", "warning:".yellow(), warning);
        }
    }
}

fn run_validate(args: &ValidateArgs) -> Result<ValidationStats> {
    let parser = GefParser::default();
    let mut stats = ValidationStats::default();

    let mut files = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            files.extend(filesystem::list_gef_files(path)?);
        } else {
            files.push(path.clone());
        }
    }

    for path in &files {
        stats.files_checked += 1;
        match parser.parse_file(path) {
            Ok(data) => {
                let warnings = data.warnings();
                if warnings.is_empty() {
                    println!("{} {}", "ok".green(), path.display());
                } else {
                    stats.files_with_warnings += 1;
                    stats.total_warnings += warnings.len();
                    println!(
                        "{} {} ({} warnings)",
                        "warn".yellow(),
                        path.display(),
                        warnings.len()
                    );
                    for warning in warnings {
                        println!("     {warning}");
                    }
                }
                if data.file_type() == FileType::Bore {
                    debug!(path = %path.display(), "validated borehole log");
                }
            }
            Err(error) => {
                stats.files_failed += 1;
                println!("{} {}: {}", "fail".red(), path.display(), error);
            }
        }
    }

    info!(
        checked = stats.files_checked,
        with_warnings = stats.files_with_warnings,
        failed = stats.files_failed,
        "validation complete"
    );
    Ok(stats)
}
