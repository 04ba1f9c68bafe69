//! Parser orchestration
//!
//! `GefParser` ties the pipeline together: tokenize, parse headers,
//! detect file type and dialect extension, parse the data block, derive
//! depth columns, then attach warnings and processed metadata.

use std::sync::Arc;

use tracing::{debug, info};

use crate::app::adapters::filesystem;
use crate::app::models::headers::GefHeaders;
use crate::app::models::{Extension, FileType, GefData};
use crate::app::services::metadata::{self, Projector};
use crate::config::ParseOptions;
use crate::{Error, Result};

use super::bore::parse_bore_data;
use super::cpt::{build_chart_axes, parse_cpt_data};
use super::depth::add_computed_depth_columns;
use super::detect::{detect_extension, detect_file_type};
use super::header::parse_headers;
use super::specimen::{parse_bore_specimens, parse_pre_excavation_layers};
use super::tokenizer::{GefTokenizer, LineTokenizer};

/// GEF parsing service
pub struct GefParser {
    tokenizer: Arc<dyn GefTokenizer>,
    projector: Option<Arc<dyn Projector>>,
    options: ParseOptions,
}

impl Default for GefParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl GefParser {
    /// Create a parser with the built-in line tokenizer
    pub fn new(options: ParseOptions) -> Self {
        Self {
            tokenizer: Arc::new(LineTokenizer),
            projector: None,
            options,
        }
    }

    /// Swap in an alternative tokenizer implementation
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn GefTokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Attach a coordinate projector for WGS84 derivation
    pub fn with_projector(mut self, projector: Arc<dyn Projector>) -> Self {
        self.projector = Some(projector);
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Read and parse a GEF file from disk
    pub fn parse_file(&self, path: &std::path::Path) -> Result<GefData> {
        let text = filesystem::read_gef_file(path)?;
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.parse(&file, &text)
    }

    /// Parse GEF text already in memory
    ///
    /// `file` is a display name carried into warnings and metadata, not
    /// a path that gets opened.
    pub fn parse(&self, file: &str, text: &str) -> Result<GefData> {
        let raw = self
            .tokenizer
            .tokenize(text)
            .map_err(|error| Error::tokenizer(file, error.message))?;

        let (headers, mut warnings) = parse_headers(file, &raw.headers);

        let report_code = headers
            .report_code
            .as_ref()
            .map(|report| report.code.as_str())
            .unwrap_or_default();
        let file_type = detect_file_type(report_code)?;
        let extension = detect_extension(
            &headers.measurement_text_ids(),
            &headers.measurement_var_ids(),
        );
        debug!(%file_type, ?extension, file, "detected GEF flavour");

        let data = match file_type {
            FileType::Cpt => self.parse_cpt(file, &raw.data, headers, &mut warnings, extension),
            FileType::Bore => self.parse_bore(file, &raw.data, headers, &mut warnings, extension),
        };

        info!(
            file,
            file_type = %data.file_type(),
            warnings = data.warnings().len(),
            "parsed GEF file"
        );
        Ok(data)
    }

    fn parse_cpt(
        &self,
        file: &str,
        raw_block: &str,
        headers: GefHeaders,
        warnings: &mut Vec<crate::app::models::Warning>,
        extension: Extension,
    ) -> GefData {
        let rows = parse_cpt_data(raw_block, &headers, &self.options);
        let rows = add_computed_depth_columns(rows, &headers);
        let chart_axes = build_chart_axes(&rows, &headers);
        let pre_excavation_layers = parse_pre_excavation_layers(&headers);

        warnings.extend(metadata::generate_warnings(
            file,
            &headers,
            FileType::Cpt,
            &rows,
            &self.options,
        ));
        let processed = metadata::process_metadata(
            file,
            &headers,
            FileType::Cpt,
            extension,
            &self.options,
            self.projector.as_deref(),
        );

        GefData::Cpt {
            headers,
            data: rows,
            chart_axes,
            pre_excavation_layers,
            warnings: std::mem::take(warnings),
            processed,
        }
    }

    fn parse_bore(
        &self,
        file: &str,
        raw_block: &str,
        headers: GefHeaders,
        warnings: &mut Vec<crate::app::models::Warning>,
        extension: Extension,
    ) -> GefData {
        let layers = parse_bore_data(raw_block, &headers, &self.options);
        let specimens = parse_bore_specimens(&headers);

        warnings.extend(metadata::generate_warnings(
            file,
            &headers,
            FileType::Bore,
            &[],
            &self.options,
        ));
        let processed = metadata::process_metadata(
            file,
            &headers,
            FileType::Bore,
            extension,
            &self.options,
            self.projector.as_deref(),
        );

        GefData::Bore {
            headers,
            layers,
            specimens,
            warnings: std::mem::take(warnings),
            processed,
        }
    }
}

/// Parse GEF text with default options, for one-off callers
pub fn parse_gef(file: &str, text: &str) -> Result<GefData> {
    GefParser::default().parse(file, text)
}
