//! Writes rendered reports out as files.

use async_trait::async_trait;
use log::{debug, info};
use std::path::{Path, PathBuf};

use super::report_model::Report;
use super::report_renderer::{render_report, ReportFormat};
use crate::constants::REPORT_FILE_STEM;
use crate::errors::{Result, ValidationError};

/// Trait for report export targets.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Renders `report` in `format` and emits it, returning where it went.
    async fn export(&self, report: &Report, format: ReportFormat) -> Result<PathBuf>;
}

/// Exports reports as files in a directory.
pub struct FileReportExporter {
    output_dir: PathBuf,
}

impl FileReportExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a report in `format` is written to.
    pub fn target_path(&self, format: ReportFormat) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", REPORT_FILE_STEM, format.extension()))
    }
}

#[async_trait]
impl ReportExporter for FileReportExporter {
    async fn export(&self, report: &Report, format: ReportFormat) -> Result<PathBuf> {
        if !report.is_exportable() {
            return Err(ValidationError::EmptyReport.into());
        }

        let body = render_report(report, format)?;
        let path = self.target_path(format);
        debug!("Rendering {} report ({} bytes) to {:?}", format, body.len(), path);

        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&path, body).await?;

        info!("Exported {} report to {:?}", format, path);
        Ok(path)
    }
}
