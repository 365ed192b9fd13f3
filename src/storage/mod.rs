// src/storage/mod.rs
use crate::ism::models::{FullReport, IndicatorReport, IndustryState};
use crate::utils::error::StorageError;
use rust_xlsxwriter::Workbook;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The spreadsheet path for a report: same location, `.xlsx` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("xlsx")
}

#[derive(Serialize)]
struct ReportSummary<'a> {
    source: String,
    generated_at: String,
    indicators: Vec<IndicatorSummary<'a>>,
}

#[derive(Serialize)]
struct IndicatorSummary<'a> {
    name: &'a str,
    growth: usize,
    neutral: usize,
    contraction: usize,
    industries: &'a IndicatorReport,
}

pub struct StorageManager {
    output_path: PathBuf,
}

impl StorageManager {
    /// Creates a StorageManager writing to `output_path`, creating its directory if needed
    pub fn new<P: AsRef<Path>>(output_path: P) -> Result<Self, StorageError> {
        let output_path = output_path.as_ref().to_path_buf();

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StorageError::IoError)?;
            }
        }

        Ok(Self { output_path })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes one sheet per indicator with a (industry, state, rank) row per industry.
    /// An existing file at the output path is overwritten.
    pub fn save_workbook(&self, report: &FullReport) -> Result<PathBuf, StorageError> {
        let mut workbook = Workbook::new();

        for (indicator, ranked) in report.iter() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(indicator.name())?;

            for (row, entry) in ranked.entries().iter().enumerate() {
                let row = row as u32;
                worksheet.write_string(row, 0, entry.industry.as_str())?;
                worksheet.write_string(row, 1, entry.state().label())?;
                worksheet.write_number(row, 2, entry.rank)?;
            }
            tracing::debug!("Wrote sheet {} ({} rows)", indicator.name(), ranked.len());
        }

        workbook.save(&self.output_path)?;
        tracing::info!("Saved workbook to {}", self.output_path.display());

        Ok(self.output_path.clone())
    }

    /// Saves per-indicator counts and rankings as JSON next to the workbook
    pub fn save_summary(&self, report: &FullReport, source: &Path) -> Result<PathBuf, StorageError> {
        let stem = self
            .output_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        let file_path = self.output_path.with_file_name(format!("{}_summary.json", stem));

        let summary = ReportSummary {
            source: source.display().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            indicators: report
                .iter()
                .map(|(indicator, ranked)| IndicatorSummary {
                    name: indicator.name(),
                    growth: ranked.count(IndustryState::Growth),
                    neutral: ranked.count(IndustryState::Neutral),
                    contraction: ranked.count(IndustryState::Contraction),
                    industries: ranked,
                })
                .collect(),
        };

        let summary_str = serde_json::to_string_pretty(&summary)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, summary_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved summary to {}", file_path.display());

        Ok(file_path)
    }
}
