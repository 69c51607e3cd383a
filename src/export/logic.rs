// src/export/logic.rs

use crate::core::calculator::range::DateRange;
use crate::core::worktime::WorktimeLogic;
use crate::db::store::PeriodStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{SessionExport, SummaryExport};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the worktime table of the period, and for `xlsx`/`json` the
    /// duty sessions behind it, restricted to `range`.
    pub fn export<S: PeriodStore + ?Sized>(
        store: &mut S,
        format: ExportFormat,
        file: &str,
        range: &DateRange,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if path.is_dir() {
            return Err(AppError::Export(format!("{file} is a directory")));
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::Export(format!(
                "output folder does not exist: {}",
                parent.display()
            )));
        }

        ensure_writable(path, force)?;

        let report = WorktimeLogic::report(&*store, range, true)?;

        if report.summaries.is_empty() {
            warning("No staff, expected hours or duty sessions in this period.");
        }

        let summary: Vec<SummaryExport> = report.summaries.iter().map(SummaryExport::from).collect();
        let per_person: Vec<(String, Vec<SessionExport>)> = report
            .sessions
            .iter()
            .map(|(name, list)| (name.clone(), list.iter().map(SessionExport::from).collect()))
            .collect();

        match format {
            ExportFormat::Xlsx => export_xlsx(&summary, &per_person, path)?,
            ExportFormat::Json => {
                let flat: Vec<SessionExport> =
                    per_person.iter().flat_map(|(_, l)| l.iter().cloned()).collect();
                export_json(&summary, &flat, path)?
            }
            ExportFormat::Csv => export_csv(&summary, path)?,
        }

        store.log_soft(
            "export",
            file,
            &format!("{} export ({range}, {} people)", format.as_str(), summary.len()),
        );

        Ok(())
    }
}
