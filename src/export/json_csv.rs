// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportExport, summary_headers};
use crate::export::{SessionExport, SummaryExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed `{ "summary": [...], "sessions": [...] }`.
pub(crate) fn export_json(
    summary: &[SummaryExport],
    sessions: &[SessionExport],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = ReportExport { summary, sessions };
    let json_data = serde_json::to_string_pretty(&doc)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Summary table only, under the same `姓名, 應到工時, 實際工時, 差異`
/// header as the xlsx summary sheet.
pub(crate) fn export_csv(summary: &[SummaryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(summary_headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for item in summary {
        wtr.write_record(item.to_row())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
