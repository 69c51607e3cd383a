// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SUMMARY_SHEET, session_headers, summary_headers};
use crate::export::{SessionExport, SummaryExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::collections::HashSet;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MAX_SHEET_NAME: usize = 31;
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Workbook with the summary sheet first, then one sheet per person.
pub(crate) fn export_xlsx(
    summary: &[SummaryExport],
    per_person: &[(String, Vec<SessionExport>)],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let mut used: HashSet<String> = HashSet::new();
    used.insert(SUMMARY_SHEET.to_lowercase());

    let rows: Vec<Vec<String>> = summary.iter().map(SummaryExport::to_row).collect();
    let sheet = workbook
        .add_worksheet()
        .set_name(SUMMARY_SHEET)
        .map_err(to_export_error)?;
    write_table(sheet, &summary_headers(), &rows)?;

    for (name, sessions) in per_person {
        let sheet_name = unique_sheet_name(name, &mut used);
        let rows: Vec<Vec<String>> = sessions.iter().map(SessionExport::to_row).collect();

        let sheet = workbook
            .add_worksheet()
            .set_name(&sheet_name)
            .map_err(to_export_error)?;
        write_table(sheet, &session_headers(), &rows)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Header row, banded body and column widths fitted to the widest cell.
fn write_table(sheet: &mut Worksheet, headers: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            // names left, durations and timestamps right
            let align = if col == 0 {
                FormatAlign::Left
            } else {
                FormatAlign::Right
            };
            let fmt = Format::new()
                .set_align(align)
                .set_background_color(band)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin);

            sheet
                .write_with_format(row, col as u16, value.as_str(), &fmt)
                .map_err(to_export_error)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        sheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(())
}

/// Excel sheet name for `name`: forbidden characters replaced, at most 31
/// characters, unique case-insensitively among `used`.
pub(crate) fn unique_sheet_name(name: &str, used: &mut HashSet<String>) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches('\'').trim();
    let base: String = if cleaned.is_empty() {
        "sheet".to_string()
    } else {
        cleaned.chars().take(MAX_SHEET_NAME).collect()
    };

    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate.to_lowercase()) {
        let suffix = format!("_{n}");
        let keep = MAX_SHEET_NAME - suffix.chars().count();
        candidate = format!("{}{}", base.chars().take(keep).collect::<String>(), suffix);
        n += 1;
    }

    used.insert(candidate.to_lowercase());
    candidate
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
