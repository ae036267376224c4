// src/report.rs
use crate::config::ScrapeConfig;
use crate::extract::JobListing;
use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use std::path::PathBuf;
use tracing::info;

pub const HEADERS: [&str; 4] = ["Job Title", "Company", "Location", "Job Link"];

const SUMMARY_LABEL: &str = "Total Jobs:";
const HIGHLIGHT_COLOR: Color = Color::RGB(0xC6EFCE);
const WIDTH_PADDING: usize = 2;

/// Highlight predicate: case-insensitive substring match on the location
/// field. The stored cell keeps its original casing; only the comparison
/// lowercases. An empty filter matches every row.
pub fn location_matches(location: &str, filter: &str) -> bool {
    location.to_lowercase().contains(filter)
}

/// Display width per column: the longest textual value in that column
/// (header, data cells, and summary cells included) plus fixed padding.
pub fn column_widths(jobs: &[JobListing]) -> [usize; 4] {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for job in jobs {
        for (col, value) in job.fields().iter().enumerate() {
            widths[col] = widths[col].max(value.chars().count());
        }
    }
    widths[0] = widths[0].max(SUMMARY_LABEL.chars().count());
    widths[1] = widths[1].max(jobs.len().to_string().chars().count());
    widths.map(|width| width + WIDTH_PADDING)
}

/// Lay out the full report in memory: styled header, one row per listing in
/// extraction order, highlight fills, blank separator, summary row, column
/// widths.
pub fn build_workbook(
    jobs: &[JobListing],
    location_filter: &str,
    sheet_name: &str,
) -> Result<Workbook> {
    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);
    let bold = Format::new().set_bold();
    let highlight = Format::new().set_background_color(HIGHLIGHT_COLOR);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, job) in jobs.iter().enumerate() {
        let row = (index + 1) as u32;
        let highlighted = location_matches(&job.location, location_filter);
        for (col, value) in job.fields().iter().enumerate() {
            if highlighted {
                sheet.write_string_with_format(row, col as u16, *value, &highlight)?;
            } else {
                sheet.write_string(row, col as u16, *value)?;
            }
        }
    }

    // One blank row between the data and the summary.
    let summary_row = (jobs.len() + 2) as u32;
    sheet.write_string_with_format(summary_row, 0, SUMMARY_LABEL, &bold)?;
    sheet.write_number_with_format(summary_row, 1, jobs.len() as f64, &bold)?;

    for (col, width) in column_widths(jobs).into_iter().enumerate() {
        sheet.set_column_width(col as u16, width as f64)?;
    }

    Ok(workbook)
}

/// Build and persist the report next to the current working directory.
/// A same-named file from an earlier run is overwritten.
pub fn write_report(
    jobs: &[JobListing],
    location_filter: &str,
    config: &ScrapeConfig,
    title_display: &str,
) -> Result<PathBuf> {
    let mut workbook = build_workbook(jobs, location_filter, &config.sheet_name)?;
    let filename = config.report_filename(title_display);
    workbook
        .save(&filename)
        .with_context(|| format!("Failed to save report: {filename}"))?;
    info!("Report written: {}", filename);
    Ok(PathBuf::from(filename))
}
