//! Tabular ingest and cleaning.
//!
//! This module turns heterogeneous, possibly messy input (a delimited file, a
//! pasted block, or manually entered values) into a validated `Dataset`.
//!
//! Design goals:
//! - **Row-level cleaning**: a row is dropped entirely when either of its
//!   first two cells fails numeric coercion, never imputed
//! - **Deterministic behavior**: delimiter detection looks only at the header
//!   line, no sniffing heuristics beyond comma > tab > whitespace
//! - **Separation of concerns**: no fitting logic here

use std::fs;
use std::path::Path;

use crate::domain::Dataset;
use crate::error::AppError;

/// Column delimiter resolved from the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Comma,
    Tab,
    Whitespace,
}

/// Load a delimited text file into a `Dataset`.
///
/// The delimiter is auto-detected (comma, tab, or runs of whitespace), lines
/// beginning with `#` are comments, the first non-comment line is the header,
/// and only the first two columns are used.
pub fn load_from_file(path: &Path) -> Result<Dataset, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Failed to read '{}': {e}", path.display())))?;

    let records = match detect_delimiter(&raw) {
        Some(Delimiter::Comma) => read_delimited_records(&raw, b',')?,
        Some(Delimiter::Tab) => read_delimited_records(&raw, b'\t')?,
        Some(Delimiter::Whitespace) | None => tokenize_lines(&raw, split_whitespace_run),
    };

    build_dataset(records)
}

/// Parse a pasted text block into a `Dataset`.
///
/// Cells are separated by runs of commas and/or whitespace, mixed freely.
/// A blank block fails before any parsing is attempted.
pub fn parse_pasted(text: &str) -> Result<Dataset, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let records = tokenize_lines(text, split_comma_or_whitespace);
    build_dataset(records)
}

/// Build a `Dataset` from values entered one at a time.
///
/// No header inference happens here; labels come from the caller. The values
/// are numeric by construction, so the only cleaning left is the size checks.
pub fn collect_manual(
    count: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    x_label: &str,
    y_label: &str,
) -> Result<Dataset, AppError> {
    if count < 2 {
        return Err(AppError::InsufficientData { rows: count });
    }
    if x.len() != count || y.len() != count {
        return Err(AppError::Format(format!(
            "Expected {count} values per column (got {} x, {} y).",
            x.len(),
            y.len()
        )));
    }
    Dataset::new(x, y, x_label, y_label)
}

/// Pick the delimiter from the first non-blank, non-comment line.
fn detect_delimiter(raw: &str) -> Option<Delimiter> {
    let header = raw
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))?;

    if header.contains(',') {
        Some(Delimiter::Comma)
    } else if header.contains('\t') {
        Some(Delimiter::Tab)
    } else {
        Some(Delimiter::Whitespace)
    }
}

/// Read comma/tab records through the CSV reader (quoting-aware).
fn read_delimited_records(raw: &str, delimiter: u8) -> Result<Vec<Vec<String>>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .delimiter(delimiter)
        .from_reader(raw.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| AppError::Format(format!("Failed to parse tabular input: {e}")))?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        records.push(fields);
    }
    Ok(records)
}

/// Split each line with `split`, skipping blank and `#`-comment lines.
fn tokenize_lines(text: &str, split: fn(&str) -> Vec<String>) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(split)
        .collect()
}

fn split_whitespace_run(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn split_comma_or_whitespace(line: &str) -> Vec<String> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// First record is the header; the rest are data rows.
fn build_dataset(records: Vec<Vec<String>>) -> Result<Dataset, AppError> {
    let Some((header, rows)) = records.split_first() else {
        return Err(AppError::Format(
            "Input must have at least two columns (x and y).".to_string(),
        ));
    };
    if header.len() < 2 {
        return Err(AppError::Format(
            "Input must have at least two columns (x and y).".to_string(),
        ));
    }

    let x_label = infer_label(&header[0], &["col0", "column1"], "x");
    let y_label = infer_label(&header[1], &["col1", "column2"], "y");

    let mut x = Vec::with_capacity(rows.len());
    let mut y = Vec::with_capacity(rows.len());
    for row in rows {
        let (Some(a), Some(b)) = (row.first(), row.get(1)) else {
            continue;
        };
        let (Some(a), Some(b)) = (parse_value(a), parse_value(b)) else {
            continue;
        };
        x.push(a);
        y.push(b);
    }

    if x.len() < 2 {
        return Err(AppError::InsufficientData { rows: x.len() });
    }

    Dataset::new(x, y, x_label, y_label)
}

/// Replace generic placeholder headers with the default axis name.
///
/// A header cell that is entirely digits, or that case-insensitively matches
/// one of the placeholder tokens, carries no information worth keeping.
fn infer_label(cell: &str, placeholders: &[&str], default: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header cell. If we don't strip it, label matching silently fails.
    let cell = cell.trim().trim_start_matches('\u{feff}');
    let lower = cell.to_ascii_lowercase();

    let all_digits = !cell.is_empty() && cell.chars().all(|c| c.is_ascii_digit());
    if all_digits || placeholders.contains(&lower.as_str()) {
        default.to_string()
    } else {
        cell.to_string()
    }
}

fn parse_value(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
