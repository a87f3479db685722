//! Interactive data-file picker.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the picker provides the "run `curvelab fit` and choose a file" UX
//!
//! The picker searches for data files under the current working directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Default directory recursion depth for finding data files.
const DEFAULT_SEARCH_DEPTH: usize = 4;

/// File extensions treated as tabular data.
const DATA_EXTENSIONS: [&str; 4] = ["csv", "tsv", "txt", "dat"];

/// Prompt the user to select a data file from the current directory tree.
///
/// Behavior:
/// - list discovered data files
/// - accept either a number (from the list) or an explicit path
/// - `q` cancels
pub fn prompt_for_data_path() -> Result<PathBuf, AppError> {
    let files = discover_data_files();
    if files.is_empty() {
        return Err(AppError::Io(
            "No data files found. Provide one with `curvelab fit <file>`.".to_string(),
        ));
    }

    println!("Found {} data file(s):", files.len());
    for (idx, path) in files.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, pretty_path(path));
    }

    loop {
        print!(
            "Select a file by number (1-{}) or type a path (q to quit): ",
            files.len()
        );
        io::stdout()
            .flush()
            .map_err(|e| AppError::Io(format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::Io(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::Io(
                "No input received. Provide a data file with `curvelab fit <file>`.".to_string(),
            ));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::Io("Canceled.".to_string()));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=files.len()).contains(&choice) {
                return validate_data_path(&files[choice - 1]);
            }
            println!(
                "Invalid choice: {choice}. Enter a number between 1 and {}.",
                files.len()
            );
            continue;
        }

        let candidate = PathBuf::from(input);
        match validate_data_path(&candidate) {
            Ok(path) => return Ok(path),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
    }
}

/// Validate that the provided path points to an existing file.
pub fn validate_data_path(path: &Path) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::Io(format!(
            "Data file not found: {}",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(AppError::Io(format!(
            "Expected a file, got a directory: {}",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}

/// Discover data files under the current directory (deterministic order).
///
/// This is used by both the basic text prompt and the Ratatui TUI.
pub fn discover_data_files() -> Vec<PathBuf> {
    find_data_files(Path::new("."), DEFAULT_SEARCH_DEPTH)
}

fn find_data_files(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    find_data_files_inner(root, 0, max_depth, &mut out);
    out.sort_by(|a, b| pretty_path(a).cmp(&pretty_path(b)));
    out
}

fn find_data_files_inner(root: &Path, depth: usize, max_depth: usize, out: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            if should_skip_dir(&path) {
                continue;
            }
            find_data_files_inner(&path, depth + 1, max_depth, out);
            continue;
        }

        if file_type.is_file() && has_data_extension(&path) {
            out.push(path);
        }
    }
}

fn has_data_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            DATA_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn should_skip_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

fn pretty_path(path: &Path) -> String {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    stripped.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_data_extensions_case_insensitively() {
        assert!(has_data_extension(Path::new("a/b/data.csv")));
        assert!(has_data_extension(Path::new("data.TSV")));
        assert!(has_data_extension(Path::new("readings.dat")));
        assert!(!has_data_extension(Path::new("notes.md")));
        assert!(!has_data_extension(Path::new("no_extension")));
    }

    #[test]
    fn validate_rejects_missing_and_directory_paths() {
        assert!(matches!(
            validate_data_path(Path::new("definitely-missing.csv")),
            Err(AppError::Io(_))
        ));
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            validate_data_path(dir.path()),
            Err(AppError::Io(_))
        ));
    }

    #[test]
    fn validate_accepts_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = validate_data_path(file.path()).unwrap();
        assert_eq!(path, file.path());
    }
}
