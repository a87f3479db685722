//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs ingestion for the chosen input source
//! - runs the fit pipeline
//! - prints reports/plots
//! - writes optional exports

use std::io::Read;

use clap::Parser;

use crate::cli::{Command, CommonArgs, FitArgs, ManualArgs, PasteArgs};
use crate::domain::Dataset;
use crate::error::AppError;

pub mod pipeline;
pub mod session;

/// Entry point for the `curvelab` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `curvelab` (and `curvelab -t light`) to behave like
    // `curvelab tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Paste(args) => handle_paste(args),
        Command::Manual(args) => handle_manual(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let path = match &args.file {
        Some(path) => crate::cli::picker::validate_data_path(path)?,
        None => crate::cli::picker::prompt_for_data_path()?,
    };

    let dataset = crate::io::ingest::load_from_file(&path)?;
    report_fit(&dataset, &args.common)
}

fn handle_paste(args: PasteArgs) -> Result<(), AppError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| AppError::Io(format!("Failed to read stdin: {e}")))?;

    let dataset = crate::io::ingest::parse_pasted(&text)?;
    report_fit(&dataset, &args.common)
}

fn handle_manual(args: ManualArgs) -> Result<(), AppError> {
    let (count, x, y) = crate::cli::console::prompt_for_measurements()?;
    let dataset = crate::io::ingest::collect_manual(count, x, y, &args.x_label, &args.y_label)?;
    report_fit(&dataset, &args.common)
}

/// Shared tail of the console subcommands: fit, print, plot, export.
fn report_fit(dataset: &Dataset, common: &CommonArgs) -> Result<(), AppError> {
    let run = pipeline::run_fit(dataset, common.degree, common.max_degree)?;

    if common.extended {
        println!("{}", crate::report::format_extended(dataset, &run.fit));
    } else {
        println!(
            "{}",
            crate::report::format_summary(dataset, &run.fit, common.precision)
        );
    }

    if common.plot && !common.no_plot {
        let plot = crate::plot::render_ascii_plot(
            dataset,
            &run.fit,
            &run.samples,
            common.width,
            common.height,
        );
        println!("{plot}");
    }

    if let Some(path) = &common.export {
        crate::io::export::export_csv(dataset, path)?;
        println!("Saved CSV → {}", path.display());
    }

    Ok(())
}

/// Rewrite argv so `curvelab` defaults to `curvelab tui`.
///
/// Rules:
/// - `curvelab`                      -> `curvelab tui`
/// - `curvelab -t light ...`         -> `curvelab tui -t light ...`
/// - `curvelab --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "paste" | "manual" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_becomes_tui() {
        assert_eq!(rewrite_args(args(&["curvelab"])), args(&["curvelab", "tui"]));
    }

    #[test]
    fn leading_flag_becomes_tui_flag() {
        assert_eq!(
            rewrite_args(args(&["curvelab", "-t", "light"])),
            args(&["curvelab", "tui", "-t", "light"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["curvelab", "fit", "data.csv"])),
            args(&["curvelab", "fit", "data.csv"])
        );
        assert_eq!(
            rewrite_args(args(&["curvelab", "--help"])),
            args(&["curvelab", "--help"])
        );
    }
}
