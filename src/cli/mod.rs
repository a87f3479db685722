//! Command-line parsing for the polynomial fitting tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the ingest/fit code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::ThemeKind;

pub mod console;
pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "curvelab",
    version,
    about = "Least-squares polynomial fitting for paired measurements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a polynomial through a delimited data file and print the report.
    Fit(FitArgs),
    /// Read a pasted data block from stdin (comma/whitespace separated), then fit.
    Paste(PasteArgs),
    /// Enter measurements one at a time at the console, then fit.
    Manual(ManualArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying ingest/fit pipeline as `curvelab fit`,
    /// but renders results in a terminal UI using Ratatui.
    Tui(TuiArgs),
}

/// Options shared by the console-report subcommands.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// Polynomial degree to fit.
    #[arg(short = 'd', long, default_value_t = 1)]
    pub degree: usize,

    /// Largest degree accepted.
    #[arg(long, default_value_t = 10)]
    pub max_degree: usize,

    /// Decimal precision for the printed R².
    #[arg(long, default_value_t = 6)]
    pub precision: usize,

    /// Print the extended results block (8 decimals, slope and intercept).
    #[arg(long)]
    pub extended: bool,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the cleaned dataset to a two-column CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

/// Options for fitting from a file.
#[derive(Debug, Parser)]
pub struct FitArgs {
    /// Data file (comma, tab, or whitespace delimited). Prompts with a
    /// picker when omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options for fitting pasted/piped data.
#[derive(Debug, Parser)]
pub struct PasteArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options for manual console entry.
#[derive(Debug, Parser)]
pub struct ManualArgs {
    /// X-axis label for manually entered data.
    #[arg(long, default_value = "Freq(e14Hz)")]
    pub x_label: String,

    /// Y-axis label for manually entered data.
    #[arg(long, default_value = "Uo(V)")]
    pub y_label: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options for the interactive TUI.
#[derive(Debug, Parser)]
pub struct TuiArgs {
    /// Data file to load on startup.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Color scheme.
    #[arg(short = 't', long, value_enum, default_value_t = ThemeKind::Dark)]
    pub theme: ThemeKind,

    /// Polynomial degree to start with.
    #[arg(short = 'd', long, default_value_t = 1)]
    pub degree: usize,

    /// Largest degree accepted.
    #[arg(long, default_value_t = 10)]
    pub max_degree: usize,
}
