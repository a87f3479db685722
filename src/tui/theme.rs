//! Light/dark palettes for the TUI and its chart.
//!
//! One palette per `ThemeKind`; widgets take colors from here so the two
//! presentations differ only in this table.

use plotters::style::RGBColor;
use ratatui::style::Color;

use crate::domain::ThemeKind;

/// Colors used across the TUI widgets and the Plotters chart.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Title and accent text.
    pub accent: Color,
    /// Secondary/dim text.
    pub dim: Color,
    /// Informational status messages.
    pub info: Color,
    /// Warning status messages.
    pub warn: Color,
    /// Error status messages.
    pub error: Color,
    /// List highlight foreground/background.
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    /// Chart axis/label color.
    pub chart_fg: RGBColor,
    /// Fitted curve color.
    pub chart_curve: RGBColor,
    /// Observed data point color.
    pub chart_points: RGBColor,
}

pub fn palette(kind: ThemeKind) -> Palette {
    match kind {
        ThemeKind::Dark => Palette {
            accent: Color::Cyan,
            dim: Color::Gray,
            info: Color::Green,
            warn: Color::Yellow,
            error: Color::Red,
            highlight_fg: Color::Black,
            highlight_bg: Color::White,
            chart_fg: RGBColor(255, 255, 255),
            chart_curve: RGBColor(0, 217, 255),
            chart_points: RGBColor(255, 255, 255),
        },
        ThemeKind::Light => Palette {
            accent: Color::Blue,
            dim: Color::DarkGray,
            info: Color::Green,
            warn: Color::Magenta,
            error: Color::Red,
            highlight_fg: Color::White,
            highlight_bg: Color::Blue,
            chart_fg: RGBColor(0, 0, 0),
            chart_curve: RGBColor(39, 128, 227),
            chart_points: RGBColor(0, 0, 0),
        },
    }
}
