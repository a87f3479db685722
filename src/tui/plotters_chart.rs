//! Plotters-powered scatter + fit-curve widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: all series and bounds are computed
/// outside the render call. This keeps `render()` focused on drawing and makes
/// it easy to test the data prep separately.
pub struct CurveChart<'a> {
    /// Line series for the fitted curve (may be empty before the first fit).
    pub curve: &'a [(f64, f64)],
    /// Scatter series for the observed points.
    pub points: &'a [(f64, f64)],
    /// X bounds.
    pub x_bounds: [f64; 2],
    /// Y bounds.
    pub y_bounds: [f64; 2],
    /// Axis labels from ingestion.
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Axis/label color.
    pub fg: RGBColor,
    /// Fitted curve color.
    pub curve_color: RGBColor,
    /// Observed point color.
    pub point_color: RGBColor,
}

impl Widget for CurveChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes + tick labels + grid.
            //
            // Terminal cells are low-res, so the grid uses a faded variant of
            // the axis color to stay readable under the data series.
            chart
                .configure_mesh()
                .light_line_style(self.fg.mix(0.15))
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.2}"))
                .y_label_formatter(&|v| format!("{v:.2}"))
                .label_style(("sans-serif", 10).into_font().color(&self.fg))
                .axis_style(&self.fg)
                .bold_line_style(self.fg.mix(0.3))
                .draw()?;

            // 1) Fitted curve line.
            if self.curve.len() >= 2 {
                chart.draw_series(LineSeries::new(
                    self.curve.iter().copied(),
                    &self.curve_color,
                ))?;
            }

            // 2) Observed points.
            //
            // We intentionally avoid `Circle` markers here. The underlying
            // `plotters-ratatui-backend` currently maps circle radii
            // incorrectly (pixel radius -> normalized canvas units), producing
            // huge circles. A `Pixel` gives a clean dot that looks good in
            // terminals.
            chart.draw_series(
                self.points
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), self.point_color)),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
