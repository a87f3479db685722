//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: `o`
//! - fitted curve: `-` line
//! - a legend line carrying the rounded equation

use crate::domain::{CurveSamples, Dataset, FitResult};
use crate::report::LEGEND_PRECISION;

/// Render the scatter + fitted-curve plot as a text block.
pub fn render_ascii_plot(
    dataset: &Dataset,
    fit: &FitResult,
    samples: &CurveSamples,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = dataset.x_range();

    // Determine y-range from observed points and curve samples.
    let (y_min, y_max) = y_range(dataset, samples).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    draw_curve(&mut grid, samples, x_min, x_max, y_min, y_max);

    for (x, y) in dataset.points() {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    // Build final string. We include a small header with ranges and a legend
    // with the rounded equation.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {}=[{x_min:.3}, {x_max:.3}] | {}=[{y_min:.2}, {y_max:.2}]\n",
        dataset.x_label(),
        dataset.y_label()
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out.push_str(&format!(
        "Legend: o data | - fit (degree {}): {}\n",
        fit.degree,
        fit.equation(LEGEND_PRECISION)
    ));

    out
}

fn y_range(dataset: &Dataset, samples: &CurveSamples) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for (_, y) in dataset.points().chain(samples.points()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let span = x_max - x_min;
    let u = if span > 0.0 {
        ((x - x_min) / span).clamp(0.0, 1.0)
    } else {
        0.5
    };
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    samples: &CurveSamples,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if samples.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for (x, y) in samples.points() {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let dataset =
            Dataset::new(vec![1.0, 10.0], vec![100.0, 110.0], "x", "y").unwrap();
        let fit = FitResult::new(1, vec![0.0, 100.0], 0.0);
        let samples = CurveSamples {
            x: vec![1.0, 10.0],
            y: vec![100.0, 100.0],
        };

        let txt = render_ascii_plot(&dataset, &fit, &samples, 10, 5);
        let expected = concat!(
            "Plot: x=[1.000, 10.000] | y=[99.50, 110.50]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o---------\n",
            "Legend: o data | - fit (degree 1): y = 100.00\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn plot_renders_every_observation() {
        let dataset = Dataset::new(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0, 9.0],
            "x",
            "y",
        )
        .unwrap();
        let fit = FitResult::new(2, vec![1.0, 0.0, 0.0], 1.0);
        let samples = CurveSamples {
            x: vec![0.0, 1.5, 3.0],
            y: vec![0.0, 2.25, 9.0],
        };

        let txt = render_ascii_plot(&dataset, &fit, &samples, 40, 12);
        let o_count = txt.chars().filter(|&c| c == 'o').count();
        // The legend contributes one 'o' of its own ("o data").
        assert!(o_count >= 4);
        assert!(txt.contains("y = 1.00x^2"));
    }
}
