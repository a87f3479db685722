//! Terminal report formatting.

use crate::domain::{Dataset, FitResult};
use crate::report::{EXTENDED_PRECISION, SUMMARY_PRECISION};

/// Format the standard fit summary: dataset stats, equation, and R².
///
/// `r2_precision` is the decimal precision used for R²; equation coefficients
/// are always printed at the 4-decimal summary precision. An undefined R²
/// renders as `NaN`.
pub fn format_summary(dataset: &Dataset, fit: &FitResult, r2_precision: usize) -> String {
    let (x_min, x_max) = dataset.x_range();
    let (y_min, y_max) = dataset.y_range();

    let mut out = String::new();
    out.push_str("=== curvelab — polynomial fit ===\n");
    out.push_str(&format!(
        "Points: n={} | {}=[{:.4}, {:.4}] | {}=[{:.4}, {:.4}]\n",
        dataset.len(),
        dataset.x_label(),
        x_min,
        x_max,
        dataset.y_label(),
        y_min,
        y_max
    ));
    out.push_str(&format!("Degree: {}\n", fit.degree));
    out.push('\n');
    out.push_str(&format!(
        "Equation of best fit: {}\n",
        fit.equation(SUMMARY_PRECISION)
    ));
    out.push_str(&format!("R² = {:.*}\n", r2_precision, fit.r_squared));

    out
}

/// Format the extended results block: equation, slope, intercept, and R² at
/// 8 decimals, plus the fitted point count.
pub fn format_extended(dataset: &Dataset, fit: &FitResult) -> String {
    let p = EXTENDED_PRECISION;

    let mut out = String::new();
    out.push_str("=== Regression results ===\n");
    out.push_str(&format!("Equation of best fit: {}\n", fit.equation(p)));
    out.push_str(&format!("Slope (m): {:.*}\n", p, fit.slope()));
    out.push_str(&format!("Intercept (b): {:.*}\n", p, fit.intercept()));
    out.push_str(&format!("R²: {:.*}\n", p, fit.r_squared));
    out.push_str(&format!("Points fitted: {}\n", dataset.len()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit;

    fn dataset(x: &[f64], y: &[f64]) -> Dataset {
        Dataset::new(x.to_vec(), y.to_vec(), "Frequency", "Voltage").unwrap()
    }

    #[test]
    fn summary_includes_labels_equation_and_r2() {
        let ds = dataset(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]);
        let (result, _) = fit(&ds, 1).unwrap();

        let text = format_summary(&ds, &result, 6);
        assert!(text.contains("n=3"));
        assert!(text.contains("Frequency=[0.0000, 2.0000]"));
        assert!(text.contains("Voltage=[1.0000, 5.0000]"));
        assert!(text.contains("Degree: 1"));
        assert!(text.contains("y = 2.0000x + 1.0000"));
        assert!(text.contains("R² = 1.000000"));
    }

    #[test]
    fn summary_renders_undefined_r2_as_nan() {
        let ds = dataset(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]);
        let (result, _) = fit(&ds, 1).unwrap();

        let text = format_summary(&ds, &result, 6);
        assert!(text.contains("R² = NaN"));
        assert!(!text.contains("R² = 0"));
        assert!(!text.contains("R² = 1"));
    }

    #[test]
    fn extended_reports_slope_intercept_at_eight_decimals() {
        let ds = dataset(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]);
        let (result, _) = fit(&ds, 1).unwrap();

        let text = format_extended(&ds, &result);
        assert!(text.contains("Slope (m): 2.00000000"));
        assert!(text.contains("Intercept (b): 1.00000000"));
        assert!(text.contains("R²: 1.00000000"));
        assert!(text.contains("Points fitted: 3"));
    }
}
