//! Polynomial fitting over a validated dataset.
//!
//! Given a `Dataset` and a requested degree we solve one ordinary
//! least-squares problem:
//!
//! ```text
//! minimize Σ (y_i - P(x_i))^2
//! ```
//!
//! where `P` is the degree-`degree` polynomial, then derive the goodness of
//! fit and the render-ready curve samples. The fitter is stateless; each call
//! depends only on its explicit inputs and has no side effects.

use nalgebra::DVector;

use crate::domain::{CurveSamples, Dataset, FitResult};
use crate::error::AppError;
use crate::math::{solve_least_squares, vandermonde};

/// Number of curve samples handed to the plot renderers.
pub const CURVE_POINTS: usize = 400;

/// Fit a least-squares polynomial of the given degree through the dataset.
///
/// The degree must be at least 1; the configurable upper bound is a front-end
/// concern enforced by the caller, not here.
pub fn fit(dataset: &Dataset, degree: usize) -> Result<(FitResult, CurveSamples), AppError> {
    if degree < 1 {
        return Err(AppError::InvalidDegree {
            degree,
            max: usize::MAX,
        });
    }

    let design = vandermonde(dataset.x(), degree);
    let rhs = DVector::from_column_slice(dataset.y());

    let beta = solve_least_squares(&design, &rhs).ok_or_else(|| {
        AppError::Degenerate(format!(
            "Least-squares solve failed for degree {degree}; the x values may be too clustered."
        ))
    })?;

    let coefficients: Vec<f64> = beta.iter().copied().collect();
    let r2 = r_squared(dataset.x(), dataset.y(), &coefficients);

    let result = FitResult::new(degree, coefficients, r2);
    let samples = sample_curve(&result, dataset);
    Ok((result, samples))
}

/// `R² = 1 - SS_res / SS_tot`, NaN when the y values have zero variance.
fn r_squared(x: &[f64], y: &[f64], coefficients: &[f64]) -> f64 {
    let mean = y.iter().sum::<f64>() / y.len() as f64;

    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (yi - horner(coefficients, xi)).powi(2))
        .sum();
    let ss_tot: f64 = y.iter().map(|&yi| (yi - mean).powi(2)).sum();

    if ss_tot == 0.0 {
        f64::NAN
    } else {
        1.0 - ss_res / ss_tot
    }
}

fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluate the fitted polynomial at `CURVE_POINTS` evenly spaced x values.
fn sample_curve(result: &FitResult, dataset: &Dataset) -> CurveSamples {
    let (x0, x1) = dataset.x_range();
    let n = CURVE_POINTS;

    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n - 1) as f64;
        // Interpolate as a blend of the two ends so both endpoints land
        // exactly on the data range.
        let xi = x0 * (1.0 - u) + x1 * u;
        x.push(xi);
        y.push(result.predict(xi));
    }

    CurveSamples { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(x: &[f64], y: &[f64]) -> Dataset {
        Dataset::new(x.to_vec(), y.to_vec(), "x", "y").unwrap()
    }

    #[test]
    fn degree_one_recovers_exact_line() {
        let ds = dataset(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]);
        let (fit, _) = fit(&ds, 1).unwrap();

        assert_eq!(fit.degree, 1);
        assert_eq!(fit.coefficients.len(), 2);
        assert!((fit.coefficients[0] - 2.0).abs() < 1e-10);
        assert!((fit.coefficients[1] - 1.0).abs() < 1e-10);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
        assert!((fit.slope() - 2.0).abs() < 1e-10);
        assert!((fit.intercept() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn degree_two_recovers_exact_parabola() {
        // y = x^2 - 2x + 3
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|&x| x * x - 2.0 * x + 3.0).collect();
        let (fit, _) = fit(&dataset(&xs, &ys), 2).unwrap();

        assert!((fit.coefficients[0] - 1.0).abs() < 1e-8);
        assert!((fit.coefficients[1] + 2.0).abs() < 1e-8);
        assert!((fit.coefficients[2] - 3.0).abs() < 1e-8);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
    }

    #[test]
    fn constant_y_yields_nan_r_squared() {
        let ds = dataset(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]);
        let (fit, _) = fit(&ds, 1).unwrap();
        assert!(fit.r_squared.is_nan());
    }

    #[test]
    fn constant_y_nan_for_higher_degrees_too() {
        let ds = dataset(&[0.0, 1.0, 2.0, 3.0], &[5.0, 5.0, 5.0, 5.0]);
        let (fit, _) = fit(&ds, 3).unwrap();
        assert!(fit.r_squared.is_nan());
    }

    #[test]
    fn degree_zero_is_rejected() {
        let ds = dataset(&[0.0, 1.0], &[1.0, 2.0]);
        let err = fit(&ds, 0).unwrap_err();
        assert!(matches!(err, AppError::InvalidDegree { degree: 0, .. }));
    }

    #[test]
    fn curve_samples_span_data_range_exactly() {
        // Endpoints chosen so naive `x0 + u * (x1 - x0)` would miss the top end.
        let ds = dataset(&[0.1, 0.2, 0.3], &[1.0, 2.0, 3.5]);
        let (_, samples) = fit(&ds, 2).unwrap();

        assert_eq!(samples.len(), CURVE_POINTS);
        assert_eq!(samples.x[0], 0.1);
        assert_eq!(samples.x[CURVE_POINTS - 1], 0.3);
        assert!(samples.x.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn curve_samples_track_the_fitted_polynomial() {
        let ds = dataset(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]);
        let (fit, samples) = fit(&ds, 1).unwrap();

        for (&x, &y) in samples.x.iter().zip(&samples.y) {
            assert!((y - fit.predict(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn noisy_line_fits_with_high_r_squared() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [0.1, 2.05, 3.9, 6.1, 8.0, 9.95];
        let (fit, _) = fit(&dataset(&xs, &ys), 1).unwrap();

        assert!(fit.r_squared > 0.99);
        assert!(fit.r_squared < 1.0);
        assert!((fit.slope() - 2.0).abs() < 0.1);
    }
}
