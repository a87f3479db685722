//! Shared "fit pipeline" logic used by both the console and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! degree bound check -> least-squares fit -> curve samples
//!
//! The console commands and the TUI can then focus on presentation
//! (printing vs widgets).

use crate::domain::{CurveSamples, Dataset, FitResult};
use crate::error::AppError;

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub fit: FitResult,
    pub samples: CurveSamples,
}

/// Validate the degree against the configured bound, then fit.
///
/// The upper bound is a front-end sanity limit; the fitter itself only
/// requires `degree >= 1`.
pub fn run_fit(dataset: &Dataset, degree: usize, max_degree: usize) -> Result<RunOutput, AppError> {
    if degree < 1 || degree > max_degree {
        return Err(AppError::InvalidDegree {
            degree,
            max: max_degree,
        });
    }

    let (fit, samples) = crate::fit::fit(dataset, degree)?;
    Ok(RunOutput { fit, samples })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0], "x", "y").unwrap()
    }

    #[test]
    fn run_fit_produces_fit_and_samples() {
        let run = run_fit(&dataset(), 1, 10).unwrap();
        assert_eq!(run.fit.degree, 1);
        assert_eq!(run.samples.len(), crate::fit::CURVE_POINTS);
    }

    #[test]
    fn run_fit_rejects_degree_zero() {
        let err = run_fit(&dataset(), 0, 10).unwrap_err();
        assert_eq!(err, AppError::InvalidDegree { degree: 0, max: 10 });
    }

    #[test]
    fn run_fit_enforces_upper_bound() {
        let err = run_fit(&dataset(), 11, 10).unwrap_err();
        assert_eq!(err, AppError::InvalidDegree { degree: 11, max: 10 });
        assert!(run_fit(&dataset(), 2, 10).is_ok());
    }
}
