//! Application error type.
//!
//! Every user-facing failure in the pipeline maps to one of these kinds, so
//! front-ends can surface a single readable message, pick an exit code, and
//! classify the notification (info / warning / error) without string matching.
//!
//! Exit code scheme:
//! - 2: input/usage problems (bad file shape, bad degree, I/O)
//! - 3: not enough usable data
//! - 4: numerical failure during fitting

/// How a failure should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// All failure kinds produced by ingestion, fitting, and export.
#[derive(Clone, PartialEq)]
pub enum AppError {
    /// Fewer than two columns found in tabular input.
    Format(String),
    /// Pasted text was blank or whitespace-only.
    EmptyInput,
    /// Fewer than two clean numeric rows survived coercion.
    InsufficientData { rows: usize },
    /// Requested polynomial degree is out of range.
    InvalidDegree { degree: usize, max: usize },
    /// An operation needing a current dataset ran before one was loaded.
    NoData,
    /// Underlying file read/write failure.
    Io(String),
    /// The least-squares solve could not be completed.
    Degenerate(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Format(_)
            | AppError::EmptyInput
            | AppError::InvalidDegree { .. }
            | AppError::Io(_) => 2,
            AppError::InsufficientData { .. } | AppError::NoData => 3,
            AppError::Degenerate(_) => 4,
        }
    }

    /// Notification class for status-line rendering.
    ///
    /// A missing dataset is a precondition the user simply hasn't met yet, so
    /// it is a warning rather than an error.
    pub fn severity(&self) -> Severity {
        match self {
            AppError::NoData => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Format(msg) => write!(f, "{msg}"),
            AppError::EmptyInput => {
                write!(f, "Paste some data first (two columns).")
            }
            AppError::InsufficientData { rows } => write!(
                f,
                "Need at least two numeric (x, y) rows after cleaning (got {rows})."
            ),
            AppError::InvalidDegree { degree, max } => {
                if *degree < 1 {
                    write!(f, "Degree must be >= 1 (got {degree}).")
                } else {
                    write!(f, "Degree must be between 1 and {max} (got {degree}).")
                }
            }
            AppError::NoData => write!(f, "Load a file or paste data first."),
            AppError::Io(msg) => write!(f, "{msg}"),
            AppError::Degenerate(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AppError({self})")
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_scheme() {
        assert_eq!(AppError::Format("x".into()).exit_code(), 2);
        assert_eq!(AppError::EmptyInput.exit_code(), 2);
        assert_eq!(AppError::Io("x".into()).exit_code(), 2);
        assert_eq!(AppError::InvalidDegree { degree: 0, max: 10 }.exit_code(), 2);
        assert_eq!(AppError::InsufficientData { rows: 1 }.exit_code(), 3);
        assert_eq!(AppError::NoData.exit_code(), 3);
        assert_eq!(AppError::Degenerate("x".into()).exit_code(), 4);
    }

    #[test]
    fn no_data_is_a_warning() {
        assert_eq!(AppError::NoData.severity(), Severity::Warning);
        assert_eq!(AppError::EmptyInput.severity(), Severity::Error);
    }

    #[test]
    fn degree_messages_distinguish_low_and_high() {
        let low = AppError::InvalidDegree { degree: 0, max: 10 }.to_string();
        assert!(low.contains(">= 1"));
        let high = AppError::InvalidDegree { degree: 12, max: 10 }.to_string();
        assert!(high.contains("between 1 and 10"));
    }
}
