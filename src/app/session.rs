//! The single "current dataset" slot.
//!
//! The TUI holds one of these between its load/paste and fit/export actions.
//! Ingestion actions replace the dataset; fit and export only read it, so
//! there is no mutation of a dataset after it is produced.

use crate::domain::Dataset;
use crate::error::AppError;

#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede the current dataset with a freshly ingested one.
    pub fn replace(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    /// The current dataset, or `NoData` when nothing has been loaded yet.
    pub fn dataset(&self) -> Result<&Dataset, AppError> {
        self.dataset.as_ref().ok_or(AppError::NoData)
    }

    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_reports_no_data() {
        let session = Session::new();
        assert_eq!(session.dataset().unwrap_err(), AppError::NoData);
        assert!(!session.has_data());
    }

    #[test]
    fn replace_supersedes_previous_dataset() {
        let mut session = Session::new();
        let first = Dataset::new(vec![0.0, 1.0], vec![0.0, 1.0], "x", "y").unwrap();
        let second = Dataset::new(vec![2.0, 3.0], vec![4.0, 5.0], "a", "b").unwrap();

        session.replace(first);
        assert_eq!(session.dataset().unwrap().x_label(), "x");

        session.replace(second);
        assert_eq!(session.dataset().unwrap().x_label(), "a");
        assert_eq!(session.dataset().unwrap().x(), &[2.0, 3.0]);
    }
}
