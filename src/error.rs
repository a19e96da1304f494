//! Error kinds shared by parsing, projection and viewer state.

use thiserror::Error;

use crate::parser::ParseError;
use crate::projection::ProjectionError;

/// Stable classification of every error the crate returns.
///
/// The calling shell maps these to user-facing, localized text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    EmptyInput,
    InsufficientRows,
    NoValidRows,
    MissingAxisSelection,
    UnknownChartKind,
    NoDataset,
}

impl ErrorKind {
    /// Machine-readable code, e.g. `"empty_input"`.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::InsufficientRows => "insufficient_rows",
            ErrorKind::NoValidRows => "no_valid_rows",
            ErrorKind::MissingAxisSelection => "missing_axis_selection",
            ErrorKind::UnknownChartKind => "unknown_chart_kind",
            ErrorKind::NoDataset => "no_dataset",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors from [`ViewerState`](crate::ViewerState) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("No data loaded to chart")]
    NoDataset,
}

impl ViewerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ViewerError::Parse(e) => e.kind(),
            ViewerError::Projection(e) => e.kind(),
            ViewerError::NoDataset => ErrorKind::NoDataset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_passes_through() {
        let err = ViewerError::from(ParseError::NoValidRows { skipped: 2 });
        assert_eq!(err.kind(), ErrorKind::NoValidRows);
        assert_eq!(err.to_string(), ParseError::NoValidRows { skipped: 2 }.to_string());

        let err = ViewerError::from(ProjectionError::MissingAxisSelection);
        assert_eq!(err.kind(), ErrorKind::MissingAxisSelection);

        assert_eq!(ViewerError::NoDataset.kind().code(), "no_dataset");
    }

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            ErrorKind::EmptyInput,
            ErrorKind::InsufficientRows,
            ErrorKind::NoValidRows,
            ErrorKind::MissingAxisSelection,
            ErrorKind::UnknownChartKind,
            ErrorKind::NoDataset,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }
}
