//! Error types shared by the state model, engine and codec

use crate::game_of_life::rules::RuleParseError;
use std::path::PathBuf;
use thiserror::Error;

pub type LifeResult<T> = Result<T, LifeError>;

#[derive(Debug, Error)]
pub enum LifeError {
    /// The file could not be opened for reading or writing.
    #[error("cannot access {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("line {line}: invalid #Size value '{value}' (expected a positive integer)")]
    MalformedSize { line: usize, value: String },

    #[error("line {line}: #Size {size} exceeds the maximum of {max}")]
    SizeTooLarge { line: usize, size: usize, max: usize },

    #[error("line {line}: invalid rule set '{value}': {source}")]
    MalformedRules {
        line: usize,
        value: String,
        #[source]
        source: RuleParseError,
    },

    #[error("line {line}: unrecognized line '{content}'")]
    UnrecognizedLine { line: usize, content: String },

    #[error("line {line}: cell coordinates appear before #Size")]
    SizeNotDeclared { line: usize },

    #[error("line {line}: cell ({row}, {col}) is outside the {size}x{size} grid")]
    CoordinateOutOfRange {
        line: usize,
        row: i64,
        col: i64,
        size: usize,
    },

    #[error("missing #Size directive")]
    MissingSize,

    #[error("coordinates ({row}, {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid iteration count: {0}")]
    InvalidIterations(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a user-supplied generation count, rejecting anything but a positive integer.
pub fn parse_iterations(input: &str) -> LifeResult<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n)
            .map_err(|_| LifeError::InvalidIterations(format!("'{}' is too large", trimmed))),
        Ok(_) => Err(LifeError::InvalidIterations(format!(
            "'{}' must be a positive integer",
            trimmed
        ))),
        Err(_) => Err(LifeError::InvalidIterations(format!(
            "'{}' is not an integer",
            trimmed
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iterations() {
        assert_eq!(parse_iterations("10").unwrap(), 10);
        assert_eq!(parse_iterations(" 3 ").unwrap(), 3);
        assert!(matches!(parse_iterations("0"), Err(LifeError::InvalidIterations(_))));
        assert!(matches!(parse_iterations("-4"), Err(LifeError::InvalidIterations(_))));
        assert!(matches!(parse_iterations("10kf"), Err(LifeError::InvalidIterations(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = LifeError::CoordinateOutOfRange { line: 7, row: 4, col: 1, size: 3 };
        assert_eq!(err.to_string(), "line 7: cell (4, 1) is outside the 3x3 grid");

        let err = LifeError::MalformedSize { line: 3, value: "abc".to_string() };
        assert!(err.to_string().contains("'abc'"));

        let err = LifeError::SizeTooLarge { line: 2, size: 20_000, max: 10_000 };
        assert_eq!(err.to_string(), "line 2: #Size 20000 exceeds the maximum of 10000");
    }
}
