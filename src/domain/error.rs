use thiserror::Error;

/// Errors raised by grid operations.
/// A rejected call never leaves a partial change behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {columns}x{rows}: both must be positive")]
    InvalidDimension { columns: usize, rows: usize },

    #[error("cell ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error("density {0} is not in [0, 1]")]
    InvalidDensity(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = GridError::OutOfBounds { x: 7, y: 2, columns: 7, rows: 5 };
        assert_eq!(err.to_string(), "cell (7, 2) is outside the 7x5 grid");

        let err = GridError::UnknownPattern("pulsar".into());
        assert_eq!(err.to_string(), "unknown pattern `pulsar`");
    }
}
