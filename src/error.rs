//! Errors raised by maze construction, persistence and solving

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong with a maze
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Maze dimensions must be positive, got width={width}, height={height}")]
    InvalidArgument { width: usize, height: usize },

    #[error("Could not access maze file `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Maze input is empty")]
    EmptyInput,

    #[error("Row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unexpected character `{found}` at y={y}, x={x}")]
    UnexpectedCharacter { found: char, y: usize, x: usize },

    #[error("Marker `{0}` is not found in maze")]
    MissingMarker(char),

    #[error("Maze cannot be solved: {0}")]
    InvalidState(String),
}

impl MazeError {
    /// True for the errors caused by a badly shaped or badly encoded grid
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::RaggedRows { .. } | Self::UnexpectedCharacter { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::MazeError;

    #[test]
    fn malformed_input_grouping() {
        assert!(MazeError::EmptyInput.is_malformed_input());
        assert!(MazeError::RaggedRows {
            row: 1,
            expected: 3,
            found: 5
        }
        .is_malformed_input());
        assert!(!MazeError::MissingMarker('S').is_malformed_input());
        assert!(!MazeError::InvalidState("no start".into()).is_malformed_input());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = MazeError::RaggedRows {
            row: 1,
            expected: 3,
            found: 5,
        };
        assert_eq!(err.to_string(), "Row 1 has length 5, expected 3");
        assert_eq!(
            MazeError::MissingMarker('E').to_string(),
            "Marker `E` is not found in maze"
        );
    }
}
