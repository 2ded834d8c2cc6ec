pub type GraphResult<T> = Result<T, GraphError>;

/// Why a square record was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSquareReason {
    FileOutOfRange,
    RankOutOfRange,
    /// The id does not encode the square's (file, rank).
    IdMismatch { expected: String },
    /// `is_dark` disagrees with the square's parity.
    IsDarkMismatch,
    /// Another record in the same input already uses this id.
    DuplicateId,
    /// The id is not a file letter followed by a rank digit.
    Unparsable,
}

impl std::fmt::Display for InvalidSquareReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSquareReason::FileOutOfRange => write!(f, "file out of range"),
            InvalidSquareReason::RankOutOfRange => write!(f, "rank out of range"),
            InvalidSquareReason::IdMismatch { expected } => {
                write!(f, "id does not match coordinates (expected {expected:?})")
            }
            InvalidSquareReason::IsDarkMismatch => write!(f, "color does not match coordinates"),
            InvalidSquareReason::DuplicateId => write!(f, "id appears more than once"),
            InvalidSquareReason::Unparsable => write!(f, "not an algebraic square name"),
        }
    }
}

/// A square record that does not describe a square of the 8×8 board.
///
/// For [`InvalidSquareReason::Unparsable`] there are no coordinates; `file` and
/// `rank` are `-1` and left out of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSquareError {
    pub file: i32,
    pub rank: i32,
    pub id: String,
    pub reason: InvalidSquareReason,
}

impl std::fmt::Display for InvalidSquareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            InvalidSquareReason::Unparsable => {
                write!(f, "invalid square {:?}: {}", self.id, self.reason)
            }
            _ => write!(
                f,
                "invalid square {:?} (file={}, rank={}): {}",
                self.id, self.file, self.rank, self.reason
            ),
        }
    }
}

impl std::error::Error for InvalidSquareError {}

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error(transparent)]
    InvalidSquare(#[from] InvalidSquareError),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(GraphError::config("x").to_string().contains("config error:"));

        let err = InvalidSquareError {
            file: 8,
            rank: 0,
            id: "i1".to_owned(),
            reason: InvalidSquareReason::FileOutOfRange,
        };
        let msg = GraphError::from(err).to_string();
        assert!(msg.contains("\"i1\""));
        assert!(msg.contains("file out of range"));
    }

    #[test]
    fn io_preserves_source() {
        let err = GraphError::from(std::io::Error::other("boom"));
        assert!(err.to_string().contains("boom"));
    }
}
