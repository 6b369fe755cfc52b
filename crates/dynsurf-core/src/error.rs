use thiserror::Error;

#[derive(Debug, Error)]
pub enum DynsurfError {
    #[error("Invalid time {time}: {reason}")]
    InvalidTime { time: f64, reason: String },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DynsurfError {
    pub fn invalid_time(time: f64, reason: impl Into<String>) -> Self {
        Self::InvalidTime {
            time,
            reason: reason.into(),
        }
    }

    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DynsurfError>;
