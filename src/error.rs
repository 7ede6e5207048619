use crate::runner::Method;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input. Lines are numbered from 1.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A solving method that exists by name only.
    #[error("solving method `{0}` is not implemented")]
    Unimplemented(Method),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
