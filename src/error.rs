use std::io;

/// Errors returned by interface queries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input was malformed, detected before any system call.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The control socket could not be created.
    #[error("failed to open control socket: {0}")]
    OpenFailed(#[source] io::Error),
    /// A kernel query failed or its reply could not be decoded.
    #[error("read failed: {0}")]
    ReadFailed(String),
    /// The caller supplied output buffer cannot hold the result.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
    /// A decoded quantity does not fit its output type.
    #[error("value out of range: {0}")]
    InvalidIntegerValue(String),
}

/// Payload-free discriminant of [`Error`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    InvalidArgument,
    OpenFailed,
    ReadFailed,
    BufferTooSmall,
    InvalidIntegerValue,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::OpenFailed(_) => ErrorKind::OpenFailed,
            Error::ReadFailed(_) => ErrorKind::ReadFailed,
            Error::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            Error::InvalidIntegerValue(_) => ErrorKind::InvalidIntegerValue,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
