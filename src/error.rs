use thiserror::Error;

/// Host error code attached to argument validation failures.
pub const EINVAL: &str = "EINVAL";

/// Why a call's arguments were rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Wrong number of arguments")]
    WrongCount,

    #[error("Expected string")]
    ExpectedString,

    #[error("Arguments too long")]
    TooLong,
}

/// Which step of acquiring a key handle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpenFailure {
    #[error("Unable to open registry hive")]
    Hive,

    #[error("Unable to open registry key")]
    Key,
}

/// Failures surfaced to the caller. A missing or wrong-typed value is not
/// one of these; it is returned as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error(transparent)]
    PermissionOrNotFound(#[from] OpenFailure),

    #[error("Registry value too large")]
    ValueTooLarge,

    /// The host binding layer itself failed.
    #[error("NAPI call failed")]
    Host(String),
}

impl Error {
    /// Error code the host attaches to the thrown error, if any.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Error::InvalidArgument(_) => Some(EINVAL),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
