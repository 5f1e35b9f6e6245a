//! Error taxonomy for routing and source evaluation

use thiserror::Error;

/// Boxed cause carried by a failed computation
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate
pub type Result<T, E = RouteError> = std::result::Result<T, E>;

/// Errors raised by registration, selection and reads
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("candidate '{0}' is already registered")]
    DuplicateCandidate(String),

    #[error("selection already made: '{current}' (attempted '{attempted}')")]
    AlreadySelected { current: String, attempted: String },

    #[error("source is not configured: no candidate selected")]
    Unconfigured,

    #[error("no such key '{0}'")]
    NoSuchKey(String),

    #[error("selected candidate '{0}' is not registered")]
    UnknownCandidate(String),

    #[error("computation failed: {0}")]
    Computation(#[source] BoxError),
}

/// Broad category of a [`RouteError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller broke a uniqueness or write-once rule
    Usage,
    /// Read from a multi-source before any selection
    Unconfigured,
    /// Name does not resolve to a registered source
    LookupMiss,
    /// The wrapped computation itself failed
    Computation,
}

impl RouteError {
    /// Wrap the failure of an underlying computation, keeping it as the cause
    pub fn computation(cause: impl Into<BoxError>) -> Self {
        Self::Computation(cause.into())
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName(_) | Self::DuplicateCandidate(_) | Self::AlreadySelected { .. } => {
                ErrorKind::Usage
            }
            Self::Unconfigured => ErrorKind::Unconfigured,
            Self::NoSuchKey(_) | Self::UnknownCandidate(_) => ErrorKind::LookupMiss,
            Self::Computation(_) => ErrorKind::Computation,
        }
    }
}
