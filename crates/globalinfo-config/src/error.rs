use globalinfo_core::RouteError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or building a namespace
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid namespace definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("entry name must not be empty")]
    EmptyEntryName,

    #[error("'{0}' is not an alternatives entry")]
    UnknownSelector(String),

    #[error("selector path '{0}' is defined more than once")]
    DuplicateSelector(String),

    #[error("invalid selection override '{0}', expected PATH=CANDIDATE")]
    InvalidOverride(String),

    #[error("selection for '{0}' is overridden more than once")]
    DuplicateOverride(String),

    #[error("invalid time format '{0}'")]
    InvalidFormat(String),

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Failures of the built-in sources at read time
#[derive(Debug, Error)]
pub enum BuiltinError {
    #[error("environment variable '{0}' is not set")]
    MissingEnv(String),

    #[error("environment variable '{0}' is not valid unicode")]
    NotUnicode(String),

    #[error("cannot render time with format '{0}'")]
    Format(String),
}
