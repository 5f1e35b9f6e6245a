//! Namespace definitions and built-in sources for globalinfo

pub mod builtin;
mod config;
mod error;
mod namespace;

pub use config::{parse_selection, parse_selections, NamespaceConfig, SourceSpec};
pub use error::{BuiltinError, ConfigError};
pub use namespace::Namespace;
