//! Declarative namespace definitions

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map::{BTreeMap, Entry};
use std::path::Path;

/// A namespace of named sources, as read from a JSON file
///
/// ```json
/// {
///   "entries": {
///     "const": { "kind": "constant", "value": 5 },
///     "flag": {
///       "kind": "alternatives",
///       "candidates": {
///         "on": { "kind": "constant", "value": true },
///         "off": { "kind": "constant", "value": false }
///       },
///       "select": "off"
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    #[serde(default)]
    pub entries: BTreeMap<String, SourceSpec>,
}

/// How a single entry computes its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceSpec {
    /// Same value on every read
    Constant { value: Value },

    /// Environment variable, re-read on every access
    Env {
        var: String,
        #[serde(default)]
        default: Option<Value>,
    },

    /// Wall-clock time at the moment of the read
    Now {
        #[serde(default)]
        format: Option<String>,
    },

    /// Increments on every read
    Counter {
        #[serde(default)]
        start: i64,
        #[serde(default = "default_step")]
        step: i64,
    },

    /// Named candidates, one of which is selected
    Alternatives {
        candidates: BTreeMap<String, SourceSpec>,
        #[serde(default)]
        select: Option<String>,
    },
}

fn default_step() -> i64 {
    1
}

impl NamespaceConfig {
    /// Read and parse a namespace definition file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded namespace definition");
        Self::from_json_str(&contents)
    }

    /// Parse a namespace definition from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parse a `PATH=CANDIDATE` selection override
pub fn parse_selection(raw: &str) -> Result<(String, String), ConfigError> {
    match raw.split_once('=') {
        Some((path, candidate)) if !path.is_empty() && !candidate.is_empty() => {
            Ok((path.to_string(), candidate.to_string()))
        }
        _ => Err(ConfigError::InvalidOverride(raw.to_string())),
    }
}

/// Parse every `PATH=CANDIDATE` override, rejecting a path given twice
pub fn parse_selections<S: AsRef<str>>(
    raw: &[S],
) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut overrides = BTreeMap::new();
    for item in raw {
        let (path, candidate) = parse_selection(item.as_ref())?;
        match overrides.entry(path) {
            Entry::Occupied(entry) => {
                return Err(ConfigError::DuplicateOverride(entry.key().clone()));
            }
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
        }
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_all_kinds() {
        let config = NamespaceConfig::from_json_str(
            r#"{
                "entries": {
                    "c": { "kind": "constant", "value": [1, 2] },
                    "e": { "kind": "env", "var": "HOME" },
                    "t": { "kind": "now", "format": "%H" },
                    "n": { "kind": "counter", "start": 3 },
                    "a": {
                        "kind": "alternatives",
                        "candidates": { "x": { "kind": "constant", "value": "x" } }
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.entries.len(), 5);
        assert_eq!(
            config.entries["c"],
            SourceSpec::Constant {
                value: json!([1, 2])
            }
        );
        assert_eq!(
            config.entries["e"],
            SourceSpec::Env {
                var: "HOME".to_string(),
                default: None
            }
        );
        assert_eq!(
            config.entries["n"],
            SourceSpec::Counter { start: 3, step: 1 }
        );
        assert!(matches!(
            &config.entries["a"],
            SourceSpec::Alternatives { select: None, .. }
        ));
    }

    #[test]
    fn test_empty_document() {
        let config = NamespaceConfig::from_json_str("{}").unwrap();
        assert!(config.entries.is_empty());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = NamespaceConfig::from_json_str(r#"{"entries": {"x": {"kind": "magic"}}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            parse_selection("flag=on").unwrap(),
            ("flag".to_string(), "on".to_string())
        );
        assert_eq!(
            parse_selection("outer.inner=b=c").unwrap(),
            ("outer.inner".to_string(), "b=c".to_string())
        );
        assert!(parse_selection("flag").is_err());
        assert!(parse_selection("=on").is_err());
        assert!(parse_selection("flag=").is_err());
    }

    #[test]
    fn test_parse_selections_collects_paths() {
        let overrides = parse_selections(&["flag=on", "mode=fast"]).unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["flag"], "on");
        assert_eq!(overrides["mode"], "fast");
    }

    #[test]
    fn test_parse_selections_same_path_twice() {
        // Selection is write-once, even when the candidate repeats
        for raw in [["flag=on", "flag=off"], ["flag=on", "flag=on"]] {
            let err = parse_selections(&raw).unwrap_err();
            assert!(matches!(err, ConfigError::DuplicateOverride(ref p) if p == "flag"));
        }
    }
}
