//! Turns a [`NamespaceConfig`] into a live [`RoutingMap`]

use crate::builtin;
use crate::config::{NamespaceConfig, SourceSpec};
use crate::error::ConfigError;
use globalinfo_core::{constant, BoxSource, MultiSource, RoutingMap, SourceExt};
use serde_json::Value;
use std::collections::btree_map::{BTreeMap, Entry};
use std::rc::Rc;

/// A built namespace: the map plus handles to every alternatives entry
///
/// Selector paths are entry names, with nested alternatives joined by `.`
/// (`flag`, `flag.on`). Building fails if two alternatives end up on the same
/// path, e.g. an entry `a.b` next to candidate `b` of entry `a`.
pub struct Namespace {
    map: RoutingMap,
    selectors: BTreeMap<String, Rc<MultiSource<Value>>>,
}

impl Namespace {
    /// The built routing map
    pub fn map(&self) -> &RoutingMap {
        &self.map
    }

    /// Give up the selector handles and keep the map
    pub fn into_map(self) -> RoutingMap {
        self.map
    }

    /// Compute the current value of entry `key`
    pub fn get(&self, key: &str) -> globalinfo_core::Result<Value> {
        self.map.get(key)
    }

    /// The alternatives source at `path`
    pub fn selector(&self, path: &str) -> Option<&MultiSource<Value>> {
        self.selectors.get(path).map(|multi| multi.as_ref())
    }

    /// Paths of every alternatives entry, sorted
    pub fn selector_paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.selectors.keys().map(String::as_str)
    }

    /// Select `candidate` for the alternatives entry at `path`
    pub fn select(&self, path: &str, candidate: &str) -> Result<(), ConfigError> {
        let multi = self
            .selectors
            .get(path)
            .ok_or_else(|| ConfigError::UnknownSelector(path.to_string()))?;
        multi.select(candidate)?;
        Ok(())
    }
}

impl NamespaceConfig {
    /// Build the namespace with the configured selections
    pub fn build(&self) -> Result<Namespace, ConfigError> {
        self.build_with(&BTreeMap::new())
    }

    /// Build the namespace, letting `overrides` (selector path to candidate)
    /// replace configured selections
    pub fn build_with(
        &self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Namespace, ConfigError> {
        let mut builder = Builder {
            overrides,
            selectors: BTreeMap::new(),
        };

        let mut map = RoutingMap::new();
        for (name, spec) in &self.entries {
            if name.is_empty() {
                return Err(ConfigError::EmptyEntryName);
            }
            let source = builder.build(name, spec)?;
            map.register(name.clone(), source);
        }

        if let Some(path) = overrides
            .keys()
            .find(|path| !builder.selectors.contains_key(*path))
        {
            return Err(ConfigError::UnknownSelector(path.clone()));
        }

        tracing::debug!(
            entries = map.len(),
            selectors = builder.selectors.len(),
            "built namespace"
        );
        Ok(Namespace {
            map,
            selectors: builder.selectors,
        })
    }
}

struct Builder<'a> {
    overrides: &'a BTreeMap<String, String>,
    selectors: BTreeMap<String, Rc<MultiSource<Value>>>,
}

impl Builder<'_> {
    fn build(&mut self, path: &str, spec: &SourceSpec) -> Result<BoxSource<Value>, ConfigError> {
        let source = match spec {
            SourceSpec::Constant { value } => constant(value.clone()).boxed(),
            SourceSpec::Env { var, default } => {
                builtin::env_var(var.clone(), default.clone()).boxed()
            }
            SourceSpec::Now { format } => {
                if let Some(fmt) = format {
                    if !builtin::is_valid_time_format(fmt) {
                        return Err(ConfigError::InvalidFormat(fmt.clone()));
                    }
                }
                builtin::now(format.clone()).boxed()
            }
            SourceSpec::Counter { start, step } => builtin::counter(*start, *step).boxed(),
            SourceSpec::Alternatives { candidates, select } => {
                let multi = Rc::new(MultiSource::new());
                for (name, candidate) in candidates {
                    let child = self.build(&format!("{path}.{name}"), candidate)?;
                    multi.register(name.clone(), child)?;
                }

                if let Some(choice) = self.overrides.get(path).or(select.as_ref()) {
                    multi.select(choice.clone())?;
                }

                match self.selectors.entry(path.to_string()) {
                    Entry::Occupied(entry) => {
                        return Err(ConfigError::DuplicateSelector(entry.key().clone()));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(Rc::clone(&multi));
                    }
                }
                multi.boxed()
            }
        };
        Ok(source)
    }
}
