//! Name-keyed map whose values are computed on every read

use crate::error::{Result, RouteError};
use crate::source::{BoxSource, Source, SourceExt};
use serde_json::Value;
use std::collections::hash_map;
use std::collections::HashMap;

/// Maps names to [`Source`]s and reads values through them
///
/// Registration is append-only. No value is stored: [`RoutingMap::get`] and
/// every pass over [`RoutingMap::entries`] invoke the sources again.
pub struct RoutingMap<T = Value> {
    sources: HashMap<String, BoxSource<T>>,
}

impl<T> RoutingMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Register `source` under `name`
    ///
    /// Returns false, leaving any existing entry untouched, when the name is
    /// already taken or empty.
    pub fn register(&mut self, name: impl Into<String>, source: impl Source<T> + 'static) -> bool {
        let name = name.into();
        if name.is_empty() {
            tracing::warn!("rejected registration with empty name");
            return false;
        }

        match self.sources.entry(name) {
            hash_map::Entry::Occupied(entry) => {
                tracing::debug!(key = %entry.key(), "duplicate registration ignored");
                false
            }
            hash_map::Entry::Vacant(entry) => {
                tracing::debug!(key = %entry.key(), "registered source");
                entry.insert(Box::new(source));
                true
            }
        }
    }

    /// Whether `name` has been registered
    pub fn contains_key(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Compute the current value for `name`
    pub fn get(&self, name: &str) -> Result<T> {
        let source = self
            .sources
            .get(name)
            .ok_or_else(|| RouteError::NoSuchKey(name.to_string()))?;

        tracing::trace!(key = name, "reading source");
        source.get()
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Registered names, without reading any source
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.sources.keys().map(String::as_str)
    }

    /// Read-only view over `(name, value)` pairs
    ///
    /// Each step invokes one source, so a full pass invokes every source
    /// exactly once. Order is unspecified.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            inner: self.sources.iter(),
        }
    }

    /// Evaluate every entry once, stopping at the first failure
    pub fn snapshot(&self) -> Result<HashMap<String, T>> {
        self.entries()
            .map(|(name, value)| value.map(|v| (name.to_string(), v)))
            .collect()
    }
}

impl RoutingMap<Value> {
    /// Register a typed source, converting each value into a [`Value`]
    pub fn register_value<U, S>(&mut self, name: impl Into<String>, source: S) -> bool
    where
        U: Into<Value> + 'static,
        S: Source<U> + 'static,
    {
        self.register(name, source.map(|value: U| -> Value { value.into() }))
    }
}

impl<T> Default for RoutingMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for RoutingMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

/// Iterator returned by [`RoutingMap::entries`]
pub struct Entries<'a, T> {
    inner: hash_map::Iter<'a, String, BoxSource<T>>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (&'a str, Result<T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, source)| (name.as_str(), source.get()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<'a, T> IntoIterator for &'a RoutingMap<T> {
    type Item = (&'a str, Result<T>);
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::multi::MultiSource;
    use crate::source::{constant, from_fn};
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(hits: &Rc<Cell<u32>>) -> impl Source<Value> + 'static {
        let hits = Rc::clone(hits);
        from_fn(move || {
            hits.set(hits.get() + 1);
            json!(hits.get())
        })
    }

    #[test]
    fn test_register_and_get() {
        let mut map = RoutingMap::new();
        assert!(map.register_value("const", constant(5)));
        assert_eq!(map.get("const").unwrap(), json!(5));
        assert_eq!(map.get("const").unwrap(), map.get("const").unwrap());
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut map = RoutingMap::new();
        assert!(map.register("k", constant(json!("first"))));
        assert!(!map.register("k", constant(json!("second"))));

        assert_eq!(map.get("k").unwrap(), json!("first"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut map: RoutingMap<i32> = RoutingMap::new();
        assert!(!map.register("", constant(1)));
        assert!(map.is_empty());
    }

    #[test]
    fn test_contains_key() {
        let mut map: RoutingMap<i32> = RoutingMap::new();
        map.register("present", constant(1));

        assert!(map.contains_key("present"));
        assert!(!map.contains_key("absent"));
    }

    #[test]
    fn test_missing_key() {
        let map: RoutingMap = RoutingMap::new();
        let err = map.get("nope").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::LookupMiss);
        assert!(matches!(err, RouteError::NoSuchKey(ref key) if key == "nope"));
    }

    #[test]
    fn test_every_read_reinvokes() {
        let hits = Rc::new(Cell::new(0));
        let mut map = RoutingMap::new();
        map.register("counter", counting(&hits));

        assert_eq!(map.get("counter").unwrap(), json!(1));
        assert_eq!(map.get("counter").unwrap(), json!(2));
        assert_ne!(map.get("counter").unwrap(), map.get("counter").unwrap());
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn test_entries_invoke_once_per_pass() {
        let hits_a = Rc::new(Cell::new(0));
        let hits_b = Rc::new(Cell::new(0));
        let mut map = RoutingMap::new();
        map.register("a", counting(&hits_a));
        map.register("b", counting(&hits_b));

        let entries = map.entries();
        assert_eq!(entries.len(), 2);
        let pairs: HashMap<&str, Value> = entries.map(|(k, v)| (k, v.unwrap())).collect();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["a"], json!(1));
        assert_eq!(pairs["b"], json!(1));
        assert_eq!((hits_a.get(), hits_b.get()), (1, 1));

        // A second pass runs every source again
        let again = map.snapshot().unwrap();
        assert_eq!(again["a"], json!(2));
        assert_eq!((hits_a.get(), hits_b.get()), (2, 2));
    }

    #[test]
    fn test_entries_are_lazy() {
        let hits = Rc::new(Cell::new(0));
        let mut map = RoutingMap::new();
        map.register("only", counting(&hits));

        let mut entries = map.entries();
        assert_eq!(hits.get(), 0);
        entries.next();
        assert_eq!(hits.get(), 1);
        assert!(entries.next().is_none());
    }

    #[test]
    fn test_snapshot_stops_on_error() {
        let mut map = RoutingMap::new();
        map.register("ok", constant(json!(true)));
        map.register("unselected", MultiSource::<Value>::new());

        assert!(matches!(map.snapshot(), Err(RouteError::Unconfigured)));
    }

    #[test]
    fn test_shared_multi_source_selected_after_registration() {
        let multi = Rc::new(MultiSource::new());
        multi
            .register("source1", constant(json!("value1")))
            .unwrap()
            .register("source2", constant(json!("value2")))
            .unwrap();

        let mut map = RoutingMap::new();
        map.register("multi", Rc::clone(&multi));
        assert!(map.get("multi").is_err());

        multi.select("source2").unwrap();
        assert_eq!(map.get("multi").unwrap(), json!("value2"));
    }

    #[test]
    fn test_debug_lists_keys_without_reading() {
        let hits = Rc::new(Cell::new(0));
        let mut map = RoutingMap::new();
        map.register("k", counting(&hits));

        assert_eq!(format!("{map:?}"), r#"{"k"}"#);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_into_iterator() {
        let mut map: RoutingMap<i32> = RoutingMap::new();
        map.register("one", constant(1));
        map.register("two", constant(2));

        let mut total = 0;
        for (_, value) in &map {
            total += value.unwrap();
        }
        assert_eq!(total, 3);
    }
}
