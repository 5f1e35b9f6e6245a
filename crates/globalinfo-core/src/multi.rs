//! Selectable alternatives behind a single source

use crate::error::{Result, RouteError};
use crate::source::Source;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Which candidate a [`MultiSource`] forwards to
///
/// Moves from `Unselected` to `Selected` once and never back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Unselected,
    Selected(String),
}

impl Selection {
    /// The selected candidate name, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(name) => Some(name),
        }
    }
}

/// A source composed of named candidates and a write-once selection
///
/// Candidates may be registered before or after selecting; the selected name
/// is resolved on every [`Source::get`]. Registration and selection take
/// `&self` so the source can be shared through an `Rc` after it has been put
/// into a [`crate::RoutingMap`]. A candidate may itself call `register` or
/// `select` on the source it is read through.
pub struct MultiSource<T> {
    candidates: RefCell<HashMap<String, Rc<dyn Source<T>>>>,
    selection: RefCell<Selection>,
}

impl<T> MultiSource<T> {
    /// Create an unselected source with no candidates
    pub fn new() -> Self {
        Self {
            candidates: RefCell::new(HashMap::new()),
            selection: RefCell::new(Selection::Unselected),
        }
    }

    /// Add a named candidate
    ///
    /// Fails on an empty or already registered name.
    pub fn register(
        &self,
        name: impl Into<String>,
        source: impl Source<T> + 'static,
    ) -> Result<&Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RouteError::InvalidName(
                "candidate name must not be empty".to_string(),
            ));
        }

        let mut candidates = self.candidates.borrow_mut();
        if candidates.contains_key(&name) {
            return Err(RouteError::DuplicateCandidate(name));
        }

        tracing::debug!(candidate = %name, "registered candidate");
        candidates.insert(name, Rc::new(source));
        Ok(self)
    }

    /// Choose the candidate `get` forwards to. Only the first call succeeds.
    pub fn select(&self, name: impl Into<String>) -> Result<&Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RouteError::InvalidName(
                "cannot select an empty name".to_string(),
            ));
        }

        let mut selection = self.selection.borrow_mut();
        if let Selection::Selected(current) = &*selection {
            return Err(RouteError::AlreadySelected {
                current: current.clone(),
                attempted: name,
            });
        }

        tracing::debug!(candidate = %name, "selected candidate");
        *selection = Selection::Selected(name);
        Ok(self)
    }

    /// Current selection state
    pub fn selection(&self) -> Selection {
        self.selection.borrow().clone()
    }

    /// Whether `select` has succeeded
    pub fn is_selected(&self) -> bool {
        matches!(*self.selection.borrow(), Selection::Selected(_))
    }

    /// Whether a candidate named `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.candidates.borrow().contains_key(name)
    }

    /// Names of the registered candidates, in no particular order
    pub fn candidates(&self) -> Vec<String> {
        self.candidates.borrow().keys().cloned().collect()
    }
}

impl<T> Source<T> for MultiSource<T> {
    fn get(&self) -> Result<T> {
        let name = match &*self.selection.borrow() {
            Selection::Selected(name) => name.clone(),
            Selection::Unselected => return Err(RouteError::Unconfigured),
        };

        // Release both borrows before running the candidate
        let source = self
            .candidates
            .borrow()
            .get(&name)
            .cloned()
            .ok_or_else(|| RouteError::UnknownCandidate(name.clone()))?;

        tracing::trace!(candidate = %name, "forwarding read");
        source.get()
    }
}

impl<T> Default for MultiSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for MultiSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSource")
            .field("candidates", &self.candidates())
            .field("selection", &*self.selection.borrow())
            .finish()
    }
}
