//! Lazy value providers
//!
//! A [`Source`] produces a value each time it is asked. Nothing is cached:
//! two reads of the same source run the computation twice.

use crate::error::{BoxError, Result, RouteError};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

/// Produces a value on demand
///
/// Implementations may be non-deterministic or have side effects.
pub trait Source<T> {
    fn get(&self) -> Result<T>;
}

/// Type-erased source, the form stored by maps and multi-sources
pub type BoxSource<T> = Box<dyn Source<T>>;

impl<T, S: Source<T> + ?Sized> Source<T> for Box<S> {
    fn get(&self) -> Result<T> {
        (**self).get()
    }
}

impl<T, S: Source<T> + ?Sized> Source<T> for Rc<S> {
    fn get(&self) -> Result<T> {
        (**self).get()
    }
}

impl<T, S: Source<T> + ?Sized> Source<T> for Arc<S> {
    fn get(&self) -> Result<T> {
        (**self).get()
    }
}

/// Source backed by an infallible closure or function
pub struct FnSource<F> {
    f: F,
}

impl<T, F: Fn() -> T> Source<T> for FnSource<F> {
    fn get(&self) -> Result<T> {
        Ok((self.f)())
    }
}

/// Source backed by a fallible closure; failures surface as
/// [`RouteError::Computation`] with the original error as the cause
pub struct TryFnSource<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<T, E, F> Source<T> for TryFnSource<F, E>
where
    F: Fn() -> std::result::Result<T, E>,
    E: Into<BoxError>,
{
    fn get(&self) -> Result<T> {
        (self.f)().map_err(RouteError::computation)
    }
}

/// Source that hands out a clone of a fixed value
#[derive(Debug, Clone)]
pub struct Constant<T> {
    value: T,
}

impl<T: Clone> Source<T> for Constant<T> {
    fn get(&self) -> Result<T> {
        Ok(self.value.clone())
    }
}

/// Source that post-processes every value of an inner source
pub struct Map<S, F, U> {
    inner: S,
    f: F,
    _from: PhantomData<fn() -> U>,
}

impl<T, U, S, F> Source<T> for Map<S, F, U>
where
    S: Source<U>,
    F: Fn(U) -> T,
{
    fn get(&self) -> Result<T> {
        self.inner.get().map(&self.f)
    }
}

/// Wrap a zero-argument computation as a source
pub fn from_fn<T, F: Fn() -> T>(f: F) -> FnSource<F> {
    FnSource { f }
}

/// Wrap a fallible zero-argument computation as a source
pub fn try_from_fn<T, E, F>(f: F) -> TryFnSource<F, E>
where
    F: Fn() -> std::result::Result<T, E>,
    E: Into<BoxError>,
{
    TryFnSource {
        f,
        _error: PhantomData,
    }
}

/// A source that always yields `value`
pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant { value }
}

/// Adapters available on every sized source
pub trait SourceExt<T>: Source<T> + Sized {
    /// Transform each computed value, e.g. to widen it into a map's value type
    fn map<U, F: Fn(T) -> U>(self, f: F) -> Map<Self, F, T> {
        Map {
            inner: self,
            f,
            _from: PhantomData,
        }
    }

    fn boxed(self) -> BoxSource<T>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T, S: Source<T>> SourceExt<T> for S {}
