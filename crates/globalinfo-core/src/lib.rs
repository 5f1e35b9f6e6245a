//! Lazy-indirection map: named values computed on demand by their sources

mod error;
mod map;
mod multi;
pub mod source;

pub use error::{BoxError, ErrorKind, Result, RouteError};
pub use map::{Entries, RoutingMap};
pub use multi::{MultiSource, Selection};
pub use source::{constant, from_fn, try_from_fn, BoxSource, Source, SourceExt};
