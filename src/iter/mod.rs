//! Lazy, pull-based iterator pipelines.
//!
//! A pipeline is a chain of nodes, each implementing [`LazyIterator`]. A
//! node produces its next element on demand by pulling from its upstream;
//! exhaustion is reported as [`OptionalValue::Absent`] rather than through
//! `Option`.
//!
//! Pipelines are built in three steps:
//!
//! - start from a source: [`from_iter`], [`once`], [`once_with`], [`repeat`],
//!   [`repeat_with`], [`from_fn`] or [`empty`]
//! - wrap it in combinators such as [`LazyIterator::map`] or
//!   [`LazyIterator::chunk`]; no elements are pulled yet
//! - finish with a [`Terminal`] operation, or drive it by calling
//!   [`LazyIterator::advance`] directly
//!
//! Every node owns its upstream exclusively. [`LazyIterator::by_ref`]
//! borrows a node so it can be partially consumed and then reused.
//!
//! # Exhaustion
//!
//! After reporting `Absent`, a node may return `Absent` forever or may
//! produce more elements if its upstream does. The nodes that always stay
//! exhausted are [`Fuse`], [`Take`], [`TakeWhile`], [`Zip`], [`Chain`],
//! [`Chunk`], [`MapWindows`] and [`GroupBy`]; all others pass later upstream elements
//! through. Wrap any node in [`LazyIterator::fuse`] to force the first
//! behaviour.
//!
//! # Examples
//!
//! ```rust
//! use monadic_iter::iter::{self, LazyIterator, Terminal};
//! use monadic_iter::monad::OptionalValue;
//!
//! let squares_of_odds = iter::from_iter(1..)
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .take(4)
//!     .collect_vec();
//! assert_eq!(squares_of_odds, vec![1, 9, 25, 49]);
//!
//! let mut fibonacci = iter::repeat(())
//!     .scan((0u64, 1u64), |(current, next), ()| {
//!         let value = *current;
//!         (*current, *next) = (*next, *current + *next);
//!         OptionalValue::Present(value)
//!     });
//! assert_eq!(fibonacci.nth(10), OptionalValue::Present(55));
//! ```
//!
//! [`OptionalValue::Absent`]: crate::monad::OptionalValue::Absent

mod batching;
mod chain;
mod chunk;
mod enumerate;
mod filter;
mod flatten;
mod fuse;
mod group_by;
mod inspect;
mod intersperse;
mod map;
mod peekable;
mod protocol;
mod scan;
mod source;
mod take;
mod terminal;
mod unique;
mod zip;

pub use batching::Batching;
pub use chain::Chain;
pub use chunk::{ArrayChunk, Chunk};
pub use enumerate::Enumerate;
pub use filter::{Filter, FilterMap};
pub use flatten::{FlatMap, Flatten};
pub use fuse::Fuse;
pub use group_by::GroupBy;
pub use inspect::Inspect;
pub use intersperse::{Intersperse, IntersperseWith};
pub use map::{Map, MapWhile, MapWindows};
pub use peekable::Peekable;
pub use protocol::{IntoLazyIterator, LazyIterator};
pub use scan::Scan;
pub use source::{
    Empty, FromFn, IntoStd, Once, OnceWith, Repeat, RepeatWith, Source, empty, from_fn, from_iter,
    once, once_with, repeat, repeat_with,
};
pub use take::{Skip, Take, TakeWhile};
pub use terminal::Terminal;
pub use unique::Unique;
pub use zip::Zip;
