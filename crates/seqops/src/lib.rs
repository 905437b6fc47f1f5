//! Seqops - composable operators over arbitrary sequences.
//!
//! Seqops gives any [`IntoIterator`] the usual query-style operators
//! without tying them to a container:
//!
//! - **Lazy**: [`filter`], [`transform`], [`cast_to`], [`cast_with`] and the
//!   [`sequential`] generator produce elements one at a time as they are
//!   pulled.
//! - **Eager**: [`sort_by`], [`sort_by_with`], [`sort_by_keys`],
//!   [`sort_by_descending`] and [`for_all`] consume their input and return a
//!   materialized result.
//!
//! # Quick Start
//!
//! ```rust
//! use seqops::{filter, for_all, SequenceExt};
//!
//! let negatives = filter(Some(vec![5, -7, 8, -9]), Some(|x: &i32| *x < 0));
//! let sorted = negatives.sorted_by(|x| x.abs()).unwrap();
//! assert_eq!(sorted, vec![-7, -9]);
//!
//! assert_eq!(for_all(Some(vec![-1, -2]), Some(|x: &i32| *x < 0)), Ok(true));
//!
//! // Method syntax on anything iterable.
//! let lengths = vec!["ccc", "a", "bb"].sorted_by(|s| s.len());
//! assert_eq!(lengths, vec!["a", "bb", "ccc"]);
//! ```
//!
//! # Argument Validation
//!
//! The free functions take their source and callbacks as `Option`s, and
//! report a missing one as [`SeqError::MissingArgument`]. When that happens
//! depends on the operator:
//!
//! | Operator | Missing argument reported |
//! |----------|---------------------------|
//! | `filter`, `transform`, `cast_to`, `cast_with` | on the first pull of the result |
//! | `sort_by*`, `for_all` | immediately, before any element is read |
//!
//! ```rust
//! use seqops::{filter, SeqError};
//!
//! // Building the cursor is fine...
//! let mut cursor = filter(None::<Vec<i32>>, Some(|x: &i32| *x > 0));
//! // ...pulling from it is not.
//! assert_eq!(cursor.next(), Some(Err(SeqError::missing("source"))));
//! ```
//!
//! # Sorting Semantics
//!
//! All sorts are stable. [`sort_by_keys`] sorts by its first key and then
//! re-sorts by its second, so the second key dominates.
//! [`sort_by_descending`] reverses the ascending result, which also reverses
//! the order of elements with equal keys.

mod cast;
mod comparer;
mod cursor;
mod error;
mod generator;
mod lazy;
mod quantifier;
mod sort;
mod traits;

// Re-export public API
pub use cast::Dynamic;
pub use comparer::{Comparer, Descending, Natural, Partial};
pub use cursor::{CursorState, IntoPull, Lazy, Operator, Plain, PlainIter, Pull};
pub use error::{Result, SeqError};
pub use generator::{sequential, Sequential};
pub use lazy::{cast_to, cast_with, filter, transform, Cast, CastWith, Filter, Transform};
pub use quantifier::for_all;
pub use sort::{sort_by, sort_by_descending, sort_by_keys, sort_by_with};
pub use traits::SequenceExt;
