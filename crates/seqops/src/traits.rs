//! Method-call syntax for the operators.
//!
//! [`SequenceExt`] is implemented for every [`IntoIterator`], so vectors,
//! slices, ranges, iterators and [`Sequential`](crate::Sequential) all gain
//! the operators as methods. Since the receiver is always present, the eager
//! methods cannot fail and return their result directly.

use std::any::Any;

use crate::cast::Dynamic;
use crate::comparer::Comparer;
use crate::cursor::{Lazy, Plain};
use crate::lazy::{cast_to, cast_with, filter, transform, Cast, CastWith, Filter, Transform};
use crate::quantifier::holds_for_all;
use crate::sort::{sorted, sorted_descending, sorted_twice, sorted_with};

/// Sequence operators as methods on any [`IntoIterator`].
///
/// # Example
///
/// ```
/// use seqops::SequenceExt;
///
/// let evens: Vec<i32> = vec![1, 2, 3, 4]
///     .filtered(|x| x % 2 == 0)
///     .transformed(|x| x * 10)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(evens, vec![20, 40]);
///
/// let by_len = vec!["ccc", "a", "bb"].sorted_by(|s| s.len());
/// assert_eq!(by_len, vec!["a", "bb", "ccc"]);
///
/// assert!(vec![-1, -2].for_all(|x| *x < 0));
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// Lazily keeps the elements `predicate` accepts. See [`filter`].
    fn filtered<P>(self, predicate: P) -> Lazy<Plain<Self>, Filter<P>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        filter(Some(self), Some(predicate))
    }

    /// Lazily maps every element. See [`transform`].
    fn transformed<F, U>(self, mapper: F) -> Lazy<Plain<Self>, Transform<F>>
    where
        F: FnMut(Self::Item) -> U,
    {
        transform(Some(self), Some(mapper))
    }

    /// Lazily casts type-erased elements to `T`. See [`cast_to`].
    fn cast_to<T>(self) -> Lazy<Plain<Self>, Cast<T>>
    where
        T: Any,
        Self::Item: Dynamic,
    {
        cast_to(Some(self))
    }

    /// Lazily casts elements with a checked conversion. See [`cast_with`].
    fn cast_with<F, U>(self, converter: F) -> Lazy<Plain<Self>, CastWith<F>>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        cast_with(Some(self), Some(converter))
    }

    /// Stable ascending sort by key.
    fn sorted_by<F, K>(self, key: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        sorted(self, key)
    }

    /// Stable ascending sort by key, comparing keys with `comparer`.
    fn sorted_by_with<F, K, C>(self, key: F, comparer: C) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparer<K>,
    {
        sorted_with(self, key, comparer)
    }

    /// Sort by `first`, then re-sort by `second`; `second` dominates.
    fn sorted_by_keys<F1, K1, F2, K2>(self, first: F1, second: F2) -> Vec<Self::Item>
    where
        F1: FnMut(&Self::Item) -> K1,
        F2: FnMut(&Self::Item) -> K2,
        K1: Ord,
        K2: Ord,
    {
        sorted_twice(self, first, second)
    }

    /// Ascending sort by key, reversed end to end.
    fn sorted_by_descending<F, K>(self, key: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        sorted_descending(self, key)
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        holds_for_all(self, predicate)
    }
}

impl<S: IntoIterator> SequenceExt for S {}
