//! Eager sort operators.
//!
//! Every sort validates its arguments before touching the source, then
//! consumes the whole source, extracts one key per element and performs a
//! single stable sort over the `(key, element)` pairs. The result is a
//! materialized `Vec`.
//!
//! Two behaviours are easy to trip over:
//!
//! - [`sort_by_keys`] sorts by the first key and then re-sorts that result by
//!   the second key. The second key therefore dominates and the first key
//!   only breaks ties between elements equal under the second.
//! - [`sort_by_descending`] is the ascending sort reversed end to end, so
//!   elements with equal keys come out in reverse of their original order.

use crate::comparer::{Comparer, Natural};
use crate::cursor::{IntoPull, Lazy, Operator};
use crate::error::{require, Result};

/// Pairs every element with its key, then stable-sorts the pairs by key.
fn sort_keyed<I, F, K, C>(source: I, mut key: F, comparer: &C) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    let mut keyed: Vec<(K, I::Item)> = source
        .into_iter()
        .map(|item| (key(&item), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| comparer.compare(a, b));
    tracing::trace!(len = keyed.len(), "sorted sequence");
    keyed.into_iter().map(|(_, item)| item).collect()
}

fn sort_twice<I, F1, K1, F2, K2>(source: I, first: F1, second: F2) -> Vec<I::Item>
where
    I: IntoIterator,
    F1: FnMut(&I::Item) -> K1,
    F2: FnMut(&I::Item) -> K2,
    K1: Ord,
    K2: Ord,
{
    let by_first = sort_keyed(source, first, &Natural);
    sort_keyed(by_first, second, &Natural)
}

fn reversed<T>(mut sorted: Vec<T>) -> Vec<T> {
    sorted.reverse();
    sorted
}

/// Sorts a sequence in ascending order of a key.
///
/// The sort is stable: elements with equal keys keep their relative order.
/// A missing source or key selector fails before any element is read.
///
/// ```
/// use seqops::sort_by;
///
/// let sorted = sort_by(Some(vec![5, -17, -8, -9]), Some(|x: &i32| x.abs())).unwrap();
/// assert_eq!(sorted, vec![5, -8, -9, -17]);
/// ```
pub fn sort_by<S, F, K>(source: Option<S>, key: Option<F>) -> Result<Vec<S::Item>>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: Ord,
{
    let source = require(source, "source")?;
    let key = require(key, "key selector")?;
    Ok(sort_keyed(source, key, &Natural))
}

/// Sorts a sequence in ascending order of a key, using `comparer` for keys.
///
/// ```
/// use seqops::sort_by_with;
///
/// // even numbers first
/// let true_first = |a: &bool, b: &bool| b.cmp(a);
/// let sorted = sort_by_with(
///     Some(vec![4, 7, 8, 9]),
///     Some(|x: &i32| x % 2 == 0),
///     Some(true_first),
/// )
/// .unwrap();
/// assert_eq!(sorted, vec![4, 8, 7, 9]);
/// ```
pub fn sort_by_with<S, F, K, C>(
    source: Option<S>,
    key: Option<F>,
    comparer: Option<C>,
) -> Result<Vec<S::Item>>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    C: Comparer<K>,
{
    let source = require(source, "source")?;
    let key = require(key, "key selector")?;
    let comparer = require(comparer, "comparer")?;
    Ok(sort_keyed(source, key, &comparer))
}

/// Sorts by `first`, then sorts that result by `second`.
///
/// Both sorts are stable, so for elements with different `second` keys the
/// order follows `second`; `first` only orders elements whose `second` keys
/// are equal.
pub fn sort_by_keys<S, F1, K1, F2, K2>(
    source: Option<S>,
    first: Option<F1>,
    second: Option<F2>,
) -> Result<Vec<S::Item>>
where
    S: IntoIterator,
    F1: FnMut(&S::Item) -> K1,
    F2: FnMut(&S::Item) -> K2,
    K1: Ord,
    K2: Ord,
{
    let source = require(source, "source")?;
    let first = require(first, "first key selector")?;
    let second = require(second, "second key selector")?;
    Ok(sort_twice(source, first, second))
}

/// Sorts ascending by key, then reverses the whole result.
pub fn sort_by_descending<S, F, K>(source: Option<S>, key: Option<F>) -> Result<Vec<S::Item>>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: Ord,
{
    sort_by(source, key).map(reversed)
}

pub(crate) fn sorted<I, F, K>(source: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    sort_keyed(source, key, &Natural)
}

pub(crate) fn sorted_with<I, F, K, C>(source: I, key: F, comparer: C) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    sort_keyed(source, key, &comparer)
}

pub(crate) fn sorted_twice<I, F1, K1, F2, K2>(source: I, first: F1, second: F2) -> Vec<I::Item>
where
    I: IntoIterator,
    F1: FnMut(&I::Item) -> K1,
    F2: FnMut(&I::Item) -> K2,
    K1: Ord,
    K2: Ord,
{
    sort_twice(source, first, second)
}

pub(crate) fn sorted_descending<I, F, K>(source: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    reversed(sort_keyed(source, key, &Natural))
}

impl<X, O> Lazy<X, O>
where
    X: IntoPull,
    O: Operator<X::Pull>,
{
    /// Drains this sequence and sorts it ascending by key.
    ///
    /// The first upstream error is returned instead of a result.
    pub fn sorted_by<F, K>(self, key: F) -> Result<Vec<O::Output>>
    where
        F: FnMut(&O::Output) -> K,
        K: Ord,
    {
        let items = self.collect::<Result<Vec<_>>>()?;
        Ok(sorted(items, key))
    }

    /// Drains this sequence and sorts it by key with a comparer.
    pub fn sorted_by_with<F, K, C>(self, key: F, comparer: C) -> Result<Vec<O::Output>>
    where
        F: FnMut(&O::Output) -> K,
        C: Comparer<K>,
    {
        let items = self.collect::<Result<Vec<_>>>()?;
        Ok(sorted_with(items, key, comparer))
    }

    /// Drains this sequence and sorts it by `first`, then by `second`.
    pub fn sorted_by_keys<F1, K1, F2, K2>(self, first: F1, second: F2) -> Result<Vec<O::Output>>
    where
        F1: FnMut(&O::Output) -> K1,
        F2: FnMut(&O::Output) -> K2,
        K1: Ord,
        K2: Ord,
    {
        let items = self.collect::<Result<Vec<_>>>()?;
        Ok(sorted_twice(items, first, second))
    }

    /// Drains this sequence and returns its ascending sort reversed.
    pub fn sorted_by_descending<F, K>(self, key: F) -> Result<Vec<O::Output>>
    where
        F: FnMut(&O::Output) -> K,
        K: Ord,
    {
        let items = self.collect::<Result<Vec<_>>>()?;
        Ok(sorted_descending(items, key))
    }
}
