//! Key comparers.
//!
//! A [`Comparer`] orders two keys. Any `Fn(&K, &K) -> Ordering` closure is a
//! comparer; [`Natural`] uses the key's [`Ord`] implementation and is what the
//! single-argument sort operators use.

use std::cmp::Ordering;

/// Two-argument ordering over a key type.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use seqops::{Comparer, Natural};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
/// ```
pub trait Comparer<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparer<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// The key type's natural total order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparer<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// The key type's partial order, made total.
///
/// Keys that are not comparable with themselves (`NaN`) sort after every
/// other key and are equal to each other. All other keys use
/// [`PartialOrd`].
///
/// ```
/// use seqops::{sort_by_with, Partial};
///
/// let sorted = sort_by_with(
///     Some(vec![2.0, f64::NAN, -1.0]),
///     Some(|x: &f64| *x),
///     Some(Partial),
/// )
/// .unwrap();
/// assert_eq!(sorted[..2], [-1.0, 2.0]);
/// assert!(sorted[2].is_nan());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Partial;

impl<K: PartialOrd + ?Sized> Comparer<K> for Partial {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        match (unordered(a), unordered(b)) {
            (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
        }
    }
}

fn unordered<K: PartialOrd + ?Sized>(key: &K) -> bool {
    key.partial_cmp(key).is_none()
}

/// Reverses another comparer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descending<C>(pub C);

impl<K: ?Sized, C: Comparer<K>> Comparer<K> for Descending<C> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}
