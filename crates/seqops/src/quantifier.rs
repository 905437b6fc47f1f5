//! The universal quantifier.

use crate::cursor::{IntoPull, Lazy, Operator};
use crate::error::{require, Result};

/// Returns `true` if every element satisfies `predicate`.
///
/// An empty sequence satisfies any predicate. Iteration stops at the first
/// element the predicate rejects; later elements are never read. A missing
/// source or predicate fails before any element is read.
///
/// ```
/// use seqops::for_all;
///
/// assert_eq!(for_all(Some(vec![-5, -7, -8, -9]), Some(|x: &i32| *x < 0)), Ok(true));
/// assert_eq!(for_all(Some(vec![5, 7, -8, 9]), Some(|x: &i32| *x < 0)), Ok(false));
/// ```
pub fn for_all<S, P>(source: Option<S>, predicate: Option<P>) -> Result<bool>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    let source = require(source, "source")?;
    let predicate = require(predicate, "predicate")?;
    Ok(holds_for_all(source, predicate))
}

pub(crate) fn holds_for_all<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for (index, item) in source.into_iter().enumerate() {
        if !predicate(&item) {
            tracing::trace!(index, "predicate rejected element");
            return false;
        }
    }
    true
}

impl<X, O> Lazy<X, O>
where
    X: IntoPull,
    O: Operator<X::Pull>,
{
    /// Returns `true` if every element of this sequence satisfies `predicate`.
    ///
    /// Stops at the first rejected element. An upstream error reached before
    /// that is returned instead.
    pub fn for_all<P>(self, mut predicate: P) -> Result<bool>
    where
        P: FnMut(&O::Output) -> bool,
    {
        for item in self {
            if !predicate(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
