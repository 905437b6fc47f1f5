//! Bounded generator of consecutive integers.

use std::iter::FusedIterator;

use crate::error::{Result, SeqError};

/// Consecutive integers `start, start + 1, ...`, `count` of them.
///
/// Produced lazily by [`sequential`]; each element is computed when pulled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequential {
    next: i64,
    remaining: u64,
}

/// Generates `count` consecutive integers beginning at `start`.
///
/// Fails with [`SeqError::InvalidArgument`] when `count` is negative or the
/// last element would not fit in an `i64`. Both checks happen here, before
/// anything is generated.
///
/// ```
/// use seqops::sequential;
///
/// let numbers: Vec<i64> = sequential(-2, 4).unwrap().collect();
/// assert_eq!(numbers, vec![-2, -1, 0, 1]);
/// assert!(sequential(0, -1).unwrap_err().is_invalid_argument());
/// ```
pub fn sequential(start: i64, count: i64) -> Result<Sequential> {
    if count < 0 {
        tracing::debug!(count, "rejected negative count");
        return Err(SeqError::invalid(
            "count",
            format!("must be non-negative, got {count}"),
        ));
    }
    if count > 0 && start.checked_add(count - 1).is_none() {
        tracing::debug!(start, count, "rejected overflowing range");
        return Err(SeqError::invalid(
            "count",
            format!("{count} elements from {start} overflow i64"),
        ));
    }
    Ok(Sequential {
        next: start,
        remaining: count as u64,
    })
}

impl Iterator for Sequential {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Sequential {}
