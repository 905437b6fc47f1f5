//! The pull cursor behind every lazy operator.
//!
//! A [`Lazy`] holds its source and operator untouched until the first call to
//! [`Iterator::next`]. That first pull validates both arguments; only then is
//! the source turned into an iterator and production begins.
//!
//! ```text
//! Created ──next()──► (validate) ──ok──► Producing ──► Exhausted
//!                          │                  │
//!                          └──err──► Failed ◄─┘ (element error)
//! ```
//!
//! Sources are abstracted by [`Pull`], which yields `Result` items so that
//! lazy cursors can feed other lazy cursors and errors travel downstream.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Result, SeqError};

/// A source that produces fallible elements one at a time.
pub trait Pull {
    /// The element type.
    type Item;

    /// Produces the next element, `None` when the source is done.
    fn pull(&mut self) -> Option<Result<Self::Item>>;
}

/// Conversion into a [`Pull`], performed on the first pull of a cursor.
pub trait IntoPull {
    /// The pull source this converts into.
    type Pull: Pull;

    /// Converts into a pull source.
    fn into_pull(self) -> Self::Pull;
}

/// Wraps an ordinary [`IntoIterator`] as a cursor source.
#[derive(Debug, Clone)]
pub struct Plain<S>(pub S);

/// The iterator of a [`Plain`] source; every element is `Ok`.
#[derive(Debug, Clone)]
pub struct PlainIter<I>(I);

impl<S: IntoIterator> IntoPull for Plain<S> {
    type Pull = PlainIter<S::IntoIter>;

    fn into_pull(self) -> Self::Pull {
        PlainIter(self.0.into_iter())
    }
}

impl<I: Iterator> Pull for PlainIter<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<Result<I::Item>> {
        self.0.next().map(Ok)
    }
}

/// One lazy operator step: pull from the source until an output is ready.
pub trait Operator<X: Pull> {
    /// Name reported when the operator's callback is missing.
    const ARGUMENT: &'static str;

    /// The element type produced.
    type Output;

    /// Produces the next output element.
    fn step(&mut self, source: &mut X) -> Option<Result<Self::Output>>;
}

/// Observable state of a [`Lazy`] cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// Constructed; nothing validated or consumed yet.
    Created,
    /// Validated and producing elements.
    Producing,
    /// The source ran out.
    Exhausted,
    /// An error was yielded; no further elements follow.
    Failed,
}

enum State<X: IntoPull, O> {
    Created { source: Option<X>, op: Option<O> },
    Producing { source: X::Pull, op: O },
    Exhausted,
    Failed,
}

/// A deferred sequence produced by a lazy operator.
///
/// Items are `Result`s: the first pull reports a missing argument, and
/// operators such as [`cast_to`](crate::cast_to) report element errors at
/// the position they occur. After an error or the end of the source the
/// cursor yields `None` forever.
pub struct Lazy<X: IntoPull, O> {
    state: State<X, O>,
}

impl<X: IntoPull, O> Lazy<X, O> {
    pub(crate) fn new(source: Option<X>, op: Option<O>) -> Self {
        Lazy {
            state: State::Created { source, op },
        }
    }

    /// Returns the cursor's current state.
    pub fn state(&self) -> CursorState {
        match self.state {
            State::Created { .. } => CursorState::Created,
            State::Producing { .. } => CursorState::Producing,
            State::Exhausted => CursorState::Exhausted,
            State::Failed => CursorState::Failed,
        }
    }
}

impl<X, O> Lazy<X, O>
where
    X: IntoPull,
    O: Operator<X::Pull>,
{
    fn bind(&mut self) -> Result<()> {
        let (source, op) = match std::mem::replace(&mut self.state, State::Failed) {
            State::Created { source, op } => (source, op),
            other => {
                self.state = other;
                return Ok(());
            }
        };
        let source = source.ok_or_else(|| SeqError::missing("source"))?;
        let op = op.ok_or_else(|| SeqError::missing(O::ARGUMENT))?;
        self.state = State::Producing {
            source: source.into_pull(),
            op,
        };
        tracing::trace!("lazy cursor validated");
        Ok(())
    }
}

impl<X, O> Iterator for Lazy<X, O>
where
    X: IntoPull,
    O: Operator<X::Pull>,
{
    type Item = Result<O::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Created { .. }) {
            if let Err(err) = self.bind() {
                tracing::debug!(error = %err, "lazy cursor failed validation");
                return Some(Err(err));
            }
        }

        let State::Producing { source, op } = &mut self.state else {
            return None;
        };
        let next = op.step(source);
        match &next {
            None => {
                tracing::trace!("lazy cursor exhausted");
                self.state = State::Exhausted;
            }
            Some(Err(_)) => self.state = State::Failed,
            Some(Ok(_)) => {}
        }
        next
    }
}

impl<X, O> FusedIterator for Lazy<X, O>
where
    X: IntoPull,
    O: Operator<X::Pull>,
{
}

impl<X, O> Pull for Lazy<X, O>
where
    X: IntoPull,
    O: Operator<X::Pull>,
{
    type Item = O::Output;

    fn pull(&mut self) -> Option<Result<O::Output>> {
        self.next()
    }
}

impl<X, O> IntoPull for Lazy<X, O>
where
    X: IntoPull,
    O: Operator<X::Pull>,
{
    type Pull = Self;

    fn into_pull(self) -> Self {
        self
    }
}

impl<X, O> Clone for State<X, O>
where
    X: IntoPull + Clone,
    X::Pull: Clone,
    O: Clone,
{
    fn clone(&self) -> Self {
        match self {
            State::Created { source, op } => State::Created {
                source: source.clone(),
                op: op.clone(),
            },
            State::Producing { source, op } => State::Producing {
                source: source.clone(),
                op: op.clone(),
            },
            State::Exhausted => State::Exhausted,
            State::Failed => State::Failed,
        }
    }
}

/// Clones the cursor in its current state.
///
/// A clone taken before the first pull re-runs the whole pipeline,
/// validation included, when it is iterated.
impl<X, O> Clone for Lazy<X, O>
where
    X: IntoPull + Clone,
    X::Pull: Clone,
    O: Clone,
{
    fn clone(&self) -> Self {
        Lazy {
            state: self.state.clone(),
        }
    }
}

impl<X: IntoPull, O> fmt::Debug for Lazy<X, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("state", &self.state())
            .finish()
    }
}
