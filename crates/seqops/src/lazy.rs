//! Lazy operators: filter, transform and the runtime-checked casts.
//!
//! Each function returns a [`Lazy`] cursor immediately. Nothing is
//! validated or consumed until the caller pulls the first element, so a
//! cursor built over a missing source is harmless until it is iterated.

use std::any::{type_name, Any};
use std::marker::PhantomData;

use crate::cast::Dynamic;
use crate::cursor::{IntoPull, Lazy, Operator, Plain, Pull};
use crate::error::{Result, SeqError};

/// Keeps the elements a predicate accepts.
#[derive(Clone)]
pub struct Filter<P> {
    predicate: P,
}

impl<X, P> Operator<X> for Filter<P>
where
    X: Pull,
    P: FnMut(&X::Item) -> bool,
{
    const ARGUMENT: &'static str = "predicate";
    type Output = X::Item;

    fn step(&mut self, source: &mut X) -> Option<Result<X::Item>> {
        loop {
            match source.pull()? {
                Ok(item) if (self.predicate)(&item) => return Some(Ok(item)),
                Ok(_) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Maps every element through a function.
#[derive(Clone)]
pub struct Transform<F> {
    mapper: F,
}

impl<X, F, U> Operator<X> for Transform<F>
where
    X: Pull,
    F: FnMut(X::Item) -> U,
{
    const ARGUMENT: &'static str = "transformer";
    type Output = U;

    fn step(&mut self, source: &mut X) -> Option<Result<U>> {
        source.pull().map(|item| item.map(&mut self.mapper))
    }
}

/// Checks every element against the type `T`.
pub struct Cast<T> {
    index: usize,
    target: PhantomData<fn() -> T>,
}

impl<X, T> Operator<X> for Cast<T>
where
    X: Pull,
    X::Item: Dynamic,
    T: Any,
{
    const ARGUMENT: &'static str = "target";
    type Output = T;

    fn step(&mut self, source: &mut X) -> Option<Result<T>> {
        let item = match source.pull()? {
            Ok(item) => item,
            Err(err) => return Some(Err(err)),
        };
        let index = self.index;
        self.index += 1;
        Some(
            item.downcast_into::<T>()
                .map_err(|_| mismatch(index, type_name::<T>())),
        )
    }
}

/// Converts every element with a caller-supplied checked conversion.
#[derive(Clone)]
pub struct CastWith<F> {
    converter: F,
    index: usize,
}

impl<X, F, U> Operator<X> for CastWith<F>
where
    X: Pull,
    F: FnMut(X::Item) -> Option<U>,
{
    const ARGUMENT: &'static str = "converter";
    type Output = U;

    fn step(&mut self, source: &mut X) -> Option<Result<U>> {
        let item = match source.pull()? {
            Ok(item) => item,
            Err(err) => return Some(Err(err)),
        };
        let index = self.index;
        self.index += 1;
        Some((self.converter)(item).ok_or_else(|| mismatch(index, type_name::<U>())))
    }
}

impl<T> Clone for Cast<T> {
    fn clone(&self) -> Self {
        Cast {
            index: self.index,
            target: PhantomData,
        }
    }
}

fn mismatch(index: usize, expected: &'static str) -> SeqError {
    tracing::debug!(index, expected, "element failed cast");
    SeqError::TypeMismatch { index, expected }
}

/// Filters a sequence with a predicate.
///
/// The result holds, in their original order, exactly the elements the
/// predicate accepts. The predicate runs once per source element as the
/// result is consumed. A missing source or predicate is reported by the
/// first pull, not here.
///
/// ```
/// use seqops::filter;
///
/// let negatives: Vec<i32> = filter(Some(vec![5, -7, 8, -9]), Some(|x: &i32| *x < 0))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(negatives, vec![-7, -9]);
/// ```
pub fn filter<S, P>(source: Option<S>, predicate: Option<P>) -> Lazy<Plain<S>, Filter<P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Lazy::new(source.map(Plain), predicate.map(|predicate| Filter { predicate }))
}

/// Transforms each element of a sequence.
///
/// Element `i` of the result is `mapper(source[i])`; nothing is dropped or
/// reordered. Validation is deferred to the first pull.
pub fn transform<S, F, U>(source: Option<S>, mapper: Option<F>) -> Lazy<Plain<S>, Transform<F>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    Lazy::new(source.map(Plain), mapper.map(|mapper| Transform { mapper }))
}

/// Casts each type-erased element to `T` as it is pulled.
///
/// Elements before the first incompatible one are yielded normally; the
/// incompatible one produces [`SeqError::TypeMismatch`] carrying its index.
///
/// ```
/// use std::any::Any;
/// use seqops::cast_to;
///
/// let items: Vec<Box<dyn Any>> = vec![Box::new(12i32), Box::new("hi")];
/// let mut strings = cast_to::<&str, _>(Some(items));
/// assert!(strings.next().unwrap().unwrap_err().is_type_mismatch());
/// assert!(strings.next().is_none());
/// ```
pub fn cast_to<T, S>(source: Option<S>) -> Lazy<Plain<S>, Cast<T>>
where
    T: Any,
    S: IntoIterator,
    S::Item: Dynamic,
{
    Lazy::new(source.map(Plain), Some(cast()))
}

/// Casts each element with a checked conversion.
///
/// `converter` returns `None` for an element that is not compatible with
/// `U`; that element produces [`SeqError::TypeMismatch`].
pub fn cast_with<S, F, U>(source: Option<S>, converter: Option<F>) -> Lazy<Plain<S>, CastWith<F>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Option<U>,
{
    Lazy::new(source.map(Plain), converter.map(cast_with_op))
}

fn cast<T>() -> Cast<T> {
    Cast {
        index: 0,
        target: PhantomData,
    }
}

fn cast_with_op<F>(converter: F) -> CastWith<F> {
    CastWith {
        converter,
        index: 0,
    }
}

impl<X, O> Lazy<X, O>
where
    X: IntoPull,
    O: Operator<X::Pull>,
{
    /// Filters this sequence lazily. Upstream errors pass through.
    pub fn filtered<P>(self, predicate: P) -> Lazy<Self, Filter<P>>
    where
        P: FnMut(&O::Output) -> bool,
    {
        Lazy::new(Some(self), Some(Filter { predicate }))
    }

    /// Transforms this sequence lazily. Upstream errors pass through.
    pub fn transformed<F, U>(self, mapper: F) -> Lazy<Self, Transform<F>>
    where
        F: FnMut(O::Output) -> U,
    {
        Lazy::new(Some(self), Some(Transform { mapper }))
    }

    /// Casts this sequence's type-erased elements to `T` lazily.
    pub fn cast_to<T>(self) -> Lazy<Self, Cast<T>>
    where
        T: Any,
        O::Output: Dynamic,
    {
        Lazy::new(Some(self), Some(cast()))
    }

    /// Casts this sequence's elements with a checked conversion.
    pub fn cast_with<F, U>(self, converter: F) -> Lazy<Self, CastWith<F>>
    where
        F: FnMut(O::Output) -> Option<U>,
    {
        Lazy::new(Some(self), Some(cast_with_op(converter)))
    }
}
