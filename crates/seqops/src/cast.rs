//! Runtime-checked conversion of type-erased elements.

use std::any::Any;

/// A type-erased element that can be checked against a concrete type.
///
/// Implemented for the boxed [`Any`] forms. [`cast_to`](crate::cast_to)
/// uses it to test each element as it is pulled.
///
/// ```
/// use std::any::Any;
/// use seqops::Dynamic;
///
/// let boxed: Box<dyn Any> = Box::new(12i32);
/// let boxed = boxed.downcast_into::<String>().unwrap_err();
/// assert_eq!(boxed.downcast_into::<i32>().ok(), Some(12));
/// ```
pub trait Dynamic: Sized {
    /// Moves the value out as a `T`, or hands the element back unchanged.
    fn downcast_into<T: Any>(self) -> Result<T, Self>;
}

impl Dynamic for Box<dyn Any> {
    fn downcast_into<T: Any>(self) -> Result<T, Self> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl Dynamic for Box<dyn Any + Send> {
    fn downcast_into<T: Any>(self) -> Result<T, Self> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl Dynamic for Box<dyn Any + Send + Sync> {
    fn downcast_into<T: Any>(self) -> Result<T, Self> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}
