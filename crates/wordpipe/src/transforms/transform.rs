//! # Transform Trait

use std::sync::Arc;

use crate::errors::WPResult;

/// A single pipeline stage.
///
/// A transform maps an input value to an output value, surfacing
/// any collaborator error unchanged.
pub trait Transform<I> {
    /// The output type.
    type Output;

    /// Apply the transform to an input value.
    ///
    /// ## Arguments
    /// * `input` - The value to transform.
    ///
    /// ## Returns
    /// The transformed value, or the first error raised by a wrapped collaborator.
    fn apply(
        &self,
        input: I,
    ) -> WPResult<Self::Output>;

    /// Chain this transform with a following transform.
    ///
    /// ## Arguments
    /// * `next` - The transform to apply to this transform's output.
    ///
    /// ## Returns
    /// A [`Chain`] which applies `self`, then `next`.
    fn then<B>(
        self,
        next: B,
    ) -> Chain<Self, B>
    where
        Self: Sized,
        B: Transform<Self::Output>,
    {
        Chain::new(self, next)
    }
}

impl<I, T> Transform<I> for &T
where
    T: Transform<I> + ?Sized,
{
    type Output = T::Output;

    fn apply(
        &self,
        input: I,
    ) -> WPResult<Self::Output> {
        (**self).apply(input)
    }
}

impl<I, T> Transform<I> for Box<T>
where
    T: Transform<I> + ?Sized,
{
    type Output = T::Output;

    fn apply(
        &self,
        input: I,
    ) -> WPResult<Self::Output> {
        (**self).apply(input)
    }
}

impl<I, T> Transform<I> for Arc<T>
where
    T: Transform<I> + ?Sized,
{
    type Output = T::Output;

    fn apply(
        &self,
        input: I,
    ) -> WPResult<Self::Output> {
        (**self).apply(input)
    }
}

/// The identity transform.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

impl<I> Transform<I> for Identity {
    type Output = I;

    fn apply(
        &self,
        input: I,
    ) -> WPResult<I> {
        Ok(input)
    }
}

/// A transform built from a closure.
///
/// See [`transform_fn`].
#[derive(Clone, Copy)]
pub struct FnTransform<F> {
    f: F,
}

/// Lift a closure into a [`Transform`].
///
/// ## Arguments
/// * `f` - A ``Fn(I) -> WPResult<O>`` closure.
pub fn transform_fn<F, I, O>(f: F) -> FnTransform<F>
where
    F: Fn(I) -> WPResult<O>,
{
    FnTransform { f }
}

impl<F, I, O> Transform<I> for FnTransform<F>
where
    F: Fn(I) -> WPResult<O>,
{
    type Output = O;

    fn apply(
        &self,
        input: I,
    ) -> WPResult<O> {
        (self.f)(input)
    }
}

/// Two transforms applied in sequence.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    /// The first transform.
    pub first: A,

    /// The second transform.
    pub second: B,
}

impl<A, B> Chain<A, B> {
    /// Create a new chain.
    pub fn new(
        first: A,
        second: B,
    ) -> Self {
        Self { first, second }
    }
}

impl<I, A, B> Transform<I> for Chain<A, B>
where
    A: Transform<I>,
    B: Transform<A::Output>,
{
    type Output = B::Output;

    fn apply(
        &self,
        input: I,
    ) -> WPResult<Self::Output> {
        let mid = self.first.apply(input)?;
        self.second.apply(mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WordpipeError;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.apply(vec![1, 2, 3]).unwrap(), vec![1, 2, 3]);
        assert_eq!(Identity.apply("hello").unwrap(), "hello");
    }

    #[test]
    fn test_chain_order() {
        let pipeline = transform_fn(|s: &str| Ok(s.len()))
            .then(transform_fn(|n: usize| Ok(n * 10)))
            .then(Identity);

        assert_eq!(pipeline.apply("abc").unwrap(), 30);
    }

    #[test]
    fn test_chain_short_circuits() {
        let pipeline = transform_fn(|_: u32| -> WPResult<u32> {
            Err(WordpipeError::External("boom".to_string()))
        })
        .then(transform_fn(|_: u32| -> WPResult<u32> {
            panic!("second stage must not run")
        }));

        let err = pipeline.apply(1).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_pointer_impls() {
        let double = transform_fn(|x: i32| Ok(x * 2));

        assert_eq!((&double).apply(2).unwrap(), 4);

        let boxed: Box<dyn Transform<i32, Output = i32>> = Box::new(double);
        assert_eq!(boxed.apply(3).unwrap(), 6);

        let shared = Arc::new(transform_fn(|x: i32| Ok(x + 1)));
        assert_eq!(shared.apply(3).unwrap(), 4);
    }
}
