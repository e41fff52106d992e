//! # Per-Item Batch Transform

use crate::{errors::WPResult, transforms::Transform};

/// Applies an inner transform independently to each item of a batch.
///
/// The output has the same length and order as the input.
#[derive(Debug, Clone)]
pub struct IterateBatch<P> {
    /// The per-item transform.
    pub pipeline: P,
}

impl<P> IterateBatch<P> {
    /// Create a new batch transform.
    ///
    /// ## Arguments
    /// * `pipeline` - The transform to apply to each item.
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }
}

impl<P, I> Transform<Vec<I>> for IterateBatch<P>
where
    P: Transform<I>,
{
    type Output = Vec<P::Output>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(batch = batch.len())))]
    fn apply(
        &self,
        batch: Vec<I>,
    ) -> WPResult<Self::Output> {
        batch
            .into_iter()
            .map(|item| self.pipeline.apply(item))
            .collect()
    }
}

/// Build a transform applying `pipeline` to each item of a batch.
///
/// ``iterate_batch(f)([s1, s2]) == [f(s1), f(s2)]``
pub fn iterate_batch<P>(pipeline: P) -> IterateBatch<P> {
    IterateBatch::new(pipeline)
}
