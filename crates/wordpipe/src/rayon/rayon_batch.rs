//! # Parallel Batch Transform

use rayon::prelude::*;

use crate::{errors::WPResult, transforms::Transform};

/// Batch-Level Parallel Transform Wrapper.
///
/// The parallel counterpart of [`crate::transforms::IterateBatch`];
/// output order matches input order.
#[derive(Debug, Clone)]
pub struct ParallelRayonBatch<P> {
    /// Inner per-item transform.
    pub inner: P,
}

impl<P> ParallelRayonBatch<P> {
    /// Create a new parallel batch transform.
    ///
    /// ## Arguments
    /// * `inner` - The transform to apply to each item.
    ///
    /// ## Returns
    /// A new `ParallelRayonBatch` instance.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P, I> Transform<Vec<I>> for ParallelRayonBatch<P>
where
    P: Transform<I> + Sync,
    P::Output: Send,
    I: Send,
{
    type Output = Vec<P::Output>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(batch = batch.len())))]
    fn apply(
        &self,
        batch: Vec<I>,
    ) -> WPResult<Self::Output> {
        batch
            .into_par_iter()
            .map(|item| self.inner.apply(item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::TextTokenizer;
    use crate::errors::WordpipeError;
    use crate::tokenize::RegexTokenizer;
    use crate::transforms::{iterate_batch, transform_fn};
    use crate::types::{check_is_send, check_is_sync};

    #[test]
    fn test_matches_sequential() {
        let tokenizer = RegexTokenizer::basic_english().unwrap();
        let per_line = transform_fn(move |line: String| tokenizer.tokenize(&line));

        let lines: Vec<String> = (0..200)
            .map(|i| format!("Line {i}: it's the heat, not the humidity!"))
            .collect();

        let parallel = ParallelRayonBatch::new(&per_line);
        check_is_send(&parallel);
        check_is_sync(&parallel);

        let sequential = iterate_batch(&per_line);

        assert_eq!(
            parallel.apply(lines.clone()).unwrap(),
            sequential.apply(lines).unwrap()
        );
    }

    #[test]
    fn test_error_propagates() {
        let f = ParallelRayonBatch::new(transform_fn(|x: u32| {
            if x % 7 == 3 {
                Err(WordpipeError::External("bad".to_string()))
            } else {
                Ok(x)
            }
        }));

        assert!(f.apply((0..100).collect::<Vec<u32>>()).is_err());
        assert_eq!(f.apply(vec![1, 2]).unwrap(), vec![1, 2]);
    }
}
