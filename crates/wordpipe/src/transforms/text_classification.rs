//! # Label/Text Pair Transform

use crate::{errors::WPResult, transforms::Transform};

/// Applies one transform to the label, and another to the text, of a
/// ``(label, text)`` pair.
///
/// The two transforms are independent; the label transform runs first.
#[derive(Debug, Clone)]
pub struct TextClassificationPipeline<L, X> {
    /// The label transform.
    pub label_transform: L,

    /// The text transform.
    pub text_transform: X,
}

impl<L, X> TextClassificationPipeline<L, X> {
    /// Create a new pipeline.
    ///
    /// ## Arguments
    /// * `label_transform` - Applied to the first pair component.
    /// * `text_transform` - Applied to the second pair component.
    pub fn new(
        label_transform: L,
        text_transform: X,
    ) -> Self {
        Self {
            label_transform,
            text_transform,
        }
    }
}

impl<L, X, LI, XI> Transform<(LI, XI)> for TextClassificationPipeline<L, X>
where
    L: Transform<LI>,
    X: Transform<XI>,
{
    type Output = (L::Output, X::Output);

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn apply(
        &self,
        (label, text): (LI, XI),
    ) -> WPResult<Self::Output> {
        let label = self.label_transform.apply(label)?;
        let text = self.text_transform.apply(text)?;
        Ok((label, text))
    }
}
