//! # Vocabulary Lookup Transforms

use crate::{capabilities::Vocabulary, errors::WPResult, transforms::Transform};

/// Batch vocabulary transform: ``Vec<Vec<token>> -> Vec<Vec<id>>``.
///
/// Uses the vocabulary's nested [`Vocabulary::lookup_all`].
#[derive(Debug, Clone)]
pub struct VocabTransform<V> {
    /// The wrapped vocabulary.
    pub vocab: V,
}

impl<V: Vocabulary> VocabTransform<V> {
    /// Create a new transform.
    pub fn new(vocab: V) -> Self {
        Self { vocab }
    }
}

impl<V, S> Transform<Vec<Vec<S>>> for VocabTransform<V>
where
    V: Vocabulary,
    S: AsRef<str>,
{
    type Output = Vec<Vec<V::Token>>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn apply(
        &self,
        tokens_list: Vec<Vec<S>>,
    ) -> WPResult<Self::Output> {
        self.vocab.lookup_all(&tokens_list)
    }
}

/// Single-sequence vocabulary transform: ``Vec<token> -> Vec<id>``.
///
/// Uses the vocabulary's flat [`Vocabulary::lookup_batch`].
#[derive(Debug, Clone)]
pub struct ScriptVocabTransform<V> {
    /// The wrapped vocabulary.
    pub vocab: V,
}

impl<V: Vocabulary> ScriptVocabTransform<V> {
    /// Create a new transform.
    pub fn new(vocab: V) -> Self {
        Self { vocab }
    }
}

impl<V, S> Transform<Vec<S>> for ScriptVocabTransform<V>
where
    V: Vocabulary,
    S: AsRef<str>,
{
    type Output = Vec<V::Token>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn apply(
        &self,
        tokens: Vec<S>,
    ) -> WPResult<Self::Output> {
        self.vocab.lookup_batch(&tokens)
    }
}
