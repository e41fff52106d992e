//! # Functional Composers
//!
//! Each composer wraps a single capability and applies it over a batch:
//! * [`iterate_batch`] - any transform, once per item.
//! * [`vocab_func`] - vocabulary lookup, flattened over all token lists.
//! * [`vector_func`] - vector lookup, one array per token list.
//! * [`tokenizer_func`] - tokenization, one token list per line.

use ndarray::Array2;

use crate::{
    capabilities::{TextTokenizer, VectorTable, Vocabulary},
    errors::WPResult,
    transforms::Transform,
};

#[doc(inline)]
pub use crate::transforms::iterate_batch;

/// See [`vocab_func`].
#[derive(Debug, Clone)]
pub struct VocabFunc<V> {
    /// The wrapped vocabulary.
    pub vocab: V,
}

/// Build a transform looking up every token of every token list.
///
/// The ids are flattened into a single sequence:
/// ``[[a, b], [c]] -> [id(a), id(b), id(c)]``.
pub fn vocab_func<V: Vocabulary>(vocab: V) -> VocabFunc<V> {
    VocabFunc { vocab }
}

impl<V, W, L, S> Transform<W> for VocabFunc<V>
where
    V: Vocabulary,
    W: IntoIterator<Item = L>,
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    type Output = Vec<V::Token>;

    fn apply(
        &self,
        tokens_list_iter: W,
    ) -> WPResult<Self::Output> {
        tokens_list_iter
            .into_iter()
            .flatten()
            .map(|token| self.vocab.lookup(token.as_ref()))
            .collect()
    }
}

/// See [`vector_func`].
#[derive(Debug, Clone)]
pub struct VectorFunc<V> {
    /// The wrapped vector table.
    pub vectors: V,
}

/// Build a transform looking up the vectors of each token list.
///
/// Produces one ``(tokens, dim)`` array per token list.
pub fn vector_func<V: VectorTable>(vectors: V) -> VectorFunc<V> {
    VectorFunc { vectors }
}

impl<V, W, L, S> Transform<W> for VectorFunc<V>
where
    V: VectorTable,
    W: IntoIterator<Item = L>,
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    type Output = Vec<Array2<f32>>;

    fn apply(
        &self,
        tokens_list_iter: W,
    ) -> WPResult<Self::Output> {
        tokens_list_iter
            .into_iter()
            .map(|tokens| {
                let tokens: Vec<S> = tokens.into_iter().collect();
                self.vectors.get_vectors(&tokens)
            })
            .collect()
    }
}

/// See [`tokenizer_func`].
#[derive(Debug, Clone)]
pub struct TokenizerFunc<K> {
    /// The wrapped tokenizer.
    pub tokenizer: K,
}

/// Build a transform tokenizing each line.
///
/// Produces one token list per line.
pub fn tokenizer_func<K: TextTokenizer>(tokenizer: K) -> TokenizerFunc<K> {
    TokenizerFunc { tokenizer }
}

impl<K, W, S> Transform<W> for TokenizerFunc<K>
where
    K: TextTokenizer,
    W: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    type Output = Vec<Vec<String>>;

    fn apply(
        &self,
        lines: W,
    ) -> WPResult<Self::Output> {
        lines
            .into_iter()
            .map(|line| self.tokenizer.tokenize(line.as_ref()))
            .collect()
    }
}
