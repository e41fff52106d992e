//! # Pretrained Subword Vocabulary

use crate::{
    capabilities::{SubwordModel, Vocabulary},
    errors::WPResult,
    transforms::Transform,
    types::TokenType,
    vocab::StringVocab,
};

/// Vocabulary transform built from a pretrained [`SubwordModel`].
///
/// The vocabulary holds the model's pieces in model-id order,
/// and resolves unknown tokens to the model's unknown piece.
#[derive(Debug, Clone, PartialEq)]
pub struct PretrainedSubwordVocab<T: TokenType = u32> {
    vocab: StringVocab<T>,
}

impl<T: TokenType> PretrainedSubwordVocab<T> {
    /// Build from a pretrained subword model.
    ///
    /// ## Arguments
    /// * `model` - The subword model; queried only during construction.
    ///
    /// ## Returns
    /// A new vocabulary transform; or the first error raised by the model.
    pub fn from_model<M: SubwordModel>(model: &M) -> WPResult<Self> {
        let unk_token = model.id_to_piece(model.unknown_id())?;

        let pieces = (0..model.piece_count())
            .map(|id| model.id_to_piece(id))
            .collect::<WPResult<Vec<_>>>()?;

        let mut vocab = StringVocab::from_tokens(&pieces)?;
        let unk_index = vocab.lookup(&unk_token)?;
        vocab.set_default_index(Some(unk_index));

        log::debug!(
            "pretrained vocab: {} pieces, unknown piece {unk_token:?} -> {unk_index}",
            vocab.len()
        );

        Ok(Self { vocab })
    }

    /// The wrapped vocabulary.
    pub fn vocab(&self) -> &StringVocab<T> {
        &self.vocab
    }

    /// Insert a token into the wrapped vocabulary.
    ///
    /// Errors from the vocabulary are returned unchanged.
    pub fn insert_token(
        &mut self,
        token: &str,
        index: usize,
    ) -> WPResult<()> {
        self.vocab.insert(token, index)
    }
}

impl<T, S> Transform<Vec<S>> for PretrainedSubwordVocab<T>
where
    T: TokenType,
    S: AsRef<str>,
{
    type Output = Vec<T>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn apply(
        &self,
        tokens: Vec<S>,
    ) -> WPResult<Vec<T>> {
        self.vocab.lookup_batch(&tokens)
    }
}
