//! # Collaborator Capabilities
//!
//! The transforms in this crate own no tokenization, vocabulary storage,
//! or vector math; they wrap objects which provide these capabilities:
//! * [`SubwordModel`] - a pretrained subword (sentencepiece-style) model.
//! * [`Vocabulary`] - a ``{ token <-> id }`` mapping.
//! * [`VectorTable`] - a ``{ token -> [f32; dim] }`` table.
//! * [`TextTokenizer`] - a ``text -> tokens`` splitter.
//!
//! Errors raised by an implementation are surfaced unchanged by every
//! transform that wraps it.

use ndarray::Array2;

use crate::{errors::WPResult, types::TokenType};

/// A pretrained subword model with a fixed piece vocabulary.
pub trait SubwordModel: Send + Sync {
    /// The number of pieces in the model.
    fn piece_count(&self) -> usize;

    /// Get the piece for a model id.
    ///
    /// ## Arguments
    /// * `id` - The model id, in ``0..piece_count()``.
    fn id_to_piece(
        &self,
        id: usize,
    ) -> WPResult<String>;

    /// The id of the model's unknown piece.
    fn unknown_id(&self) -> usize;
}

/// A ``{ token <-> id }`` vocabulary.
pub trait Vocabulary: Send + Sync {
    /// The token id type.
    type Token: TokenType;

    /// Returns the number of tokens in the vocabulary.
    fn len(&self) -> usize;

    /// Returns true if the vocabulary is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the id of a single token.
    fn lookup(
        &self,
        token: &str,
    ) -> WPResult<Self::Token>;

    /// Look up the ids of a sequence of tokens.
    ///
    /// ## Returns
    /// The ids, in input order; or the first lookup error.
    fn lookup_batch<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> WPResult<Vec<Self::Token>> {
        tokens.iter().map(|t| self.lookup(t.as_ref())).collect()
    }

    /// Look up the ids of a batch of token sequences.
    ///
    /// ## Returns
    /// One id sequence per input sequence, in input order.
    fn lookup_all<S: AsRef<str>>(
        &self,
        batch: &[Vec<S>],
    ) -> WPResult<Vec<Vec<Self::Token>>> {
        batch.iter().map(|tokens| self.lookup_batch(tokens)).collect()
    }

    /// Insert a token at the given index.
    ///
    /// ## Arguments
    /// * `token` - The new token.
    /// * `index` - The id the token should receive.
    fn insert(
        &mut self,
        token: &str,
        index: usize,
    ) -> WPResult<()>;
}

/// A ``{ token -> [f32; dim] }`` vector table.
pub trait VectorTable: Send + Sync {
    /// The vector length.
    fn dim(&self) -> usize;

    /// Get the vectors for a sequence of tokens.
    ///
    /// ## Returns
    /// A ``(tokens.len(), dim)`` array.
    fn get_vectors<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> WPResult<Array2<f32>>;
}

/// A ``text -> tokens`` splitter.
pub trait TextTokenizer: Send + Sync {
    /// Split a line of text into tokens.
    fn tokenize(
        &self,
        text: &str,
    ) -> WPResult<Vec<String>>;
}

impl<V: Vocabulary> Vocabulary for Box<V> {
    type Token = V::Token;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn lookup(
        &self,
        token: &str,
    ) -> WPResult<Self::Token> {
        (**self).lookup(token)
    }

    fn lookup_batch<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> WPResult<Vec<Self::Token>> {
        (**self).lookup_batch(tokens)
    }

    fn lookup_all<S: AsRef<str>>(
        &self,
        batch: &[Vec<S>],
    ) -> WPResult<Vec<Vec<Self::Token>>> {
        (**self).lookup_all(batch)
    }

    fn insert(
        &mut self,
        token: &str,
        index: usize,
    ) -> WPResult<()> {
        (**self).insert(token, index)
    }
}

impl<M: SubwordModel + ?Sized> SubwordModel for &M {
    fn piece_count(&self) -> usize {
        (**self).piece_count()
    }

    fn id_to_piece(
        &self,
        id: usize,
    ) -> WPResult<String> {
        (**self).id_to_piece(id)
    }

    fn unknown_id(&self) -> usize {
        (**self).unknown_id()
    }
}

impl<V: VectorTable> VectorTable for std::sync::Arc<V> {
    fn dim(&self) -> usize {
        (**self).dim()
    }

    fn get_vectors<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> WPResult<Array2<f32>> {
        (**self).get_vectors(tokens)
    }
}

impl<K: TextTokenizer + ?Sized> TextTokenizer for std::sync::Arc<K> {
    fn tokenize(
        &self,
        text: &str,
    ) -> WPResult<Vec<String>> {
        (**self).tokenize(text)
    }
}

impl<K: TextTokenizer + ?Sized> TextTokenizer for Box<K> {
    fn tokenize(
        &self,
        text: &str,
    ) -> WPResult<Vec<String>> {
        (**self).tokenize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WordpipeError;
    use crate::types::{WPHashMap, check_is_send, check_is_sync};

    struct MapVocab {
        map: WPHashMap<String, u32>,
    }

    impl Vocabulary for MapVocab {
        type Token = u32;

        fn len(&self) -> usize {
            self.map.len()
        }

        fn lookup(
            &self,
            token: &str,
        ) -> WPResult<u32> {
            self.map
                .get(token)
                .copied()
                .ok_or_else(|| WordpipeError::UnknownToken {
                    token: token.to_string(),
                })
        }

        fn insert(
            &mut self,
            token: &str,
            index: usize,
        ) -> WPResult<()> {
            self.map.insert(token.to_string(), index as u32);
            Ok(())
        }
    }

    fn mock_vocab() -> MapVocab {
        let mut map = WPHashMap::default();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        MapVocab { map }
    }

    #[test]
    fn test_default_batch_lookups() {
        let vocab = mock_vocab();
        check_is_send(&vocab);
        check_is_sync(&vocab);

        assert_eq!(vocab.lookup_batch(&["a", "b"]).unwrap(), vec![1, 2]);
        assert_eq!(
            vocab
                .lookup_all(&[vec!["b"], vec!["a", "a"], vec![]])
                .unwrap(),
            vec![vec![2], vec![1, 1], vec![]]
        );
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_lookup_error_propagates() {
        let vocab = mock_vocab();
        let err = vocab.lookup_batch(&["a", "zzz", "b"]).unwrap_err();
        assert!(matches!(
            err,
            WordpipeError::UnknownToken { token } if token == "zzz"
        ));
    }

    #[test]
    fn test_boxed_vocab_forwards() {
        let mut vocab = Box::new(mock_vocab());
        vocab.insert("c", 7).unwrap();
        assert_eq!(vocab.lookup("c").unwrap(), 7);
        assert_eq!(vocab.len(), 3);
    }
}
