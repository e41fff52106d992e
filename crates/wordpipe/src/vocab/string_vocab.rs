//! # String ``{ String <-> T }`` Vocabulary

use crate::{
    capabilities::Vocabulary,
    errors::{WPResult, WordpipeError},
    types::{TokenType, WPHashMap, hash_map_with_capacity},
    vocab::VocabOptions,
};

/// Convert a vocabulary position into a token id.
fn try_token_id<T: TokenType>(index: usize) -> WPResult<T> {
    T::from_usize(index).ok_or(WordpipeError::TokenOutOfRange)
}

/// Token vocabulary as an ordered token list, and a ``{ String -> T }`` index.
///
/// A token's id is its position in the list.
/// When a default index is set, unknown tokens resolve to it;
/// otherwise lookups of unknown tokens fail.
#[derive(Debug, Clone, PartialEq)]
pub struct StringVocab<T: TokenType = u32> {
    itos: Vec<String>,
    stoi: WPHashMap<String, T>,
    default_index: Option<T>,
}

impl<T: TokenType> Default for StringVocab<T> {
    fn default() -> Self {
        Self {
            itos: Vec::new(),
            stoi: WPHashMap::default(),
            default_index: None,
        }
    }
}

impl<T: TokenType> StringVocab<T> {
    /// Build a vocabulary from an ordered token sequence.
    ///
    /// Repeated tokens keep the position of their first occurrence.
    ///
    /// ## Arguments
    /// * `tokens` - The ordered tokens.
    ///
    /// ## Returns
    /// A new `StringVocab`, or `TokenOutOfRange` if `T` cannot hold every id.
    pub fn from_tokens<W, S>(tokens: W) -> WPResult<Self>
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens.into_iter();
        let mut itos: Vec<String> = Vec::with_capacity(tokens.size_hint().0);
        let mut stoi: WPHashMap<String, T> = hash_map_with_capacity(tokens.size_hint().0);

        for token in tokens {
            let token = token.as_ref();
            if stoi.contains_key(token) {
                continue;
            }
            stoi.insert(token.to_string(), try_token_id(itos.len())?);
            itos.push(token.to_string());
        }

        Ok(Self {
            itos,
            stoi,
            default_index: None,
        })
    }

    /// Build a vocabulary from ``(token, count)`` pairs.
    ///
    /// Counted tokens are ordered by descending count, then by token text.
    /// Repeated tokens have their counts summed.
    ///
    /// ## Arguments
    /// * `counts` - The token counts.
    /// * `options` - The build options.
    ///
    /// ## Returns
    /// A new `StringVocab`; or `UnknownToken` if `options.default_token`
    /// is not in the built vocabulary.
    pub fn from_counts<W, S>(
        counts: W,
        options: &VocabOptions,
    ) -> WPResult<Self>
    where
        W: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut totals: WPHashMap<String, usize> = WPHashMap::default();
        for (token, count) in counts {
            *totals.entry(token.as_ref().to_string()).or_default() += count;
        }

        let mut counted: Vec<(String, usize)> = totals
            .into_iter()
            .filter(|(token, count)| {
                *count >= options.min_freq && !options.specials.contains(token)
            })
            .collect();
        counted.sort_by(|(a, a_count), (b, b_count)| {
            b_count.cmp(a_count).then_with(|| a.cmp(b))
        });
        let counted = counted.into_iter().map(|(token, _)| token);

        let specials = options.specials.iter().cloned();
        let mut vocab = if options.special_first {
            Self::from_tokens(specials.chain(counted))?
        } else {
            Self::from_tokens(counted.chain(specials))?
        };

        if let Some(default_token) = &options.default_token {
            let index = vocab.stoi.get(default_token).copied().ok_or_else(|| {
                WordpipeError::UnknownToken {
                    token: default_token.clone(),
                }
            })?;
            vocab.set_default_index(Some(index));
        }

        log::debug!(
            "built vocab: {} tokens ({} specials, min_freq={})",
            vocab.len(),
            options.specials.len(),
            options.min_freq
        );

        Ok(vocab)
    }

    /// Build a vocabulary by counting the tokens of an iterator of token lists.
    ///
    /// See [`Self::from_counts`].
    pub fn build_from_iterator<W, L, S>(
        token_lists: W,
        options: &VocabOptions,
    ) -> WPResult<Self>
    where
        W: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: WPHashMap<String, usize> = WPHashMap::default();
        for tokens in token_lists {
            for token in tokens {
                *counts.entry(token.as_ref().to_string()).or_default() += 1;
            }
        }
        Self::from_counts(counts, options)
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.itos.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.itos.is_empty()
    }

    /// Returns true if the token is in the vocabulary.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.stoi.contains_key(token)
    }

    /// The tokens, in id order.
    pub fn itos(&self) -> &[String] {
        &self.itos
    }

    /// The ``{ String -> T }`` index.
    pub fn stoi(&self) -> &WPHashMap<String, T> {
        &self.stoi
    }

    /// The id used for unknown tokens, if any.
    pub fn default_index(&self) -> Option<T> {
        self.default_index
    }

    /// Sets the id used for unknown tokens.
    pub fn set_default_index(
        &mut self,
        default_index: Option<T>,
    ) {
        self.default_index = default_index;
    }

    /// Sets the id used for unknown tokens.
    pub fn with_default_index(
        mut self,
        default_index: Option<T>,
    ) -> Self {
        self.set_default_index(default_index);
        self
    }

    /// Look up the id for a token.
    ///
    /// ## Returns
    /// The token's id; the default id for unknown tokens;
    /// or `UnknownToken` if there is no default.
    pub fn lookup_index(
        &self,
        token: &str,
    ) -> WPResult<T> {
        match self.stoi.get(token) {
            Some(&id) => Ok(id),
            None => self.default_index.ok_or_else(|| WordpipeError::UnknownToken {
                token: token.to_string(),
            }),
        }
    }

    /// Look up the token for an id.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> WPResult<&str> {
        id.to_usize()
            .and_then(|index| self.itos.get(index))
            .map(String::as_str)
            .ok_or(WordpipeError::IndexOutOfRange {
                index: id.to_usize().unwrap_or(usize::MAX),
                len: self.len(),
            })
    }

    /// Look up the tokens for a sequence of ids.
    pub fn lookup_tokens(
        &self,
        ids: &[T],
    ) -> WPResult<Vec<String>> {
        ids.iter()
            .map(|&id| self.lookup_token(id).map(str::to_string))
            .collect()
    }

    /// Append a new token at the end of the vocabulary.
    ///
    /// ## Returns
    /// `DuplicateToken` if the token is already present.
    pub fn append_token(
        &mut self,
        token: &str,
    ) -> WPResult<()> {
        self.insert_token(token, self.len())
    }

    /// Insert a new token at the given index.
    ///
    /// Tokens at or after `index` have their ids shifted up by one;
    /// a default index at or after `index` follows its token.
    ///
    /// ## Arguments
    /// * `token` - The new token.
    /// * `index` - The new token's id; must be ``<= len()``.
    ///
    /// ## Returns
    /// `DuplicateToken` if the token is already present;
    /// `IndexOutOfRange` if `index > len()`.
    pub fn insert_token(
        &mut self,
        token: &str,
        index: usize,
    ) -> WPResult<()> {
        if let Some(&existing) = self.stoi.get(token) {
            return Err(WordpipeError::DuplicateToken {
                token: token.to_string(),
                index: existing.to_usize().unwrap_or(usize::MAX),
            });
        }
        if index > self.len() {
            return Err(WordpipeError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        // The largest id after insertion must fit in T.
        try_token_id::<T>(self.len())?;

        self.itos.insert(index, token.to_string());
        for (pos, t) in self.itos.iter().enumerate().skip(index) {
            self.stoi.insert(t.clone(), try_token_id(pos)?);
        }

        if let Some(default_index) = self.default_index
            && default_index.to_usize().is_some_and(|d| d >= index)
        {
            self.default_index = Some(default_index + T::one());
        }

        log::trace!("inserted token {token:?} at {index}");
        Ok(())
    }
}

impl<T: TokenType> Vocabulary for StringVocab<T> {
    type Token = T;

    fn len(&self) -> usize {
        self.itos.len()
    }

    fn lookup(
        &self,
        token: &str,
    ) -> WPResult<T> {
        self.lookup_index(token)
    }

    fn insert(
        &mut self,
        token: &str,
        index: usize,
    ) -> WPResult<()> {
        self.insert_token(token, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens_dedups() {
        type T = u32;

        let vocab = StringVocab::<T>::from_tokens(["a", "b", "a", "c"]).unwrap();
        assert_eq!(vocab.itos(), &["a", "b", "c"]);
        assert_eq!(vocab.lookup_batch(&["c", "a"]).unwrap(), vec![2, 0]);
        assert!(vocab.contains("b"));
        assert!(!vocab.contains("d"));
    }

    #[test]
    fn test_unknown_token() {
        type T = u16;

        let vocab = StringVocab::<T>::from_tokens(["<unk>", "hello"]).unwrap();
        assert!(matches!(
            vocab.lookup("world"),
            Err(WordpipeError::UnknownToken { token }) if token == "world"
        ));

        let vocab = vocab.with_default_index(Some(0));
        assert_eq!(vocab.lookup("world").unwrap(), 0);
        assert_eq!(vocab.lookup("hello").unwrap(), 1);
    }

    #[test]
    fn test_insert_token() {
        type T = u32;

        let mut vocab = StringVocab::<T>::from_tokens(["a", "b"]).unwrap();

        vocab.insert_token("z", 1).unwrap();
        assert_eq!(vocab.lookup("z").unwrap(), 1);
        assert_eq!(vocab.itos(), &["a", "z", "b"]);
        assert_eq!(vocab.lookup("b").unwrap(), 2);

        vocab.append_token("end").unwrap();
        assert_eq!(vocab.lookup("end").unwrap(), 3);

        assert!(matches!(
            vocab.insert_token("a", 0),
            Err(WordpipeError::DuplicateToken { index: 0, .. })
        ));
        assert!(matches!(
            vocab.insert_token("new", 9),
            Err(WordpipeError::IndexOutOfRange { index: 9, len: 4 })
        ));
    }

    #[test]
    fn test_insert_shifts_default() {
        type T = u32;

        let mut vocab = StringVocab::<T>::from_tokens(["x", "<unk>"])
            .unwrap()
            .with_default_index(Some(1));

        vocab.insert_token("first", 0).unwrap();
        assert_eq!(vocab.lookup("missing").unwrap(), 2);
        assert_eq!(vocab.lookup_token(2).unwrap(), "<unk>");

        vocab.insert_token("last", 3).unwrap();
        assert_eq!(vocab.default_index(), Some(2));
    }

    #[test]
    fn test_insert_overflow() {
        type T = u8;

        let tokens: Vec<String> = (0..256).map(|i| format!("t{i}")).collect();
        let mut vocab = StringVocab::<T>::from_tokens(&tokens).unwrap();
        assert_eq!(vocab.len(), 256);

        assert!(matches!(
            vocab.append_token("overflow"),
            Err(WordpipeError::TokenOutOfRange)
        ));
        assert_eq!(vocab.len(), 256);

        let too_many: Vec<String> = (0..257).map(|i| format!("t{i}")).collect();
        assert!(matches!(
            StringVocab::<T>::from_tokens(&too_many),
            Err(WordpipeError::TokenOutOfRange)
        ));
    }

    #[test]
    fn test_lookup_tokens() {
        type T = u32;

        let vocab = StringVocab::<T>::from_tokens(["a", "b", "c"]).unwrap();
        assert_eq!(vocab.lookup_tokens(&[2, 0]).unwrap(), vec!["c", "a"]);
        assert!(matches!(
            vocab.lookup_token(3),
            Err(WordpipeError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_from_counts() {
        type T = u32;

        let counts = [
            ("b", 3),
            ("d", 3),
            ("a", 3),
            ("c", 5),
            ("rare", 1),
            ("a", 1),
        ];
        let options = VocabOptions::default()
            .with_min_freq(2)
            .with_specials(["<unk>", "<pad>"])
            .with_default_token(Some("<unk>"));

        let vocab = StringVocab::<T>::from_counts(counts, &options).unwrap();
        assert_eq!(vocab.itos(), &["<unk>", "<pad>", "c", "a", "b", "d"]);
        assert_eq!(vocab.lookup("rare").unwrap(), 0);

        let vocab = StringVocab::<T>::from_counts(
            counts,
            &options.clone().with_special_first(false),
        )
        .unwrap();
        assert_eq!(vocab.itos(), &["c", "a", "b", "d", "<unk>", "<pad>"]);
        assert_eq!(vocab.lookup("rare").unwrap(), 4);
    }

    #[test]
    fn test_from_counts_missing_default() {
        type T = u32;

        let options = VocabOptions::default().with_default_token(Some("<unk>"));
        assert!(matches!(
            StringVocab::<T>::from_counts([("a", 1)], &options),
            Err(WordpipeError::UnknownToken { token }) if token == "<unk>"
        ));
    }

    #[test]
    fn test_build_from_iterator() {
        type T = u32;

        let lines = vec![
            vec!["the", "cat", "sat"],
            vec!["the", "dog"],
            vec!["the", "cat"],
        ];
        let vocab = StringVocab::<T>::build_from_iterator(lines, &VocabOptions::default()).unwrap();

        assert_eq!(vocab.itos(), &["the", "cat", "dog", "sat"]);
    }
}
