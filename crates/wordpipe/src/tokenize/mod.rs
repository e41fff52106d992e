//! # Text Tokenizers
//!
//! Concrete [`crate::capabilities::TextTokenizer`] implementations:
//! * [`WhitespaceTokenizer`] - split on unicode whitespace.
//! * [`RegexTokenizer`] - regex normalization rules, then whitespace split;
//!   see [`RegexTokenizer::basic_english`].
//!
//! With the ``hf-tokenizers`` feature, ``tokenizers::Tokenizer`` is also a
//! ``TextTokenizer``, yielding its token strings.

#[cfg(feature = "hf-tokenizers")]
mod hf_tokenizer;
mod regex_tokenizer;

#[doc(inline)]
pub use regex_tokenizer::*;

use crate::{capabilities::TextTokenizer, errors::WPResult};

/// Splits text on unicode whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl TextTokenizer for WhitespaceTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> WPResult<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        assert_eq!(
            WhitespaceTokenizer.tokenize(" a\tb\n\u{00a0}c ").unwrap(),
            vec!["a", "b", "c"]
        );
        assert!(WhitespaceTokenizer.tokenize("   ").unwrap().is_empty());
    }
}
