//! # Hugging Face ``tokenizers`` Bridge

use crate::{
    capabilities::TextTokenizer,
    errors::{WPResult, WordpipeError},
};

impl TextTokenizer for tokenizers::Tokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> WPResult<Vec<String>> {
        let encoding = self
            .encode(text, false)
            .map_err(|e| WordpipeError::External(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }
}
