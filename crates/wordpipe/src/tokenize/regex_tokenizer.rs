//! # Regex Normalizing Tokenizer

use regex::Regex;

use crate::{capabilities::TextTokenizer, errors::WPResult};

/// Rules for [`RegexTokenizer::basic_english`].
pub const BASIC_ENGLISH_RULES: &[(&str, &str)] = &[
    ("'", " '  "),
    ("\"", ""),
    (r"\.", " . "),
    ("<br />", " "),
    (",", " , "),
    (r"\(", " ( "),
    (r"\)", " ) "),
    ("!", " ! "),
    (r"\?", " ? "),
    (";", " "),
    (":", " "),
    (r"\s+", " "),
];

/// Applies ordered ``(pattern, replacement)`` rules, then splits on whitespace.
///
/// Replacements use [`Regex::replace_all`] syntax; ``$name`` expands groups.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    rules: Vec<(Regex, String)>,
    lowercase: bool,
}

impl RegexTokenizer {
    /// Build a tokenizer from ``(pattern, replacement)`` rules.
    ///
    /// ## Returns
    /// A new tokenizer; or `Regex` if a pattern fails to compile.
    pub fn new<W, P, R>(rules: W) -> WPResult<Self>
    where
        W: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: AsRef<str>,
    {
        let rules = rules
            .into_iter()
            .map(|(pattern, replacement)| -> WPResult<(Regex, String)> {
                Ok((
                    Regex::new(pattern.as_ref())?,
                    replacement.as_ref().to_string(),
                ))
            })
            .collect::<WPResult<Vec<_>>>()?;

        Ok(Self {
            rules,
            lowercase: false,
        })
    }

    /// The ``basic_english`` normalizer.
    ///
    /// Lowercases, pads punctuation with spaces, drops double quotes,
    /// ``<br />``, semicolons and colons.
    pub fn basic_english() -> WPResult<Self> {
        Ok(Self::new(BASIC_ENGLISH_RULES.iter().copied())?.with_lowercase(true))
    }

    /// Sets lowercasing before the rules run.
    pub fn with_lowercase(
        mut self,
        lowercase: bool,
    ) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Apply the normalization rules, without splitting.
    pub fn normalize(
        &self,
        text: &str,
    ) -> String {
        let mut line = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        for (pattern, replacement) in &self.rules {
            line = pattern
                .replace_all(&line, replacement.as_str())
                .into_owned();
        }
        line
    }
}

impl TextTokenizer for RegexTokenizer {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn tokenize(
        &self,
        text: &str,
    ) -> WPResult<Vec<String>> {
        Ok(self
            .normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }
}
