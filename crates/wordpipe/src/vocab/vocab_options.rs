//! # Vocabulary Build Options

/// Options for building a [`crate::vocab::StringVocab`] from token counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabOptions {
    /// Minimum count for a token to be included.
    pub min_freq: usize,

    /// Special tokens, always included regardless of count.
    pub specials: Vec<String>,

    /// Place specials before (true) or after (false) the counted tokens.
    pub special_first: bool,

    /// Token whose index is used for unknown tokens, if any.
    pub default_token: Option<String>,
}

impl Default for VocabOptions {
    fn default() -> Self {
        Self {
            min_freq: 1,
            specials: Vec::new(),
            special_first: true,
            default_token: None,
        }
    }
}

impl VocabOptions {
    /// Sets the minimum count.
    pub fn set_min_freq(
        &mut self,
        min_freq: usize,
    ) {
        self.min_freq = min_freq;
    }

    /// Sets the minimum count.
    pub fn with_min_freq(
        mut self,
        min_freq: usize,
    ) -> Self {
        self.set_min_freq(min_freq);
        self
    }

    /// Sets the special tokens.
    pub fn set_specials<W, S>(
        &mut self,
        specials: W,
    ) where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.specials = specials
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
    }

    /// Sets the special tokens.
    pub fn with_specials<W, S>(
        mut self,
        specials: W,
    ) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_specials(specials);
        self
    }

    /// Sets whether specials come first.
    pub fn set_special_first(
        &mut self,
        special_first: bool,
    ) {
        self.special_first = special_first;
    }

    /// Sets whether specials come first.
    pub fn with_special_first(
        mut self,
        special_first: bool,
    ) -> Self {
        self.set_special_first(special_first);
        self
    }

    /// Sets the default (unknown) token.
    pub fn set_default_token<S: AsRef<str>>(
        &mut self,
        default_token: Option<S>,
    ) {
        self.default_token = default_token.map(|s| s.as_ref().to_string());
    }

    /// Sets the default (unknown) token.
    pub fn with_default_token<S: AsRef<str>>(
        mut self,
        default_token: Option<S>,
    ) -> Self {
        self.set_default_token(default_token);
        self
    }
}
