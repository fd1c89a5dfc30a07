//! Tokenizer configuration

/// Configuration for building a [`Tokenizer`](crate::Tokenizer)
///
/// The compilation limits apply only to [`Pattern::Regex`](crate::Pattern::Regex)
/// definitions; literal and precompiled patterns are used as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Approximate size limit, in bytes, of each compiled regex (`None` keeps the regex default)
    pub size_limit: Option<usize>,
    /// Approximate size limit, in bytes, of each regex's lazy DFA cache
    pub dfa_size_limit: Option<usize>,
    /// Maximum nesting depth allowed in a regex pattern
    pub nest_limit: Option<u32>,
    /// Whether to compute line/column locations for emitted tokens
    pub track_locations: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            size_limit: None,
            dfa_size_limit: None,
            nest_limit: None,
            track_locations: true,
        }
    }
}

impl TokenizerConfig {
    /// Configuration that skips line/column bookkeeping
    pub fn without_locations() -> Self {
        Self {
            track_locations: false,
            ..Self::default()
        }
    }
}
