//! Errors raised while building a tokenizer.
//!
//! Scanning itself cannot fail: every position of the source produces
//! either a matched token or a fallback token. The only failures happen
//! up front, when patterns are normalized into matchers.

use thiserror::Error;

/// An error raised while normalizing token type patterns.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A regular expression could not be compiled.
    #[error("failed to compile pattern #{index} `{pattern}`: {error}")]
    Compile {
        /// Position of the offending definition in the input list
        index: usize,
        /// The pattern source as supplied
        pattern: String,
        /// The underlying compiler error
        #[source]
        error: regex::Error,
    },
    /// A flag string contained a character that is not a known flag.
    #[error("unknown pattern flag `{flag}`")]
    UnknownFlag {
        /// The unrecognized flag character
        flag: char,
    },
}

impl PatternError {
    /// Index of the definition that failed, if the error concerns one.
    pub fn index(&self) -> Option<usize> {
        match self {
            PatternError::Compile { index, .. } => Some(*index),
            PatternError::UnknownFlag { .. } => None,
        }
    }
}

/// Convenience alias used by constructors in this crate.
pub type Result<T, E = PatternError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_message() {
        let error = regex::Regex::new("(").unwrap_err();
        let err = PatternError::Compile {
            index: 2,
            pattern: "(".to_string(),
            error,
        };

        assert_eq!(err.index(), Some(2));
        assert!(err.to_string().starts_with("failed to compile pattern #2 `(`"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_flag_message() {
        let err = PatternError::UnknownFlag { flag: 'q' };
        assert_eq!(err.to_string(), "unknown pattern flag `q`");
        assert_eq!(err.index(), None);
    }
}
