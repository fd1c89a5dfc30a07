//! Pluggable longest-match tokenizer
//!
//! This crate splits a source string into a contiguous sequence of tokens
//! using an ordered list of caller-supplied token types. Each token type
//! carries an opaque tag and either a literal string or a regular
//! expression.
//!
//! At every position the longest match wins; equal-length matches go to the
//! token type listed first. Characters matched by no token type come out as
//! single-character fallback tokens, so scanning never fails and always
//! covers the whole input.
//!
//! ```
//! use retokenize::{Pattern, TokenDef, Tokenizer};
//!
//! let tokenizer = Tokenizer::new(vec![
//!     TokenDef::new("num", Pattern::regex(r"[0-9]+")),
//!     TokenDef::new("plus", "+"),
//! ])?;
//!
//! let texts: Vec<_> = tokenizer
//!     .tokenize("12+3")
//!     .map(|token| (token.tag().copied(), token.text))
//!     .collect();
//! assert_eq!(texts, [(Some("num"), "12"), (Some("plus"), "+"), (Some("num"), "3")]);
//! # Ok::<(), retokenize::PatternError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod logging;

pub mod config;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod token;
pub mod tokenizer;

// Re-export the main types for convenience
pub use config::TokenizerConfig;
pub use error::PatternError;
pub use matcher::{CompiledPatternMatcher, LiteralMatcher, MatchInfo, Matcher};
pub use pattern::{Pattern, PatternFlags};
pub use token::{Location, OwnedToken, Token, TokenDef, TokenType};
pub use tokenizer::{tokenize, Tokenizer, Tokens};
