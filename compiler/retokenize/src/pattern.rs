//! Pattern descriptions accepted by the tokenizer.
//!
//! A pattern is either a literal string, matched verbatim, or a regular
//! expression. Regular expressions may be given as source text plus
//! [`PatternFlags`], or as an already compiled [`Regex`] whose flags are
//! kept exactly as they were compiled.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use regex::Regex;

use crate::error::PatternError;

bitflags! {
    /// Flags applied when compiling a [`Pattern::Regex`].
    ///
    /// Parses from a flag string such as `"im"`. The `g` flag is accepted
    /// and ignored since every matcher already searches incrementally.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u8 {
        /// `i`: case-insensitive matching
        const CASE_INSENSITIVE = 1 << 0;
        /// `m`: `^` and `$` match at line boundaries
        const MULTI_LINE = 1 << 1;
        /// `s`: `.` also matches `\n`
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        /// `x`: whitespace and `#` comments in the pattern are ignored
        const IGNORE_WHITESPACE = 1 << 3;
        /// `U`: swap the meaning of greedy and lazy repetition
        const SWAP_GREED = 1 << 4;
        /// `R`: `\r\n` counts as a line terminator in multi-line mode
        const CRLF = 1 << 5;
        /// `a`: disable Unicode-aware character classes
        const NO_UNICODE = 1 << 6;
    }
}

impl PatternFlags {
    fn from_flag(flag: char) -> Result<Self, PatternError> {
        match flag {
            'i' => Ok(Self::CASE_INSENSITIVE),
            'm' => Ok(Self::MULTI_LINE),
            's' => Ok(Self::DOT_MATCHES_NEW_LINE),
            'x' => Ok(Self::IGNORE_WHITESPACE),
            'U' => Ok(Self::SWAP_GREED),
            'R' => Ok(Self::CRLF),
            'a' => Ok(Self::NO_UNICODE),
            'g' => Ok(Self::empty()),
            _ => Err(PatternError::UnknownFlag { flag }),
        }
    }

    fn to_flag(self) -> Option<char> {
        const FLAGS: [(PatternFlags, char); 7] = [
            (PatternFlags::CASE_INSENSITIVE, 'i'),
            (PatternFlags::MULTI_LINE, 'm'),
            (PatternFlags::DOT_MATCHES_NEW_LINE, 's'),
            (PatternFlags::IGNORE_WHITESPACE, 'x'),
            (PatternFlags::SWAP_GREED, 'U'),
            (PatternFlags::CRLF, 'R'),
            (PatternFlags::NO_UNICODE, 'a'),
        ];
        FLAGS.iter().find(|(f, _)| *f == self).map(|(_, c)| *c)
    }
}

impl FromStr for PatternFlags {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .try_fold(Self::empty(), |acc, c| Ok(acc | Self::from_flag(c)?))
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.iter() {
            if let Some(c) = flag.to_flag() {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// The pattern half of a token type definition
#[derive(Debug, Clone)]
pub enum Pattern {
    /// A string matched verbatim
    Literal(String),
    /// Regular expression source compiled with the given flags
    Regex {
        /// The expression source
        source: String,
        /// Compilation flags
        flags: PatternFlags,
    },
    /// An already compiled regular expression
    Compiled(Regex),
}

impl Pattern {
    /// A literal pattern
    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    /// A regular expression pattern with no flags
    pub fn regex(source: impl Into<String>) -> Self {
        Pattern::Regex {
            source: source.into(),
            flags: PatternFlags::empty(),
        }
    }

    /// A regular expression pattern with flags parsed from a flag string such as `"im"`
    pub fn regex_with_flags(source: impl Into<String>, flags: &str) -> Result<Self, PatternError> {
        Ok(Pattern::Regex {
            source: source.into(),
            flags: flags.parse()?,
        })
    }

    /// The pattern text: the literal itself or the regex source
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(text) => text,
            Pattern::Regex { source, .. } => source,
            Pattern::Compiled(regex) => regex.as_str(),
        }
    }

    /// Whether this pattern is matched verbatim
    pub fn is_literal(&self) -> bool {
        matches!(self, Pattern::Literal(_))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(text) => write!(f, "{:?}", text),
            Pattern::Regex { source, flags } => write!(f, "/{}/{}", source, flags),
            Pattern::Compiled(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::literal(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::Literal(text)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::Compiled(regex)
    }
}
