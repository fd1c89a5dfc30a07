use std::fmt;
use std::ops::Range;

use crate::matcher::{MatchInfo, Matcher};
use crate::pattern::Pattern;

/// Represents a token's location in the source code.
///
/// Line and column numbers are 1-based; the column counts characters, not
/// bytes. The offset is the 0-based byte offset from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// The 1-based line number in the source
    pub line: usize,
    /// The 1-based column number in the source
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A caller-supplied token type: an opaque tag plus the pattern recognizing it.
///
/// The tag is never inspected by the tokenizer; it is handed back on every
/// token this definition produces.
#[derive(Debug, Clone)]
pub struct TokenDef<T> {
    /// Caller metadata attached to produced tokens
    pub tag: T,
    /// What a token of this type looks like
    pub pattern: Pattern,
}

impl<T> TokenDef<T> {
    /// Create a definition from a tag and anything convertible into a [`Pattern`]
    pub fn new(tag: T, pattern: impl Into<Pattern>) -> Self {
        Self {
            tag,
            pattern: pattern.into(),
        }
    }
}

impl<T, P: Into<Pattern>> From<(T, P)> for TokenDef<T> {
    fn from((tag, pattern): (T, P)) -> Self {
        Self::new(tag, pattern)
    }
}

/// A token definition after its pattern has been normalized into a matcher
#[derive(Debug, Clone)]
pub struct TokenType<T> {
    tag: T,
    pattern: Pattern,
    matcher: Matcher,
    index: usize,
}

impl<T> TokenType<T> {
    pub(crate) fn new(def: TokenDef<T>, matcher: Matcher, index: usize) -> Self {
        Self {
            tag: def.tag,
            pattern: def.pattern,
            matcher,
            index,
        }
    }

    /// The caller-supplied tag
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// The pattern as it was supplied
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The matcher the pattern was normalized into
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Position of this type in the definition list; lower wins ties
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A token produced by a scanning session.
///
/// Matched tokens carry the [`TokenType`] that won at their position and
/// its [`MatchInfo`]. Fallback tokens carry neither and cover exactly one
/// character.
#[derive(Debug)]
pub struct Token<'t, 's, T> {
    /// The winning token type, `None` for a fallback token
    pub ty: Option<&'t TokenType<T>>,
    /// Match metadata, `None` for a fallback token
    pub matched: Option<MatchInfo>,
    /// Byte offset of the token in the source
    pub index: usize,
    /// The exact source text consumed
    pub text: &'s str,
    /// Byte length of `text`, always at least 1
    pub length: usize,
    /// Line and column of the token start
    pub location: Location,
    source: &'s str,
}

impl<'t, 's, T> Token<'t, 's, T> {
    pub(crate) fn matched(
        ty: &'t TokenType<T>,
        matched: MatchInfo,
        source: &'s str,
        location: Location,
    ) -> Self {
        let span = matched.span();
        Self {
            ty: Some(ty),
            index: span.start,
            text: &source[span.clone()],
            length: span.len(),
            matched: Some(matched),
            location,
            source,
        }
    }

    pub(crate) fn fallback(index: usize, ch: char, source: &'s str, location: Location) -> Self {
        let length = ch.len_utf8();
        Self {
            ty: None,
            matched: None,
            index,
            text: &source[index..index + length],
            length,
            location,
            source,
        }
    }

    /// The tag of the winning token type
    pub fn tag(&self) -> Option<&'t T> {
        self.ty.map(TokenType::tag)
    }

    /// The pattern of the winning token type
    pub fn pattern(&self) -> Option<&'t Pattern> {
        self.ty.map(TokenType::pattern)
    }

    /// The matcher that produced this token
    pub fn matcher(&self) -> Option<&'t Matcher> {
        self.ty.map(TokenType::matcher)
    }

    /// Whether no token type matched here
    pub fn is_fallback(&self) -> bool {
        self.ty.is_none()
    }

    /// Byte range of the token in the source
    pub fn span(&self) -> Range<usize> {
        self.index..self.index + self.length
    }

    /// Number of characters in `text`
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Text of capture group `i`; group 0 is the whole token
    pub fn group(&self, i: usize) -> Option<&'s str> {
        let span = self.matched.as_ref()?.group_span(i)?;
        self.source.get(span)
    }

    /// Text of a named capture group
    pub fn name(&self, name: &str) -> Option<&'s str> {
        let i = self.matcher()?.group_index(name)?;
        self.group(i)
    }

    /// Detach the token from the tokenizer and source
    pub fn into_owned(self) -> OwnedToken<T>
    where
        T: Clone,
    {
        OwnedToken {
            tag: self.tag().cloned(),
            pattern: self.pattern().cloned(),
            matched: self.matched,
            index: self.index,
            text: self.text.to_string(),
            length: self.length,
            location: self.location,
        }
    }
}

impl<T> Clone for Token<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            ty: self.ty,
            matched: self.matched.clone(),
            index: self.index,
            text: self.text,
            length: self.length,
            location: self.location,
            source: self.source,
        }
    }
}

impl<T> fmt::Display for Token<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pattern() {
            Some(pattern) => write!(f, "{:?} @ {} ({})", self.text, self.location, pattern),
            None => write!(f, "{:?} @ {} (unmatched)", self.text, self.location),
        }
    }
}

/// A token that owns its tag and text
#[derive(Debug, Clone)]
pub struct OwnedToken<T> {
    /// Tag of the winning token type, `None` for a fallback token
    pub tag: Option<T>,
    /// Pattern of the winning token type, `None` for a fallback token
    pub pattern: Option<Pattern>,
    /// Match metadata, `None` for a fallback token
    pub matched: Option<MatchInfo>,
    /// Byte offset of the token in the source
    pub index: usize,
    /// The exact source text consumed
    pub text: String,
    /// Byte length of `text`
    pub length: usize,
    /// Line and column of the token start
    pub location: Location,
}

impl<T> OwnedToken<T> {
    /// Whether no token type matched here
    pub fn is_fallback(&self) -> bool {
        self.tag.is_none()
    }
}
