//! Tokenizer engine
//!
//! A [`Tokenizer`] owns the normalized token types. Each call to
//! [`Tokenizer::tokenize`] opens an independent scanning session,
//! [`Tokens`], which holds the only mutable state: a cursor, a per-type
//! cache of the last search result, and the line/column tracker.
//!
//! At each cursor position every token type is consulted in order. A type
//! is a candidate when its next match starts exactly at the cursor. The
//! longest candidate wins, earlier types win ties, and empty matches never
//! win. With no winner, the single character at the cursor becomes a
//! fallback token. The cursor therefore advances on every step.

use std::iter::FusedIterator;
use std::mem;

use crate::config::TokenizerConfig;
use crate::error::{PatternError, Result};
use crate::matcher::{MatchInfo, Matcher};
use crate::token::{Location, OwnedToken, Token, TokenDef, TokenType};

/// A set of token types ready to scan sources
#[derive(Debug, Clone)]
pub struct Tokenizer<T> {
    types: Vec<TokenType<T>>,
    config: TokenizerConfig,
}

impl<T> Tokenizer<T> {
    /// Build a tokenizer with default configuration
    pub fn new<I>(defs: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<TokenDef<T>>,
    {
        Self::with_config(defs, TokenizerConfig::default())
    }

    /// Build a tokenizer with custom configuration
    ///
    /// Definition order is kept: it decides ties between equal-length matches.
    pub fn with_config<I>(defs: I, config: TokenizerConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<TokenDef<T>>,
    {
        let types = defs
            .into_iter()
            .enumerate()
            .map(|(index, def)| -> Result<TokenType<T>> {
                let def = def.into();
                let matcher = Matcher::new(&def.pattern, &config).map_err(|error| {
                    PatternError::Compile {
                        index,
                        pattern: def.pattern.as_str().to_string(),
                        error,
                    }
                })?;
                Ok(TokenType::new(def, matcher, index))
            })
            .collect::<Result<Vec<_>>>()?;

        lex_debug!("Built tokenizer with {} token types", types.len());

        Ok(Self { types, config })
    }

    /// The normalized token types, in definition order
    pub fn token_types(&self) -> &[TokenType<T>] {
        &self.types
    }

    /// The configuration this tokenizer was built with
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Start a new scanning session over `source`
    pub fn tokenize<'t, 's>(&'t self, source: &'s str) -> Tokens<'t, 's, T> {
        Tokens::new(&self.types, source, self.config.track_locations)
    }
}

/// Tokenize `source` in one call, collecting owned tokens
pub fn tokenize<T, I>(source: &str, defs: I) -> Result<Vec<OwnedToken<T>>>
where
    T: Clone,
    I: IntoIterator,
    I::Item: Into<TokenDef<T>>,
{
    let tokenizer = Tokenizer::new(defs)?;
    let tokens = tokenizer.tokenize(source).map(Token::into_owned).collect();
    Ok(tokens)
}

/// The last search result of one token type within a session
#[derive(Debug, Clone)]
enum CachedSearch {
    /// Not searched yet, or the cached match was consumed or passed
    Stale,
    /// Next match at or after the position searched from
    Found(MatchInfo),
    /// No match anywhere after the position searched from
    Exhausted,
}

impl CachedSearch {
    /// Whether this result still answers "next match at or after `offset`"
    fn is_valid_at(&self, offset: usize) -> bool {
        match self {
            CachedSearch::Stale => false,
            CachedSearch::Found(m) => m.start() >= offset,
            CachedSearch::Exhausted => true,
        }
    }

    fn length_at(&self, offset: usize) -> Option<usize> {
        match self {
            CachedSearch::Found(m) if m.start() == offset => Some(m.len()),
            _ => None,
        }
    }
}

/// Tracks line and column as the cursor advances
#[derive(Debug, Clone, Copy)]
struct Position {
    line: usize,
    column: usize,
    after_cr: bool,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            after_cr: false,
        }
    }
}

impl Position {
    /// Advance past `text`, treating `\n`, `\r\n` and lone `\r` as line breaks
    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\n' if self.after_cr => self.after_cr = false,
                '\n' | '\r' => {
                    self.line += 1;
                    self.column = 1;
                    self.after_cr = c == '\r';
                }
                _ => {
                    self.column += 1;
                    self.after_cr = false;
                }
            }
        }
    }

    fn to_location(self, offset: usize) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset,
        }
    }
}

/// A scanning session: a lazy, forward-only sequence of tokens
///
/// Sessions are independent. Once exhausted a session stays exhausted;
/// scan again with a fresh call to [`Tokenizer::tokenize`].
#[derive(Debug)]
pub struct Tokens<'t, 's, T> {
    types: &'t [TokenType<T>],
    source: &'s str,
    cache: Vec<CachedSearch>,
    offset: usize,
    position: Option<Position>,
}

impl<'t, 's, T> Tokens<'t, 's, T> {
    fn new(types: &'t [TokenType<T>], source: &'s str, track_locations: bool) -> Self {
        Self {
            types,
            source,
            cache: vec![CachedSearch::Stale; types.len()],
            offset: 0,
            position: track_locations.then(Position::default),
        }
    }

    /// The source being scanned
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Byte offset of the cursor
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unscanned remainder of the source
    pub fn remainder(&self) -> &'s str {
        &self.source[self.offset..]
    }

    /// Whether the cursor has reached the end of the source
    pub fn is_done(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Get the next token, or `None` once the source is exhausted
    pub fn next_token(&mut self) -> Option<Token<'t, 's, T>> {
        if self.is_done() {
            return None;
        }
        let offset = self.offset;
        let location = match self.position {
            Some(position) => position.to_location(offset),
            None => Location {
                offset,
                ..Location::default()
            },
        };

        let winner = self.longest_match_at(offset).and_then(|index| {
            match mem::replace(&mut self.cache[index], CachedSearch::Stale) {
                CachedSearch::Found(matched) => Some((index, matched)),
                _ => None,
            }
        });

        let token = match winner {
            Some((index, matched)) => {
                let types = self.types;
                let token = Token::matched(&types[index], matched, self.source, location);
                lex_trace!(
                    "Matched token type #{} at {}: {:?}",
                    index,
                    offset,
                    token.text
                );
                token
            }
            None => {
                let ch = self.source[offset..].chars().next()?;
                lex_debug!("No token type matched at {}, emitting {:?}", offset, ch);
                Token::fallback(offset, ch, self.source, location)
            }
        };

        self.offset += token.length;
        if let Some(position) = self.position.as_mut() {
            position.advance(token.text);
        }
        Some(token)
    }

    /// Index of the token type whose match at `offset` is longest
    ///
    /// Refreshes stale cache entries on the way. Only strictly longer
    /// candidates replace the current best, so the earliest type wins ties
    /// and empty matches never win.
    fn longest_match_at(&mut self, offset: usize) -> Option<usize> {
        let mut best = None;
        let mut best_len = 0;

        for (index, ty) in self.types.iter().enumerate() {
            let cached = &mut self.cache[index];
            if !cached.is_valid_at(offset) {
                *cached = match ty.matcher().find_at(self.source, offset) {
                    Some(m) => CachedSearch::Found(m),
                    None => CachedSearch::Exhausted,
                };
                lex_trace!("Searched token type #{} from {}: {:?}", index, offset, cached);
            }
            if let Some(len) = cached.length_at(offset) {
                if len > best_len {
                    best = Some(index);
                    best_len = len;
                }
            }
        }

        best
    }
}

impl<'t, 's, T> Iterator for Tokens<'t, 's, T> {
    type Item = Token<'t, 's, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every token consumes at least one byte.
        let remaining = self.source.len() - self.offset;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<T> FusedIterator for Tokens<'_, '_, T> {}

// Include the test module
#[cfg(test)]
mod tests;
