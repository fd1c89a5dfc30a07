//! Matcher normalization
//!
//! Every pattern is turned into a [`Matcher`] once, when the tokenizer is
//! built. A matcher answers one question: where is the next match at or
//! after a given byte offset, and how long is it. Both variants search
//! forward from the requested offset without rescanning the source from
//! its start.

use std::ops::Range;

use memchr::memmem::Finder;
use regex::{CaptureLocations, Regex, RegexBuilder};

use crate::config::TokenizerConfig;
use crate::pattern::{Pattern, PatternFlags};

/// A normalized, incrementally searchable pattern
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Verbatim substring search
    Literal(LiteralMatcher),
    /// Regular expression search
    Pattern(CompiledPatternMatcher),
}

/// Searches for the next occurrence of a fixed string
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    finder: Finder<'static>,
}

/// Searches for the next match of a compiled regular expression
#[derive(Debug, Clone)]
pub struct CompiledPatternMatcher {
    regex: Regex,
}

/// Metadata about a single match: its span and, for regular expressions,
/// the spans of its capture groups.
#[derive(Debug, Clone)]
pub struct MatchInfo {
    span: Range<usize>,
    groups: Option<CaptureLocations>,
}

impl MatchInfo {
    /// Byte range of the whole match in the source
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Byte offset where the match starts
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte length of the match
    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    /// Whether the match is empty
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Number of groups, including the implicit whole-match group 0
    pub fn group_count(&self) -> usize {
        self.groups.as_ref().map_or(1, CaptureLocations::len)
    }

    /// Byte range of capture group `i`, if it participated in the match
    ///
    /// Group 0 is always the whole match.
    pub fn group_span(&self, i: usize) -> Option<Range<usize>> {
        match (i, &self.groups) {
            (0, _) => Some(self.span()),
            (_, Some(locs)) => locs.get(i).map(|(start, end)| start..end),
            (_, None) => None,
        }
    }
}

impl Matcher {
    /// Normalize a pattern into a matcher
    pub fn new(pattern: &Pattern, config: &TokenizerConfig) -> Result<Self, regex::Error> {
        let matcher = match pattern {
            Pattern::Literal(text) => Matcher::Literal(LiteralMatcher::new(text)),
            Pattern::Regex { source, flags } => {
                Matcher::Pattern(CompiledPatternMatcher::compile(source, *flags, config)?)
            }
            Pattern::Compiled(regex) => Matcher::Pattern(CompiledPatternMatcher::from_regex(regex.clone())),
        };
        Ok(matcher)
    }

    /// Find the leftmost match that starts at or after `start`
    pub fn find_at(&self, haystack: &str, start: usize) -> Option<MatchInfo> {
        match self {
            Matcher::Literal(m) => m.find_at(haystack, start),
            Matcher::Pattern(m) => m.find_at(haystack, start),
        }
    }

    /// Index of the named capture group, if the matcher has one by that name
    pub fn group_index(&self, name: &str) -> Option<usize> {
        match self {
            Matcher::Literal(_) => None,
            Matcher::Pattern(m) => m.group_index(name),
        }
    }
}

impl LiteralMatcher {
    /// Create a matcher for the given literal text
    pub fn new(text: &str) -> Self {
        Self {
            finder: Finder::new(text).into_owned(),
        }
    }

    /// The literal text matched by this matcher
    pub fn needle(&self) -> &[u8] {
        self.finder.needle()
    }

    /// Find the next occurrence of the literal at or after `start`
    pub fn find_at(&self, haystack: &str, start: usize) -> Option<MatchInfo> {
        let rest = haystack.as_bytes().get(start..)?;
        let found = start + self.finder.find(rest)?;
        Some(MatchInfo {
            span: found..found + self.finder.needle().len(),
            groups: None,
        })
    }
}

impl CompiledPatternMatcher {
    /// Compile a pattern source with the given flags and limits
    pub fn compile(
        source: &str,
        flags: PatternFlags,
        config: &TokenizerConfig,
    ) -> Result<Self, regex::Error> {
        let mut builder = RegexBuilder::new(source);
        builder
            .case_insensitive(flags.contains(PatternFlags::CASE_INSENSITIVE))
            .multi_line(flags.contains(PatternFlags::MULTI_LINE))
            .dot_matches_new_line(flags.contains(PatternFlags::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(flags.contains(PatternFlags::IGNORE_WHITESPACE))
            .swap_greed(flags.contains(PatternFlags::SWAP_GREED))
            .crlf(flags.contains(PatternFlags::CRLF))
            .unicode(!flags.contains(PatternFlags::NO_UNICODE));
        if let Some(limit) = config.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = config.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        if let Some(limit) = config.nest_limit {
            builder.nest_limit(limit);
        }
        Ok(Self::from_regex(builder.build()?))
    }

    /// Wrap an already compiled regex, keeping whatever flags it was built with
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// The underlying regex
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Find the leftmost match starting at or after `start`
    ///
    /// Anchors and word boundaries still see the text before `start`.
    pub fn find_at(&self, haystack: &str, start: usize) -> Option<MatchInfo> {
        if start > haystack.len() {
            return None;
        }
        // Capture slots are only worth resolving when there are explicit groups.
        if self.regex.captures_len() == 1 {
            let m = self.regex.find_at(haystack, start)?;
            return Some(MatchInfo {
                span: m.range(),
                groups: None,
            });
        }
        let mut locs = self.regex.capture_locations();
        let m = self.regex.captures_read_at(&mut locs, haystack, start)?;
        Some(MatchInfo {
            span: m.range(),
            groups: Some(locs),
        })
    }

    /// Index of a named capture group
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.regex
            .capture_names()
            .position(|group| group == Some(name))
    }
}
