//! An INI reader that consumes the token stream and skips trivia.

use std::collections::BTreeMap;

use retokenize::{Pattern, PatternError, TokenDef, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ini {
    Section,
    Entry,
    Comment,
    Newline,
    Blank,
}

/// Sections mapped to their key/value pairs
pub type Document = BTreeMap<String, BTreeMap<String, String>>;

/// Parse an INI document; keys before the first section go under `""`.
///
/// Returns the document plus the line numbers of lines that could not be read.
pub fn parse(source: &str) -> Result<(Document, Vec<usize>), PatternError> {
    let tokenizer = Tokenizer::<Ini>::new(vec![
        TokenDef::new(Ini::Section, Pattern::regex_with_flags(r"^[ \t]*\[(?P<name>[^\]\n]*)\][ \t]*$", "m")?),
        TokenDef::new(
            Ini::Entry,
            Pattern::regex_with_flags(r"^[ \t]*(?P<key>[^=;#\s][^=\n]*?)[ \t]*=[ \t]*(?P<value>[^\n]*?)[ \t]*$", "m")?,
        ),
        TokenDef::new(Ini::Comment, Pattern::regex_with_flags(r"^[ \t]*[;#][^\n]*", "m")?),
        TokenDef::new(Ini::Newline, Pattern::regex(r"\r?\n")),
        TokenDef::new(Ini::Blank, Pattern::regex(r"[ \t]+")),
    ])?;

    let mut doc = Document::new();
    let mut section = String::new();
    let mut bad_lines = Vec::new();

    for token in tokenizer.tokenize(source) {
        match token.tag() {
            Some(Ini::Section) => {
                section = token.name("name").unwrap_or_default().trim().to_string();
                doc.entry(section.clone()).or_default();
            }
            Some(Ini::Entry) => {
                let key = token.name("key").unwrap_or_default().to_string();
                let value = token.name("value").unwrap_or_default().to_string();
                doc.entry(section.clone()).or_default().insert(key, value);
            }
            Some(Ini::Comment | Ini::Newline | Ini::Blank) => {}
            None => {
                if bad_lines.last() != Some(&token.location.line) {
                    bad_lines.push(token.location.line);
                }
            }
        }
    }

    Ok((doc, bad_lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_sections_and_entries() {
        let source = "top = 1\n; comment\n[server]\nhost = example.org\nport=8080\n\n[client]\n  retries = 3  \n";
        let (doc, bad) = parse(source).unwrap();

        assert!(bad.is_empty());
        assert_eq!(doc[""]["top"], "1");
        assert_eq!(doc["server"]["host"], "example.org");
        assert_eq!(doc["server"]["port"], "8080");
        assert_eq!(doc["client"]["retries"], "3");
    }

    #[test]
    fn test_unreadable_lines_are_reported() {
        let source = "[a]\nok = yes\n!!!\nalso = fine\n";
        let (doc, bad) = parse(source).unwrap();

        assert_eq!(bad, vec![3]);
        assert_eq!(doc["a"].len(), 2);
    }
}
