//! A tiny JSON syntax highlighter built on the tokenizer.

use retokenize::{Pattern, PatternError, TokenDef, Tokenizer};

/// Highlight classes for JSON tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Key,
    String,
    Number,
    Literal,
    Punct,
    Space,
}

impl Class {
    fn css(self) -> &'static str {
        match self {
            Class::Key => "key",
            Class::String => "str",
            Class::Number => "num",
            Class::Literal => "lit",
            Class::Punct => "punct",
            Class::Space => "ws",
        }
    }
}

pub fn json_tokenizer() -> Result<Tokenizer<Class>, PatternError> {
    Tokenizer::new(vec![
        // A key is a string followed by a colon; longer than the bare string
        TokenDef::new(Class::Key, Pattern::regex(r#""(?:[^"\\]|\\.)*"\s*:"#)),
        TokenDef::new(Class::String, Pattern::regex(r#""(?:[^"\\]|\\.)*""#)),
        TokenDef::new(Class::Number, Pattern::regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")),
        TokenDef::new(Class::Literal, Pattern::regex(r"true|false|null")),
        TokenDef::new(Class::Punct, Pattern::regex(r"[{}\[\],]")),
        TokenDef::new(Class::Space, Pattern::regex(r"\s+")),
    ])
}

/// Wrap every token in a `<class>` tag; unmatched characters become `<err>`
pub fn highlight(tokenizer: &Tokenizer<Class>, source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for token in tokenizer.tokenize(source) {
        match token.tag() {
            Some(Class::Space) => out.push_str(token.text),
            Some(class) => {
                out.push_str(&format!("<{0}>{1}</{0}>", class.css(), token.text));
            }
            None => out.push_str(&format!("<err>{}</err>", token.text)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_highlight_object() {
        let tokenizer = json_tokenizer().unwrap();
        let html = highlight(&tokenizer, r#"{"a": [1, -2.5e3, true], "b": null}"#);

        assert_eq!(
            html,
            concat!(
                "<punct>{</punct>",
                r#"<key>"a":</key> "#,
                "<punct>[</punct><num>1</num><punct>,</punct> <num>-2.5e3</num><punct>,</punct> <lit>true</lit><punct>]</punct>",
                "<punct>,</punct> ",
                r#"<key>"b":</key> "#,
                "<lit>null</lit><punct>}</punct>",
            )
        );
    }

    #[test]
    fn test_highlight_marks_invalid_characters() {
        let tokenizer = json_tokenizer().unwrap();
        assert_eq!(highlight(&tokenizer, "[1;2]"), "<punct>[</punct><num>1</num><err>;</err><num>2</num><punct>]</punct>");
    }

    #[test]
    fn test_escaped_quotes_stay_inside_strings() {
        let tokenizer = json_tokenizer().unwrap();
        let texts: Vec<_> = tokenizer
            .tokenize(r#"["say \"hi\""]"#)
            .map(|t| (t.tag().copied(), t.text))
            .collect();

        assert_eq!(
            texts,
            vec![
                (Some(Class::Punct), "["),
                (Some(Class::String), r#""say \"hi\"""#),
                (Some(Class::Punct), "]"),
            ]
        );
    }
}
