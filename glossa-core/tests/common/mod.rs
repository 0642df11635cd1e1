//! Fixture tokenizer and catalog helpers shared by the integration tests

#![allow(dead_code)]

use glossa_core::{
    join_with_marker, LanguageRules, ParsedToken, RenderItem, Term, TermCatalog, TermStatus,
    TokenStream, PARAGRAPH_MARKER,
};

/// Split text into word runs, whitespace runs and single punctuation marks
///
/// `.`, `!` and `?` end a sentence; `¶` is a paragraph marker.
pub fn parse(text: &str) -> Vec<ParsedToken> {
    #[derive(PartialEq)]
    enum Kind {
        Word,
        Space,
    }

    let mut out = Vec::new();
    let mut run = String::new();
    let mut run_kind = None;

    let flush = |run: &mut String, kind: &mut Option<Kind>, out: &mut Vec<ParsedToken>| {
        if let Some(k) = kind.take() {
            out.push(ParsedToken::new(std::mem::take(run), k == Kind::Word));
        }
    };

    for ch in text.chars() {
        let kind = if ch.is_alphanumeric() || ch == '\'' {
            Some(Kind::Word)
        } else if ch.is_whitespace() {
            Some(Kind::Space)
        } else {
            None
        };

        match kind {
            Some(k) => {
                if run_kind.as_ref() != Some(&k) {
                    flush(&mut run, &mut run_kind, &mut out);
                    run_kind = Some(k);
                }
                run.push(ch);
            }
            None => {
                flush(&mut run, &mut run_kind, &mut out);
                let s = ch.to_string();
                if s == PARAGRAPH_MARKER {
                    out.push(ParsedToken::paragraph_marker());
                } else if matches!(ch, '.' | '!' | '?') {
                    out.push(ParsedToken::new(s, false).end_of_sentence());
                } else {
                    out.push(ParsedToken::new(s, false));
                }
            }
        }
    }
    flush(&mut run, &mut run_kind, &mut out);
    out
}

/// Tokenize text into a numbered stream
pub fn stream(text: &str) -> TokenStream {
    TokenStream::from_parsed(parse(text))
}

/// Word tokens from a list of pre-split texts (spaces are non-words)
pub fn stream_of(texts: &[&str]) -> TokenStream {
    TokenStream::from_parsed(
        texts
            .iter()
            .map(|t| ParsedToken::new(*t, !t.trim().is_empty())),
    )
}

/// A term whose text is tokenized like the reading text
pub fn term<L: LanguageRules>(language: &L, text: &str, status: TermStatus) -> Term {
    let parts: Vec<String> = parse(text).into_iter().map(|t| t.text).collect();
    Term::new(language, join_with_marker(&parts), status).expect("fixture term")
}

/// Catalog of learning-level-1 terms
pub fn catalog<L: LanguageRules>(language: &L, texts: &[&str]) -> TermCatalog {
    texts
        .iter()
        .map(|t| term(language, t, TermStatus::Learning(1)))
        .collect()
}

/// `[text-length]` rendering of items, markers removed
pub fn full(items: &[RenderItem]) -> String {
    items
        .iter()
        .map(|i| format!("[{}-{}]", i.full_text, i.length))
        .collect()
}

/// `[display-length]` rendering of items
pub fn displayed(items: &[RenderItem]) -> String {
    items
        .iter()
        .map(|i| format!("[{}-{}]", i.display_text, i.length))
        .collect()
}
