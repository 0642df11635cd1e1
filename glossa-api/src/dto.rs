//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use glossa_core::{
    join_with_marker, LanguageRules, Paragraph, ParsedToken, RenderItem, Sentence, Term, TermId,
    TermStatus, BOUNDARY_MARKER,
};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// One token as produced by the external tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDto {
    /// Token text
    pub text: String,
    /// Whether the token is a word
    pub is_word: bool,
    /// Whether the token ends its sentence
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_end_of_sentence: bool,
}

impl TokenDto {
    /// Word token
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: true,
            is_end_of_sentence: false,
        }
    }

    /// Non-word token (space, punctuation)
    pub fn other(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: false,
            is_end_of_sentence: false,
        }
    }

    /// Paragraph marker token
    pub fn paragraph_marker() -> Self {
        Self::other(glossa_core::PARAGRAPH_MARKER).end_of_sentence()
    }

    /// Mark the token as ending its sentence
    pub fn end_of_sentence(mut self) -> Self {
        self.is_end_of_sentence = true;
        self
    }
}

impl From<TokenDto> for ParsedToken {
    fn from(dto: TokenDto) -> Self {
        ParsedToken {
            text: dto.text,
            is_word: dto.is_word,
            is_end_of_sentence: dto.is_end_of_sentence,
        }
    }
}

/// One vocabulary entry
///
/// A multi-token term is given either as `parts` (its tokens, spaces
/// included) or as `text` with the boundary marker between tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermDto {
    /// Store identity
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub id: Option<u64>,
    /// Term text; a multi-token term needs the boundary marker (U+200B)
    /// between its tokens, e.g. `"tengo\u200b \u200bun"`
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// Term tokens, used instead of `text` when non-empty
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub parts: Vec<String>,
    /// Numeric status code (0-5, 98, 99)
    pub status: u8,
}

impl TermDto {
    /// Single-token term
    pub fn new(text: impl Into<String>, status: u8) -> Self {
        Self {
            text: text.into(),
            status,
            ..Self::default()
        }
    }

    /// Multi-token term from its tokens
    pub fn from_parts<S: AsRef<str>>(parts: &[S], status: u8) -> Self {
        Self {
            parts: parts.iter().map(|p| p.as_ref().to_string()).collect(),
            status,
            ..Self::default()
        }
    }

    /// Attach a store identity
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Convert to a catalog term under `language`
    ///
    /// Fails on `text` holding whitespace without boundary markers: such a
    /// term could never match a token.
    pub fn to_term(&self, language: &dyn LanguageRules) -> Result<Term> {
        let status = TermStatus::from_code(self.status)?;
        let text = if self.parts.is_empty() {
            if self.text.contains(char::is_whitespace) && !self.text.contains(BOUNDARY_MARKER) {
                return Err(ApiError::InvalidInput(format!(
                    "term {:?} has spaces but no boundary markers; pass its tokens as `parts`",
                    self.text
                )));
            }
            self.text.clone()
        } else {
            join_with_marker(&self.parts)
        };
        let term = Term::new(language, text, status)?;
        Ok(match self.id {
            Some(id) => term.with_id(TermId(id)),
            None => term,
        })
    }
}

/// A page to render: tokens plus the vocabulary snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageDocument {
    /// Language code or name; the reader's language when absent
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub language: Option<String>,
    /// Page tokens in order
    pub tokens: Vec<TokenDto>,
    /// Vocabulary snapshot
    #[cfg_attr(feature = "serde", serde(default))]
    pub terms: Vec<TermDto>,
}

impl PageDocument {
    /// Document over `tokens` with no vocabulary
    pub fn new(tokens: Vec<TokenDto>) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    /// Set the vocabulary snapshot
    pub fn with_terms(mut self, terms: Vec<TermDto>) -> Self {
        self.terms = terms;
        self
    }

    /// Set the language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Input source for rendering
pub enum Input {
    /// Document already in memory
    Document(PageDocument),
    /// JSON document string
    Json(String),
    /// Path to a JSON document
    File(PathBuf),
    /// JSON document bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader yielding a JSON document
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Document(doc) => f.debug_tuple("Document").field(doc).finish(),
            Input::Json(json) => f.debug_tuple("Json").field(&json.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl From<PageDocument> for Input {
    fn from(doc: PageDocument) -> Self {
        Input::Document(doc)
    }
}

impl Input {
    /// Create input from a document
    pub fn from_document(doc: PageDocument) -> Self {
        Input::Document(doc)
    }

    /// Create input from a JSON string
    pub fn from_json(json: impl Into<String>) -> Self {
        Input::Json(json.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the page document from the input
    pub fn read_document(self) -> Result<PageDocument> {
        let json = match self {
            Input::Document(doc) => return Ok(doc),
            Input::Json(json) => json,
            Input::File(path) => fs::read_to_string(&path)?,
            Input::Bytes(bytes) => String::from_utf8(bytes)?,
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                buffer
            }
        };
        parse_document(&json)
    }
}

#[cfg(feature = "serde")]
fn parse_document(json: &str) -> Result<PageDocument> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(not(feature = "serde"))]
fn parse_document(_json: &str) -> Result<PageDocument> {
    Err(ApiError::InvalidInput(
        "JSON input requires the `serde` feature".to_string(),
    ))
}

/// One rendered span
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderItemDto {
    /// Position of the first token
    pub start: usize,
    /// Tokens spanned
    pub length: usize,
    /// Full span text
    pub text: String,
    /// Visible part of the span
    pub display_text: String,
    /// Tokens visible
    pub display_count: usize,
    /// Whether the span is a word or term match
    pub is_word: bool,
    /// Whether a longer span to the left hides part of this one
    pub is_overlapped: bool,
    /// Lowercase key of the bound term
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub term_key: Option<String>,
    /// Store identity of the bound term
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub term_id: Option<u64>,
    /// Status code of the bound term
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub status: Option<u8>,
}

impl From<&RenderItem> for RenderItemDto {
    fn from(item: &RenderItem) -> Self {
        Self {
            start: item.start,
            length: item.length,
            text: item.full_text.clone(),
            display_text: item.display_text.clone(),
            display_count: item.display_count,
            is_word: item.is_word,
            is_overlapped: item.is_overlapped(),
            term_key: item.term.as_ref().map(|t| t.key.clone()),
            term_id: item.term.as_ref().and_then(|t| t.id).map(|id| id.0),
            status: item.term.as_ref().map(|t| t.status.code()),
        }
    }
}

/// Items of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceDto {
    /// Sentence index
    pub index: usize,
    /// Items in order
    pub items: Vec<RenderItemDto>,
}

impl From<&Sentence> for SentenceDto {
    fn from(sentence: &Sentence) -> Self {
        Self {
            index: sentence.index,
            items: sentence.items.iter().map(RenderItemDto::from).collect(),
        }
    }
}

/// Sentences of one paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphDto {
    /// Paragraph index
    pub index: usize,
    /// Sentences in order
    pub sentences: Vec<SentenceDto>,
}

impl From<&Paragraph> for ParagraphDto {
    fn from(paragraph: &Paragraph) -> Self {
        Self {
            index: paragraph.index,
            sentences: paragraph.sentences.iter().map(SentenceDto::from).collect(),
        }
    }
}

/// Placeholder term the caller may persist
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderDto {
    /// Lowercase key
    pub key: String,
    /// Text as last seen on the page
    pub text: String,
}

impl From<&Term> for PlaceholderDto {
    fn from(term: &Term) -> Self {
        Self {
            key: term.key.clone(),
            text: term.text.clone(),
        }
    }
}

/// Rendering metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Language code used
    pub language: String,
    /// Resolution scale ("page" or "sentence")
    pub granularity: String,
    /// Whether multi-token terms were found through the index
    pub indexed: bool,
    /// Tokens in the page
    pub token_count: usize,
    /// Rendered items, paragraph markers excluded
    pub item_count: usize,
    /// Word items
    pub word_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Rendering output
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Paragraphs in order
    pub paragraphs: Vec<ParagraphDto>,
    /// Placeholder terms created for unknown words
    pub placeholders: Vec<PlaceholderDto>,
    /// Rendering metadata
    pub metadata: Metadata,
}

impl Output {
    /// All items in order
    pub fn items(&self) -> impl Iterator<Item = &RenderItemDto> + '_ {
        self.paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter())
            .flat_map(|s| s.items.iter())
    }

    /// Visible text of every item, in order
    pub fn display_texts(&self) -> Vec<&str> {
        self.items().map(|i| i.display_text.as_str()).collect()
    }
}
