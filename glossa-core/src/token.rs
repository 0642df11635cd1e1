//! Token types consumed from the external tokenizer
//!
//! A tokenizer hands over [`ParsedToken`]s (text, word flag, end-of-sentence
//! flag). [`TokenStream::from_parsed`] numbers them into [`Token`]s with a
//! contiguous `order` and the sentence/paragraph they belong to.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Zero-width space placed before, between and after tokens when searching
pub const BOUNDARY_MARKER: char = '\u{200B}';

/// Non-word token that closes a paragraph
pub const PARAGRAPH_MARKER: &str = "¶";

/// Raw tokenizer output for a single token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToken {
    /// Token text, original case
    pub text: String,
    /// Whether the token is a word (as opposed to space/punctuation)
    pub is_word: bool,
    /// Whether the token ends a sentence
    #[serde(default)]
    pub is_end_of_sentence: bool,
}

impl ParsedToken {
    /// Create a parsed token
    pub fn new(text: impl Into<String>, is_word: bool) -> Self {
        Self {
            text: text.into(),
            is_word,
            is_end_of_sentence: false,
        }
    }

    /// Mark this token as the last of its sentence
    pub fn end_of_sentence(mut self) -> Self {
        self.is_end_of_sentence = true;
        self
    }

    /// A paragraph marker token (non-word, ends the sentence)
    pub fn paragraph_marker() -> Self {
        Self::new(PARAGRAPH_MARKER, false).end_of_sentence()
    }
}

/// A numbered token of one input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text, original case
    pub text: String,
    /// Whether the token is a word
    pub is_word: bool,
    /// Position in the input, contiguous from the first token
    pub order: usize,
    /// Sentence the token belongs to
    pub sentence_index: usize,
    /// Paragraph the token belongs to
    pub paragraph_index: usize,
}

impl Token {
    /// Whether this token is a paragraph marker
    pub fn is_paragraph_marker(&self) -> bool {
        !self.is_word && self.text.trim() == PARAGRAPH_MARKER
    }
}

/// Ordered, contiguous tokens of one input (a sentence, a page or a book)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Number parsed tokens, starting at order 0
    ///
    /// Sentence and paragraph counters are incremented after the token that
    /// closes them, so a terminator belongs to the sentence it ends.
    pub fn from_parsed<I>(parsed: I) -> Self
    where
        I: IntoIterator<Item = ParsedToken>,
    {
        let mut sentence_index = 0;
        let mut paragraph_index = 0;

        let tokens = parsed
            .into_iter()
            .enumerate()
            .map(|(order, pt)| {
                let token = Token {
                    is_word: pt.is_word,
                    order,
                    sentence_index,
                    paragraph_index,
                    text: pt.text,
                };
                if pt.is_end_of_sentence {
                    sentence_index += 1;
                }
                if token.is_paragraph_marker() {
                    paragraph_index += 1;
                }
                token
            })
            .collect();

        Self { tokens }
    }

    /// Wrap already-numbered tokens, checking that their order is contiguous
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        validate_contiguous(&tokens)?;
        Ok(Self { tokens })
    }

    /// All tokens
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the stream, returning the tokens
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl AsRef<[Token]> for TokenStream {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}

/// Fail if token `order` values are not contiguous
pub fn validate_contiguous(tokens: &[Token]) -> Result<()> {
    for pair in tokens.windows(2) {
        let (prev, tok) = (&pair[0], &pair[1]);
        if tok.order != prev.order + 1 {
            return Err(CoreError::NonContiguousTokens {
                expected: prev.order + 1,
                found: tok.order,
                text: tok.text.clone(),
            });
        }
    }
    Ok(())
}

/// Split tokens into runs sharing one `sentence_index`
pub fn sentence_slices(tokens: &[Token]) -> Vec<&[Token]> {
    tokens
        .chunk_by(|a, b| a.sentence_index == b.sentence_index)
        .collect()
}

/// Join texts with the boundary marker between them
pub fn join_with_marker<S: AsRef<str>>(parts: &[S]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(BOUNDARY_MARKER);
        }
        out.push_str(part.as_ref());
    }
    out
}

/// Concatenate token texts in `[start, end)` without markers
pub(crate) fn concat_text(tokens: &[Token], start: usize, end: usize) -> String {
    tokens[start..end].iter().map(|t| t.text.as_str()).collect()
}
