//! Group resolved items into paragraphs and sentences

use std::mem;

use crate::resolver::RenderItem;
use crate::token::Token;

/// Consecutive items sharing one sentence index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Sentence index of the tokens
    pub index: usize,
    /// Items in position order
    pub items: Vec<RenderItem>,
}

/// Sentences between two paragraph markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Ordinal of the paragraph in the output
    pub index: usize,
    /// Sentences in position order
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    fn from_items(index: usize, items: Vec<RenderItem>) -> Self {
        let mut sentences: Vec<Sentence> = Vec::new();
        for item in items {
            match sentences.last_mut() {
                Some(s) if s.index == item.sentence_index => s.items.push(item),
                _ => sentences.push(Sentence {
                    index: item.sentence_index,
                    items: vec![item],
                }),
            }
        }
        Self { index, sentences }
    }

    /// All items of the paragraph, in position order
    pub fn items(&self) -> impl Iterator<Item = &RenderItem> + '_ {
        self.sentences.iter().flat_map(|s| s.items.iter())
    }

    /// Whether the paragraph has no items (two markers in a row)
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Split position-ordered `items` over `tokens` into paragraphs
///
/// Every paragraph marker closes the current paragraph, even an empty one,
/// and is itself dropped. Items after the last marker form a final paragraph
/// only if there are any.
pub fn assemble(tokens: &[Token], items: Vec<RenderItem>) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for item in items {
        let is_marker = item.length == 1
            && tokens
                .get(item.start)
                .is_some_and(Token::is_paragraph_marker);
        if is_marker {
            paragraphs.push(Paragraph::from_items(paragraphs.len(), mem::take(&mut current)));
        } else {
            current.push(item);
        }
    }

    if !current.is_empty() {
        paragraphs.push(Paragraph::from_items(paragraphs.len(), current));
    }

    paragraphs
}
