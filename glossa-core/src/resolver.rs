//! Overlap resolution: choose exactly one candidate per token position
//!
//! Candidates are visited leftmost first, longest first among equal starts.
//! Each claims the positions of its span nobody owns yet. Because every
//! earlier candidate starts at or before the current one, the positions a
//! candidate ends up owning are always a suffix of its span; the tokens of
//! that suffix are its display text, the hidden prefix belongs to a
//! higher-priority neighbour.
//!
//! ```text
//! tokens     A  B  C  D  E  F  G  H  I
//! "B C"         ^^^^
//! "C D E"          ^^^^^^^              owns D E
//! "E F G H I"               ^^^^^^^^^^^^ owns F G H I
//! ```

use std::cmp::Reverse;
use std::sync::Arc;

use crate::candidate::Candidate;
use crate::error::{CoreError, Result};
use crate::term::Term;
use crate::token::{concat_text, Token};

/// One non-overlapping unit of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    /// Index of the first token of the declared span
    pub start: usize,
    /// Declared span length
    pub length: usize,
    /// Text of the whole declared span
    pub full_text: String,
    /// Text of the positions this item actually owns
    pub display_text: String,
    /// Number of owned (visible) tokens
    pub display_count: usize,
    /// Bound term; `None` for non-words and, before synthesis, unknown words
    pub term: Option<Arc<Term>>,
    /// Whether the item is a word or a term match
    pub is_word: bool,
    /// Sentence of the first spanned token
    pub sentence_index: usize,
    /// Paragraph of the first spanned token
    pub paragraph_index: usize,
}

impl RenderItem {
    /// One past the last spanned position
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// First position the item owns
    pub fn display_start(&self) -> usize {
        self.end() - self.display_count
    }

    /// Whether part of the span is hidden by an earlier item
    pub fn is_overlapped(&self) -> bool {
        self.display_count < self.length
    }

    /// Whether this word item has no term yet
    pub fn needs_placeholder(&self) -> bool {
        self.is_word && self.term.is_none()
    }
}

/// Resolve `candidates` over `tokens` into a partition of the positions
///
/// The result is ordered by position. Fails if a candidate is empty or runs
/// past the last token, or if some position is covered by no candidate.
pub fn resolve(candidates: &[Candidate], tokens: &[Token]) -> Result<Vec<RenderItem>> {
    let token_count = tokens.len();
    for c in candidates {
        if c.length == 0 {
            return Err(CoreError::EmptyCandidate(c.start));
        }
        if c.end() > token_count {
            return Err(CoreError::CandidateOutOfRange {
                start: c.start,
                end: c.end(),
                token_count,
            });
        }
    }

    // Candidates are referred to by their index in `candidates`
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&i| (candidates[i].start, Reverse(candidates[i].length)));

    let mut owner: Vec<Option<usize>> = vec![None; token_count];
    for &i in &order {
        let c = &candidates[i];
        let mut claimed = 0;
        for slot in &mut owner[c.start..c.end()] {
            if slot.is_none() {
                *slot = Some(i);
                claimed += 1;
            }
        }
        if claimed == 0 {
            tracing::trace!(
                start = c.start,
                length = c.length,
                text = %c.matched_text,
                "candidate fully shadowed"
            );
        }
    }

    let mut items = Vec::new();
    let mut pos = 0;
    while pos < token_count {
        let Some(i) = owner[pos] else {
            return Err(CoreError::UncoveredPosition(pos));
        };
        let c = &candidates[i];
        let run_end = c.end();
        debug_assert!(owner[pos..run_end].iter().all(|o| *o == Some(i)));

        let first = &tokens[c.start];
        items.push(RenderItem {
            start: c.start,
            length: c.length,
            full_text: concat_text(tokens, c.start, run_end),
            display_text: concat_text(tokens, pos, run_end),
            display_count: run_end - pos,
            term: c.term.clone(),
            is_word: c.is_word,
            sentence_index: first.sentence_index,
            paragraph_index: first.paragraph_index,
        });
        pos = run_end;
    }

    Ok(items)
}
