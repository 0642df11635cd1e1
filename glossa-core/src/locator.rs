//! Case-insensitive multi-token search over a token stream
//!
//! The haystack is the lowered tokens framed by [`BOUNDARY_MARKER`] before,
//! between and after every token:
//!
//! ```text
//! tokens   ["The", " ", "CAT"]
//! haystack "⁞the⁞ ⁞cat⁞"        (⁞ = U+200B)
//! ```
//!
//! A needle is framed the same way, so a match can only begin and end on
//! token boundaries: `"cat"` never matches inside `"concatenate"`. Matches
//! may overlap (`"b⁞ ⁞b"` is found twice in `"b b b"`).

use crate::language::LanguageRules;
use crate::token::{join_with_marker, Token, BOUNDARY_MARKER};

/// One occurrence of a needle in the token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    /// Matched tokens in their original case, joined by the boundary marker
    pub text: String,
    /// Index of the first matched token
    pub start: usize,
    /// Number of tokens matched
    pub token_count: usize,
}

/// Lowered tokens framed by boundary markers
#[derive(Debug, Clone)]
pub struct Haystack {
    lowered: Vec<String>,
    text: String,
    boundaries: Vec<usize>,
}

impl Haystack {
    /// Frame already-lowered tokens
    pub fn new(lowered: Vec<String>) -> Self {
        let mut text = String::with_capacity(
            lowered.iter().map(String::len).sum::<usize>()
                + (lowered.len() + 1) * BOUNDARY_MARKER.len_utf8(),
        );
        let mut boundaries = Vec::with_capacity(lowered.len() + 1);
        boundaries.push(0);
        text.push(BOUNDARY_MARKER);
        for tok in &lowered {
            text.push_str(tok);
            boundaries.push(text.len());
            text.push(BOUNDARY_MARKER);
        }

        Self {
            lowered,
            text,
            boundaries,
        }
    }

    /// Lower `tokens` with the language's rule and frame them
    pub fn from_tokens<L>(language: &L, tokens: &[Token]) -> Self
    where
        L: LanguageRules + ?Sized,
    {
        Self::new(tokens.iter().map(|t| language.lowercase(&t.text)).collect())
    }

    /// Framed text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lowered token texts, in stream order
    pub fn lowered_tokens(&self) -> &[String] {
        &self.lowered
    }

    /// Number of tokens
    pub fn token_count(&self) -> usize {
        self.lowered.len()
    }

    /// Token index of a byte offset: the number of markers before it
    pub fn token_index(&self, byte_offset: usize) -> usize {
        self.boundaries.partition_point(|&b| b < byte_offset)
    }

    /// Whether a marker at `byte_offset` separates two tokens
    ///
    /// A marker inside a token's own text is not a boundary.
    pub fn is_boundary(&self, byte_offset: usize) -> bool {
        self.boundaries.binary_search(&byte_offset).is_ok()
    }

    /// Start token of a framed match spanning `[start, end)` bytes
    ///
    /// `None` unless both the leading and the trailing marker of the match
    /// are token boundaries.
    pub fn match_start(&self, start: usize, end: usize) -> Option<usize> {
        let trailing = end.checked_sub(BOUNDARY_MARKER.len_utf8())?;
        if self.is_boundary(start) && self.is_boundary(trailing) {
            Some(self.token_index(start))
        } else {
            None
        }
    }

    /// Start indexes of every (possibly overlapping) occurrence of a lowered needle
    pub fn find_all(&self, needle_lc: &str) -> Vec<usize> {
        if needle_lc.trim_matches(BOUNDARY_MARKER).is_empty() {
            return Vec::new();
        }

        let mut pattern = String::with_capacity(needle_lc.len() + 2 * BOUNDARY_MARKER.len_utf8());
        pattern.push(BOUNDARY_MARKER);
        pattern.push_str(needle_lc);
        pattern.push(BOUNDARY_MARKER);

        let token_count = needle_lc.matches(BOUNDARY_MARKER).count() + 1;
        let mut starts = Vec::new();
        let mut from = 0;

        while let Some(offset) = self.text[from..].find(&pattern) {
            let at = from + offset;
            match self.match_start(at, at + pattern.len()) {
                Some(start) if start + token_count <= self.lowered.len() => starts.push(start),
                _ => tracing::trace!(offset = at, "match not on token boundaries"),
            }
            // Step past the leading marker only, so overlapping hits are found
            from = at + BOUNDARY_MARKER.len_utf8();
        }

        starts
    }
}

/// Searches one token stream for any number of needles
pub struct TokenLocator<'a, L: ?Sized> {
    language: &'a L,
    tokens: &'a [Token],
    haystack: Haystack,
}

impl<'a, L> TokenLocator<'a, L>
where
    L: LanguageRules + ?Sized,
{
    /// Lower and frame the haystack once
    pub fn new(language: &'a L, tokens: &'a [Token]) -> Self {
        Self {
            language,
            tokens,
            haystack: Haystack::from_tokens(language, tokens),
        }
    }

    /// The framed, lowered haystack
    pub fn haystack(&self) -> &Haystack {
        &self.haystack
    }

    /// Lowered token texts, in stream order
    pub fn lowered_tokens(&self) -> &[String] {
        self.haystack.lowered_tokens()
    }

    /// Find every occurrence of `needle`, in ascending start order
    ///
    /// Tokens of a multi-token needle must be separated by the boundary
    /// marker. An empty needle never matches.
    pub fn locate(&self, needle: &str) -> Vec<TokenMatch> {
        let needle_lc = self.language.lowercase(needle);
        self.locate_lowered(&needle_lc)
    }

    /// Like [`locate`](Self::locate) for a needle that is already lowered
    pub fn locate_lowered(&self, needle_lc: &str) -> Vec<TokenMatch> {
        let token_count = needle_lc.matches(BOUNDARY_MARKER).count() + 1;
        self.haystack
            .find_all(needle_lc)
            .into_iter()
            .map(|start| {
                let parts: Vec<&str> = self.tokens[start..start + token_count]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect();
                TokenMatch {
                    text: join_with_marker(&parts),
                    start,
                    token_count,
                }
            })
            .collect()
    }
}

/// Locate `needle` in `tokens` in one call
pub fn locate<L>(language: &L, tokens: &[Token], needle: &str) -> Vec<TokenMatch>
where
    L: LanguageRules + ?Sized,
{
    TokenLocator::new(language, tokens).locate(needle)
}
