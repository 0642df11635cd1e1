//! Candidate source: every possible term match over a token stream
//!
//! Each token yields a length-1 candidate (bound to the catalog term of the
//! same key for words, unbound otherwise). Each occurrence of a multi-token
//! term yields one candidate spanning its tokens. Multi-token occurrences are
//! found through a [`MultiwordSearch`]; [`LocatorSearch`] runs one locator
//! pass per term, an index can find them all in a single scan.

use std::sync::Arc;

use crate::language::LanguageRules;
use crate::locator::Haystack;
use crate::term::{Term, TermCatalog};
use crate::token::{join_with_marker, Token};

/// A possible match of a term (or bare token) over a span of tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Index of the first token
    pub start: usize,
    /// Number of tokens spanned, at least 1
    pub length: usize,
    /// Matched catalog term, if any
    pub term: Option<Arc<Term>>,
    /// Spanned tokens in original case, joined by the boundary marker
    pub matched_text: String,
    /// Whether the span is a word: a word token or a multi-token term
    pub is_word: bool,
}

impl Candidate {
    /// Length-1 candidate for the token at `start`
    pub fn single(start: usize, token: &Token, term: Option<Arc<Term>>) -> Self {
        Self {
            start,
            length: 1,
            term,
            matched_text: token.text.clone(),
            is_word: token.is_word,
        }
    }

    /// Candidate for a multi-token term occurring at `start`
    ///
    /// `None` if the term's span runs past the end of `tokens`.
    pub fn multiword(start: usize, tokens: &[Token], term: Arc<Term>) -> Option<Self> {
        let length = term.token_count;
        let spanned = tokens.get(start..start.checked_add(length)?)?;
        let parts: Vec<&str> = spanned.iter().map(|t| t.text.as_str()).collect();
        Some(Self {
            start,
            length,
            matched_text: join_with_marker(&parts),
            term: Some(term),
            is_word: true,
        })
    }

    /// One past the last spanned position
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A multi-token term occurrence: lowercase key and start token index
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MultiwordHit {
    /// Key of the matched term
    pub key: String,
    /// Index of the first matched token
    pub start: usize,
}

/// Finds every occurrence of every multi-token term in a haystack
pub trait MultiwordSearch: Send + Sync {
    /// All (possibly overlapping) occurrences, in any order
    fn search_all(&self, haystack: &Haystack) -> Vec<MultiwordHit>;
}

/// Per-term search over the catalog's multi-token terms
#[derive(Debug, Clone, Copy)]
pub struct LocatorSearch<'a> {
    catalog: &'a TermCatalog,
}

impl<'a> LocatorSearch<'a> {
    /// Search the multi-token terms of `catalog`
    pub fn new(catalog: &'a TermCatalog) -> Self {
        Self { catalog }
    }
}

impl MultiwordSearch for LocatorSearch<'_> {
    fn search_all(&self, haystack: &Haystack) -> Vec<MultiwordHit> {
        self.catalog
            .multiword_terms()
            .flat_map(|term| {
                haystack.find_all(&term.key).into_iter().map(move |start| MultiwordHit {
                    key: term.key.clone(),
                    start,
                })
            })
            .collect()
    }
}

/// Build all candidates for `tokens`
///
/// Hits whose key is absent from `catalog`, or whose span runs past the end
/// of the tokens, are skipped.
pub fn build_candidates<L, S>(
    language: &L,
    tokens: &[Token],
    catalog: &TermCatalog,
    search: &S,
) -> Vec<Candidate>
where
    L: LanguageRules + ?Sized,
    S: MultiwordSearch + ?Sized,
{
    let haystack = Haystack::from_tokens(language, tokens);
    build_candidates_in(&haystack, tokens, catalog, search)
}

/// Like [`build_candidates`] with an already built haystack of `tokens`
pub fn build_candidates_in<S>(
    haystack: &Haystack,
    tokens: &[Token],
    catalog: &TermCatalog,
    search: &S,
) -> Vec<Candidate>
where
    S: MultiwordSearch + ?Sized,
{
    let mut candidates: Vec<Candidate> = tokens
        .iter()
        .zip(haystack.lowered_tokens())
        .enumerate()
        .map(|(pos, (token, lowered))| {
            let term = if token.is_word {
                catalog.get(lowered).cloned()
            } else {
                None
            };
            Candidate::single(pos, token, term)
        })
        .collect();

    let mut hits = search.search_all(haystack);
    hits.sort();
    hits.dedup();

    let singles = candidates.len();
    for hit in hits {
        let Some(term) = catalog.get(&hit.key) else {
            continue;
        };
        if let Some(candidate) = Candidate::multiword(hit.start, tokens, Arc::clone(term)) {
            candidates.push(candidate);
        }
    }

    tracing::trace!(
        singles,
        multiword = candidates.len() - singles,
        "built candidates"
    );
    candidates
}
