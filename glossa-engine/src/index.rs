//! Precomputed multi-token index
//!
//! Every multi-token key of a catalog is framed by boundary markers and
//! compiled once into an Aho-Corasick automaton. A haystack is then scanned
//! a single time with overlapping search, instead of once per term.

use aho_corasick::{AhoCorasick, MatchKind};
use glossa_core::{Haystack, MultiwordHit, MultiwordSearch, TermCatalog, BOUNDARY_MARKER};

use crate::error::{EngineError, Result};

/// Aho-Corasick index over the multi-token keys of a catalog
#[derive(Debug, Clone)]
pub struct MultiwordIndex {
    automaton: Option<AhoCorasick>,
    keys: Vec<String>,
}

impl MultiwordIndex {
    /// Index the multi-token terms of `catalog`
    pub fn build(catalog: &TermCatalog) -> Result<Self> {
        Self::from_keys(catalog.multiword_terms().map(|t| t.key.clone()))
    }

    /// Index lowercase, marker-joined keys
    pub fn from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let keys: Vec<String> = keys
            .into_iter()
            .filter(|k| !k.trim_matches(BOUNDARY_MARKER).is_empty())
            .collect();
        if keys.is_empty() {
            return Ok(Self {
                automaton: None,
                keys,
            });
        }

        let patterns: Vec<String> = keys
            .iter()
            .map(|k| format!("{BOUNDARY_MARKER}{k}{BOUNDARY_MARKER}"))
            .collect();
        // Standard semantics are required for overlapping search
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| EngineError::IndexError(e.to_string()))?;

        tracing::debug!(patterns = keys.len(), "built multi-token index");
        Ok(Self {
            automaton: Some(automaton),
            keys,
        })
    }

    /// Number of indexed keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is indexed
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Search lowered tokens directly
    pub fn search_tokens(&self, lowered_tokens: &[String]) -> Vec<MultiwordHit> {
        self.search_all(&Haystack::new(lowered_tokens.to_vec()))
    }
}

impl MultiwordSearch for MultiwordIndex {
    fn search_all(&self, haystack: &Haystack) -> Vec<MultiwordHit> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        automaton
            .find_overlapping_iter(haystack.as_str())
            .filter_map(|m| {
                let start = haystack.match_start(m.start(), m.end())?;
                Some(MultiwordHit {
                    key: self.keys[m.pattern().as_usize()].clone(),
                    start,
                })
            })
            .collect()
    }
}
