//! Vocabulary terms and the read-only catalog snapshot

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::language::LanguageRules;
use crate::token::{join_with_marker, BOUNDARY_MARKER};

/// Learning status of a term
///
/// Serialized as its numeric code: 0 unknown, 1-5 learning, 98 ignored,
/// 99 well known.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum TermStatus {
    /// Not yet studied
    #[default]
    Unknown,
    /// Learning level 1 through 5
    ///
    /// Build with [`TermStatus::learning`] to have the level checked; terms
    /// reject other levels and [`code`](TermStatus::code) clamps them.
    Learning(u8),
    /// Known, no longer studied
    WellKnown,
    /// Excluded from study
    Ignored,
}

impl TermStatus {
    /// Learning status at `level`, which must be 1 through 5
    pub fn learning(level: u8) -> Result<Self> {
        match level {
            1..=5 => Ok(TermStatus::Learning(level)),
            other => Err(CoreError::InvalidStatus(other)),
        }
    }

    /// Whether the status has a valid code
    pub fn is_valid(self) -> bool {
        !matches!(self, TermStatus::Learning(level) if !(1..=5).contains(&level))
    }

    /// Numeric code of the status
    pub fn code(self) -> u8 {
        match self {
            TermStatus::Unknown => 0,
            TermStatus::Learning(level) => level.clamp(1, 5),
            TermStatus::WellKnown => 99,
            TermStatus::Ignored => 98,
        }
    }

    /// Parse a numeric status code
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(TermStatus::Unknown),
            1..=5 => Ok(TermStatus::Learning(code)),
            98 => Ok(TermStatus::Ignored),
            99 => Ok(TermStatus::WellKnown),
            other => Err(CoreError::InvalidStatus(other)),
        }
    }

    /// Every status, in code order
    pub fn all() -> [TermStatus; 8] {
        [
            TermStatus::Unknown,
            TermStatus::Learning(1),
            TermStatus::Learning(2),
            TermStatus::Learning(3),
            TermStatus::Learning(4),
            TermStatus::Learning(5),
            TermStatus::Ignored,
            TermStatus::WellKnown,
        ]
    }
}

impl TryFrom<u8> for TermStatus {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self> {
        TermStatus::from_code(code)
    }
}

impl From<TermStatus> for u8 {
    fn from(status: TermStatus) -> u8 {
        status.code()
    }
}

impl fmt::Display for TermStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermStatus::Unknown => write!(f, "unknown"),
            TermStatus::Learning(level) => write!(f, "learning-{level}"),
            TermStatus::WellKnown => write!(f, "well-known"),
            TermStatus::Ignored => write!(f, "ignored"),
        }
    }
}

/// Identity of a term in the vocabulary store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TermId(pub u64);

/// A vocabulary entry, single- or multi-token
///
/// Multi-token text is stored with [`BOUNDARY_MARKER`] between tokens, so
/// `token_count` is the marker count plus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Store identity; `None` for placeholders not yet persisted
    pub id: Option<TermId>,
    /// Lowercased text
    pub key: String,
    /// Text in its original case
    pub text: String,
    /// Number of tokens in the term
    pub token_count: usize,
    /// Learning status
    pub status: TermStatus,
}

impl Term {
    /// Create a term from (marker-joined) text
    pub fn new<L>(language: &L, text: impl Into<String>, status: TermStatus) -> Result<Self>
    where
        L: LanguageRules + ?Sized,
    {
        if let TermStatus::Learning(level) = status {
            TermStatus::learning(level)?;
        }
        let text = text.into();
        let key = language.lowercase(&text);
        if key.is_empty() {
            return Err(CoreError::EmptyTerm);
        }
        let token_count = key.matches(BOUNDARY_MARKER).count() + 1;
        Ok(Self {
            id: None,
            key,
            text,
            token_count,
            status,
        })
    }

    /// Create a term from its tokens
    pub fn from_parts<L, S>(language: &L, parts: &[S], status: TermStatus) -> Result<Self>
    where
        L: LanguageRules + ?Sized,
        S: AsRef<str>,
    {
        Self::new(language, join_with_marker(parts), status)
    }

    /// Unknown-status term not yet in the store
    pub fn placeholder<L>(language: &L, text: impl Into<String>) -> Result<Self>
    where
        L: LanguageRules + ?Sized,
    {
        Self::new(language, text, TermStatus::Unknown)
    }

    /// Attach a store identity
    pub fn with_id(mut self, id: TermId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether the term spans more than one token
    pub fn is_multiword(&self) -> bool {
        self.token_count > 1
    }

    /// Original-case text without boundary markers
    pub fn display_text(&self) -> String {
        self.text.replace(BOUNDARY_MARKER, "")
    }
}

/// Read-only snapshot of a language's vocabulary, keyed by lowercase text
#[derive(Debug, Clone, Default)]
pub struct TermCatalog {
    by_key: HashMap<String, Arc<Term>>,
    multiword_keys: Vec<String>,
}

impl TermCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog; a later term with a duplicate key replaces the earlier
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let mut catalog = Self::new();
        for term in terms {
            catalog.insert(term);
        }
        catalog
    }

    /// Insert or replace a term
    pub fn insert(&mut self, term: Term) {
        if term.is_multiword() && !self.by_key.contains_key(&term.key) {
            self.multiword_keys.push(term.key.clone());
        }
        self.by_key.insert(term.key.clone(), Arc::new(term));
    }

    /// Look up a term by lowercase key
    pub fn get(&self, key: &str) -> Option<&Arc<Term>> {
        self.by_key.get(key)
    }

    /// Multi-token terms, in insertion order
    pub fn multiword_terms(&self) -> impl Iterator<Item = &Arc<Term>> + '_ {
        self.multiword_keys
            .iter()
            .filter_map(move |key| self.by_key.get(key))
    }

    /// Number of multi-token terms
    pub fn multiword_count(&self) -> usize {
        self.multiword_keys.len()
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// All terms, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Term>> + '_ {
        self.by_key.values()
    }
}

impl FromIterator<Term> for TermCatalog {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}
