//! Granularity executors: who runs overlap resolution, and over what

use glossa_core::{LanguageRules, MultiwordSearch, RenderItem, TermCatalog, Token};

use crate::config::Granularity;
use crate::error::Result;

pub mod page;
pub mod sentence;

pub use page::PageExecutor;
pub use sentence::SentenceExecutor;

/// Everything resolution reads besides the tokens
#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    /// Lowering rule for matching
    pub language: &'a dyn LanguageRules,
    /// Vocabulary snapshot
    pub catalog: &'a TermCatalog,
    /// Multi-token occurrence search (index or per-term)
    pub search: &'a dyn MultiwordSearch,
}

/// Pluggable resolution strategy
pub trait Executor: Send + Sync {
    /// Resolve `tokens` into position-ordered items
    ///
    /// Item positions are indexes into `tokens`. Word items may still lack a
    /// term; placeholders are synthesized by the caller.
    fn resolve(&self, tokens: &[Token], ctx: &MatchContext<'_>) -> Result<Vec<RenderItem>>;

    /// The scale this executor resolves at
    fn granularity(&self) -> Granularity;

    /// Whether this executor may use several threads
    fn is_parallel(&self) -> bool {
        false
    }
}
