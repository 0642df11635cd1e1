//! Configuration types for the engine

use crate::error::{EngineError, Result};

/// Scale at which overlap resolution runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// One resolution over all tokens of the page
    #[default]
    Page,
    /// An independent resolution per sentence
    Sentence,
}

/// When to precompute a multi-token index for a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Always search term by term
    Never,
    /// Always build the index
    Always,
    /// Build the index once the catalog has at least this many multi-token terms
    Auto {
        /// Multi-token term count from which the index is built
        min_terms: usize,
    },
}

impl Default for IndexPolicy {
    fn default() -> Self {
        IndexPolicy::Auto { min_terms: 64 }
    }
}

impl IndexPolicy {
    /// Whether a catalog with `multiword_terms` multi-token terms gets an index
    pub fn wants_index(&self, multiword_terms: usize) -> bool {
        match *self {
            IndexPolicy::Never => false,
            IndexPolicy::Always => multiword_terms > 0,
            IndexPolicy::Auto { min_terms } => multiword_terms > 0 && multiword_terms >= min_terms,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Resolution scale
    pub granularity: Granularity,
    /// Multi-token index policy
    pub index_policy: IndexPolicy,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum sentence count before sentences are resolved in parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Page,
            index_policy: IndexPolicy::default(),
            threads: None,
            parallel_threshold: 32,
        }
    }
}

impl EngineConfig {
    /// Rendering a single page for reading
    pub fn interactive() -> Self {
        Self {
            granularity: Granularity::Sentence,
            index_policy: IndexPolicy::Never,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
        }
    }

    /// Bulk rendering of many pages, e.g. book statistics
    pub fn bulk() -> Self {
        Self {
            granularity: Granularity::Page,
            index_policy: IndexPolicy::Always,
            threads: None,
            parallel_threshold: 32,
        }
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be greater than 0".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(EngineError::ConfigError(
                "parallel threshold must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
