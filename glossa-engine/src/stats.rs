//! Book statistics: unique terms per learning status

use std::collections::{BTreeMap, HashSet};

use glossa_core::{TermStatus, Token};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::processor::{PreparedCatalog, TextRenderer};

/// Number of pages rendered to estimate a book's distribution
pub const SAMPLE_PAGE_COUNT: usize = 20;

/// Count of unique terms per status
///
/// Every status is present, with zero when no term has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDistribution {
    counts: BTreeMap<TermStatus, usize>,
}

impl Default for StatusDistribution {
    fn default() -> Self {
        Self {
            counts: TermStatus::all().into_iter().map(|s| (s, 0)).collect(),
        }
    }
}

impl StatusDistribution {
    /// Unique terms with `status`
    pub fn count(&self, status: TermStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Unique terms over all statuses
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(status, count)` pairs in status order
    pub fn iter(&self) -> impl Iterator<Item = (TermStatus, usize)> + '_ {
        self.counts.iter().map(|(s, c)| (*s, *c))
    }

    /// Counts keyed by numeric status code
    pub fn by_code(&self) -> BTreeMap<u8, usize> {
        self.iter().map(|(s, c)| (s.code(), c)).collect()
    }
}

/// Status and key of every word item on one page
type PageTerms = Vec<(TermStatus, String)>;

/// The pages from `start` on, at most `count` of them
pub fn sample_pages<T>(pages: &[T], start: usize, count: usize) -> &[T] {
    let start = start.min(pages.len());
    let end = start.saturating_add(count).min(pages.len());
    &pages[start..end]
}

/// Render `pages` and count unique terms per status
///
/// Word items count under their term's status; placeholders count as
/// unknown. A key counts once per status however many pages it is on.
pub fn status_distribution<P>(
    renderer: &TextRenderer,
    pages: &[P],
    prepared: &PreparedCatalog,
) -> Result<StatusDistribution>
where
    P: AsRef<[Token]> + Sync,
{
    let page_terms = collect_page_terms(renderer, pages, prepared)?;

    let mut unique: BTreeMap<TermStatus, HashSet<String>> = BTreeMap::new();
    for (status, key) in page_terms.into_iter().flatten() {
        unique.entry(status).or_default().insert(key);
    }

    let mut distribution = StatusDistribution::default();
    for (status, keys) in unique {
        distribution.counts.insert(status, keys.len());
    }

    tracing::debug!(
        pages = pages.len(),
        terms = distribution.total(),
        "computed status distribution"
    );
    Ok(distribution)
}

fn page_terms(
    renderer: &TextRenderer,
    tokens: &[Token],
    prepared: &PreparedCatalog,
) -> Result<PageTerms> {
    let rendered = renderer.render(tokens, prepared)?;
    Ok(rendered
        .word_items()
        .map(|item| match &item.term {
            Some(term) => (term.status, term.key.clone()),
            None => (TermStatus::Unknown, renderer.language().lowercase(&item.full_text)),
        })
        .collect())
}

#[cfg(feature = "parallel")]
fn collect_page_terms<P>(
    renderer: &TextRenderer,
    pages: &[P],
    prepared: &PreparedCatalog,
) -> Result<Vec<PageTerms>>
where
    P: AsRef<[Token]> + Sync,
{
    let threads = renderer.config().threads.unwrap_or_else(num_cpus::get);
    if pages.len() < 2 || threads < 2 {
        return pages
            .iter()
            .map(|p| page_terms(renderer, p.as_ref(), prepared))
            .collect();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.min(pages.len()))
        .build()?;
    pool.install(|| {
        pages
            .par_iter()
            .map(|p| page_terms(renderer, p.as_ref(), prepared))
            .collect()
    })
}

#[cfg(not(feature = "parallel"))]
fn collect_page_terms<P>(
    renderer: &TextRenderer,
    pages: &[P],
    prepared: &PreparedCatalog,
) -> Result<Vec<PageTerms>>
where
    P: AsRef<[Token]> + Sync,
{
    pages
        .iter()
        .map(|p| page_terms(renderer, p.as_ref(), prepared))
        .collect()
}
