//! Per-sentence resolution

#[cfg(feature = "parallel")]
use std::sync::Arc;

use glossa_core::{build_candidates, resolve, sentence_slices, RenderItem, Token};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Granularity;
use crate::error::Result;
use crate::executor::{Executor, MatchContext};

/// Resolves every sentence independently
///
/// A multi-token term never matches across a sentence boundary. Sentences
/// are resolved on the thread pool once a page has at least
/// `parallel_threshold` of them.
#[derive(Debug, Clone)]
pub struct SentenceExecutor {
    parallel_threshold: usize,
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Default for SentenceExecutor {
    fn default() -> Self {
        Self::sequential()
    }
}

impl SentenceExecutor {
    /// Never resolve sentences in parallel
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Resolve in parallel from `parallel_threshold` sentences, on `pool`
    /// or on the global pool
    #[cfg(feature = "parallel")]
    pub fn parallel(parallel_threshold: usize, pool: Option<Arc<rayon::ThreadPool>>) -> Self {
        Self {
            parallel_threshold,
            pool,
        }
    }

    fn resolve_one(
        offset: usize,
        sentence: &[Token],
        ctx: &MatchContext<'_>,
    ) -> Result<Vec<RenderItem>> {
        let candidates = build_candidates(ctx.language, sentence, ctx.catalog, ctx.search);
        let mut items = resolve(&candidates, sentence)?;
        for item in &mut items {
            item.start += offset;
        }
        Ok(items)
    }
}

impl Executor for SentenceExecutor {
    fn resolve(&self, tokens: &[Token], ctx: &MatchContext<'_>) -> Result<Vec<RenderItem>> {
        let mut offset = 0;
        let jobs: Vec<(usize, &[Token])> = sentence_slices(tokens)
            .into_iter()
            .map(|s| {
                let start = offset;
                offset += s.len();
                (start, s)
            })
            .collect();

        #[cfg(feature = "parallel")]
        {
            if jobs.len() >= self.parallel_threshold {
                tracing::trace!(sentences = jobs.len(), "resolving sentences in parallel");
                let run = || {
                    jobs.par_iter()
                        .map(|&(start, sentence)| Self::resolve_one(start, sentence, ctx))
                        .collect::<Result<Vec<_>>>()
                };
                let per_sentence = match &self.pool {
                    Some(pool) => pool.install(run)?,
                    None => run()?,
                };
                return Ok(per_sentence.into_iter().flatten().collect());
            }
        }

        let mut items = Vec::with_capacity(tokens.len());
        for (start, sentence) in jobs {
            items.extend(Self::resolve_one(start, sentence, ctx)?);
        }
        Ok(items)
    }

    fn granularity(&self) -> Granularity {
        Granularity::Sentence
    }

    fn is_parallel(&self) -> bool {
        self.parallel_threshold != usize::MAX
    }
}
