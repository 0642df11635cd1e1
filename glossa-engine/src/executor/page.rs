//! Whole-page resolution

use glossa_core::{build_candidates, resolve, RenderItem, Token};

use crate::config::Granularity;
use crate::error::Result;
use crate::executor::{Executor, MatchContext};

/// Resolves all tokens of a page at once
///
/// Multi-token terms may span sentence boundaries.
#[derive(Debug, Clone, Default)]
pub struct PageExecutor;

impl Executor for PageExecutor {
    fn resolve(&self, tokens: &[Token], ctx: &MatchContext<'_>) -> Result<Vec<RenderItem>> {
        let candidates = build_candidates(ctx.language, tokens, ctx.catalog, ctx.search);
        Ok(resolve(&candidates, tokens)?)
    }

    fn granularity(&self) -> Granularity {
        Granularity::Page
    }
}
