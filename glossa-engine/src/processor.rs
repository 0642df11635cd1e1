//! Text renderer and builder

use std::fmt;
use std::sync::Arc;

use glossa_core::{
    assemble, fill_unknowns, validate_contiguous, LanguageRules, LocatorSearch, MultiwordSearch,
    Paragraph, RenderItem, Term, TermCatalog, Token,
};

use crate::config::{EngineConfig, Granularity, IndexPolicy};
use crate::error::Result;
use crate::executor::{Executor, MatchContext, PageExecutor, SentenceExecutor};
use crate::index::MultiwordIndex;
use crate::language::get_rules;

/// A catalog ready for rendering, with its index if the policy asked for one
#[derive(Debug, Clone)]
pub struct PreparedCatalog {
    catalog: Arc<TermCatalog>,
    index: Option<MultiwordIndex>,
}

impl PreparedCatalog {
    /// Vocabulary snapshot
    pub fn catalog(&self) -> &TermCatalog {
        &self.catalog
    }

    /// The multi-token index, if built
    pub fn index(&self) -> Option<&MultiwordIndex> {
        self.index.as_ref()
    }

    /// Whether multi-token terms are found through the index
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }
}

/// One rendered page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedText {
    /// Paragraphs in order, paragraph markers removed
    pub paragraphs: Vec<Paragraph>,
    /// Placeholder terms created for unknown words, in order of first occurrence
    pub placeholders: Vec<Arc<Term>>,
}

impl RenderedText {
    /// All items in position order
    pub fn items(&self) -> impl Iterator<Item = &RenderItem> + '_ {
        self.paragraphs.iter().flat_map(|p| p.items())
    }

    /// Items that are words or term matches
    pub fn word_items(&self) -> impl Iterator<Item = &RenderItem> + '_ {
        self.items().filter(|i| i.is_word)
    }
}

/// Renders tokenized pages against a prepared catalog
pub struct TextRenderer {
    language: Arc<dyn LanguageRules>,
    config: EngineConfig,
    executor: Box<dyn Executor>,
}

impl fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRenderer")
            .field("language", &self.language.code())
            .field("config", &self.config)
            .field("parallel", &self.executor.is_parallel())
            .finish()
    }
}

impl TextRenderer {
    /// Renderer for an embedded language with the default configuration
    pub fn new(language: &str) -> Result<Self> {
        TextRendererBuilder::new().language(language).build()
    }

    /// Start building a renderer
    pub fn builder() -> TextRendererBuilder {
        TextRendererBuilder::new()
    }

    /// The matching language
    pub fn language(&self) -> &dyn LanguageRules {
        self.language.as_ref()
    }

    /// Shared handle to the matching language
    pub fn language_arc(&self) -> Arc<dyn LanguageRules> {
        Arc::clone(&self.language)
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolution scale in use
    pub fn granularity(&self) -> Granularity {
        self.executor.granularity()
    }

    /// Take a catalog snapshot, building the multi-token index if the policy asks
    pub fn prepare(&self, catalog: TermCatalog) -> Result<PreparedCatalog> {
        let index = if self.config.index_policy.wants_index(catalog.multiword_count()) {
            Some(MultiwordIndex::build(&catalog)?)
        } else {
            None
        };
        Ok(PreparedCatalog {
            catalog: Arc::new(catalog),
            index,
        })
    }

    /// Render one page of tokens
    ///
    /// Fails if token orders are not contiguous.
    pub fn render(&self, tokens: &[Token], prepared: &PreparedCatalog) -> Result<RenderedText> {
        validate_contiguous(tokens)?;

        let locator = LocatorSearch::new(prepared.catalog());
        let search: &dyn MultiwordSearch = match prepared.index() {
            Some(index) => index,
            None => &locator,
        };
        let ctx = MatchContext {
            language: self.language.as_ref(),
            catalog: prepared.catalog(),
            search,
        };

        let items = self.executor.resolve(tokens, &ctx)?;
        let synthesis = fill_unknowns(items, self.language.as_ref())?;
        let paragraphs = assemble(tokens, synthesis.items);

        tracing::debug!(
            tokens = tokens.len(),
            paragraphs = paragraphs.len(),
            placeholders = synthesis.placeholders.len(),
            indexed = prepared.is_indexed(),
            "rendered page"
        );

        Ok(RenderedText {
            paragraphs,
            placeholders: synthesis.placeholders,
        })
    }
}

/// Builder for [`TextRenderer`]
///
/// Provides a fluent interface for configuring the renderer.
pub struct TextRendererBuilder {
    language: Option<String>,
    rules: Option<Arc<dyn LanguageRules>>,
    config: EngineConfig,
}

impl Default for TextRendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRendererBuilder {
    /// Create a new builder (English, default configuration)
    pub fn new() -> Self {
        Self {
            language: None,
            rules: None,
            config: EngineConfig::default(),
        }
    }

    /// Use an embedded language, by code or name
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self.rules = None;
        self
    }

    /// Use custom language rules, e.g. from [`load_language_file`](crate::load_language_file)
    pub fn language_rules(mut self, rules: Arc<dyn LanguageRules>) -> Self {
        self.rules = Some(rules);
        self.language = None;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the resolution scale
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.config.granularity = granularity;
        self
    }

    /// Set the index policy
    pub fn index_policy(mut self, policy: IndexPolicy) -> Self {
        self.config.index_policy = policy;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the sentence count from which sentences resolve in parallel
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.config.parallel_threshold = sentences;
        self
    }

    /// Use interactive configuration preset
    pub fn interactive(mut self) -> Self {
        self.config = EngineConfig::interactive();
        self
    }

    /// Use bulk configuration preset
    pub fn bulk(mut self) -> Self {
        self.config = EngineConfig::bulk();
        self
    }

    /// Build the renderer
    pub fn build(self) -> Result<TextRenderer> {
        self.config.validate()?;

        let language: Arc<dyn LanguageRules> = match (self.rules, self.language) {
            (Some(rules), _) => rules,
            (None, Some(code)) => get_rules(&code)?,
            (None, None) => get_rules("en")?,
        };

        let executor: Box<dyn Executor> = match self.config.granularity {
            Granularity::Page => Box::new(PageExecutor),
            Granularity::Sentence => Box::new(sentence_executor(&self.config)?),
        };

        tracing::debug!(
            language = language.code(),
            granularity = ?self.config.granularity,
            "built text renderer"
        );

        Ok(TextRenderer {
            language,
            config: self.config,
            executor,
        })
    }
}

#[cfg(feature = "parallel")]
fn sentence_executor(config: &EngineConfig) -> Result<SentenceExecutor> {
    if config.parallel_threshold == usize::MAX || config.threads == Some(1) {
        return Ok(SentenceExecutor::sequential());
    }
    let pool = match config.threads {
        Some(threads) => Some(Arc::new(
            rayon::ThreadPoolBuilder::new().num_threads(threads).build()?,
        )),
        None => None,
    };
    Ok(SentenceExecutor::parallel(config.parallel_threshold, pool))
}

#[cfg(not(feature = "parallel"))]
fn sentence_executor(_config: &EngineConfig) -> Result<SentenceExecutor> {
    Ok(SentenceExecutor::sequential())
}
