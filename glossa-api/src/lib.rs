//! Public API for glossa vocabulary-annotated reading
//!
//! This crate takes tokenized pages plus a vocabulary snapshot as plain
//! data (or JSON) and returns the rendered paragraphs, keeping the engine
//! types behind a small, stable surface.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use dto::{Metadata, ParagraphDto, PlaceholderDto};
use error::Result;
use glossa_core::{LanguageRules, ParsedToken, TermCatalog, TokenStream};
use glossa_engine::{PreparedCatalog, TextRenderer};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Output, PageDocument, RenderItemDto, TermDto, TokenDto};
pub use error::ApiError;
pub use glossa_engine::{Granularity, IndexPolicy};

/// Main entry point for rendering pages
pub struct Reader {
    inner: Arc<TextRenderer>,
    config: Config,
}

impl std::fmt::Debug for Reader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("language", &self.inner.language().code())
            .field("config", &self.config)
            .finish()
    }
}

impl Reader {
    /// Create a reader with the default configuration (English, page granularity)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a reader for a language code or name
    pub fn with_language(language: &str) -> Result<Self> {
        Self::with_config(Config::builder().language(language).build()?)
    }

    /// Create a reader with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = TextRenderer::builder()
            .language(config.language.as_str())
            .config(config.inner.clone())
            .build()?;
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Code of the language in use
    pub fn language_code(&self) -> &str {
        self.inner.language().code()
    }

    /// Render one page
    ///
    /// A document naming another language is rendered under that language.
    pub fn render(&self, input: Input) -> Result<Output> {
        let doc = input.read_document()?;
        match doc.language.as_deref() {
            Some(language) if !self.is_language(language)? => {
                let mut config = self.config.clone();
                config.language = language.to_string();
                Self::with_config(config)?.render_document(doc)
            }
            _ => self.render_document(doc),
        }
    }

    /// Render a JSON document and return the output as JSON
    #[cfg(feature = "serde")]
    pub fn render_json(&self, json: &str) -> Result<String> {
        let output = self.render(Input::from_json(json))?;
        Ok(serde_json::to_string(&output)?)
    }

    /// Count unique terms per status code over `pages`
    ///
    /// Unknown words count under status 0. Every status code is present.
    pub fn status_distribution(
        &self,
        pages: &[Vec<TokenDto>],
        terms: &[TermDto],
    ) -> Result<BTreeMap<u8, usize>> {
        let prepared = self.prepare(terms)?;
        let streams: Vec<TokenStream> = pages.iter().map(|p| stream(p.clone())).collect();
        let distribution = glossa_engine::status_distribution(&self.inner, &streams, &prepared)?;
        Ok(distribution.by_code())
    }

    fn is_language(&self, language: &str) -> Result<bool> {
        let rules = glossa_engine::get_rules(language)?;
        Ok(rules.code() == self.inner.language().code())
    }

    fn prepare(&self, terms: &[TermDto]) -> Result<PreparedCatalog> {
        let language = self.inner.language();
        let catalog = terms
            .iter()
            .map(|t| t.to_term(language))
            .collect::<Result<TermCatalog>>()?;
        Ok(self.inner.prepare(catalog)?)
    }

    fn render_document(&self, doc: PageDocument) -> Result<Output> {
        let start = Instant::now();

        let prepared = self.prepare(&doc.terms)?;
        let tokens = stream(doc.tokens);
        let rendered = self.inner.render(tokens.tokens(), &prepared)?;

        let paragraphs: Vec<ParagraphDto> =
            rendered.paragraphs.iter().map(ParagraphDto::from).collect();
        let placeholders = rendered
            .placeholders
            .iter()
            .map(|t| PlaceholderDto::from(t.as_ref()))
            .collect();

        let metadata = Metadata {
            language: self.language_code().to_string(),
            granularity: match self.inner.granularity() {
                Granularity::Page => "page".to_string(),
                Granularity::Sentence => "sentence".to_string(),
            },
            indexed: prepared.is_indexed(),
            token_count: tokens.len(),
            item_count: rendered.items().count(),
            word_count: rendered.word_items().count(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output {
            paragraphs,
            placeholders,
            metadata,
        })
    }
}

fn stream(tokens: Vec<TokenDto>) -> TokenStream {
    TokenStream::from_parsed(tokens.into_iter().map(ParsedToken::from))
}

// Convenience functions

/// Render a page document with the default configuration
pub fn render_document(doc: PageDocument) -> Result<Output> {
    Reader::new()?.render(Input::from_document(doc))
}

/// Render a JSON page document file with the default configuration
pub fn render_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    Reader::new()?.render(Input::from_file(path.as_ref().to_path_buf()))
}

/// Render a JSON page document string, returning JSON
#[cfg(feature = "serde")]
pub fn render_json(json: &str) -> Result<String> {
    Reader::new()?.render_json(json)
}
