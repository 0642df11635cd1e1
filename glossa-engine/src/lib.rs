//! Orchestration for term rendering
//!
//! This crate wires the core matching algorithms to configured languages,
//! picks the resolution scale (page or sentence), precomputes multi-token
//! indexes for large catalogs, and computes book statistics over many
//! pages in parallel.
//!
//! ```rust
//! use glossa_core::{ParsedToken, Term, TermCatalog, TermStatus, TokenStream};
//! use glossa_engine::TextRenderer;
//!
//! let renderer = TextRenderer::new("es").unwrap();
//! let es = renderer.language_arc();
//! let catalog = TermCatalog::from_terms(vec![
//!     Term::from_parts(es.as_ref(), &["un", " ", "gato"], TermStatus::WellKnown).unwrap(),
//! ]);
//! let prepared = renderer.prepare(catalog).unwrap();
//!
//! let page = TokenStream::from_parsed(vec![
//!     ParsedToken::new("Un", true),
//!     ParsedToken::new(" ", false),
//!     ParsedToken::new("gato", true),
//!     ParsedToken::new(".", false).end_of_sentence(),
//! ]);
//! let rendered = renderer.render(page.tokens(), &prepared).unwrap();
//! assert_eq!(rendered.items().next().unwrap().display_text, "Un gato");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod index;
pub mod language;
pub mod processor;
pub mod stats;

// Re-export key types
pub use config::{EngineConfig, Granularity, IndexPolicy};
pub use error::{EngineError, Result};
pub use executor::{Executor, MatchContext, PageExecutor, SentenceExecutor};
pub use index::MultiwordIndex;
pub use language::{
    get_rules, list_available_languages, load_language_file, ConfigurableLanguage, LanguageConfig,
};
pub use processor::{PreparedCatalog, RenderedText, TextRenderer, TextRendererBuilder};
pub use stats::{sample_pages, status_distribution, StatusDistribution, SAMPLE_PAGE_COUNT};

// Re-export from core for convenience
pub use glossa_core::{LanguageRules, Paragraph, RenderItem, Sentence, Term, TermCatalog, Token};
