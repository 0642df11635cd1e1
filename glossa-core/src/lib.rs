//! Term matching and overlap resolution for vocabulary-annotated reading
//!
//! Given tokens from an external tokenizer and a read-only snapshot of the
//! learner's vocabulary, this crate decides which spans of the text are
//! covered by which term:
//!
//! 1. [`build_candidates`] emits a length-1 candidate per token plus one per
//!    occurrence of every multi-token term (found by a [`MultiwordSearch`]).
//! 2. [`resolve`] picks one candidate per token position, leftmost then
//!    longest first, and computes the visible suffix of each winner.
//! 3. [`fill_unknowns`] binds placeholder terms to uncovered words.
//! 4. [`assemble`] groups the items into paragraphs and sentences.
//!
//! # Example
//!
//! ```rust
//! use glossa_core::{
//!     assemble, build_candidates, fill_unknowns, resolve, BasicLanguage, LocatorSearch,
//!     ParsedToken, Term, TermCatalog, TermStatus, TokenStream,
//! };
//!
//! let en = BasicLanguage::english();
//! let catalog: TermCatalog = vec![
//!     Term::from_parts(&en, &["tengo", " ", "un"], TermStatus::Learning(2)).unwrap(),
//! ]
//! .into_iter()
//! .collect();
//!
//! let tokens = TokenStream::from_parsed(vec![
//!     ParsedToken::new("Tengo", true),
//!     ParsedToken::new(" ", false),
//!     ParsedToken::new("un", true),
//!     ParsedToken::new(" ", false),
//!     ParsedToken::new("gato", true),
//!     ParsedToken::new(".", false).end_of_sentence(),
//! ]);
//!
//! let search = LocatorSearch::new(&catalog);
//! let candidates = build_candidates(&en, tokens.tokens(), &catalog, &search);
//! let items = resolve(&candidates, tokens.tokens()).unwrap();
//! let synthesis = fill_unknowns(items, &en).unwrap();
//! let paragraphs = assemble(tokens.tokens(), synthesis.items);
//!
//! let shown: Vec<&str> = paragraphs[0].items().map(|i| i.display_text.as_str()).collect();
//! assert_eq!(shown, ["Tengo un", " ", "gato", "."]);
//! assert_eq!(synthesis.placeholders[0].key, "gato");
//! ```

pub mod assembler;
pub mod candidate;
pub mod error;
pub mod language;
pub mod locator;
pub mod resolver;
pub mod synthesizer;
pub mod term;
pub mod token;

pub use assembler::{assemble, Paragraph, Sentence};
pub use candidate::{
    build_candidates, build_candidates_in, Candidate, LocatorSearch, MultiwordHit,
    MultiwordSearch,
};
pub use error::{CoreError, Result};
pub use language::{BasicLanguage, CaseMapping, CaseMode, LanguageRules};
pub use locator::{locate, Haystack, TokenLocator, TokenMatch};
pub use resolver::{resolve, RenderItem};
pub use synthesizer::{fill_unknowns, Synthesis};
pub use term::{Term, TermCatalog, TermId, TermStatus};
pub use token::{
    join_with_marker, sentence_slices, validate_contiguous, ParsedToken, Token, TokenStream,
    BOUNDARY_MARKER, PARAGRAPH_MARKER,
};
