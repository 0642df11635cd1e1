//! End-to-end rendering through the engine

mod common;

use common::{catalog, parse, stream, term};
use glossa_core::{TermStatus, TokenStream};
use glossa_engine::{
    get_rules, load_language_file, status_distribution, EngineError, Granularity, IndexPolicy,
    RenderedText, TextRenderer,
};
use std::io::Write;
use std::sync::Arc;

fn shown(rendered: &RenderedText) -> Vec<String> {
    rendered.items().map(|i| i.display_text.clone()).collect()
}

#[test]
fn test_leftmost_term_wins_in_spanish() {
    let renderer = TextRenderer::new("es").unwrap();
    let es = get_rules("es").unwrap();
    let prepared = renderer
        .prepare(catalog(es.as_ref(), &["tengo un", "un gato"]))
        .unwrap();

    let page = stream("Tengo un gato.");
    let rendered = renderer.render(page.tokens(), &prepared).unwrap();
    assert_eq!(shown(&rendered), ["Tengo un", " gato", "."]);
}

#[test]
fn test_index_and_locator_agree() {
    let en = get_rules("en").unwrap();
    let terms = ["B C", "E F G H I", "F G", "C D E", "a b", "H I"];
    let page = stream("A B C D E F G H I. A B a b C.");

    let mut outputs = Vec::new();
    for policy in [IndexPolicy::Never, IndexPolicy::Always] {
        for granularity in [Granularity::Page, Granularity::Sentence] {
            let renderer = TextRenderer::builder()
                .language("en")
                .index_policy(policy)
                .granularity(granularity)
                .build()
                .unwrap();
            let prepared = renderer.prepare(catalog(en.as_ref(), &terms)).unwrap();
            assert_eq!(prepared.is_indexed(), policy == IndexPolicy::Always);
            outputs.push(renderer.render(page.tokens(), &prepared).unwrap());
        }
    }

    // No term crosses a sentence boundary, so all four agree
    for other in &outputs[1..] {
        assert_eq!(&outputs[0], other);
    }
    // "a b" matches case-insensitively at the very first token and wins
    assert_eq!(
        shown(&outputs[0])[..6],
        ["A B", " C", " D E", " F G H I", ".", " "]
    );
    let hidden: Vec<&str> = outputs[0]
        .items()
        .take(4)
        .map(|i| i.full_text.as_str())
        .collect();
    assert_eq!(hidden, ["A B", "B C", "C D E", "E F G H I"]);
}

#[test]
fn test_sentence_granularity_blocks_cross_sentence_terms() {
    let en = get_rules("en").unwrap();
    let page = stream("Stop. Go.");
    let terms = catalog(en.as_ref(), &["stop. go"]);

    let page_renderer = TextRenderer::builder().granularity(Granularity::Page).build().unwrap();
    let rendered = page_renderer
        .render(page.tokens(), &page_renderer.prepare(terms.clone()).unwrap())
        .unwrap();
    assert_eq!(shown(&rendered)[0], "Stop. Go");

    let sentence_renderer = TextRenderer::builder().interactive().build().unwrap();
    let rendered = sentence_renderer
        .render(page.tokens(), &sentence_renderer.prepare(terms).unwrap())
        .unwrap();
    assert_eq!(shown(&rendered), ["Stop", ".", " ", "Go", "."]);
}

#[test]
fn test_parallel_sentences_match_sequential() {
    let en = get_rules("en").unwrap();
    let text = "The cat sat. A dog ran! The cat ran? ".repeat(20);
    let page = stream(&text);
    let terms = ["the cat", "dog ran", "cat sat"];

    let sequential = TextRenderer::builder().interactive().build().unwrap();
    let parallel = TextRenderer::builder()
        .granularity(Granularity::Sentence)
        .threads(Some(4))
        .parallel_threshold(2)
        .build()
        .unwrap();

    let a = sequential
        .render(page.tokens(), &sequential.prepare(catalog(en.as_ref(), &terms)).unwrap())
        .unwrap();
    let b = parallel
        .render(page.tokens(), &parallel.prepare(catalog(en.as_ref(), &terms)).unwrap())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_placeholders_shared_across_sentences() {
    let renderer = TextRenderer::builder().interactive().build().unwrap();
    let prepared = renderer.prepare(Default::default()).unwrap();
    let page = stream("Gato uno. GATO dos.");

    let rendered = renderer.render(page.tokens(), &prepared).unwrap();
    let gatos: Vec<_> = rendered
        .word_items()
        .filter(|i| i.full_text.eq_ignore_ascii_case("gato"))
        .map(|i| i.term.clone().unwrap())
        .collect();

    assert_eq!(gatos.len(), 2);
    assert!(Arc::ptr_eq(&gatos[0], &gatos[1]));
    assert_eq!(gatos[0].text, "GATO");
    assert_eq!(rendered.placeholders.len(), 3);
}

#[test]
fn test_paragraphs() {
    let renderer = TextRenderer::new("en").unwrap();
    let prepared = renderer.prepare(Default::default()).unwrap();
    let page = stream("One.¶Two. Three.¶");

    let rendered = renderer.render(page.tokens(), &prepared).unwrap();
    assert_eq!(rendered.paragraphs.len(), 2);
    assert_eq!(rendered.paragraphs[1].sentences.len(), 2);
    assert!(rendered.items().all(|i| !i.display_text.contains('¶')));
}

#[test]
fn test_custom_language_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[metadata]\ncode = \"az\"\nname = \"Azerbaijani\"\n\n[casing]\nmode = \"turkic\""
    )
    .unwrap();

    let az = Arc::new(load_language_file(file.path()).unwrap());
    let renderer = TextRenderer::builder().language_rules(az.clone()).build().unwrap();
    let prepared = renderer
        .prepare(catalog(az.as_ref(), &["ılık su"]))
        .unwrap();

    let rendered = renderer.render(stream("ILIK SU").tokens(), &prepared).unwrap();
    assert_eq!(shown(&rendered), ["ILIK SU"]);
}

#[test]
fn test_missing_language_file() {
    let err = load_language_file("/nonexistent/lang.toml").unwrap_err();
    assert!(matches!(err, EngineError::IoError(_)));
}

#[test]
fn test_status_distribution_counts_unique_terms() {
    let en = get_rules("en").unwrap();
    let renderer = TextRenderer::builder().threads(Some(2)).build().unwrap();
    let prepared = renderer
        .prepare(
            vec![
                term(en.as_ref(), "cat", TermStatus::Learning(1)),
                term(en.as_ref(), "dog", TermStatus::WellKnown),
                term(en.as_ref(), "the end", TermStatus::Learning(3)),
                term(en.as_ref(), "a", TermStatus::Ignored),
            ]
            .into_iter()
            .collect(),
        )
        .unwrap();

    let pages: Vec<TokenStream> = ["A cat. The cat.", "A dog, a bird. The end.", "Fish."]
        .iter()
        .map(|t| TokenStream::from_parsed(parse(t)))
        .collect();

    let distribution = status_distribution(&renderer, &pages, &prepared).unwrap();
    assert_eq!(distribution.count(TermStatus::Learning(1)), 1);
    assert_eq!(distribution.count(TermStatus::Learning(3)), 1);
    assert_eq!(distribution.count(TermStatus::WellKnown), 1);
    assert_eq!(distribution.count(TermStatus::Ignored), 1);
    // the, bird, fish
    assert_eq!(distribution.count(TermStatus::Unknown), 3);
    assert_eq!(distribution.count(TermStatus::Learning(5)), 0);
    assert_eq!(distribution.by_code().len(), 8);
}
