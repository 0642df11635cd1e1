//! Rendering a page through the public API

use glossa_api::{
    render_document, ConfigBuilder, Granularity, Input, PageDocument, TermDto, TokenDto,
};

fn page() -> Vec<TokenDto> {
    vec![
        TokenDto::word("Tengo"),
        TokenDto::other(" "),
        TokenDto::word("un"),
        TokenDto::other(" "),
        TokenDto::word("gato"),
        TokenDto::other(" "),
        TokenDto::word("negro"),
        TokenDto::other(".").end_of_sentence(),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: convenience function, default configuration
    println!("=== Method 1: Convenience Function ===");
    let doc = PageDocument::new(page())
        .with_language("es")
        .with_terms(vec![
            TermDto::from_parts(&["tengo", " ", "un"], 1),
            TermDto::from_parts(&["un", " ", "gato"], 3),
        ]);
    let output = render_document(doc.clone())?;

    for item in output.items() {
        let status = item.status.map_or("-".to_string(), |s| s.to_string());
        println!(
            "  {:>12} shown as {:<12?} status {}",
            format!("{:?}", item.text),
            item.display_text,
            status
        );
    }
    println!("New words: {:?}", output.placeholders.iter().map(|p| &p.key).collect::<Vec<_>>());
    println!("Processing took {}ms\n", output.metadata.processing_time_ms);

    // Method 2: custom configuration
    println!("=== Method 2: Sentence Granularity ===");
    let reader = ConfigBuilder::default()
        .language("es")
        .granularity(Granularity::Sentence)
        .threads(Some(2))
        .build_reader()?;
    let output = reader.render(Input::from(doc))?;
    println!("  {}", output.display_texts().join("|"));

    Ok(())
}
