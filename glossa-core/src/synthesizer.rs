//! Placeholder terms for words no catalog term covers

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::language::LanguageRules;
use crate::resolver::RenderItem;
use crate::term::Term;

/// Render items with every word bound to a term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesis {
    /// The input items, unknown words now bound to placeholders
    pub items: Vec<RenderItem>,
    /// Newly created placeholder terms, in order of first occurrence
    pub placeholders: Vec<Arc<Term>>,
}

/// Bind a placeholder term to every word item without a term
///
/// All spellings that lower to one key share a single placeholder, which
/// keeps the casing of the key's last occurrence.
pub fn fill_unknowns<L>(mut items: Vec<RenderItem>, language: &L) -> Result<Synthesis>
where
    L: LanguageRules + ?Sized,
{
    let mut keys: Vec<String> = Vec::new();
    let mut last_text: HashMap<String, &str> = HashMap::new();
    let mut item_keys: Vec<Option<String>> = Vec::with_capacity(items.len());

    for item in &items {
        if !item.needs_placeholder() {
            item_keys.push(None);
            continue;
        }
        let key = language.lowercase(&item.full_text);
        if last_text.insert(key.clone(), &item.full_text).is_none() {
            keys.push(key.clone());
        }
        item_keys.push(Some(key));
    }

    let mut by_key: HashMap<String, Arc<Term>> = HashMap::with_capacity(keys.len());
    let mut placeholders = Vec::with_capacity(keys.len());
    for key in keys {
        let text = last_text.get(key.as_str()).copied().unwrap_or(key.as_str());
        let term = Arc::new(Term::placeholder(language, text)?);
        placeholders.push(Arc::clone(&term));
        by_key.insert(key, term);
    }

    for (item, key) in items.iter_mut().zip(item_keys) {
        if let Some(key) = key {
            item.term = by_key.get(&key).cloned();
        }
    }

    if !placeholders.is_empty() {
        tracing::debug!(count = placeholders.len(), "synthesized placeholder terms");
    }

    Ok(Synthesis {
        items,
        placeholders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::BasicLanguage;
    use crate::term::TermStatus;

    fn word(start: usize, text: &str) -> RenderItem {
        RenderItem {
            start,
            length: 1,
            full_text: text.to_string(),
            display_text: text.to_string(),
            display_count: 1,
            term: None,
            is_word: true,
            sentence_index: 0,
            paragraph_index: 0,
        }
    }

    #[test]
    fn test_unknown_word_gets_placeholder() {
        let en = BasicLanguage::english();
        let synthesis = fill_unknowns(vec![word(0, "Xyz")], &en).unwrap();

        let term = synthesis.items[0].term.as_ref().unwrap();
        assert_eq!(term.key, "xyz");
        assert_eq!(term.status, TermStatus::Unknown);
        assert!(term.id.is_none());
        assert_eq!(synthesis.placeholders.len(), 1);
    }

    #[test]
    fn test_spellings_share_one_placeholder_with_last_case() {
        let en = BasicLanguage::english();
        let mut space = word(1, " ");
        space.is_word = false;
        let items = vec![word(0, "Gato"), space, word(2, "GATO"), word(3, "perro")];

        let synthesis = fill_unknowns(items, &en).unwrap();
        let first = synthesis.items[0].term.as_ref().unwrap();
        let third = synthesis.items[2].term.as_ref().unwrap();

        assert!(Arc::ptr_eq(first, third));
        assert_eq!(first.text, "GATO");
        assert!(synthesis.items[1].term.is_none());
        assert_eq!(
            synthesis
                .placeholders
                .iter()
                .map(|t| t.key.as_str())
                .collect::<Vec<_>>(),
            ["gato", "perro"]
        );
    }

    #[test]
    fn test_known_terms_untouched() {
        let en = BasicLanguage::english();
        let known = Arc::new(Term::new(&en, "gato", TermStatus::Learning(3)).unwrap());
        let mut item = word(0, "Gato");
        item.term = Some(Arc::clone(&known));

        let synthesis = fill_unknowns(vec![item], &en).unwrap();
        assert!(synthesis.placeholders.is_empty());
        assert!(Arc::ptr_eq(synthesis.items[0].term.as_ref().unwrap(), &known));
    }
}
