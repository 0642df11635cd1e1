//! Language contract used by matching
//!
//! Matching is case-insensitive under the *language's own* lowering rule.
//! Most languages use Unicode default lowering; Turkic languages map the
//! dotted and dotless capital I differently.

use serde::{Deserialize, Serialize};

/// Lowering rule family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Unicode default lowering
    #[default]
    Default,
    /// `İ -> i`, `I -> ı`, then default lowering
    Turkic,
}

/// Complete lowering rule: mode plus per-language character substitutions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseMapping {
    mode: CaseMode,
    substitutions: Vec<(String, String)>,
}

impl CaseMapping {
    /// Create a mapping with the given mode and no substitutions
    pub fn new(mode: CaseMode) -> Self {
        Self {
            mode,
            substitutions: Vec::new(),
        }
    }

    /// Turkic mapping
    pub fn turkic() -> Self {
        Self::new(CaseMode::Turkic)
    }

    /// Add a substitution applied before lowering
    pub fn with_substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        if !from.is_empty() {
            self.substitutions.push((from, to.into()));
        }
        self
    }

    /// Lowering mode
    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    /// Lowercase `text` under this mapping
    pub fn lowercase(&self, text: &str) -> String {
        let mut current = text.to_string();
        for (from, to) in &self.substitutions {
            if current.contains(from.as_str()) {
                current = current.replace(from.as_str(), to);
            }
        }

        match self.mode {
            CaseMode::Default => current.to_lowercase(),
            CaseMode::Turkic => current
                .chars()
                .map(|ch| match ch {
                    'İ' => 'i',
                    'I' => 'ı',
                    other => other,
                })
                .collect::<String>()
                .to_lowercase(),
        }
    }
}

/// Per-language behaviour consumed by the matching engine
pub trait LanguageRules: Send + Sync {
    /// Language code, e.g. `"en"`
    fn code(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Lowering rule of this language
    fn case_mapping(&self) -> &CaseMapping;

    /// Lowercase text with the language's rule
    fn lowercase(&self, text: &str) -> String {
        self.case_mapping().lowercase(text)
    }
}

/// Language defined only by code, name and case mapping
#[derive(Debug, Clone)]
pub struct BasicLanguage {
    code: String,
    name: String,
    casing: CaseMapping,
}

impl BasicLanguage {
    /// Create a language
    pub fn new(code: impl Into<String>, name: impl Into<String>, casing: CaseMapping) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            casing,
        }
    }

    /// English-like language with default lowering
    pub fn english() -> Self {
        Self::new("en", "English", CaseMapping::default())
    }

    /// Turkish, with Turkic lowering
    pub fn turkish() -> Self {
        Self::new("tr", "Turkish", CaseMapping::turkic())
    }
}

impl LanguageRules for BasicLanguage {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn case_mapping(&self) -> &CaseMapping {
        &self.casing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lowering() {
        let mapping = CaseMapping::default();
        assert_eq!(mapping.lowercase("The CAT"), "the cat");
        assert_eq!(mapping.lowercase("ÉCOLE"), "école");
    }

    #[test]
    fn test_turkic_lowering() {
        let mapping = CaseMapping::turkic();
        assert_eq!(mapping.lowercase("İSTANBUL"), "istanbul");
        assert_eq!(mapping.lowercase("KIRMIZI"), "kırmızı");
        // char count is preserved
        assert_eq!(mapping.lowercase("İI").chars().count(), 2);
    }

    #[test]
    fn test_substitutions_before_lowering() {
        let mapping = CaseMapping::default()
            .with_substitution("’", "'")
            .with_substitution("", "ignored");
        assert_eq!(mapping.lowercase("L’HOMME"), "l'homme");
    }

    #[test]
    fn test_basic_language() {
        let tr = BasicLanguage::turkish();
        assert_eq!(tr.code(), "tr");
        assert_eq!(tr.lowercase("Işık"), "ışık");
    }
}
