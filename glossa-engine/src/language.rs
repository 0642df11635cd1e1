//! Language configuration
//!
//! Languages are described in TOML:
//!
//! ```toml
//! [metadata]
//! code = "tr"
//! name = "Turkish"
//!
//! [casing]
//! mode = "turkic"              # or "default"
//! substitutions = [["’", "'"]] # optional, applied before lowering
//! ```
//!
//! English, Spanish, German and Turkish are embedded in the binary and
//! parsed once on first use. Other languages load from a file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use glossa_core::{CaseMapping, CaseMode, LanguageRules};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Parsed language file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Identity of the language
    pub metadata: MetadataConfig,
    /// Lowering rule
    #[serde(default)]
    pub casing: CasingConfig,
}

/// `[metadata]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Language code, e.g. `"es"`
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// `[casing]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasingConfig {
    /// Lowering rule family
    #[serde(default)]
    pub mode: CaseMode,
    /// `[from, to]` pairs replaced before lowering
    #[serde(default)]
    pub substitutions: Vec<(String, String)>,
}

impl LanguageConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            EngineError::ConfigError(msg) => {
                EngineError::ConfigError(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(EngineError::ConfigError(
                "language code must not be empty".to_string(),
            ));
        }
        if let Some((from, _)) = self.casing.substitutions.iter().find(|(f, _)| f.is_empty()) {
            return Err(EngineError::ConfigError(format!(
                "empty substitution source in {} ({from:?})",
                self.metadata.code
            )));
        }
        Ok(())
    }
}

/// Language built from a [`LanguageConfig`]
#[derive(Debug, Clone)]
pub struct ConfigurableLanguage {
    code: String,
    name: String,
    casing: CaseMapping,
}

impl ConfigurableLanguage {
    /// Build from a parsed configuration
    pub fn from_config(config: &LanguageConfig) -> Self {
        let casing = config
            .casing
            .substitutions
            .iter()
            .fold(CaseMapping::new(config.casing.mode), |mapping, (from, to)| {
                mapping.with_substitution(from.as_str(), to.as_str())
            });
        Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            casing,
        }
    }
}

impl LanguageRules for ConfigurableLanguage {
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

struct Registry {
    by_code: HashMap<String, Arc<ConfigurableLanguage>>,
    by_name: HashMap<String, String>,
}

static REGISTRY: OnceLock<std::result::Result<Registry, String>> = OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded() -> std::result::Result<Registry, String> {
    let embedded = [
        embed_language_config!("en", "../configs/languages/english.toml"),
        embed_language_config!("es", "../configs/languages/spanish.toml"),
        embed_language_config!("de", "../configs/languages/german.toml"),
        embed_language_config!("tr", "../configs/languages/turkish.toml"),
    ];

    let mut registry = Registry {
        by_code: HashMap::new(),
        by_name: HashMap::new(),
    };
    for (code, content) in embedded {
        let config = LanguageConfig::from_toml_str(content)
            .map_err(|e| format!("failed to parse {code} config: {e}"))?;
        if config.metadata.code != code {
            return Err(format!(
                "config code mismatch: expected {code}, got {}",
                config.metadata.code
            ));
        }
        registry
            .by_name
            .insert(config.metadata.name.to_lowercase(), code.to_string());
        registry
            .by_code
            .insert(code.to_string(), Arc::new(ConfigurableLanguage::from_config(&config)));
    }

    tracing::debug!(count = registry.by_code.len(), "loaded embedded languages");
    Ok(registry)
}

fn registry() -> Result<&'static Registry> {
    REGISTRY
        .get_or_init(load_embedded)
        .as_ref()
        .map_err(|msg| EngineError::ConfigError(msg.clone()))
}

/// Look up an embedded language by code (`"tr"`) or name (`"Turkish"`)
pub fn get_rules(language: &str) -> Result<Arc<ConfigurableLanguage>> {
    let registry = registry()?;
    let key = language.trim().to_lowercase();
    let code = registry.by_name.get(&key).unwrap_or(&key);
    registry
        .by_code
        .get(code)
        .cloned()
        .ok_or_else(|| EngineError::UnsupportedLanguage {
            code: language.to_string(),
        })
}

/// Load a language from a TOML file
pub fn load_language_file(path: impl AsRef<Path>) -> Result<ConfigurableLanguage> {
    let config = LanguageConfig::from_file(path)?;
    Ok(ConfigurableLanguage::from_config(&config))
}

/// Codes of the embedded languages, sorted
pub fn list_available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = match registry() {
        Ok(registry) => registry.by_code.keys().map(String::as_str).collect(),
        Err(_) => Vec::new(),
    };
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_rules_by_code_and_name() {
        let by_code = get_rules("tr").unwrap();
        let by_name = get_rules("Turkish").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_name));
        assert_eq!(by_code.lowercase("IŞIK"), "ışık");
    }

    #[test]
    fn test_get_rules_unsupported() {
        match get_rules("xx") {
            Err(EngineError::UnsupportedLanguage { code }) => assert_eq!(code, "xx"),
            other => panic!("expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_list_available_languages() {
        assert_eq!(list_available_languages(), vec!["de", "en", "es", "tr"]);
    }

    #[test]
    fn test_english_apostrophe_substitution() {
        let en = get_rules("en").unwrap();
        assert_eq!(en.lowercase("DON’T"), "don't");
    }

    #[test]
    fn test_from_toml_str() {
        let config = LanguageConfig::from_toml_str(
            r#"
            [metadata]
            code = "az"
            name = "Azerbaijani"

            [casing]
            mode = "turkic"
            "#,
        )
        .unwrap();
        assert_eq!(config.casing.mode, CaseMode::Turkic);
        assert!(config.casing.substitutions.is_empty());

        let language = ConfigurableLanguage::from_config(&config);
        assert_eq!(language.code(), "az");
        assert_eq!(language.lowercase("İ"), "i");
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            LanguageConfig::from_toml_str("[metadata]\ncode = \"x\""),
            Err(EngineError::ConfigError(_))
        ));
        assert!(matches!(
            LanguageConfig::from_toml_str(
                "[metadata]\ncode = \"x\"\nname = \"X\"\n[casing]\nsubstitutions = [[\"\", \"a\"]]"
            ),
            Err(EngineError::ConfigError(_))
        ));
    }
}
