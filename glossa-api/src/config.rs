//! High-level configuration API

use crate::error::{ApiError, Result};
use crate::Reader;
use glossa_engine::{EngineConfig, Granularity, IndexPolicy};

/// High-level configuration for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) inner: EngineConfig,
    pub(crate) language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inner: EngineConfig::default(),
            language: "en".to_string(),
        }
    }
}

impl Config {
    /// Sentence-by-sentence rendering of a single page
    pub fn interactive() -> Self {
        Self {
            inner: EngineConfig::interactive(),
            language: "en".to_string(),
        }
    }

    /// Whole-page rendering with an index, for many pages
    pub fn bulk() -> Self {
        Self {
            inner: EngineConfig::bulk(),
            language: "en".to_string(),
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language code or name
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Engine settings
    pub fn engine(&self) -> &EngineConfig {
        &self.inner
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the resolution scale
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.config.inner.granularity = granularity;
        self
    }

    /// Set the multi-token index policy
    pub fn index_policy(mut self, policy: IndexPolicy) -> Self {
        self.config.inner.index_policy = policy;
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.inner.threads = threads;
        self
    }

    /// Set the sentence count from which sentences resolve in parallel
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.config.inner.parallel_threshold = sentences;
        self
    }

    /// Use interactive configuration
    pub fn interactive(mut self) -> Self {
        self.config.inner = EngineConfig::interactive();
        self
    }

    /// Use bulk configuration
    pub fn bulk(mut self) -> Self {
        self.config.inner = EngineConfig::bulk();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.language.trim().is_empty() {
            return Err(ApiError::Config("language required".to_string()));
        }
        self.config
            .inner
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.config)
    }

    /// Build a reader directly
    pub fn build_reader(self) -> Result<Reader> {
        Reader::with_config(self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .language("es")
            .granularity(Granularity::Sentence)
            .threads(Some(2))
            .build()
            .unwrap();
        assert_eq!(config.language(), "es");
        assert_eq!(config.engine().granularity, Granularity::Sentence);
        assert_eq!(config.engine().threads, Some(2));
    }

    #[test]
    fn test_builder_validation() {
        assert!(matches!(
            Config::builder().language(" ").build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().threads(Some(0)).build(),
            Err(ApiError::Config(_))
        ));
    }
}
