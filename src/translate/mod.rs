//! Ingredient translation
//!
//! Ingredient lines are entered in French and the nutrition endpoint expects
//! English, so every line passes through a [`Translator`] before analysis.
//! Two implementations exist: a built-in keyword dictionary and a remote
//! translation service. Both honor the same contract: the output has the
//! same length and order as the input, and a phrase that cannot be
//! translated comes back unchanged rather than failing the batch.

mod dictionary;
mod remote;

use async_trait::async_trait;

pub use dictionary::DictionaryTranslator;
pub use remote::RemoteTranslator;

use crate::config::{Config, TranslatorMode};

/// Batch phrase translation
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a batch of phrases, preserving length and order.
    /// Untranslatable phrases are returned as-is; this never fails.
    async fn translate_batch(&self, phrases: &[String]) -> Vec<String>;
}

/// Build the translator selected by configuration
pub fn from_config(config: &Config) -> Result<Box<dyn Translator>, reqwest::Error> {
    match &config.translator {
        TranslatorMode::Dictionary => Ok(Box::new(DictionaryTranslator::new())),
        TranslatorMode::Remote {
            endpoint,
            source,
            target,
        } => Ok(Box::new(RemoteTranslator::new(
            endpoint.clone(),
            source.clone(),
            target.clone(),
            config.http_timeout,
        )?)),
    }
}
