//! Runtime configuration
//!
//! All configuration comes from `MNA_*` environment variables, read once at
//! startup. Mode selection is explicit: simulation is the documented default
//! and live mode refuses to start without credentials, so missing
//! configuration can never silently degrade into synthetic data.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default nutrition-analysis endpoint (Edamam nutrition-details API)
pub const DEFAULT_NUTRITION_URL: &str = "https://api.edamam.com/api/nutrition-details";

/// Default source/target language codes for ingredient translation
pub const DEFAULT_SOURCE_LANG: &str = "fr";
pub const DEFAULT_TARGET_LANG: &str = "en";

/// Default per-request timeout in seconds for all outbound HTTP calls
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown MNA_MODE '{0}' (expected 'simulate' or 'live')")]
    UnknownMode(String),

    #[error("MNA_MODE=live requires {0} to be set")]
    MissingCredential(&'static str),

    #[error("unknown MNA_TRANSLATOR '{0}' (expected 'dictionary' or 'remote')")]
    UnknownTranslator(String),

    #[error("MNA_TRANSLATOR=remote requires MNA_TRANSLATE_URL to be set")]
    MissingTranslateUrl,

    #[error("invalid MNA_HTTP_TIMEOUT_SECS '{0}' (expected a positive integer)")]
    InvalidTimeout(String),
}

/// How nutrition analysis is performed
#[derive(Debug, Clone)]
pub enum AnalysisMode {
    /// Synthesize nutrition data locally; no external service is contacted
    Simulate,
    /// Call the live nutrition-analysis endpoint with these credentials
    Live { app_id: String, app_key: String },
}

impl AnalysisMode {
    /// Short name for logs and the status tool
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisMode::Simulate => "simulate",
            AnalysisMode::Live { .. } => "live",
        }
    }

    fn from_parts(
        mode: Option<&str>,
        app_id: Option<String>,
        app_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        match mode.unwrap_or("simulate") {
            "simulate" => Ok(AnalysisMode::Simulate),
            "live" => {
                let app_id = app_id.ok_or(ConfigError::MissingCredential("MNA_APP_ID"))?;
                let app_key = app_key.ok_or(ConfigError::MissingCredential("MNA_APP_KEY"))?;
                Ok(AnalysisMode::Live { app_id, app_key })
            }
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// How ingredient phrases are translated before analysis
#[derive(Debug, Clone)]
pub enum TranslatorMode {
    /// Built-in French-to-English keyword dictionary
    Dictionary,
    /// Remote translation endpoint (LibreTranslate-shaped API)
    Remote {
        endpoint: String,
        source: String,
        target: String,
    },
}

impl TranslatorMode {
    /// Short name for logs and the status tool
    pub fn name(&self) -> &'static str {
        match self {
            TranslatorMode::Dictionary => "dictionary",
            TranslatorMode::Remote { .. } => "remote",
        }
    }

    fn from_parts(
        translator: Option<&str>,
        endpoint: Option<String>,
        source: Option<String>,
        target: Option<String>,
    ) -> Result<Self, ConfigError> {
        match translator.unwrap_or("dictionary") {
            "dictionary" => Ok(TranslatorMode::Dictionary),
            "remote" => {
                let endpoint = endpoint.ok_or(ConfigError::MissingTranslateUrl)?;
                Ok(TranslatorMode::Remote {
                    endpoint,
                    source: source.unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string()),
                    target: target.unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string()),
                })
            }
            other => Err(ConfigError::UnknownTranslator(other.to_string())),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: AnalysisMode,
    pub translator: TranslatorMode,
    pub nutrition_url: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Read configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = AnalysisMode::from_parts(
            env::var("MNA_MODE").ok().as_deref(),
            env::var("MNA_APP_ID").ok(),
            env::var("MNA_APP_KEY").ok(),
        )?;

        let translator = TranslatorMode::from_parts(
            env::var("MNA_TRANSLATOR").ok().as_deref(),
            env::var("MNA_TRANSLATE_URL").ok(),
            env::var("MNA_TRANSLATE_SOURCE").ok(),
            env::var("MNA_TRANSLATE_TARGET").ok(),
        )?;

        let nutrition_url = env::var("MNA_NUTRITION_URL")
            .unwrap_or_else(|_| DEFAULT_NUTRITION_URL.to_string());

        let http_timeout = match env::var("MNA_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or(ConfigError::InvalidTimeout(raw))?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            mode,
            translator,
            nutrition_url,
            http_timeout,
        })
    }

    /// Simulation-mode configuration with all defaults, independent of the
    /// environment. Used by the one-off CLI and by tests.
    pub fn simulated() -> Self {
        Self {
            mode: AnalysisMode::Simulate,
            translator: TranslatorMode::Dictionary,
            nutrition_url: DEFAULT_NUTRITION_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
