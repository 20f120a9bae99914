//! Remote translation client
//!
//! Talks to a LibreTranslate-compatible endpoint, one request per phrase.
//! All phrases in a batch are requested concurrently and re-paired with
//! their originals by position, so completion order never reorders results.
//! A phrase whose request fails falls back to its original text; there are
//! no retries.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Translator;

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Per-phrase client for a remote translation endpoint
pub struct RemoteTranslator {
    client: reqwest::Client,
    endpoint: String,
    source: String,
    target: String,
}

impl RemoteTranslator {
    pub fn new(
        endpoint: String,
        source: String,
        target: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            source,
            target,
        })
    }

    async fn translate_phrase(&self, phrase: &str) -> Result<String, reqwest::Error> {
        let request = TranslateRequest {
            q: phrase,
            source: &self.source,
            target: &self.target,
            format: "text",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<TranslateResponse>()
            .await?;

        Ok(response.translated_text)
    }
}

/// Pair each outcome with its original phrase, substituting the original
/// text wherever translation failed
fn merge_with_fallback<E: std::fmt::Display>(
    originals: &[String],
    outcomes: Vec<Result<String, E>>,
) -> Vec<String> {
    originals
        .iter()
        .zip(outcomes)
        .map(|(original, outcome)| match outcome {
            Ok(translated) => translated,
            Err(err) => {
                warn!("Translation failed for '{}': {}", original, err);
                original.clone()
            }
        })
        .collect()
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate_batch(&self, phrases: &[String]) -> Vec<String> {
        debug!("Translating {} phrases via {}", phrases.len(), self.endpoint);
        let outcomes = join_all(phrases.iter().map(|p| self.translate_phrase(p))).await;
        merge_with_fallback(phrases, outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_keeps_successes_and_falls_back() {
        let originals = strings(&["tomate", "poulet", "riz"]);
        let outcomes: Vec<Result<String, String>> = vec![
            Ok("tomato".to_string()),
            Err("timeout".to_string()),
            Ok("rice".to_string()),
        ];
        assert_eq!(
            merge_with_fallback(&originals, outcomes),
            strings(&["tomato", "poulet", "rice"])
        );
    }

    #[test]
    fn test_merge_empty_batch() {
        let merged = merge_with_fallback::<String>(&[], vec![]);
        assert!(merged.is_empty());
    }

    #[tokio::test]
    async fn test_batch_falls_back_per_phrase() {
        let mut server = mockito::Server::new_async().await;

        let ok_mock = server
            .mock("POST", "/translate")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({"q": "tomate"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"translatedText": "tomato"}"#)
            .create_async()
            .await;

        let fail_mock = server
            .mock("POST", "/translate")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({"q": "mystère"}),
            ))
            .with_status(500)
            .create_async()
            .await;

        let riz_mock = server
            .mock("POST", "/translate")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({"q": "riz"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"translatedText": "rice"}"#)
            .create_async()
            .await;

        let translator = RemoteTranslator::new(
            format!("{}/translate", server.url()),
            "fr".to_string(),
            "en".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let out = translator
            .translate_batch(&strings(&["tomate", "mystère", "riz"]))
            .await;
        assert_eq!(out, strings(&["tomato", "mystère", "rice"]));

        ok_mock.assert_async().await;
        fail_mock.assert_async().await;
        riz_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/translate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let translator = RemoteTranslator::new(
            format!("{}/translate", server.url()),
            "fr".to_string(),
            "en".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let out = translator.translate_batch(&strings(&["poulet"])).await;
        assert_eq!(out, strings(&["poulet"]));
    }
}
