//! Nutrition analysis client
//!
//! Submits one batch request covering every ingredient line and returns the
//! aggregate result. Two modes: live (Edamam-compatible endpoint, requires
//! credentials) and simulation (local synthesis, never fails). The mode is
//! chosen explicitly at construction; missing credentials are a startup
//! error, never a silent downgrade to synthetic data.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{AnalysisMode, Config};
use crate::models::{codes, NutrientInfo, NutritionResult};

/// Base synthesized values per ingredient, with the jitter added on top
const SIM_CALORIES_PER_INGREDIENT: f64 = 150.0;
const SIM_WEIGHT_PER_INGREDIENT: f64 = 200.0;

/// Nutrition endpoint failure. Analysis is batch-level: any failure means no
/// result at all, never a partial one.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("nutrition endpoint returned HTTP {0}")]
    Status(u16),

    #[error("nutrition request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct AnalysisRequest<'a> {
    ingr: &'a [String],
}

enum Inner {
    Live {
        client: reqwest::Client,
        url: String,
        app_id: String,
        app_key: String,
    },
    Simulate,
}

/// Batch client for the nutrition-analysis endpoint
pub struct NutritionClient {
    inner: Inner,
}

impl NutritionClient {
    /// Build the client selected by configuration
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        match &config.mode {
            AnalysisMode::Simulate => Ok(Self::simulated()),
            AnalysisMode::Live { app_id, app_key } => Self::live(
                config.nutrition_url.clone(),
                app_id.clone(),
                app_key.clone(),
                config.http_timeout,
            ),
        }
    }

    /// Client that synthesizes results locally
    pub fn simulated() -> Self {
        Self {
            inner: Inner::Simulate,
        }
    }

    /// Client that calls a live Edamam-compatible endpoint
    pub fn live(
        url: String,
        app_id: String,
        app_key: String,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            inner: Inner::Live {
                client,
                url,
                app_id,
                app_key,
            },
        })
    }

    pub fn mode_name(&self) -> &'static str {
        match self.inner {
            Inner::Live { .. } => "live",
            Inner::Simulate => "simulate",
        }
    }

    /// Analyze a non-empty batch of ingredient phrases (already translated).
    /// Callers guard against an empty batch before invoking this.
    pub async fn analyze(&self, ingredients: &[String]) -> Result<NutritionResult, RequestError> {
        debug!(
            "Analyzing {} ingredients in {} mode",
            ingredients.len(),
            self.mode_name()
        );

        match &self.inner {
            Inner::Simulate => Ok(synthesize(ingredients.len(), &mut rand::thread_rng())),
            Inner::Live {
                client,
                url,
                app_id,
                app_key,
            } => {
                let response = client
                    .post(url)
                    .query(&[("app_id", app_id.as_str()), ("app_key", app_key.as_str())])
                    .json(&AnalysisRequest { ingr: ingredients })
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(RequestError::Status(status.as_u16()));
                }

                let result = response.json::<NutritionResult>().await?;
                Ok(result)
            }
        }
    }
}

/// Synthesize a plausible result for `count` ingredients: fixed base values
/// per ingredient plus bounded random jitter. Total weight carries no jitter
/// so it scales exactly linearly with the ingredient count.
fn synthesize<R: Rng>(count: usize, rng: &mut R) -> NutritionResult {
    let n = count as f64;

    let mut total_nutrients = HashMap::new();
    total_nutrients.insert(
        codes::ENERC_KCAL.to_string(),
        NutrientInfo::new(
            "Energy",
            SIM_CALORIES_PER_INGREDIENT * n + rng.gen_range(0.0..100.0),
            "kcal",
        ),
    );
    total_nutrients.insert(
        codes::FAT.to_string(),
        NutrientInfo::new("Fat", 8.0 * n + rng.gen_range(0.0..5.0), "g"),
    );
    total_nutrients.insert(
        codes::FASAT.to_string(),
        NutrientInfo::new("Saturated", 2.0 * n + rng.gen_range(0.0..2.0), "g"),
    );
    total_nutrients.insert(
        codes::CHOCDF.to_string(),
        NutrientInfo::new("Carbs", 15.0 * n + rng.gen_range(0.0..10.0), "g"),
    );
    total_nutrients.insert(
        codes::SUGAR.to_string(),
        NutrientInfo::new("Sugars", 5.0 * n + rng.gen_range(0.0..3.0), "g"),
    );
    total_nutrients.insert(
        codes::PROCNT.to_string(),
        NutrientInfo::new("Protein", 12.0 * n + rng.gen_range(0.0..8.0), "g"),
    );
    total_nutrients.insert(
        codes::FIBTG.to_string(),
        NutrientInfo::new("Fiber", 3.0 * n + rng.gen_range(0.0..2.0), "g"),
    );
    total_nutrients.insert(
        codes::NA.to_string(),
        NutrientInfo::new("Sodium", 300.0 * n + rng.gen_range(0.0..200.0), "mg"),
    );

    NutritionResult {
        calories: SIM_CALORIES_PER_INGREDIENT * n + rng.gen_range(0.0..100.0),
        total_weight: SIM_WEIGHT_PER_INGREDIENT * n,
        diet_labels: vec!["Low-Carb".to_string(), "Low-Fat".to_string()],
        health_labels: vec!["Sugar-Conscious".to_string(), "Keto-Friendly".to_string()],
        total_nutrients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_synthesis_scales_with_ingredient_count() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=4 {
            let result = synthesize(count, &mut rng);
            let n = count as f64;
            assert!(result.calories > 0.0);
            assert!(result.calories >= 150.0 * n && result.calories < 150.0 * n + 100.0);
            assert_eq!(result.total_weight, 200.0 * n);
        }
    }

    #[test]
    fn test_synthesis_covers_all_nutrient_codes() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = synthesize(2, &mut rng);
        for code in [
            codes::ENERC_KCAL,
            codes::FAT,
            codes::FASAT,
            codes::CHOCDF,
            codes::SUGAR,
            codes::PROCNT,
            codes::FIBTG,
            codes::NA,
        ] {
            assert!(
                result.nutrient_quantity(code).is_some(),
                "missing nutrient {code}"
            );
        }
        assert_eq!(result.diet_labels, vec!["Low-Carb", "Low-Fat"]);
        assert_eq!(result.health_labels, vec!["Sugar-Conscious", "Keto-Friendly"]);
    }

    #[test]
    fn test_synthesis_deterministic_per_seed() {
        let a = synthesize(3, &mut StdRng::seed_from_u64(9));
        let b = synthesize(3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.calories, b.calories);
        assert_eq!(
            a.nutrient_quantity(codes::PROCNT),
            b.nutrient_quantity(codes::PROCNT)
        );
    }

    #[tokio::test]
    async fn test_simulated_analyze_scenario() {
        let client = NutritionClient::simulated();
        let result = client
            .analyze(&strings(&["200g grilled chicken breast", "1 cup rice"]))
            .await
            .unwrap();

        assert_eq!(result.total_weight, 400.0);
        assert!(result.calories > 0.0);
        for code in [codes::PROCNT, codes::CHOCDF, codes::FAT] {
            let quantity = result.nutrient_quantity(code).unwrap();
            assert!(quantity >= 0.0);
        }
    }

    #[tokio::test]
    async fn test_live_analyze_decodes_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/nutrition-details")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("app_id".into(), "test-id".into()),
                mockito::Matcher::UrlEncoded("app_key".into(), "test-key".into()),
            ]))
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "ingr": ["200g chicken grilled", "100g rice"]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "calories": 530,
                    "totalWeight": 300,
                    "dietLabels": [],
                    "healthLabels": ["SUGAR_CONSCIOUS"],
                    "totalNutrients": {
                        "PROCNT": {"label": "Protein", "quantity": 52.3, "unit": "g"}
                    }
                }"#,
            )
            .create_async()
            .await;

        let client = NutritionClient::live(
            format!("{}/api/nutrition-details", server.url()),
            "test-id".to_string(),
            "test-key".to_string(),
            std::time::Duration::from_secs(5),
        )
        .unwrap();

        let result = client
            .analyze(&strings(&["200g chicken grilled", "100g rice"]))
            .await
            .unwrap();
        assert_eq!(result.calories, 530.0);
        assert_eq!(result.nutrient_quantity(codes::PROCNT), Some(52.3));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_live_analyze_surfaces_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/nutrition-details")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = NutritionClient::live(
            format!("{}/api/nutrition-details", server.url()),
            "id".to_string(),
            "key".to_string(),
            std::time::Duration::from_secs(5),
        )
        .unwrap();

        let err = client.analyze(&strings(&["chicken"])).await.unwrap_err();
        assert!(matches!(err, RequestError::Status(500)));
    }

    #[tokio::test]
    async fn test_live_analyze_surfaces_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/nutrition-details")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("definitely not json")
            .create_async()
            .await;

        let client = NutritionClient::live(
            format!("{}/api/nutrition-details", server.url()),
            "id".to_string(),
            "key".to_string(),
            std::time::Duration::from_secs(5),
        )
        .unwrap();

        let err = client.analyze(&strings(&["chicken"])).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
    }
}
