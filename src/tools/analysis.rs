//! Analysis MCP Tools
//!
//! The full analysis flow: snapshot the ingredient store, translate every
//! line, submit one batch nutrition request, and record the outcome on the
//! session. The session lock is never held across a network call; in-flight
//! work is tied to its ticket, so a concurrent clear_session discards the
//! outcome instead of racing it.

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::nutrition::{AnalysisSummary, NutritionClient};
use crate::session::AnalysisSession;
use crate::translate::Translator;

/// Response for analyze_nutrition
#[derive(Debug, Serialize)]
pub struct AnalyzeNutritionResponse {
    pub summary: AnalysisSummary,
    pub ingredient_count: usize,
    pub translated_ingredients: Vec<String>,
}

/// Response for get_last_analysis
#[derive(Debug, Serialize)]
pub struct LastAnalysisResponse {
    pub summary: Option<AnalysisSummary>,
    pub analysis_in_progress: bool,
    pub last_error: Option<String>,
    pub ingredient_count: usize,
}

/// One original/translated pair from preview_translation
#[derive(Debug, Serialize)]
pub struct TranslatedPhrase {
    pub original: String,
    pub translated: String,
}

/// Response for preview_translation
#[derive(Debug, Serialize)]
pub struct PreviewTranslationResponse {
    pub phrases: Vec<TranslatedPhrase>,
    pub ingredient_count: usize,
}

/// Run a batch analysis over the current ingredient store
pub async fn analyze_nutrition(
    session: &Mutex<AnalysisSession>,
    translator: &dyn Translator,
    client: &NutritionClient,
) -> Result<AnalyzeNutritionResponse, String> {
    let ticket = session
        .lock()
        .await
        .begin_analysis()
        .map_err(|e| e.to_string())?;

    info!(
        "Starting nutrition analysis of {} ingredients",
        ticket.texts.len()
    );

    // Lock released; all network work runs against the snapshot
    let translated = translator.translate_batch(&ticket.texts).await;

    match client.analyze(&translated).await {
        Ok(result) => {
            let summary = AnalysisSummary::from_result(&result);
            let mut session = session.lock().await;
            if !session.complete_analysis(&ticket, result) {
                return Err(
                    "Analysis discarded: the session was reset while it was running".to_string(),
                );
            }
            Ok(AnalyzeNutritionResponse {
                summary,
                ingredient_count: session.len(),
                translated_ingredients: translated,
            })
        }
        Err(err) => {
            error!("Nutrition analysis failed: {}", err);
            let recorded = session.lock().await.fail_analysis(&ticket, err.to_string());
            if recorded {
                Err("Nutrition analysis failed. Please try again.".to_string())
            } else {
                Err("Analysis discarded: the session was reset while it was running".to_string())
            }
        }
    }
}

/// Report the outcome of the most recent analysis without running a new one
pub fn get_last_analysis(session: &AnalysisSession) -> LastAnalysisResponse {
    LastAnalysisResponse {
        summary: session.last_result().map(AnalysisSummary::from_result),
        analysis_in_progress: session.is_analyzing(),
        last_error: session.last_error().map(str::to_string),
        ingredient_count: session.len(),
    }
}

/// Translate the current ingredient lines without analyzing them
pub async fn preview_translation(
    session: &Mutex<AnalysisSession>,
    translator: &dyn Translator,
) -> PreviewTranslationResponse {
    let texts: Vec<String> = session
        .lock()
        .await
        .ingredients()
        .iter()
        .map(|e| e.text.clone())
        .collect();

    let translated = translator.translate_batch(&texts).await;
    let phrases: Vec<TranslatedPhrase> = texts
        .into_iter()
        .zip(translated)
        .map(|(original, translated)| TranslatedPhrase {
            original,
            translated,
        })
        .collect();

    PreviewTranslationResponse {
        ingredient_count: phrases.len(),
        phrases,
    }
}
