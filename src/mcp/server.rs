//! MNA MCP Server Implementation
//!
//! Implements the MCP server with all MNA tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::nutrition::NutritionClient;
use crate::session::AnalysisSession;
use crate::tools::status::StatusTracker;
use crate::tools::{analysis, ingredients};
use crate::translate::{self, Translator};

/// MNA MCP Service
#[derive(Clone)]
pub struct MnaService {
    status_tracker: Arc<StatusTracker>,
    session: Arc<Mutex<AnalysisSession>>,
    translator: Arc<dyn Translator>,
    nutrition: Arc<NutritionClient>,
    tool_router: ToolRouter<MnaService>,
}

impl MnaService {
    /// Build the service from configuration. Fails when the configured mode
    /// needs an HTTP client that cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            status_tracker: Arc::new(StatusTracker::new(
                config.mode.name(),
                config.translator.name(),
            )),
            session: Arc::new(Mutex::new(AnalysisSession::new())),
            translator: Arc::from(translate::from_config(config)?),
            nutrition: Arc::new(NutritionClient::from_config(config)?),
            tool_router: Self::tool_router(),
        })
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddIngredientParams {
    /// Ingredient description with quantity, e.g. "200g poulet grillé"
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveIngredientParams {
    /// Ingredient ID to remove (from add_ingredient or list_ingredients)
    pub id: u64,
}

#[tool_router]
impl MnaService {
    // --- Status ---

    #[tool(description = "Get the current status of the MNA service including build info, configured modes, session state, and process information")]
    async fn mna_status(&self) -> Result<CallToolResult, McpError> {
        let (ingredient_count, analysis_in_progress) = {
            let session = self.session.lock().await;
            (session.len(), session.is_analyzing())
        };
        let status = self
            .status_tracker
            .get_status(ingredient_count, analysis_in_progress);
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for analyzing a meal's nutrition. Call this when starting a new analysis session or when unsure how to use the analysis tools.")]
    fn analysis_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ANALYSIS_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(
            ANALYSIS_INSTRUCTIONS,
        )]))
    }

    // --- Ingredient Store ---

    #[tool(description = "Add a free-text ingredient line to the session, e.g. '200g poulet grillé'. French or English; one ingredient per line.")]
    async fn add_ingredient(
        &self,
        Parameters(p): Parameters<AddIngredientParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        let result = ingredients::add_ingredient(&mut session, &p.text)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Remove one ingredient line from the session by its ID")]
    async fn remove_ingredient(
        &self,
        Parameters(p): Parameters<RemoveIngredientParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        let result = ingredients::remove_ingredient(&mut session, p.id)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the session's ingredient lines in the order they were added")]
    async fn list_ingredients(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        let result = ingredients::list_ingredients(&session);
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Discard all session state: the ingredient list, the last analysis result, and any analysis still running")]
    async fn clear_session(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        let result = ingredients::clear_session(&mut session);
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Analysis ---

    #[tool(description = "Translate the current ingredient lines and submit them as one batch to the nutrition-analysis service. Returns an aggregate summary for the whole meal. The ingredient list is preserved on failure so the analysis can simply be retried.")]
    async fn analyze_nutrition(&self) -> Result<CallToolResult, McpError> {
        let result = analysis::analyze_nutrition(
            &self.session,
            self.translator.as_ref(),
            &self.nutrition,
        )
        .await
        .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get the outcome of the most recent analysis without running a new one: the last summary if any, the last error if any, and whether an analysis is in progress")]
    async fn get_last_analysis(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        let result = analysis::get_last_analysis(&session);
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Show how the current ingredient lines will be translated before analysis, without analyzing them")]
    async fn preview_translation(&self) -> Result<CallToolResult, McpError> {
        let result =
            analysis::preview_translation(&self.session, self.translator.as_ref()).await;
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for MnaService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mna".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Meal Nutrition Analyzer".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Meal Nutrition Analyzer (MNA) - Batch nutrition analysis of free-text ingredient lists. \
                 IMPORTANT: Call analysis_instructions when starting an analysis session. \
                 Ingredients: add_ingredient/remove_ingredient/list_ingredients/clear_session. \
                 Ingredient lines may be French; they are translated to English before analysis. \
                 Analysis: analyze_nutrition runs one batch over the whole list; get_last_analysis re-reads \
                 the outcome; preview_translation shows what will be submitted. \
                 A failed analysis preserves the ingredient list, so just retry analyze_nutrition. \
                 Status: mna_status reports the analysis mode (simulate or live), translator mode, and session state."
                    .into(),
            ),
        }
    }
}
