//! Analysis session state
//!
//! Single controller owning all transient state for one session: the
//! ordered ingredient store, the last analysis outcome, and whether an
//! analysis is in flight. Mutation happens only through the transitions
//! defined here. Network work runs outside whatever lock guards this
//! struct: an analysis snapshots the texts it needs into a ticket at start
//! and reports back with that ticket, and a reset invalidates outstanding
//! tickets so stale results are discarded instead of resurrecting cleared
//! state.

use thiserror::Error;

use crate::models::{IngredientEntry, NutritionResult};

/// Invalid session transitions
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("ingredient text cannot be empty")]
    EmptyText,

    #[error("no ingredient with id {0}")]
    UnknownId(u64),

    #[error("no ingredients to analyze")]
    EmptyStore,

    #[error("an analysis is already running")]
    AnalysisInProgress,
}

/// Snapshot handed to the analysis flow when it starts
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    pub generation: u64,
    pub texts: Vec<String>,
}

/// All mutable state for one session
#[derive(Debug)]
pub struct AnalysisSession {
    ingredients: Vec<IngredientEntry>,
    next_id: u64,
    generation: u64,
    analyzing: bool,
    last_result: Option<NutritionResult>,
    last_error: Option<String>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            ingredients: Vec::new(),
            next_id: 1,
            generation: 0,
            analyzing: false,
            last_result: None,
            last_error: None,
        }
    }

    /// Append an ingredient line. Text is trimmed; empty input is rejected.
    /// Ids are monotonic within the session and never reused.
    pub fn add_ingredient(&mut self, text: &str) -> Result<IngredientEntry, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyText);
        }
        let entry = IngredientEntry::new(self.next_id, text);
        self.next_id += 1;
        self.ingredients.push(entry.clone());
        Ok(entry)
    }

    /// Remove an ingredient by id, preserving the order of the rest
    pub fn remove_ingredient(&mut self, id: u64) -> Result<IngredientEntry, SessionError> {
        let index = self
            .ingredients
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(SessionError::UnknownId(id))?;
        Ok(self.ingredients.remove(index))
    }

    pub fn ingredients(&self) -> &[IngredientEntry] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn last_result(&self) -> Option<&NutritionResult> {
        self.last_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start an analysis over the current ingredients. The returned ticket
    /// carries the text snapshot (in store order) and the generation it
    /// belongs to.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, SessionError> {
        if self.ingredients.is_empty() {
            return Err(SessionError::EmptyStore);
        }
        if self.analyzing {
            return Err(SessionError::AnalysisInProgress);
        }
        self.analyzing = true;
        self.last_error = None;
        Ok(AnalysisTicket {
            generation: self.generation,
            texts: self.ingredients.iter().map(|e| e.text.clone()).collect(),
        })
    }

    /// Record a successful analysis. Returns false when the ticket is stale
    /// (a reset happened after it was issued) and the result was discarded.
    pub fn complete_analysis(&mut self, ticket: &AnalysisTicket, result: NutritionResult) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.analyzing = false;
        self.last_result = Some(result);
        self.last_error = None;
        true
    }

    /// Record a failed analysis. The store and any previous result are left
    /// untouched so the user can retry. Returns false when the ticket is
    /// stale.
    pub fn fail_analysis(&mut self, ticket: &AnalysisTicket, message: impl Into<String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.analyzing = false;
        self.last_error = Some(message.into());
        true
    }

    /// Discard everything: ingredients, last outcome, and any in-flight
    /// analysis (its ticket becomes stale)
    pub fn reset(&mut self) {
        self.generation += 1;
        self.ingredients.clear();
        self.analyzing = false;
        self.last_result = None;
        self.last_error = None;
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_calories(calories: f64) -> NutritionResult {
        NutritionResult {
            calories,
            ..Default::default()
        }
    }

    #[test]
    fn test_add_preserves_order_and_assigns_unique_ids() {
        let mut session = AnalysisSession::new();
        let a = session.add_ingredient("200g poulet").unwrap();
        let b = session.add_ingredient("100g riz").unwrap();
        let c = session.add_ingredient("1 tomate").unwrap();

        assert!(a.id < b.id && b.id < c.id);
        let texts: Vec<&str> = session.ingredients().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["200g poulet", "100g riz", "1 tomate"]);
    }

    #[test]
    fn test_add_trims_and_rejects_empty() {
        let mut session = AnalysisSession::new();
        let entry = session.add_ingredient("  200g poulet  ").unwrap();
        assert_eq!(entry.text, "200g poulet");

        assert!(matches!(
            session.add_ingredient("   "),
            Err(SessionError::EmptyText)
        ));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut session = AnalysisSession::new();
        session.add_ingredient("200g poulet").unwrap();
        assert!(matches!(
            session.remove_ingredient(99),
            Err(SessionError::UnknownId(99))
        ));
    }

    #[test]
    fn test_add_then_remove_all_leaves_empty_store() {
        let mut session = AnalysisSession::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| session.add_ingredient(&format!("ingredient {i}")).unwrap().id)
            .collect();
        for id in ids {
            session.remove_ingredient(id).unwrap();
        }
        assert!(session.is_empty());
        assert!(session.last_result().is_none());
        assert!(session.last_error().is_none());
        assert!(!session.is_analyzing());
    }

    #[test]
    fn test_begin_analysis_requires_ingredients() {
        let mut session = AnalysisSession::new();
        assert!(matches!(
            session.begin_analysis(),
            Err(SessionError::EmptyStore)
        ));
    }

    #[test]
    fn test_begin_analysis_rejects_concurrent_start() {
        let mut session = AnalysisSession::new();
        session.add_ingredient("200g poulet").unwrap();
        let _ticket = session.begin_analysis().unwrap();
        assert!(matches!(
            session.begin_analysis(),
            Err(SessionError::AnalysisInProgress)
        ));
    }

    #[test]
    fn test_ticket_snapshots_texts_in_order() {
        let mut session = AnalysisSession::new();
        session.add_ingredient("200g poulet").unwrap();
        session.add_ingredient("100g riz").unwrap();
        let ticket = session.begin_analysis().unwrap();
        assert_eq!(ticket.texts, vec!["200g poulet", "100g riz"]);
    }

    #[test]
    fn test_complete_analysis_stores_result() {
        let mut session = AnalysisSession::new();
        session.add_ingredient("200g poulet").unwrap();
        let ticket = session.begin_analysis().unwrap();

        assert!(session.complete_analysis(&ticket, result_with_calories(320.0)));
        assert!(!session.is_analyzing());
        assert_eq!(session.last_result().unwrap().calories, 320.0);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_fail_analysis_keeps_store_and_previous_result() {
        let mut session = AnalysisSession::new();
        session.add_ingredient("200g poulet").unwrap();

        let ticket = session.begin_analysis().unwrap();
        assert!(session.complete_analysis(&ticket, result_with_calories(320.0)));

        let ticket = session.begin_analysis().unwrap();
        assert!(session.fail_analysis(&ticket, "nutrition endpoint returned HTTP 500"));

        assert_eq!(session.len(), 1);
        assert_eq!(session.last_result().unwrap().calories, 320.0);
        assert_eq!(
            session.last_error(),
            Some("nutrition endpoint returned HTTP 500")
        );
        assert!(!session.is_analyzing());

        // Retry clears the error and runs again
        let ticket = session.begin_analysis().unwrap();
        assert!(session.last_error().is_none());
        assert!(session.complete_analysis(&ticket, result_with_calories(301.0)));
        assert_eq!(session.last_result().unwrap().calories, 301.0);
    }

    #[test]
    fn test_reset_discards_in_flight_analysis() {
        let mut session = AnalysisSession::new();
        session.add_ingredient("200g poulet").unwrap();
        let ticket = session.begin_analysis().unwrap();

        session.reset();
        assert!(session.is_empty());
        assert!(!session.is_analyzing());

        // The ticket predates the reset, so its outcome is discarded
        assert!(!session.complete_analysis(&ticket, result_with_calories(320.0)));
        assert!(session.last_result().is_none());
        assert!(!session.fail_analysis(&ticket, "too late"));
        assert!(session.last_error().is_none());

        // Session stays usable afterwards
        session.add_ingredient("100g riz").unwrap();
        let ticket = session.begin_analysis().unwrap();
        assert!(session.complete_analysis(&ticket, result_with_calories(130.0)));
        assert_eq!(session.last_result().unwrap().calories, 130.0);
    }
}
