//! Ingredient Store MCP Tools
//!
//! Tools for managing the session's ingredient list.

use serde::Serialize;

use crate::models::IngredientEntry;
use crate::session::AnalysisSession;

/// Response for add_ingredient
#[derive(Debug, Serialize)]
pub struct AddIngredientResponse {
    pub ingredient: IngredientEntry,
    pub ingredient_count: usize,
}

/// Response for remove_ingredient
#[derive(Debug, Serialize)]
pub struct RemoveIngredientResponse {
    pub removed: IngredientEntry,
    pub ingredient_count: usize,
}

/// Response for list_ingredients
#[derive(Debug, Serialize)]
pub struct ListIngredientsResponse {
    pub ingredients: Vec<IngredientEntry>,
    pub ingredient_count: usize,
}

/// Response for clear_session
#[derive(Debug, Serialize)]
pub struct ClearSessionResponse {
    pub success: bool,
    pub discarded_ingredients: usize,
}

/// Add an ingredient line to the session store
pub fn add_ingredient(
    session: &mut AnalysisSession,
    text: &str,
) -> Result<AddIngredientResponse, String> {
    let ingredient = session.add_ingredient(text).map_err(|e| e.to_string())?;

    Ok(AddIngredientResponse {
        ingredient,
        ingredient_count: session.len(),
    })
}

/// Remove an ingredient from the session store by id
pub fn remove_ingredient(
    session: &mut AnalysisSession,
    id: u64,
) -> Result<RemoveIngredientResponse, String> {
    let removed = session.remove_ingredient(id).map_err(|e| e.to_string())?;

    Ok(RemoveIngredientResponse {
        removed,
        ingredient_count: session.len(),
    })
}

/// List the session's ingredients in the order they were added
pub fn list_ingredients(session: &AnalysisSession) -> ListIngredientsResponse {
    ListIngredientsResponse {
        ingredients: session.ingredients().to_vec(),
        ingredient_count: session.len(),
    }
}

/// Clear all session state, discarding any in-flight analysis
pub fn clear_session(session: &mut AnalysisSession) -> ClearSessionResponse {
    let discarded_ingredients = session.len();
    session.reset();

    ClearSessionResponse {
        success: true,
        discarded_ingredients,
    }
}
