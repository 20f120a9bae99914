//! MNA Tools module
//!
//! MCP tool implementations for the Meal Nutrition Analyzer.

pub mod analysis;
pub mod ingredients;
pub mod status;
