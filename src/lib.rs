//! Meal Nutrition Analyzer (MNA) Library
//!
//! Core functionality for ingredient translation and nutrition analysis.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod session;
pub mod tools;
pub mod translate;
