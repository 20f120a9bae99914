//! MNA Status Tool
//!
//! Provides runtime status information about the MNA service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Meal analysis instructions for AI assistants
pub const ANALYSIS_INSTRUCTIONS: &str = r#"
# MNA Meal Analysis Instructions

This guide explains how to analyze a meal's nutrition using the Meal
Nutrition Analyzer (MNA) tools.

## Overview

MNA accumulates free-text ingredient lines, translates them from French to
English, and submits them as one batch to a nutrition-analysis service. The
result is an aggregate for the whole meal: calories, macros, secondary
nutrients, and a protein/carb/fat percentage breakdown suitable for a pie
chart.

To analyze a meal:
1. **Add ingredients** - One line per ingredient, with quantity
2. **Analyze** - One call covering every line currently in the session
3. **Read the summary** - Aggregate values for the whole meal

---

## Ingredient Lines

Write each line the way it would appear in a recipe, quantity first:

- `200g poulet grillé`
- `1 tasse de riz`
- `2 cuillères à soupe d'huile d'olive`
- `100g d'épinards crus`

Lines may be French or English. French culinary vocabulary (foods, units,
preparation adjectives) is translated word-by-word before analysis; words
outside the dictionary pass through unchanged, which the nutrition service
usually still understands. Use `preview_translation` to see exactly what
will be submitted.

**One ingredient per line.** The analysis is a single batch over all lines,
so a compound line like "chicken and rice with oil" gives worse results
than three separate lines.

## Analysis Modes

The service runs in one of two modes, chosen at startup (`mna_status`
reports which):

- **simulate** (default) - Results are synthesized locally from the
  ingredient count. Shapes and units are realistic but the numbers are not
  real nutrition data. Total weight is exactly 200g per ingredient.
- **live** - Lines are submitted to an Edamam-compatible endpoint and the
  numbers are real. Requires credentials; the server refuses to start in
  live mode without them.

Never present simulated numbers as real nutrition advice. Check the mode
first if it matters to the user.

## Reading the Summary

`analyze_nutrition` (and `get_last_analysis`) return:

- `macros` - calories, protein_g, carbs_g, fat_g, rounded to whole units
- `details` - fiber_g, sugar_g, saturated_fat_g, sodium_mg, two decimals
- `breakdown` - protein/carbs/fat grams plus each one's percentage share
  of their combined total (all 0% for an all-zero result)
- `total_weight_g` - estimated weight of the whole meal
- `diet_labels` / `health_labels` - as reported by the analysis service

## Failure Behavior

If the nutrition endpoint fails (non-2xx status or a network error), the
analysis reports a single failure and **keeps the ingredient list intact**.
Retry by calling `analyze_nutrition` again; nothing needs re-entering. The
failure detail is available from `get_last_analysis` under `last_error`.

A failed translation never fails the batch: any line whose translation
fails is submitted in its original form.

## Quick Reference

| Task | Tool |
|------|------|
| Add an ingredient line | `add_ingredient` |
| Remove one line by id | `remove_ingredient` |
| List current lines | `list_ingredients` |
| Discard everything | `clear_session` |
| Analyze the current meal | `analyze_nutrition` |
| Re-read the last result | `get_last_analysis` |
| See the translated lines | `preview_translation` |
| Service mode and health | `mna_status` |

## Common Scenarios

### Analyzing a simple meal
1. `add_ingredient(text: "200g poulet grillé")`
2. `add_ingredient(text: "1 tasse de riz")`
3. `analyze_nutrition()`

### Correcting a mistaken line
1. `list_ingredients()` - Find the line's id
2. `remove_ingredient(id: 3)`
3. `add_ingredient(text: "150g saumon cuit")`
4. `analyze_nutrition()` - Re-analyze the corrected meal

### Starting over
`clear_session()` discards the ingredient list and the last result. Any
analysis still running is discarded too; its outcome will not reappear.

## Notes

- Ingredient ids are unique within the session and never reused
- Adding or removing lines does not re-analyze automatically; call
  `analyze_nutrition` after editing
- All state is in memory and scoped to this server process; nothing is
  persisted across restarts
"#;

/// Runtime status of the MNA service
#[derive(Debug, Clone, Serialize)]
pub struct MnaStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Configured modes
    pub analysis_mode: &'static str,
    pub translator_mode: &'static str,

    /// Session information
    pub ingredient_count: usize,
    pub analysis_in_progress: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    analysis_mode: &'static str,
    translator_mode: &'static str,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(analysis_mode: &'static str, translator_mode: &'static str) -> Self {
        Self {
            start_time: Instant::now(),
            analysis_mode,
            translator_mode,
        }
    }

    /// Get the current status
    pub fn get_status(&self, ingredient_count: usize, analysis_in_progress: bool) -> MnaStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MnaStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            analysis_mode: self.analysis_mode,
            translator_mode: self.translator_mode,
            ingredient_count,
            analysis_in_progress,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_modes_and_session() {
        let tracker = StatusTracker::new("simulate", "dictionary");
        let status = tracker.get_status(3, false);

        assert_eq!(status.analysis_mode, "simulate");
        assert_eq!(status.translator_mode, "dictionary");
        assert_eq!(status.ingredient_count, 3);
        assert!(!status.analysis_in_progress);
        assert!(!status.version.is_empty());
    }
}
