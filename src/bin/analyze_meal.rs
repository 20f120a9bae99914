//! One-off meal analysis from the command line
//!
//! Each argument is one ingredient line. Uses the same MNA_* environment
//! configuration as the server; with no configuration it runs in simulation
//! mode with the built-in dictionary translator.

use mna::config::Config;
use mna::nutrition::{AnalysisSummary, NutritionClient};
use mna::translate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lines: Vec<String> = std::env::args().skip(1).collect();
    if lines.is_empty() {
        eprintln!("Usage: analyze_meal <ingredient line> [<ingredient line> ...]");
        eprintln!("Example: analyze_meal \"200g poulet grillé\" \"1 tasse de riz\"");
        std::process::exit(2);
    }

    let config = Config::from_env()?;
    let translator = translate::from_config(&config)?;
    let client = NutritionClient::from_config(&config)?;

    println!(
        "Analyzing {} ingredients ({} mode, {} translator)",
        lines.len(),
        config.mode.name(),
        config.translator.name()
    );

    let translated = translator.translate_batch(&lines).await;
    for (original, translated) in lines.iter().zip(&translated) {
        if original == translated {
            println!("  {}", original);
        } else {
            println!("  {} -> {}", original, translated);
        }
    }

    let result = client.analyze(&translated).await?;
    let summary = AnalysisSummary::from_result(&result);

    println!();
    println!("Calories: {} kcal", summary.macros.calories);
    println!(
        "Protein:  {} g ({}%)",
        summary.breakdown.protein.grams, summary.breakdown.protein.percent
    );
    println!(
        "Carbs:    {} g ({}%)",
        summary.breakdown.carbs.grams, summary.breakdown.carbs.percent
    );
    println!(
        "Fat:      {} g ({}%)",
        summary.breakdown.fat.grams, summary.breakdown.fat.percent
    );
    println!();
    println!("Fiber:         {} g", summary.details.fiber_g);
    println!("Sugars:        {} g", summary.details.sugar_g);
    println!("Saturated fat: {} g", summary.details.saturated_fat_g);
    println!("Sodium:        {} mg", summary.details.sodium_mg);
    println!();
    println!("Estimated total weight: {} g", summary.total_weight_g);
    if !summary.diet_labels.is_empty() {
        println!("Diet labels: {}", summary.diet_labels.join(", "));
    }
    if !summary.health_labels.is_empty() {
        println!("Health labels: {}", summary.health_labels.join(", "));
    }

    Ok(())
}
