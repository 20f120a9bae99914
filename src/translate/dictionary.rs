//! Built-in French-to-English dictionary translator
//!
//! Covers the culinary vocabulary that shows up in ingredient lines: foods,
//! measurement units, and preparation adjectives. Matching is whole-word and
//! case-insensitive; anything outside the dictionary passes through
//! untouched, so the result is always defined.

use std::collections::HashMap;

use async_trait::async_trait;
use regex::Regex;

use super::Translator;

/// French culinary terms and their English equivalents
const TRANSLATIONS: &[(&str, &str)] = &[
    // Meats and fish
    ("poulet", "chicken"),
    ("boeuf", "beef"),
    ("porc", "pork"),
    ("agneau", "lamb"),
    ("dinde", "turkey"),
    ("saumon", "salmon"),
    ("thon", "tuna"),
    ("crevettes", "shrimp"),
    ("jambon", "ham"),
    ("oeuf", "egg"),
    ("oeufs", "eggs"),
    // Vegetables
    ("tomate", "tomato"),
    ("tomates", "tomatoes"),
    ("carotte", "carrot"),
    ("carottes", "carrots"),
    ("brocoli", "broccoli"),
    ("brocolis", "broccoli"),
    ("épinards", "spinach"),
    ("epinards", "spinach"),
    ("salade", "lettuce"),
    ("concombre", "cucumber"),
    ("oignon", "onion"),
    ("oignons", "onions"),
    ("ail", "garlic"),
    ("pomme de terre", "potato"),
    ("pommes de terre", "potatoes"),
    ("courgette", "zucchini"),
    ("courgettes", "zucchini"),
    ("aubergine", "eggplant"),
    ("poivron", "bell pepper"),
    ("poivrons", "bell peppers"),
    ("haricots vert", "green beans"),
    // Fruits
    ("pomme", "apple"),
    ("pommes", "apples"),
    ("banane", "banana"),
    ("bananes", "bananas"),
    ("orange", "orange"),
    ("oranges", "oranges"),
    ("fraise", "strawberry"),
    ("fraises", "strawberries"),
    ("raisin", "grapes"),
    ("raisins", "grapes"),
    // Grains and starches
    ("riz", "rice"),
    ("pates", "pasta"),
    ("pain", "bread"),
    ("quinoa", "quinoa"),
    ("avoine", "oats"),
    ("blé", "wheat"),
    ("ble", "wheat"),
    // Dairy
    ("lait", "milk"),
    ("fromage", "cheese"),
    ("yaourt", "yogurt"),
    ("beurre", "butter"),
    ("crème", "cream"),
    // Legumes
    ("haricots", "beans"),
    ("lentilles", "lentils"),
    ("pois chiches", "chickpeas"),
    // Oils and fats
    ("huile", "oil"),
    ("huile d'olive", "olive oil"),
    // Measurement units
    ("gramme", "gram"),
    ("grammes", "grams"),
    ("kilogramme", "kilogram"),
    ("kilogrammes", "kilograms"),
    ("tasse", "cup"),
    ("tasses", "cups"),
    ("cuillère", "spoon"),
    ("cuillères", "spoons"),
    ("cuillère à soupe", "tablespoon"),
    ("cuillères à soupe", "tablespoons"),
    ("cuillère à café", "teaspoon"),
    ("cuillères à café", "teaspoons"),
    // Preparations
    ("grillé", "grilled"),
    ("grillée", "grilled"),
    ("grillés", "grilled"),
    ("grillées", "grilled"),
    ("cuit", "cooked"),
    ("cuite", "cooked"),
    ("cuits", "cooked"),
    ("cuites", "cooked"),
    ("cru", "raw"),
    ("crue", "raw"),
    ("crus", "raw"),
    ("crues", "raw"),
    ("bouilli", "boiled"),
    ("bouillie", "boiled"),
    ("bouillis", "boiled"),
    ("bouillies", "boiled"),
    ("frit", "fried"),
    ("frite", "fried"),
    ("frits", "fried"),
    ("frites", "fried"),
];

/// Whole-word dictionary substitution over ingredient phrases
pub struct DictionaryTranslator {
    pattern: Regex,
    entries: HashMap<&'static str, &'static str>,
}

impl DictionaryTranslator {
    pub fn new() -> Self {
        let entries: HashMap<&'static str, &'static str> =
            TRANSLATIONS.iter().copied().collect();

        // Longer keys first so "pommes de terre" wins over "pommes".
        // Alternation in the regex crate prefers earlier branches.
        let mut keys: Vec<&str> = entries.keys().copied().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern =
            Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("Invalid regex");

        Self { pattern, entries }
    }

    /// Translate one phrase. Only dictionary words are replaced; everything
    /// else, including casing of unmatched text, is preserved byte-for-byte.
    pub fn translate_phrase(&self, phrase: &str) -> String {
        let mut out = String::with_capacity(phrase.len());
        let mut last = 0;
        for m in self.pattern.find_iter(phrase) {
            out.push_str(&phrase[last..m.start()]);
            let key = m.as_str().to_lowercase();
            match self.entries.get(key.as_str()) {
                Some(translated) => out.push_str(translated),
                None => out.push_str(m.as_str()),
            }
            last = m.end();
        }
        out.push_str(&phrase[last..]);
        out
    }
}

impl Default for DictionaryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for DictionaryTranslator {
    async fn translate_batch(&self, phrases: &[String]) -> Vec<String> {
        phrases.iter().map(|p| self.translate_phrase(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_known_words() {
        let translator = DictionaryTranslator::new();
        assert_eq!(
            translator.translate_phrase("200g poulet grillé"),
            "200g chicken grilled"
        );
        assert_eq!(translator.translate_phrase("100g riz cuit"), "100g rice cooked");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let translator = DictionaryTranslator::new();
        assert_eq!(translator.translate_phrase("Poulet GRILLÉ"), "chicken grilled");
        assert_eq!(translator.translate_phrase("Épinards crus"), "spinach raw");
    }

    #[test]
    fn test_longest_phrase_wins() {
        let translator = DictionaryTranslator::new();
        assert_eq!(
            translator.translate_phrase("300g pommes de terre bouillies"),
            "300g potatoes boiled"
        );
        assert_eq!(
            translator.translate_phrase("une cuillère à soupe d'huile d'olive"),
            "une tablespoon d'olive oil"
        );
    }

    #[test]
    fn test_whole_word_only() {
        let translator = DictionaryTranslator::new();
        // "thon", "ail", and "pain" appear inside these words and must not
        // be replaced
        assert_eq!(translator.translate_phrase("marathon"), "marathon");
        assert_eq!(translator.translate_phrase("travail"), "travail");
        assert_eq!(translator.translate_phrase("copain"), "copain");
    }

    #[test]
    fn test_unknown_phrase_unchanged() {
        let translator = DictionaryTranslator::new();
        assert_eq!(
            translator.translate_phrase("Some English Text 123"),
            "Some English Text 123"
        );
        assert_eq!(translator.translate_phrase(""), "");
    }

    #[test]
    fn test_unmatched_tokens_keep_casing() {
        let translator = DictionaryTranslator::new();
        // Only dictionary words change; the rest of the phrase is preserved
        assert_eq!(
            translator.translate_phrase("150g Saumon avec Sauce Maison"),
            "150g salmon avec Sauce Maison"
        );
    }

    #[tokio::test]
    async fn test_batch_preserves_length_and_order() {
        let translator = DictionaryTranslator::new();
        let phrases = vec![
            "200g poulet".to_string(),
            "mystère total".to_string(),
            "100g riz".to_string(),
        ];
        let out = translator.translate_batch(&phrases).await;
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], "200g chicken");
        assert_eq!(out[1], "mystère total");
        assert_eq!(out[2], "100g rice");
    }
}
