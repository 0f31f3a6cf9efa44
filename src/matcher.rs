use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::catalog::{Catalog, ParsedDescription};
use crate::config::ScoringWeights;
use crate::model::MatchCandidate;
use crate::text;

/// Ranks catalog images by textual relevance to a recipe.
pub struct DescriptionMatcher {
    catalog: Arc<Catalog>,
    weights: ScoringWeights,
}

impl DescriptionMatcher {
    pub fn new(catalog: Arc<Catalog>, weights: ScoringWeights) -> Self {
        DescriptionMatcher { catalog, weights }
    }

    /// Find the best matching catalog image for a recipe.
    ///
    /// Descriptions are resolved in `language` with an "en" fallback.
    /// Candidates scoring 0 are dropped; an empty catalog yields None.
    /// Ties keep the first candidate in image_path order, so results are
    /// stable across runs.
    pub fn find_best_match(
        &self,
        title: &str,
        ingredients: &[String],
        language: &str,
    ) -> Option<MatchCandidate> {
        if self.catalog.is_empty() {
            return None;
        }

        let mut recipe_parts = vec![title.to_string()];
        recipe_parts.extend(ingredients.iter().cloned());
        let recipe_text = recipe_parts.join(" ").to_lowercase();
        let recipe_words = text::words(&recipe_text);

        let mut best: Option<MatchCandidate> = None;

        for (image_path, descriptions) in self.catalog.iter() {
            let Some(description) = descriptions.for_language(language) else {
                continue;
            };

            let parsed = self.catalog.parsed(description);
            let score = self.score(&recipe_text, &recipe_words, &parsed);
            if score <= 0.0 {
                continue;
            }

            let replace = match &best {
                Some(current) => score > current.score,
                None => true,
            };
            if replace {
                best = Some(MatchCandidate {
                    image_path: image_path.clone(),
                    score,
                    description_used: description.to_string(),
                });
            }
        }

        if let Some(candidate) = &best {
            debug!(
                "Best match: {} (score: {:.2}, lang: {}) - {}",
                candidate.image_path, candidate.score, language, candidate.description_used
            );
        }

        best
    }

    /// Weighted sum of four signals, each capped by its own weight, the
    /// total capped at 1.0.
    fn score(
        &self,
        recipe_text: &str,
        recipe_words: &HashSet<String>,
        parsed: &ParsedDescription,
    ) -> f64 {
        let weights = self.weights;
        let mut score = 0.0;

        // Exact food name containment
        if !parsed.food_name.is_empty() && recipe_text.contains(&parsed.food_name) {
            score += weights.food_name;
        }

        // Food name token overlap
        let name_words = text::words(&parsed.food_name);
        if !name_words.is_empty() {
            let overlap = name_words.intersection(recipe_words).count();
            score += weights.name_overlap * overlap as f64 / name_words.len() as f64;
        }

        // Ingredient coverage: an ingredient counts as matched when any of
        // its tokens longer than two characters appears in the recipe text
        if !parsed.ingredients.is_empty() {
            let matched = parsed
                .ingredients
                .iter()
                .filter(|ingredient| {
                    text::words(ingredient)
                        .iter()
                        .any(|word| word.chars().count() > 2 && recipe_text.contains(word.as_str()))
                })
                .count();
            score += weights.ingredients * matched as f64 / parsed.ingredients.len() as f64;
        }

        // General keyword overlap
        if !parsed.keywords.is_empty() {
            let overlap = recipe_words
                .iter()
                .filter(|word| parsed.keywords.contains(word.as_str()))
                .count();
            score += weights.keywords * overlap as f64 / parsed.keywords.len() as f64;
        }

        score.min(1.0)
    }
}
