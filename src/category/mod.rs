mod select;

use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::Deserialize;

use crate::error::MatchError;

/// Coarse category tables for the fallback image resolver.
///
/// The table is a data file, not code: phrase lists, per-category keyword
/// lists for 27 languages, a generic fallback list, per-category image-count
/// bounds and sub-range narrowing rules all come from one embedded JSON
/// resource. The category set is closed; nothing is added at runtime.
pub struct CategoryTable {
    available: HashSet<String>,
    phrases: Vec<(String, Vec<String>)>,
    keywords: Vec<(String, Vec<CompiledKeyword>)>,
    fallback: Vec<(String, Vec<String>)>,
    bounds: HashMap<String, u32>,
    sub_ranges: HashMap<String, Vec<SubRange>>,
}

/// A keyword with its pre-compiled whole-word pattern.
struct CompiledKeyword {
    text: String,
    word_re: Regex,
}

#[derive(Debug, Deserialize)]
struct SubRange {
    keywords: Vec<String>,
    bound: u32,
}

#[derive(Deserialize)]
struct RawTable {
    available: Vec<String>,
    phrases: Vec<RawPhraseGroup>,
    keywords: Vec<RawKeywordGroup>,
    fallback: Vec<RawKeywordGroup>,
    bounds: HashMap<String, u32>,
    sub_ranges: HashMap<String, Vec<SubRange>>,
}

#[derive(Deserialize)]
struct RawPhraseGroup {
    category: String,
    phrases: Vec<String>,
}

#[derive(Deserialize)]
struct RawKeywordGroup {
    category: String,
    keywords: Vec<String>,
}

const EMBEDDED_TABLE: &str = include_str!("../../data/categories.json");

impl CategoryTable {
    /// Parse a category table from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, MatchError> {
        let raw: RawTable = serde_json::from_str(json)?;

        let keywords = raw
            .keywords
            .into_iter()
            .map(|group| {
                let compiled = group
                    .keywords
                    .into_iter()
                    .map(|text| {
                        // Escaped literals always compile
                        let word_re = Regex::new(&format!(r"\b{}\b", regex::escape(&text)))
                            .expect("escaped keyword pattern is valid");
                        CompiledKeyword { text, word_re }
                    })
                    .collect();
                (group.category, compiled)
            })
            .collect();

        Ok(CategoryTable {
            available: raw.available.into_iter().collect(),
            phrases: raw
                .phrases
                .into_iter()
                .map(|group| (group.category, group.phrases))
                .collect(),
            keywords,
            fallback: raw
                .fallback
                .into_iter()
                .map(|group| (group.category, group.keywords))
                .collect(),
            bounds: raw.bounds,
            sub_ranges: raw.sub_ranges,
        })
    }

    /// The category table shipped with the crate.
    pub fn embedded() -> Self {
        Self::from_json_str(EMBEDDED_TABLE).expect("embedded category table is valid JSON")
    }

    /// Known corpus size for a category, if the category is known.
    pub fn bound(&self, category: &str) -> Option<u32> {
        self.bounds.get(category).copied()
    }

    /// Classify a recipe into a category, or None when nothing fits.
    ///
    /// Strategies run in strict priority order, returning on first hit:
    /// 1. multi-word phrase substring over title + ingredients
    /// 2. whole-word keyword match against the title alone
    /// 3. whole-word keyword match against title + ingredients
    /// 4. raw keyword substring within the ingredients text
    /// 5. partial-word match between combined-text tokens and keywords
    /// then a final short generic table ("sweet", "grain", ...).
    ///
    /// Phrases run before keywords so that short tokens such as "ice"
    /// cannot mis-trigger through substring overlap with "rice".
    pub fn classify(&self, title: &str, ingredients: &[String]) -> Option<&str> {
        let title_lower = title.to_lowercase();
        let ingredients_text = ingredients.join(" ").to_lowercase();
        let combined = format!("{} {}", title_lower, ingredients_text);

        // 1. Multi-word phrases
        for (category, phrases) in &self.phrases {
            if !self.available.contains(category) {
                continue;
            }
            if phrases.iter().any(|phrase| combined.contains(phrase.as_str())) {
                return Some(category.as_str());
            }
        }

        // 2. Whole-word title match
        for (category, keywords) in &self.keywords {
            if !self.available.contains(category) {
                continue;
            }
            if keywords.iter().any(|kw| kw.word_re.is_match(&title_lower)) {
                return Some(category.as_str());
            }
        }

        // 3. Whole-word combined-text match
        for (category, keywords) in &self.keywords {
            if !self.available.contains(category) {
                continue;
            }
            if keywords.iter().any(|kw| kw.word_re.is_match(&combined)) {
                return Some(category.as_str());
            }
        }

        // 4. Raw substring within ingredients
        if !ingredients_text.is_empty() {
            for (category, keywords) in &self.keywords {
                if !self.available.contains(category) {
                    continue;
                }
                if keywords
                    .iter()
                    .any(|kw| ingredients_text.contains(kw.text.as_str()))
                {
                    return Some(category.as_str());
                }
            }
        }

        // 5. Partial-word match, e.g. "burger" inside "cheeseburgers".
        // Only the keyword-inside-token direction is checked, and only for
        // keywords of four or more characters: token-inside-keyword would
        // send "chicken" to butter-chicken and let two-letter keywords
        // fire inside unrelated words.
        for word in combined.split_whitespace() {
            for (category, keywords) in &self.keywords {
                if !self.available.contains(category) {
                    continue;
                }
                if keywords
                    .iter()
                    .any(|kw| kw.text.chars().count() >= 4 && word.contains(kw.text.as_str()))
                {
                    return Some(category.as_str());
                }
            }
        }

        // Generic food-type fallback
        for (category, keywords) in &self.fallback {
            if !self.available.contains(category) {
                continue;
            }
            if keywords.iter().any(|kw| combined.contains(kw.as_str())) {
                return Some(category.as_str());
            }
        }

        None
    }
}
