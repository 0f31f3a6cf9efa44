use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, RwLock};

use log::info;
use serde::Deserialize;

use crate::error::MatchError;
use crate::text;

/// Per-image descriptions produced by the offline labeling pipeline.
///
/// The current format maps language codes to description strings. Older
/// catalog files carry a bare string, which is treated as the English entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Descriptions {
    PerLanguage(HashMap<String, String>),
    Single(String),
}

impl Descriptions {
    /// Resolve the description for `language`, falling back to "en".
    /// Returns None when no usable (non-empty) description exists.
    pub fn for_language(&self, language: &str) -> Option<&str> {
        let description = match self {
            Descriptions::PerLanguage(map) => map
                .get(language)
                .or_else(|| map.get("en"))
                .map(String::as_str),
            Descriptions::Single(text) => Some(text.as_str()),
        };
        description.filter(|text| !text.is_empty())
    }
}

/// Structured view of one description string, derived once and memoized.
///
/// Descriptions follow the form "<food name> with <ing1>, <ing2>, ...".
/// A string without the " with " delimiter is all food name, no ingredients.
#[derive(Debug, Clone)]
pub struct ParsedDescription {
    pub food_name: String,
    pub ingredients: Vec<String>,
    pub keywords: HashSet<String>,
}

impl ParsedDescription {
    fn parse(description: &str) -> Self {
        let lower = description.to_lowercase();

        let (food_name, ingredients_str) = match lower.split_once(" with ") {
            Some((name, rest)) => (name.trim().to_string(), rest.trim()),
            None => (lower.trim().to_string(), ""),
        };

        let ingredients: Vec<String> = ingredients_str
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();

        let mut keywords: HashSet<String> = HashSet::new();
        keywords.insert(food_name.clone());
        keywords.extend(ingredients.iter().cloned());
        for token in lower.split_whitespace() {
            let token = text::strip_punctuation(token);
            if token.chars().count() > 2 {
                keywords.insert(token);
            }
        }

        ParsedDescription {
            food_name,
            ingredients,
            keywords,
        }
    }
}

/// The static image catalog: image path -> per-language descriptions.
///
/// Entries are kept in a BTreeMap so every scoring pass iterates in
/// image_path order, which makes tie-breaking deterministic.
///
/// The parse cache is keyed by the raw description string rather than the
/// image path: many images share identical description text. Recomputing an
/// entry on a write race is wasted work, not a correctness problem, so a
/// plain RwLock is enough.
pub struct Catalog {
    entries: BTreeMap<String, Descriptions>,
    parse_cache: RwLock<HashMap<String, Arc<ParsedDescription>>>,
}

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

impl Catalog {
    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, MatchError> {
        let entries: BTreeMap<String, Descriptions> = serde_json::from_str(json)?;
        info!("Loaded {} image descriptions", entries.len());
        Ok(Catalog {
            entries,
            parse_cache: RwLock::new(HashMap::new()),
        })
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MatchError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The catalog shipped with the crate.
    pub fn embedded() -> Self {
        Self::from_json_str(EMBEDDED_CATALOG).expect("embedded catalog is valid JSON")
    }

    /// An empty catalog. Matching against it always returns no result.
    pub fn empty() -> Self {
        Catalog {
            entries: BTreeMap::new(),
            parse_cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in image_path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Descriptions)> {
        self.entries.iter()
    }

    /// Get the parsed form of a description, computing and caching it on
    /// first sight of this exact string.
    pub fn parsed(&self, description: &str) -> Arc<ParsedDescription> {
        if let Ok(cache) = self.parse_cache.read() {
            if let Some(parsed) = cache.get(description) {
                return Arc::clone(parsed);
            }
        }

        let parsed = Arc::new(ParsedDescription::parse(description));
        if let Ok(mut cache) = self.parse_cache.write() {
            cache.insert(description.to_string(), Arc::clone(&parsed));
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_description_with_delimiter() {
        let parsed = ParsedDescription::parse("ice cream with vanilla, chocolate chips");
        assert_eq!(parsed.food_name, "ice cream");
        assert_eq!(parsed.ingredients, vec!["vanilla", "chocolate chips"]);
        assert!(parsed.keywords.contains("ice cream"));
        assert!(parsed.keywords.contains("vanilla"));
        assert!(parsed.keywords.contains("chocolate"));
        assert!(parsed.keywords.contains("chips"));
    }

    #[test]
    fn test_parse_description_without_delimiter() {
        let parsed = ParsedDescription::parse("Plain Cheesecake");
        assert_eq!(parsed.food_name, "plain cheesecake");
        assert!(parsed.ingredients.is_empty());
    }

    #[test]
    fn test_parse_drops_short_tokens() {
        let parsed = ParsedDescription::parse("pie with an egg");
        // "an" is too short to be a keyword on its own
        assert!(!parsed.keywords.contains("an"));
        assert!(parsed.keywords.contains("egg"));
    }

    #[test]
    fn test_descriptions_language_fallback() {
        let mut map = HashMap::new();
        map.insert("en".to_string(), "pizza with cheese".to_string());
        let descriptions = Descriptions::PerLanguage(map);

        assert_eq!(descriptions.for_language("ja"), Some("pizza with cheese"));
        assert_eq!(descriptions.for_language("en"), Some("pizza with cheese"));
    }

    #[test]
    fn test_descriptions_bare_string_variant() {
        let descriptions = Descriptions::Single("burger with beef".to_string());
        assert_eq!(descriptions.for_language("ko"), Some("burger with beef"));
    }

    #[test]
    fn test_descriptions_empty_is_none() {
        let descriptions = Descriptions::Single(String::new());
        assert_eq!(descriptions.for_language("en"), None);
    }

    #[test]
    fn test_catalog_from_json_bare_string_variant() {
        let catalog = Catalog::from_json_str(
            r#"{"rice/rice1.jpg": "fried rice with egg", "pizza/pizza1.jpg": {"en": "pizza with cheese"}}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_iterates_in_path_order() {
        let catalog = Catalog::from_json_str(
            r#"{"b/b1.jpg": "b", "a/a1.jpg": "a", "c/c1.jpg": "c"}"#,
        )
        .unwrap();
        let paths: Vec<&String> = catalog.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["a/a1.jpg", "b/b1.jpg", "c/c1.jpg"]);
    }

    #[test]
    fn test_parse_cache_returns_same_instance() {
        let catalog = Catalog::empty();
        let first = catalog.parsed("cake with flour");
        let second = catalog.parsed("cake with flour");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded();
        assert!(!catalog.is_empty());
        // every embedded entry must carry an English description
        for (path, descriptions) in catalog.iter() {
            assert!(
                descriptions.for_language("en").is_some(),
                "missing en description for {}",
                path
            );
        }
    }
}
