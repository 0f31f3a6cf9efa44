use serde::Serialize;

/// A recipe to find an image for.
#[derive(Debug, Clone, Serialize)]
pub struct Query {
    /// Recipe title
    pub title: String,
    /// Ingredient names (order irrelevant for matching)
    pub ingredients: Vec<String>,
    /// ISO-639-1-like language code; unrecognized codes fall back to "en"
    pub language: String,
}

impl Query {
    pub fn new(title: impl Into<String>, ingredients: Vec<String>, language: impl Into<String>) -> Self {
        Query {
            title: title.into(),
            ingredients,
            language: language.into(),
        }
    }

    /// Lowercased title and ingredients joined into one matching text.
    pub fn combined_text(&self) -> String {
        let mut parts = vec![self.title.clone()];
        parts.extend(self.ingredients.iter().cloned());
        parts.join(" ").to_lowercase()
    }

    /// Lowercased ingredients joined, without the title.
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join(" ").to_lowercase()
    }
}

/// One scored image during a single matching pass. Never persisted.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    /// Catalog identifier, "<category>/<filename>"
    pub image_path: String,
    /// Match score in [0.0, 1.0]
    pub score: f64,
    /// The language-specific description that produced the score
    pub description_used: String,
}
