use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main resolver configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ResolverConfig {
    /// Base URL of the image corpus host
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Minimum description-match score for the result to be trusted
    /// over the category fallback
    #[serde(default = "default_acceptance_threshold")]
    pub acceptance_threshold: f64,
    /// Request timeout in seconds for corpus host API calls
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Timeout in seconds for image existence probes (HEAD requests)
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout: u64,
    /// Scoring weights for the description matcher
    #[serde(default)]
    pub weights: ScoringWeights,
}

/// Weights for the four description-match signals. Each signal is capped
/// at its own weight; the total score is capped at 1.0.
///
/// These are empirically tuned constants. Changing them changes which
/// catalog image wins for borderline recipes.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ScoringWeights {
    /// Exact food-name substring match
    #[serde(default = "default_food_name_weight")]
    pub food_name: f64,
    /// Food-name token overlap
    #[serde(default = "default_name_overlap_weight")]
    pub name_overlap: f64,
    /// Fraction of description ingredients found in the recipe text
    #[serde(default = "default_ingredient_weight")]
    pub ingredients: f64,
    /// General keyword overlap
    #[serde(default = "default_keyword_weight")]
    pub keywords: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            food_name: default_food_name_weight(),
            name_overlap: default_name_overlap_weight(),
            ingredients: default_ingredient_weight(),
            keywords: default_keyword_weight(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            acceptance_threshold: default_acceptance_threshold(),
            timeout: default_timeout(),
            probe_timeout: default_probe_timeout(),
            weights: ScoringWeights::default(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://foodish-api.com".to_string()
}

fn default_acceptance_threshold() -> f64 {
    0.2
}

fn default_timeout() -> u64 {
    5
}

fn default_probe_timeout() -> u64 {
    2
}

fn default_food_name_weight() -> f64 {
    0.4
}

fn default_name_overlap_weight() -> f64 {
    0.2
}

fn default_ingredient_weight() -> f64 {
    0.3
}

fn default_keyword_weight() -> f64 {
    0.1
}

impl ResolverConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FOODMATCH__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FOODMATCH__BASE_URL, FOODMATCH__WEIGHTS__FOOD_NAME
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("FOODMATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "https://foodish-api.com");
        assert_eq!(default_acceptance_threshold(), 0.2);
        assert_eq!(default_timeout(), 5);
        assert_eq!(default_probe_timeout(), 2);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        let total = weights.food_name + weights.name_overlap + weights.ingredients + weights.keywords;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolver_config_default() {
        let config = ResolverConfig::default();
        assert_eq!(config.base_url, "https://foodish-api.com");
        assert_eq!(config.acceptance_threshold, 0.2);
        assert_eq!(config.weights.food_name, 0.4);
        assert_eq!(config.weights.ingredients, 0.3);
    }
}
