use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::category::CategoryTable;
use crate::config::{ResolverConfig, ScoringWeights};
use crate::error::MatchError;
use crate::resolver::ImageResolver;

/// Where the image catalog comes from
#[derive(Debug, Clone, Default)]
enum CatalogSource {
    /// The catalog shipped with the crate
    #[default]
    Embedded,
    /// A JSON string supplied by the caller
    Json(String),
    /// A JSON file on disk
    File(PathBuf),
}

/// Builder for configuring an [`ImageResolver`]
///
/// # Example
/// ```
/// use food_image_match::ImageResolver;
///
/// let resolver = ImageResolver::builder()
///     .base_url("https://foodish-api.com")
///     .acceptance_threshold(0.2)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ImageResolverBuilder {
    catalog: CatalogSource,
    base_url: Option<String>,
    acceptance_threshold: Option<f64>,
    timeout: Option<u64>,
    probe_timeout: Option<u64>,
    weights: Option<ScoringWeights>,
}

impl ImageResolverBuilder {
    /// Use a catalog provided as a JSON string
    ///
    /// The format maps image paths to per-language descriptions; a bare
    /// string value is treated as the English description.
    pub fn catalog_json(mut self, json: impl Into<String>) -> Self {
        self.catalog = CatalogSource::Json(json.into());
        self
    }

    /// Load the catalog from a JSON file on disk
    pub fn catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = CatalogSource::File(path.into());
        self
    }

    /// Set the corpus host base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the minimum description-match score the resolver will trust
    pub fn acceptance_threshold(mut self, threshold: f64) -> Self {
        self.acceptance_threshold = Some(threshold);
        self
    }

    /// Set the request timeout in seconds for corpus host API calls
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the timeout in seconds for image existence probes
    pub fn probe_timeout(mut self, seconds: u64) -> Self {
        self.probe_timeout = Some(seconds);
        self
    }

    /// Override the description matcher's scoring weights
    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Build the resolver
    ///
    /// # Errors
    /// Returns `MatchError` if a caller-supplied catalog cannot be read
    /// or parsed, or the threshold is outside [0.0, 1.0].
    pub fn build(self) -> Result<ImageResolver, MatchError> {
        if let Some(threshold) = self.acceptance_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(MatchError::BuilderError(format!(
                    "acceptance threshold must be within [0.0, 1.0], got {}",
                    threshold
                )));
            }
        }

        let catalog = match self.catalog {
            CatalogSource::Embedded => Catalog::embedded(),
            CatalogSource::Json(json) => Catalog::from_json_str(&json)?,
            CatalogSource::File(path) => Catalog::from_file(path)?,
        };

        let defaults = ResolverConfig::default();
        let config = ResolverConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            acceptance_threshold: self
                .acceptance_threshold
                .unwrap_or(defaults.acceptance_threshold),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            probe_timeout: self.probe_timeout.unwrap_or(defaults.probe_timeout),
            weights: self.weights.unwrap_or(defaults.weights),
        };

        Ok(ImageResolver::new(
            Arc::new(catalog),
            CategoryTable::embedded(),
            &config,
        ))
    }
}
