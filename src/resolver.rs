use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::builder::ImageResolverBuilder;
use crate::catalog::Catalog;
use crate::category::CategoryTable;
use crate::config::ResolverConfig;
use crate::host::ImageHost;
use crate::matcher::DescriptionMatcher;
use crate::model::Query;

/// Resolves a recipe to an image URL through a layered fallback chain:
/// description matching, category matching with a deterministic index,
/// the category's random endpoint, then the fully random endpoint.
///
/// Resolution never fails hard. Every network error is logged and advances
/// the chain; the worst outcome is `None`, a recipe without an image.
pub struct ImageResolver {
    matcher: DescriptionMatcher,
    categories: CategoryTable,
    host: ImageHost,
    acceptance_threshold: f64,
}

impl ImageResolver {
    /// Build a resolver over an explicit catalog and category table.
    pub fn new(catalog: Arc<Catalog>, categories: CategoryTable, config: &ResolverConfig) -> Self {
        let host = ImageHost::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout),
            Duration::from_secs(config.probe_timeout),
        );
        ImageResolver {
            matcher: DescriptionMatcher::new(catalog, config.weights),
            categories,
            host,
            acceptance_threshold: config.acceptance_threshold,
        }
    }

    /// Build a resolver over the embedded catalog and category table.
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(Arc::new(Catalog::embedded()), CategoryTable::embedded(), config)
    }

    /// Creates a new builder for configuring a resolver
    pub fn builder() -> ImageResolverBuilder {
        ImageResolverBuilder::default()
    }

    /// Resolve an image URL for a recipe, or None if every stage fails.
    pub async fn resolve(&self, query: &Query) -> Option<String> {
        // Stage 1: description-based matching, the most precise source
        if let Some(candidate) =
            self.matcher
                .find_best_match(&query.title, &query.ingredients, &query.language)
        {
            if candidate.score >= self.acceptance_threshold {
                let url = self.host.image_url(&candidate.image_path);
                if self.host.probe(&url).await {
                    info!(
                        "Description match '{}' -> {} (score: {:.2})",
                        query.title, candidate.image_path, candidate.score
                    );
                    return Some(url);
                }
                debug!(
                    "Matched image {} not reachable, trying category fallback",
                    candidate.image_path
                );
            } else {
                debug!(
                    "Match score {:.2} below threshold {:.2} for '{}'",
                    candidate.score, self.acceptance_threshold, query.title
                );
            }
        }

        // Stage 2: category classification with a deterministic index
        if let Some(category) = self.categories.classify(&query.title, &query.ingredients) {
            let index = self
                .categories
                .select_index(category, &query.title, &query.ingredients);
            let url = self.host.indexed_image_url(category, index);
            if self.host.probe(&url).await {
                info!(
                    "Category match '{}' -> category: {}, image: {}",
                    query.title, category, index
                );
                return Some(url);
            }

            // The specific image is missing; let the host pick within the category
            match self.host.random_from_category(category).await {
                Ok(Some(url)) => {
                    info!(
                        "Category match '{}' -> {} (host-picked image)",
                        query.title, category
                    );
                    return Some(url);
                }
                Ok(None) => {
                    warn!("Corpus host returned no image for category {}", category);
                    return None;
                }
                Err(error) => {
                    warn!("Failed to fetch image for category {}: {}", category, error);
                    return None;
                }
            }
        }

        // Stage 3: nothing matched, take any image
        debug!("No match for '{}', requesting random image", query.title);
        match self.host.random().await {
            Ok(image) => image,
            Err(error) => {
                warn!("Failed to fetch random image: {}", error);
                None
            }
        }
    }
}
