//! Match generated recipes to stock food photos.
//!
//! Given a recipe title and ingredient list in any of the supported
//! languages, the resolver picks the best-fitting image from a corpus of
//! pre-described stock photos, degrading gracefully through a chain of
//! strategies:
//!
//! 1. description similarity against the labeled catalog
//! 2. coarse category classification plus a deterministic image index
//! 3. a random image from the matched category
//! 4. a random image from the whole corpus
//!
//! Every candidate URL is verified with a lightweight existence probe
//! before it is returned. Resolution never fails hard: the worst outcome
//! is `None`, and callers render a default visual instead.

pub mod builder;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod host;
pub mod matcher;
pub mod model;
pub mod resolver;
pub mod text;

use log::warn;

pub use builder::ImageResolverBuilder;
pub use catalog::{Catalog, Descriptions, ParsedDescription};
pub use category::CategoryTable;
pub use config::{ResolverConfig, ScoringWeights};
pub use error::MatchError;
pub use host::ImageHost;
pub use matcher::DescriptionMatcher;
pub use model::{MatchCandidate, Query};
pub use resolver::ImageResolver;

/// Resolve an image URL for a recipe using the embedded catalog and the
/// configuration from `config.toml` / `FOODMATCH__` environment variables.
///
/// Convenience wrapper around [`ImageResolver`]; construct one explicitly
/// (via [`ImageResolver::builder`]) to reuse the catalog across calls.
pub async fn find_food_image(
    title: &str,
    ingredients: &[String],
    language: &str,
) -> Option<String> {
    let config = match ResolverConfig::load() {
        Ok(config) => config,
        Err(error) => {
            warn!("Failed to load configuration, using defaults: {}", error);
            ResolverConfig::default()
        }
    };

    let resolver = ImageResolver::from_config(&config);
    let query = Query::new(title, ingredients.to_vec(), language);
    resolver.resolve(&query).await
}
