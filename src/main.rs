use std::env;

use food_image_match::{ImageResolver, Query, ResolverConfig};
use log::warn;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: food-image-match [--lang CODE] TITLE [INGREDIENT]...
    let mut args = env::args().skip(1).peekable();

    let mut language = "en".to_string();
    if args.peek().map(String::as_str) == Some("--lang") {
        args.next();
        language = args
            .next()
            .ok_or("--lang requires a language code argument")?;
    }

    let title = args
        .next()
        .ok_or("Please provide a recipe title as an argument")?;
    let ingredients: Vec<String> = args.collect();

    let config = match ResolverConfig::load() {
        Ok(config) => config,
        Err(error) => {
            warn!("Failed to load configuration, using defaults: {}", error);
            ResolverConfig::default()
        }
    };

    let resolver = ImageResolver::from_config(&config);
    let query = Query::new(title, ingredients, language);

    match resolver.resolve(&query).await {
        Some(url) => println!("{}", url),
        None => println!("No image found"),
    }

    Ok(())
}
