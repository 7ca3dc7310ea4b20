pub mod aggregator;
pub mod category;
pub mod config;
pub mod controller;
pub mod detail;
pub mod error;
pub mod merge;
pub mod model;
pub mod quotes;
pub mod sources;

pub use aggregator::SearchAggregator;
pub use config::{FaultPolicy, SearchConfig};
pub use controller::{Outcome, SearchController};
pub use detail::Ingredient;
pub use error::SearchError;
pub use merge::SearchLimits;
pub use model::{AggregationResult, RecipeDetail, RecipeSummary};
pub use sources::{MealDbSource, RecipeSource};

/// Build an aggregator over TheMealDB from `mealdb.toml` / `MEALDB__*` settings.
pub fn aggregator_from_env() -> Result<SearchAggregator<MealDbSource>, SearchError> {
    let config = SearchConfig::load()?;
    let source = MealDbSource::from_config(&config)?;
    Ok(SearchAggregator::from_config(source, &config))
}

/// Search TheMealDB for an ingredient term with the loaded configuration.
pub async fn search_recipes(term: &str) -> Result<AggregationResult, SearchError> {
    aggregator_from_env()?.search(term).await
}

/// Fetch one random recipe with the loaded configuration.
pub async fn random_recipe() -> Result<AggregationResult, SearchError> {
    aggregator_from_env()?.random().await
}
