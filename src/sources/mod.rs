mod mealdb;

pub use mealdb::MealDbSource;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::model::{RecipeDetail, RecipeSummary};

/// Read-only view of a recipe lookup service
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "themealdb")
    fn source_name(&self) -> &str;

    /// Recipes that use the given ingredient
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, SearchError>;

    /// Recipes whose name matches the free-text term
    async fn search_by_name(&self, name: &str) -> Result<Vec<RecipeSummary>, SearchError>;

    /// Recipes in the given category
    async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<RecipeSummary>, SearchError>;

    /// Full record for one identifier, if it exists
    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, SearchError>;

    /// One random recipe, if the service returned any
    async fn random(&self) -> Result<Option<RecipeSummary>, SearchError>;
}
