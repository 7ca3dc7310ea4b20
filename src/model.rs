use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Minimal recipe representation returned by the filter and search endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// Full recipe record as returned by the lookup endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Remaining fields, including the numbered `strIngredientN` / `strMeasureN` pairs
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl From<&RecipeDetail> for RecipeSummary {
    fn from(detail: &RecipeDetail) -> Self {
        RecipeSummary {
            id: detail.id.clone(),
            name: detail.name.clone(),
            thumbnail: detail.thumbnail.clone(),
        }
    }
}

/// Response envelope used by every endpoint of the service.
///
/// `meals` is `null` (or missing) when nothing matched.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Deduplicated, ordered, capped sequence of summaries produced by one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    recipes: Vec<RecipeSummary>,
}

impl AggregationResult {
    pub fn new(recipes: Vec<RecipeSummary>) -> Self {
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&RecipeSummary> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Identifiers in result order
    pub fn ids(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeSummary> {
        self.recipes.iter()
    }
}

impl IntoIterator for AggregationResult {
    type Item = RecipeSummary;
    type IntoIter = std::vec::IntoIter<RecipeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregationResult {
    type Item = &'a RecipeSummary;
    type IntoIter = std::slice::Iter<'a, RecipeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
