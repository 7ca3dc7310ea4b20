use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::{MealsEnvelope, RecipeDetail, RecipeSummary};
use crate::sources::RecipeSource;

const FILTER: &str = "filter.php";
const SEARCH: &str = "search.php";
const LOOKUP: &str = "lookup.php";
const RANDOM: &str = "random.php";

/// HTTP client for TheMealDB JSON API
pub struct MealDbSource {
    client: Client,
    base_url: String,
}

impl MealDbSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mealdb-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a source from loaded configuration
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Self::new(config.base_url.clone(), Some(config.timeout()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and unwrap its `meals` envelope.
    ///
    /// The query value is percent-encoded by the request builder.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        param: Option<(&str, &str)>,
    ) -> Result<Vec<T>, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, param);

        let mut request = self.client.get(&url);
        if let Some(param) = param {
            request = request.query(&[param]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| SearchError::DecodeFailure(format!("{}: {}", endpoint, e)))?;
        let meals = envelope.into_vec();
        debug!("{} returned {} meals", endpoint, meals.len());
        Ok(meals)
    }
}

#[async_trait]
impl RecipeSource for MealDbSource {
    fn source_name(&self) -> &str {
        "themealdb"
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, SearchError> {
        self.fetch(FILTER, Some(("i", ingredient))).await
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<RecipeSummary>, SearchError> {
        self.fetch(SEARCH, Some(("s", name))).await
    }

    async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<RecipeSummary>, SearchError> {
        self.fetch(FILTER, Some(("c", category))).await
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, SearchError> {
        let meals: Vec<RecipeDetail> = self.fetch(LOOKUP, Some(("i", id))).await?;
        Ok(meals.into_iter().next())
    }

    async fn random(&self) -> Result<Option<RecipeSummary>, SearchError> {
        let meals: Vec<RecipeSummary> = self.fetch(RANDOM, None).await?;
        Ok(meals.into_iter().next())
    }
}
