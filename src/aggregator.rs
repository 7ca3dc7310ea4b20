use log::{debug, info, warn};

use crate::category::category_for;
use crate::config::{FaultPolicy, SearchConfig};
use crate::error::SearchError;
use crate::merge::{merge, SearchLimits};
use crate::model::{AggregationResult, RecipeDetail, RecipeSummary};
use crate::sources::RecipeSource;

/// Combines ingredient, name and category lookups into one capped result.
///
/// Holds no state between calls; every search starts from scratch.
pub struct SearchAggregator<S> {
    source: S,
    policy: FaultPolicy,
    limits: SearchLimits,
}

impl<S: RecipeSource> SearchAggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: FaultPolicy::default(),
            limits: SearchLimits::default(),
        }
    }

    /// Create an aggregator using the policy and limits from configuration
    pub fn from_config(source: S, config: &SearchConfig) -> Self {
        Self {
            source,
            policy: config.policy,
            limits: config.limits(),
        }
    }

    pub fn with_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Search for recipes matching an ingredient term.
    ///
    /// The ingredient and name queries always run; the category query runs only
    /// when the term is one of the known aliases. All issued queries run
    /// concurrently and are merged in ingredient > name > category order.
    ///
    /// # Errors
    /// Returns `SearchError::EmptyTerm` without issuing any request when the
    /// trimmed term is empty. Query failures are handled per the configured
    /// [`FaultPolicy`].
    pub async fn search(&self, term: &str) -> Result<AggregationResult, SearchError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(SearchError::EmptyTerm);
        }

        let category = category_for(term);
        debug!(
            "Searching {} for '{}' (category: {:?})",
            self.source.source_name(),
            term,
            category
        );

        let (by_ingredient, by_name, by_category) = tokio::join!(
            self.source.filter_by_ingredient(term),
            self.source.search_by_name(term),
            async {
                match category {
                    Some(category) => Some(self.source.filter_by_category(category).await),
                    None => None,
                }
            }
        );

        let (by_ingredient, by_name, by_category) = match self.policy {
            FaultPolicy::FailFast => (
                by_ingredient?,
                by_name?,
                by_category.transpose()?.unwrap_or_default(),
            ),
            FaultPolicy::Isolated => isolate(by_ingredient, by_name, by_category)?,
        };

        let result = merge(by_ingredient, by_name, by_category, self.limits);
        info!("Search for '{}' found {} recipes", term, result.len());
        Ok(result)
    }

    /// Fetch a single random recipe; empty when the service returned none.
    pub async fn random(&self) -> Result<AggregationResult, SearchError> {
        let recipe = self.source.random().await?;
        Ok(AggregationResult::new(recipe.into_iter().collect()))
    }

    /// Fetch the full record for one identifier.
    pub async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, SearchError> {
        self.source.lookup(id.trim()).await
    }
}

type QueryResult = Result<Vec<RecipeSummary>, SearchError>;

/// Replace each failed query with an empty list, unless all of them failed.
fn isolate(
    by_ingredient: QueryResult,
    by_name: QueryResult,
    by_category: Option<QueryResult>,
) -> Result<(Vec<RecipeSummary>, Vec<RecipeSummary>, Vec<RecipeSummary>), SearchError> {
    let mut first_error = None;
    let mut succeeded = 0;

    let mut recover = |label: &str, result: QueryResult| match result {
        Ok(recipes) => {
            succeeded += 1;
            recipes
        }
        Err(e) => {
            warn!("{} query failed, continuing without it: {}", label, e);
            first_error.get_or_insert(e);
            Vec::new()
        }
    };

    let by_ingredient = recover("Ingredient", by_ingredient);
    let by_name = recover("Name", by_name);
    let by_category = by_category
        .map(|result| recover("Category", result))
        .unwrap_or_default();

    match first_error {
        Some(e) if succeeded == 0 => Err(e),
        _ => Ok((by_ingredient, by_name, by_category)),
    }
}
