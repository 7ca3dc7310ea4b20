use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::aggregator::SearchAggregator;
use crate::error::SearchError;
use crate::model::{AggregationResult, RecipeDetail, RecipeSummary};
use crate::sources::RecipeSource;

/// Label committed alongside a random pick
pub const RANDOM_LABEL: &str = "Random Recipe";

/// What happened to a request issued through the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was committed; carries the new result count
    Committed(usize),
    /// A newer request started before this one finished; its response was dropped
    Stale,
    /// Empty term; nothing was queried and nothing changed
    Skipped,
}

#[derive(Debug, Default)]
struct ViewState {
    results: AggregationResult,
    label: Option<String>,
    selected: Option<String>,
}

/// Caller-side owner of the current results.
///
/// Every request takes a fresh token; a response is committed only if no
/// newer request has started in the meantime.
pub struct SearchController<S> {
    aggregator: SearchAggregator<S>,
    latest: AtomicU64,
    state: Mutex<ViewState>,
}

impl<S: RecipeSource> SearchController<S> {
    pub fn new(aggregator: SearchAggregator<S>) -> Self {
        Self {
            aggregator,
            latest: AtomicU64::new(0),
            state: Mutex::new(ViewState::default()),
        }
    }

    pub fn aggregator(&self) -> &SearchAggregator<S> {
        &self.aggregator
    }

    /// Run a search and commit its result.
    ///
    /// A failed search commits an empty result under the term's label and
    /// returns the error, so the caller can show "no recipes found".
    pub async fn search(&self, term: &str) -> Result<Outcome, SearchError> {
        let term = term.trim();
        if term.is_empty() {
            debug!("Ignoring empty search term");
            return Ok(Outcome::Skipped);
        }

        let token = self.begin();
        let result = self.aggregator.search(term).await;

        let mut state = self.state();
        if !self.is_latest(token) {
            warn!("Discarding stale results for '{}'", term);
            return Ok(Outcome::Stale);
        }

        state.label = Some(term.to_string());
        state.selected = None;
        match result {
            Ok(results) => {
                let count = results.len();
                state.results = results;
                Ok(Outcome::Committed(count))
            }
            Err(e) => {
                state.results = AggregationResult::default();
                Err(e)
            }
        }
    }

    /// Replace the results with one random recipe.
    ///
    /// On failure the previous results stay in place.
    pub async fn random(&self) -> Result<Outcome, SearchError> {
        let token = self.begin();
        let result = self.aggregator.random().await;

        let mut state = self.state();
        if !self.is_latest(token) {
            warn!("Discarding stale random pick");
            return Ok(Outcome::Stale);
        }

        let results = result?;
        let count = results.len();
        state.results = results;
        state.label = Some(RANDOM_LABEL.to_string());
        state.selected = None;
        Ok(Outcome::Committed(count))
    }

    pub fn results(&self) -> AggregationResult {
        self.state().results.clone()
    }

    /// The term (or random label) the current results belong to
    pub fn label(&self) -> Option<String> {
        self.state().label.clone()
    }

    /// "N recipe(s) found"
    pub fn summary_line(&self) -> String {
        let count = self.state().results.len();
        format!("{} recipe{} found", count, if count == 1 { "" } else { "s" })
    }

    /// Select one of the current results; returns false if it is not among them.
    pub fn select(&self, id: &str) -> bool {
        let mut state = self.state();
        if state.results.get(id).is_none() {
            return false;
        }
        state.selected = Some(id.to_string());
        true
    }

    pub fn clear_selection(&self) {
        self.state().selected = None;
    }

    pub fn selected(&self) -> Option<RecipeSummary> {
        let state = self.state();
        let id = state.selected.as_deref()?;
        state.results.get(id).cloned()
    }

    /// Fetch the full record of the selected recipe.
    pub async fn selected_detail(&self) -> Result<Option<RecipeDetail>, SearchError> {
        match self.selected() {
            Some(recipe) => self.aggregator.lookup(&recipe.id).await,
            None => Ok(None),
        }
    }

    fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
