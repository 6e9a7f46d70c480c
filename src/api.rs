use crate::config::{ Endpoints, SearchFilters, INTITLE, TITLE };
use crate::error::SearchError;
use crate::fetch::Fetch;
use crate::models::{ Answer, Question, SearchResponse };
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::info;

static ID_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\{id\}").unwrap());

/// Client for the Stack Exchange 2.2 search and answers endpoints.
pub struct StackSearch<F> {
    fetcher: F,
    endpoints: Endpoints,
    filters: SearchFilters,
}

impl<F: Fetch> StackSearch<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            endpoints: Endpoints::default(),
            filters: SearchFilters::default(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Advanced search matching `query` against question titles.
    pub fn search_by_title(&self, query: &str) -> Result<SearchResponse<Question>, SearchError> {
        let url = self.search_url(&self.endpoints.advanced_search, TITLE, query);
        let response: SearchResponse<Question> = self.get_json(&url)?;
        info!("{} questions found for '{}'", response.items.len(), query);
        Ok(response)
    }

    /// Simple search using the `intitle` parameter.
    pub fn search_by_intitle(&self, query: &str) -> Result<SearchResponse<Question>, SearchError> {
        let url = self.search_url(&self.endpoints.simple_search, INTITLE, query);
        let response: SearchResponse<Question> = self.get_json(&url)?;
        info!("{} questions found for '{}'", response.items.len(), query);
        Ok(response)
    }

    pub fn get_answers(&self, question_id: u64) -> Result<SearchResponse<Answer>, SearchError> {
        let url = ID_PLACEHOLDER
            .replace_all(&self.endpoints.answers, question_id.to_string().as_str())
            .into_owned();
        let response: SearchResponse<Answer> = self.get_json(&url)?;
        info!("{} answers found for question {}", response.items.len(), question_id);
        Ok(response)
    }

    fn search_url(&self, endpoint: &str, fragment: &str, query: &str) -> String {
        format!(
            "{}{}{}{}",
            endpoint,
            self.filters.query_fragment(),
            fragment,
            urlencoding::encode(query)
        )
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SearchError> {
        let body = self.fetcher.get(url)?;
        Ok(serde_json::from_str(&body)?)
    }
}
