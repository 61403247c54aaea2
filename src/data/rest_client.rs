//! Async client for the hosted tables
//!
//! Speaks the PostgREST dialect: `GET {url}/rest/v1/{table}` with the
//! selection, ordering, row limit and offset as query parameters,
//! authenticated by the project's public key. Tables larger than the
//! server's row cap are read in pages.

use crate::core::config::RemoteConfig;
use crate::core::error::Result;
use crate::data::{Dataset, COMBATS_TABLE, MODEL_RESULTS_TABLE, POKEMON_TABLE};
use crate::pokedex::{CombatRecord, ModelResult, Pokemon};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// A read query against one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub table: &'static str,
    pub order: Option<&'static str>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Rows requested per page; matches the hosted server's default row cap
pub const PAGE_SIZE: usize = 1000;

impl TableQuery {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            order: None,
            limit: None,
            offset: None,
        }
    }

    /// Ascending order on `column`
    pub fn order(mut self, column: &'static str) -> Self {
        self.order = Some(column);
        self
    }

    pub fn limit(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }

    /// Skip the first `rows` rows
    pub fn offset(mut self, rows: usize) -> Self {
        self.offset = Some(rows);
        self
    }

    /// Page `index` (from 0) of `size` rows
    pub fn page(self, index: usize, size: usize) -> Self {
        self.limit(size).offset(index * size)
    }

    /// Query-string parameters in request order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("select", "*".to_string())];
        if let Some(column) = self.order {
            pairs.push(("order", format!("{}.asc", column)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset.filter(|&o| o > 0) {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

/// Client for the hosted `pokemon`, `combats` and `model_results` tables
pub struct RestClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl RestClient {
    pub fn new(remote: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: remote.url.trim_end_matches('/').to_string(),
            anon_key: remote.anon_key.clone(),
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Run a query and decode the rows
    pub async fn fetch<T: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<T>> {
        let response = self
            .client
            .get(self.table_url(query.table))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .query(&query.query_pairs())
            .send()
            .await?
            .error_for_status()?;

        let rows: Vec<T> = response.json().await?;
        tracing::debug!(table = query.table, rows = rows.len(), offset = ?query.offset, "fetched page");
        Ok(rows)
    }

    /// Run a query page by page until a short page marks the end
    ///
    /// `query` should carry an ordering so pages do not overlap.
    pub async fn fetch_all<T: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<T>> {
        let mut rows = Vec::new();
        for index in 0.. {
            let page: Vec<T> = self.fetch(&query.clone().page(index, PAGE_SIZE)).await?;
            let received = page.len();
            rows.extend(page);
            if is_last_page(received, PAGE_SIZE) {
                break;
            }
        }
        tracing::info!(table = query.table, rows = rows.len(), "fetched table");
        Ok(rows)
    }

    /// Full roster ordered by name
    pub async fn pokemon(&self) -> Result<Vec<Pokemon>> {
        self.fetch_all(&TableQuery::new(POKEMON_TABLE).order("nom")).await
    }

    /// The whole battle log in creation order
    pub async fn combats(&self) -> Result<Vec<CombatRecord>> {
        self.fetch_all(&TableQuery::new(COMBATS_TABLE).order("created_at"))
            .await
    }

    /// Model metrics in creation order
    pub async fn model_results(&self) -> Result<Vec<ModelResult>> {
        self.fetch_all(&TableQuery::new(MODEL_RESULTS_TABLE).order("created_at"))
            .await
    }

    /// Fetch all three tables concurrently
    pub async fn load(&self) -> Result<Dataset> {
        let (pokemon, combats, models) =
            tokio::try_join!(self.pokemon(), self.combats(), self.model_results())?;
        Ok(Dataset {
            pokemon,
            combats,
            models,
        })
    }
}

/// A page shorter than requested is the last one
fn is_last_page(received: usize, page_size: usize) -> bool {
    received < page_size
}
