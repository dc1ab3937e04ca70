//! Remote content client.
//!
//! One shared handle to the hosted Supabase project, built once at startup
//! from the project URL and the public anon key. Reads and writes go through
//! PostgREST (`/rest/v1`), session lookups through GoTrue (`/auth/v1`).
//! Connection pooling, retries and caching are the remote service's problem;
//! this client only issues one request per operation and reports failures.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Session, SessionUser};

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Start a query against a table.
    pub fn from(&self, table: &str) -> QueryBuilder<'_> {
        QueryBuilder {
            client: self,
            table: table.to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
            bearer: None,
        }
    }

    /// Look up the session behind an access token.
    ///
    /// Returns `Ok(None)` when the auth service rejects the token (expired,
    /// revoked, garbage); an `Err` means the service itself could not be
    /// reached.
    pub async fn session(&self, access_token: &str) -> Result<Option<Session>> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("Failed to reach auth service")?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Auth service error ({}): {}", status, body);
        }

        let user: SessionUser = response
            .json()
            .await
            .context("Failed to parse auth user response")?;

        Ok(Some(Session {
            access_token: access_token.to_string(),
            user,
        }))
    }
}

/// A single table-scoped query: equality filters, one order column, an
/// optional row limit. Executes as one PostgREST request.
#[derive(Debug)]
pub struct QueryBuilder<'a> {
    client: &'a SupabaseClient,
    table: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
    bearer: Option<String>,
}

impl QueryBuilder<'_> {
    /// Filter rows where `column` equals `value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Order by a column, ascending or descending.
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{}.{}", column, direction));
        self
    }

    /// Limit the number of returned rows.
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Forward the session's access token instead of the anon key so
    /// row-level security sees the authenticated user.
    pub fn authenticated(mut self, session: &Session) -> Self {
        self.bearer = Some(session.access_token.clone());
        self
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.client.base_url, self.table);
        let bearer = self.bearer.as_deref().unwrap_or(&self.client.anon_key);
        let mut req = self
            .client
            .http
            .request(method, &url)
            .header("apikey", &self.client.anon_key)
            .bearer_auth(bearer);

        for (column, condition) in &self.filters {
            req = req.query(&[(column.as_str(), condition.as_str())]);
        }
        if let Some(order) = &self.order {
            req = req.query(&[("order", order.as_str())]);
        }
        if let Some(limit) = self.limit {
            req = req.query(&[("limit", limit.to_string())]);
        }
        req
    }

    /// Execute the query and deserialize all matching rows.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let table = self.table.clone();
        let response = self
            .request(reqwest::Method::GET)
            .query(&[("select", "*")])
            .send()
            .await
            .with_context(|| format!("Failed to query table '{}'", table))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Remote store error on '{}' ({}): {}", table, status, body);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse rows from '{}'", table))
    }

    /// Execute the query expecting exactly one row.
    ///
    /// PostgREST answers 406 when the filter matches zero or several rows,
    /// which surfaces here as an error; callers treat that as "not found".
    pub async fn fetch_single<T: DeserializeOwned>(self) -> Result<T> {
        let table = self.table.clone();
        let response = self
            .request(reqwest::Method::GET)
            .query(&[("select", "*")])
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await
            .with_context(|| format!("Failed to query table '{}'", table))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Remote store error on '{}' ({}): {}", table, status, body);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse row from '{}'", table))
    }

    /// Insert one row.
    pub async fn insert<T: Serialize>(self, row: &T) -> Result<()> {
        let table = self.table.clone();
        let response = self
            .request(reqwest::Method::POST)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .with_context(|| format!("Failed to insert into table '{}'", table))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Remote store error on '{}' ({}): {}", table, status, body);
        }
        Ok(())
    }

    /// Insert one row, replacing an existing row with the same value in
    /// `conflict_column`.
    pub async fn upsert<T: Serialize>(self, row: &T, conflict_column: &str) -> Result<()> {
        let table = self.table.clone();
        let response = self
            .request(reqwest::Method::POST)
            .query(&[("on_conflict", conflict_column)])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(row)
            .send()
            .await
            .with_context(|| format!("Failed to upsert into table '{}'", table))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Remote store error on '{}' ({}): {}", table, status, body);
        }
        Ok(())
    }

    /// Apply a partial update to all rows matching the filters.
    pub async fn update<T: Serialize>(self, patch: &T) -> Result<()> {
        let table = self.table.clone();
        let response = self
            .request(reqwest::Method::PATCH)
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await
            .with_context(|| format!("Failed to update table '{}'", table))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Remote store error on '{}' ({}): {}", table, status, body);
        }
        Ok(())
    }
}
