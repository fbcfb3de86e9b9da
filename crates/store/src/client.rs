//! Authenticated store client
//!
//! Speaks a PostgREST-style REST dialect: `ilike` substring filters, an
//! `or=(...)` disjunction, inclusive `Range` pagination, and
//! `Prefer: return=representation` on inserts. Every request attaches the
//! project api key and, when the session yields one, a bearer token fetched
//! from the [`TokenProvider`] at request time (tokens may rotate between
//! calls; no token means the request goes out unauthenticated and the store
//! decides what that is allowed to see).

use crate::error::{Result, StoreError};
use crate::record::{page_range, CreateRecord, Record, RecordFilter};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Source of the current session's access token
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// The bearer token for the request about to be made, if any
    async fn access_token(&self) -> Option<String>;
}

/// A fixed token (or none at all), the degenerate session
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// No session: requests go out unauthenticated
    pub fn anonymous() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Client for the remote record store
pub struct StoreClient {
    http: reqwest::Client,
    records_url: String,
    api_key: String,
    session: Arc<dyn TokenProvider>,
}

#[derive(Serialize)]
struct NewRecord<'a> {
    #[serde(flatten)]
    fields: &'a CreateRecord,
    author: &'a str,
}

impl StoreClient {
    /// Create a client for the store at `base_url`
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        session: Arc<dyn TokenProvider>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            records_url: format!("{}/rest/v1/records", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            session,
        })
    }

    /// Insert a record owned by `author` and return the stored row
    pub async fn create_record(&self, fields: &CreateRecord, author: &str) -> Result<Record> {
        let body = NewRecord { fields, author };
        let req = self
            .http
            .post(&self.records_url)
            .header("Prefer", "return=representation")
            .json(&body);

        let resp = self.authorize(req).await.send().await?;
        let resp = check(resp).await?;

        let rows: Vec<Record> = resp.json().await?;
        rows.into_iter().next().ok_or(StoreError::EmptyInsert)
    }

    /// List records matching `filter`, one page at a time
    pub async fn list_records(
        &self,
        filter: &RecordFilter,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Record>> {
        debug!(?filter, page, limit, "listing records");
        let req = self.list_request(filter, page, limit);
        let resp = self.authorize(req).await.send().await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }

    fn list_request(&self, filter: &RecordFilter, page: u32, limit: u32) -> RequestBuilder {
        let (from, to) = page_range(page, limit);
        let mut req = self
            .http
            .get(&self.records_url)
            .query(&[("select", "*")])
            .header("Range-Unit", "items")
            .header("Range", format!("{from}-{to}"));

        for (key, value) in filter_terms(filter) {
            req = req.query(&[(key, value.as_str())]);
        }
        req
    }

    async fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req.header("apikey", &self.api_key);
        match self.session.access_token().await {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

/// Build the filter query terms for a list request
///
/// - subject only: subject substring match
/// - topic only: topic OR name substring match
/// - both: subject condition ANDed with the topic/name disjunction
fn filter_terms(filter: &RecordFilter) -> Vec<(&'static str, String)> {
    let mut terms = Vec::new();
    if let Some(subject) = &filter.subject {
        terms.push(("subject", format!("ilike.*{subject}*")));
    }
    if let Some(topic) = &filter.topic {
        terms.push(("or", format!("(topic.ilike.*{topic}*,name.ilike.*{topic}*)")));
    }
    terms
}

/// Turn a non-success response into `StoreError::Api` with the store's message
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(body);

    Err(StoreError::Api {
        status: status.as_u16(),
        message,
    })
}
