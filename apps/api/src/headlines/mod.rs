//! Headline Feed — top Hacker News stories, reshaped for display.
//!
//! Nothing else in the service depends on this feed being reachable.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;

/// Number of top stories returned per batch.
pub const TOP_STORY_COUNT: usize = 5;
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum HeadlineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("story {0} is missing or deleted")]
    MissingStory(u64),

    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// An item as the Hacker News API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct HnItem {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub url: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub time: i64,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub score: i64,
    pub time_formatted: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub by: String,
}

impl From<HnItem> for Headline {
    fn from(item: HnItem) -> Self {
        Headline {
            id: item.id,
            title: item.title,
            url: item
                .url
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| "#".to_string()),
            score: item.score,
            time_formatted: format_unix_time(item.time),
            item_type: item.item_type,
            by: item.by,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineBatch {
    pub stories: Vec<Headline>,
    pub count: usize,
    pub fetched_at: String,
}

/// ISO-8601 UTC with millisecond precision, e.g. `2023-11-14T22:13:20.000Z`.
fn format_unix_time(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Clone)]
pub struct HeadlineClient {
    client: Client,
    base_url: String,
}

impl HeadlineClient {
    /// `base_url` is the API root, e.g. `https://hacker-news.firebaseio.com/v0`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, HeadlineError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the current top stories. Items are requested concurrently and
    /// returned in the upstream ranking order.
    pub async fn top_headlines(&self) -> Result<HeadlineBatch, HeadlineError> {
        let ids: Vec<u64> = self
            .get_json::<Vec<u64>>(format!("{}/topstories.json", self.base_url))
            .await?;

        let handles: Vec<_> = ids
            .into_iter()
            .take(TOP_STORY_COUNT)
            .map(|id| {
                let this = self.clone();
                tokio::spawn(async move { this.fetch_item(id).await })
            })
            .collect();

        let mut stories = Vec::with_capacity(handles.len());
        for handle in handles {
            stories.push(Headline::from(handle.await??));
        }

        debug!("Fetched {} headlines", stories.len());

        Ok(HeadlineBatch {
            count: stories.len(),
            stories,
            fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    async fn fetch_item(&self, id: u64) -> Result<HnItem, HeadlineError> {
        self.get_json::<Option<HnItem>>(format!("{}/item/{id}.json", self.base_url))
            .await?
            .ok_or(HeadlineError::MissingStory(id))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, HeadlineError> {
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Headline API returned {status} for {url}");
            return Err(HeadlineError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
