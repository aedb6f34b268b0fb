// src/video/youtube.rs
//
// YouTube Data API v3 client for the search and videos endpoints.
// Documentation: https://developers.google.com/youtube/v3/docs

use crate::config::{YouTubeConfig, USER_AGENT};
use crate::error::ProviderError;
use crate::video::provider::VideoProvider;
use crate::video::types::{SearchHit, SearchRequest, Thumbnails, VideoDetail};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Parts requested from the videos endpoint.
const DETAIL_PARTS: &str = "snippet,contentDetails,statistics";

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: Option<SearchItemId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

/// Only `contentDetails` is required on every item. The remaining fields are
/// checked on the chosen video alone, when it is mapped to a recommendation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    #[serde(default)]
    snippet: Snippet,
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Snippet {
    title: Option<String>,
    thumbnails: WireThumbnails,
    channel_title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireThumbnails {
    high: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Statistics {
    view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl From<VideoItem> for VideoDetail {
    fn from(item: VideoItem) -> Self {
        Self {
            video_id: item.id,
            title: item.snippet.title,
            thumbnails: Thumbnails {
                high: item.snippet.thumbnails.high.and_then(|t| t.url),
                default: item.snippet.thumbnails.default.and_then(|t| t.url),
            },
            iso_duration: item.content_details.duration,
            view_count: item.statistics.view_count,
            channel_name: item.snippet.channel_title,
            description: item.snippet.description,
        }
    }
}

pub struct YouTubeClient {
    client: Client,
    config: YouTubeConfig,
}

impl YouTubeClient {
    pub fn new(config: YouTubeConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Issues a one-result search to confirm the key is accepted.
    pub async fn test_auth(&self) -> Result<(), ProviderError> {
        let mut request = SearchRequest::for_topic("education");
        request.max_results = 1;
        self.search(&request).await.map(|_| ())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProviderError> {
        Ok(self.config.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = self.endpoint(path)?;
        debug!(endpoint = %url, "YouTube API request");

        let resp = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api { status, message });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl VideoProvider for YouTubeClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, ProviderError> {
        let params = [
            ("q", request.query.clone()),
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("videoDuration", request.video_duration.to_string()),
            ("videoEmbeddable", request.embeddable.to_string()),
            ("relevanceLanguage", request.relevance_language.to_string()),
            ("order", request.order.to_string()),
            ("maxResults", request.max_results.to_string()),
        ];
        let response: SearchListResponse = self.get_json("search", &params).await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.id.and_then(|id| id.video_id))
            .filter(|id| !id.is_empty())
            .map(|video_id| SearchHit { video_id })
            .collect())
    }

    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetail>, ProviderError> {
        if ids.is_empty() {
            return Err(ProviderError::InvalidInput(
                "video_details needs at least one id".into(),
            ));
        }
        let params = [("id", ids.join(",")), ("part", DETAIL_PARTS.to_string())];
        let response: VideoListResponse = self.get_json("videos", &params).await?;
        Ok(response.items.into_iter().map(VideoDetail::from).collect())
    }
}
