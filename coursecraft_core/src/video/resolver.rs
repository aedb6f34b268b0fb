//! Video recommendation pipeline.
//!
//! `search -> take first 3 -> batch details -> keep >= 5 min -> most viewed`,
//! falling back to the first detail item when nothing is long enough, and to a
//! fixed placeholder record when any stage fails. [`VideoRecommendationResolver::resolve`]
//! never returns an error; [`VideoRecommendationResolver::try_resolve`] exposes
//! the failure for callers that want it.

use crate::error::ProviderError;
use crate::video::duration::parse_optional_duration;
use crate::video::format::{format_views, parse_view_count};
use crate::video::provider::VideoProvider;
use crate::video::types::{SearchHit, SearchRequest, VideoDetail, VideoRecommendation};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Hits forwarded from the search stage to the detail stage.
pub const CANDIDATE_LIMIT: usize = 3;
/// Shortest video, in seconds, preferred by the ranking step.
pub const MIN_DURATION_SECS: u64 = 300;

pub const FALLBACK_VIDEO_ID: &str = "dQw4w9WgXcQ";
pub const FALLBACK_THUMBNAIL_URL: &str = "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg";
pub const FALLBACK_CHANNEL: &str = "Unknown";

#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    #[error("topic is empty")]
    EmptyTopic,

    #[error("search request failed: {0}")]
    Search(#[source] ProviderError),

    #[error("search returned no videos")]
    NoSearchResults,

    #[error("detail request failed: {0}")]
    Details(#[source] ProviderError),

    #[error("detail lookup returned no videos")]
    NoVideoDetails,

    #[error("malformed video data: {0}")]
    Malformed(String),
}

impl FetchFailure {
    /// Pipeline stage the failure happened in, for logs.
    pub fn stage(&self) -> &'static str {
        match self {
            FetchFailure::EmptyTopic => "input",
            FetchFailure::Search(_) | FetchFailure::NoSearchResults => "search",
            FetchFailure::Details(_) | FetchFailure::NoVideoDetails => "details",
            FetchFailure::Malformed(_) => "mapping",
        }
    }
}

/// Placeholder returned whenever the pipeline cannot produce a real video.
pub fn fallback_recommendation(topic: &str) -> VideoRecommendation {
    let label = format!("{} Tutorial", topic);
    VideoRecommendation {
        video_id: FALLBACK_VIDEO_ID.to_string(),
        title: label.clone(),
        thumbnail_url: FALLBACK_THUMBNAIL_URL.to_string(),
        duration_seconds: 0,
        views: "0".to_string(),
        channel_name: FALLBACK_CHANNEL.to_string(),
        description: label,
    }
}

/// Pick the video to recommend from a detail batch.
///
/// Among videos of at least [`MIN_DURATION_SECS`], the most viewed wins (ties
/// keep provider order). When none is long enough the first item is used as is.
pub fn select_video(details: &[VideoDetail]) -> Option<&VideoDetail> {
    let mut long_enough: Vec<&VideoDetail> = details
        .iter()
        .filter(|d| parse_optional_duration(d.iso_duration.as_deref()) >= MIN_DURATION_SECS)
        .collect();

    if long_enough.is_empty() {
        return details.first();
    }

    long_enough.sort_by(|a, b| {
        parse_view_count(b.view_count.as_deref()).cmp(&parse_view_count(a.view_count.as_deref()))
    });
    long_enough.first().copied()
}

pub fn to_recommendation(
    detail: &VideoDetail,
    topic: &str,
) -> Result<VideoRecommendation, FetchFailure> {
    let missing = |field: &str| {
        FetchFailure::Malformed(format!("video {} has no {}", detail.video_id, field))
    };
    let thumbnail_url = detail.thumbnails.best().ok_or_else(|| missing("thumbnail"))?;
    let title = detail.title.clone().ok_or_else(|| missing("title"))?;
    let channel_name = detail.channel_name.clone().ok_or_else(|| missing("channel"))?;

    let description = detail
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} Tutorial", topic));

    Ok(VideoRecommendation {
        video_id: detail.video_id.clone(),
        title,
        thumbnail_url: thumbnail_url.to_string(),
        duration_seconds: parse_optional_duration(detail.iso_duration.as_deref()),
        views: format_views(parse_view_count(detail.view_count.as_deref())),
        channel_name,
        description,
    })
}

#[derive(Clone)]
pub struct VideoRecommendationResolver {
    provider: Arc<dyn VideoProvider>,
}

impl VideoRecommendationResolver {
    pub fn new(provider: Arc<dyn VideoProvider>) -> Self {
        Self { provider }
    }

    /// Best video for `topic`, or the fallback record. Never fails.
    pub async fn resolve(&self, topic: &str) -> VideoRecommendation {
        let label = match topic.trim() {
            "" => topic,
            trimmed => trimmed,
        };
        match self.try_resolve(topic).await {
            Ok(recommendation) => recommendation,
            Err(failure) => {
                warn!(
                    topic = %label,
                    stage = failure.stage(),
                    error = %failure,
                    "Video lookup failed, using fallback"
                );
                fallback_recommendation(label)
            }
        }
    }

    pub async fn try_resolve(&self, topic: &str) -> Result<VideoRecommendation, FetchFailure> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(FetchFailure::EmptyTopic);
        }

        let hits = self.search_stage(&SearchRequest::for_topic(topic)).await?;
        let details = self.detail_stage(&hits).await?;

        let chosen = select_video(&details).ok_or(FetchFailure::NoVideoDetails)?;
        info!(
            topic = %topic,
            video_id = %chosen.video_id,
            candidates = details.len(),
            "Selected video"
        );
        to_recommendation(chosen, topic)
    }

    pub async fn search_stage(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchHit>, FetchFailure> {
        let hits = self
            .provider
            .search(request)
            .await
            .map_err(FetchFailure::Search)?;
        debug!(query = %request.query, hits = hits.len(), "Search stage complete");
        if hits.is_empty() {
            return Err(FetchFailure::NoSearchResults);
        }
        Ok(hits)
    }

    /// Details for the first [`CANDIDATE_LIMIT`] hits, in one request.
    pub async fn detail_stage(&self, hits: &[SearchHit]) -> Result<Vec<VideoDetail>, FetchFailure> {
        let ids: Vec<String> = hits
            .iter()
            .take(CANDIDATE_LIMIT)
            .map(|h| h.video_id.clone())
            .collect();
        if ids.is_empty() {
            return Err(FetchFailure::NoSearchResults);
        }

        let details = self
            .provider
            .video_details(&ids)
            .await
            .map_err(FetchFailure::Details)?;
        debug!(requested = ids.len(), returned = details.len(), "Detail stage complete");
        if details.is_empty() {
            return Err(FetchFailure::NoVideoDetails);
        }
        Ok(details)
    }

    /// Resolve several topics concurrently. Output order matches `topics`.
    pub async fn resolve_many<S: AsRef<str>>(&self, topics: &[S]) -> Vec<VideoRecommendation> {
        join_all(topics.iter().map(|t| self.resolve(t.as_ref()))).await
    }
}
