use serde::{Deserialize, Serialize};

/// Qualifier appended to every topic before searching.
pub const QUERY_QUALIFIER: &str = "tutorial";
/// Number of results requested from the search stage.
pub const SEARCH_PAGE_SIZE: u32 = 5;

/// Parameters for one keyword search.
///
/// Only `query` varies between calls; everything else is fixed to target
/// embeddable, English, medium-length (4-20 min) videos in relevance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub video_duration: &'static str,
    pub embeddable: bool,
    pub relevance_language: &'static str,
    pub order: &'static str,
    pub max_results: u32,
}

impl SearchRequest {
    pub fn for_topic(topic: &str) -> Self {
        Self {
            query: format!("{} {}", topic, QUERY_QUALIFIER),
            video_duration: "medium",
            embeddable: true,
            relevance_language: "en",
            order: "relevance",
            max_results: SEARCH_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub video_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnails {
    pub high: Option<String>,
    pub default: Option<String>,
}

impl Thumbnails {
    /// High resolution when available, otherwise default resolution.
    pub fn best(&self) -> Option<&str> {
        self.high
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.default.as_deref().filter(|u| !u.is_empty()))
    }
}

/// Full metadata for one candidate video, as returned by the detail stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetail {
    pub video_id: String,
    pub title: Option<String>,
    pub thumbnails: Thumbnails,
    /// `PT#H#M#S` text, absent for some live or processing videos.
    pub iso_duration: Option<String>,
    /// Text-encoded integer; absent when the owner hides statistics.
    pub view_count: Option<String>,
    pub channel_name: Option<String>,
    pub description: Option<String>,
}

/// The value handed to lesson views. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecommendation {
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub duration_seconds: u64,
    pub views: String,
    pub channel_name: String,
    pub description: String,
}

impl VideoRecommendation {
    pub fn watch_url(&self) -> String {
        watch_url(&self.video_id)
    }

    pub fn embed_url(&self) -> String {
        embed_url(&self.video_id)
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}
