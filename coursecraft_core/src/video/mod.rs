// src/video/mod.rs
pub mod duration;
pub mod format;
pub mod provider;
pub mod resolver;
pub mod types;
pub mod youtube;

pub use duration::parse_duration;
pub use format::{format_clock, format_views};
pub use provider::VideoProvider;
pub use resolver::{fallback_recommendation, FetchFailure, VideoRecommendationResolver};
pub use types::{SearchHit, SearchRequest, Thumbnails, VideoDetail, VideoRecommendation};
pub use youtube::YouTubeClient;
