// src/lib.rs
pub mod auth;
pub mod auth_store;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod lesson;
pub mod video;

use std::sync::Arc;

pub use crate::capabilities::ProviderConfigSchema;
pub use crate::config::{GeminiConfig, YouTubeConfig};
pub use crate::error::ProviderError;
pub use crate::lesson::{CompleteLesson, Lesson, LessonService, TopicInfo};
pub use crate::video::{FetchFailure, VideoRecommendation, VideoRecommendationResolver};

/// Resolver backed by the YouTube Data API.
pub fn build_video_resolver(
    config: YouTubeConfig,
) -> Result<VideoRecommendationResolver, ProviderError> {
    let client = video::YouTubeClient::new(config)?;
    Ok(VideoRecommendationResolver::new(Arc::new(client)))
}

/// Lesson service backed by Gemini for content and YouTube for videos.
pub fn build_lesson_service(
    gemini: GeminiConfig,
    youtube: YouTubeConfig,
) -> Result<LessonService, ProviderError> {
    let generator = lesson::GeminiLessonClient::new(gemini)?;
    Ok(LessonService::new(
        Arc::new(generator),
        build_video_resolver(youtube)?,
    ))
}
