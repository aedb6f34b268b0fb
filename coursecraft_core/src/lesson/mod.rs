// src/lesson/mod.rs
pub mod gemini;
pub mod prompt;
pub mod types;

pub use gemini::{GeminiLessonClient, LessonGenerator};
pub use types::{CompleteLesson, CorrectAnswer, KeyConcept, Lesson, Mcq, Slide, TopicInfo};

use crate::error::ProviderError;
use crate::video::{VideoRecommendation, VideoRecommendationResolver};
use std::sync::Arc;
use tracing::info;

/// Generates lesson content and attaches a recommended video.
///
/// Generation failures are returned to the caller. The video lookup cannot
/// fail; at worst the lesson carries the placeholder video.
#[derive(Clone)]
pub struct LessonService {
    generator: Arc<dyn LessonGenerator>,
    videos: VideoRecommendationResolver,
}

impl LessonService {
    pub fn new(generator: Arc<dyn LessonGenerator>, videos: VideoRecommendationResolver) -> Self {
        Self { generator, videos }
    }

    pub async fn generate_complete_lesson(
        &self,
        info: &TopicInfo,
    ) -> Result<CompleteLesson, ProviderError> {
        let lesson = self.generator.generate(info).await?;
        info!(
            topic = %info.topic,
            title = %lesson.title,
            slides = lesson.slides.len(),
            mcqs = lesson.mcqs.len(),
            "Lesson generated"
        );
        let video = self.video_for_lesson(&lesson).await;
        Ok(CompleteLesson { lesson, video })
    }

    pub async fn video_for_lesson(&self, lesson: &Lesson) -> VideoRecommendation {
        self.videos.resolve(lesson.video_search_topic()).await
    }
}
