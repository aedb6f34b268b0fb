use crate::video::types::VideoRecommendation;
use serde::{Deserialize, Serialize};

/// What the author asks for: a topic and who the lesson is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicInfo {
    pub topic: String,
    pub audience: String,
}

impl TopicInfo {
    pub fn new(topic: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            audience: audience.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConcept {
    pub term: String,
    #[serde(default)]
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Models answer either with the option index or with the option text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Index(usize),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mcq {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<CorrectAnswer>,
}

impl Mcq {
    /// Text of the correct option, if the answer can be located.
    pub fn correct_option_text(&self) -> Option<&str> {
        match self.correct_answer.as_ref()? {
            CorrectAnswer::Index(i) => self.options.get(*i).map(String::as_str),
            CorrectAnswer::Text(text) => Some(text.as_str()),
        }
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        match &self.correct_answer {
            Some(CorrectAnswer::Index(i)) => *i == option_index,
            Some(CorrectAnswer::Text(text)) => self
                .options
                .get(option_index)
                .map(|o| o.trim() == text.trim())
                .unwrap_or(false),
            None => false,
        }
    }
}

/// Lesson content as produced by the generation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub key_concepts: Vec<KeyConcept>,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub mcqs: Vec<Mcq>,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_topic: Option<String>,
}

impl Lesson {
    /// Topic used to look up the lesson's video: the declared video topic,
    /// else the lesson title.
    pub fn video_search_topic(&self) -> &str {
        self.video_topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(self.title.as_str())
    }
}

/// A generated lesson together with its recommended video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteLesson {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub video: VideoRecommendation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lesson_tolerates_missing_sections() {
        let lesson: Lesson = serde_json::from_value(json!({
            "title": "Intro to Fractions",
            "slides": [{"title": "Halves", "content": "..."}]
        }))
        .unwrap();
        assert_eq!(lesson.slides.len(), 1);
        assert!(lesson.mcqs.is_empty());
        assert_eq!(lesson.video_search_topic(), "Intro to Fractions");
    }

    #[test]
    fn video_topic_wins_over_title() {
        let lesson: Lesson = serde_json::from_value(json!({
            "title": "Intro to Fractions",
            "videoTopic": "adding fractions with unlike denominators"
        }))
        .unwrap();
        assert_eq!(
            lesson.video_search_topic(),
            "adding fractions with unlike denominators"
        );
    }

    #[test]
    fn correct_answer_by_index_or_text() {
        let by_index: Mcq = serde_json::from_value(json!({
            "question": "2+2?",
            "options": ["3", "4", "5"],
            "correctAnswer": 1
        }))
        .unwrap();
        assert_eq!(by_index.correct_option_text(), Some("4"));
        assert!(by_index.is_correct(1));
        assert!(!by_index.is_correct(0));

        let by_text: Mcq = serde_json::from_value(json!({
            "question": "2+2?",
            "options": ["3", "4", "5"],
            "correctAnswer": "4"
        }))
        .unwrap();
        assert_eq!(by_text.correct_option_text(), Some("4"));
        assert!(by_text.is_correct(1));

        let out_of_range = Mcq {
            question: "q".into(),
            options: vec!["a".into()],
            correct_answer: Some(CorrectAnswer::Index(4)),
        };
        assert_eq!(out_of_range.correct_option_text(), None);
    }
}
