use crate::cli::OutputFormat;
use crate::commands::Result;
use coursecraft_core::video::format_clock;
use coursecraft_core::{CompleteLesson, VideoRecommendation};
use owo_colors::{OwoColorize, Stream, Style};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Write as _;

mod pretty;
pub use pretty::{format_lesson, format_video_card, format_video_table};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicVideo {
    pub topic: String,
    pub video: VideoRecommendation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OutputData {
    Video(TopicVideo),
    Videos(Vec<TopicVideo>),
    Lesson(CompleteLesson),
    ConfigInfo(Value),
}

/// Applies `style` when stdout supports color and `--no-color` was not given.
pub fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

pub fn format_output(data: &OutputData, format: &OutputFormat) -> Result<()> {
    print!("{}", render(data, format)?);
    Ok(())
}

pub fn render(data: &OutputData, format: &OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(data)?),
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Text => format_text_output(data)?,
        OutputFormat::Pretty => format_pretty_output(data)?,
    };
    Ok(rendered)
}

fn video_text_line(topic: &str, video: &VideoRecommendation) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        topic,
        video.video_id,
        video.title,
        format_clock(video.duration_seconds),
        video.views,
        video.watch_url()
    )
}

fn format_text_output(data: &OutputData) -> Result<String> {
    let mut out = String::new();
    match data {
        OutputData::Video(item) => {
            let _ = writeln!(out, "{}", video_text_line(&item.topic, &item.video));
        }
        OutputData::Videos(items) => {
            for item in items {
                let _ = writeln!(out, "{}", video_text_line(&item.topic, &item.video));
            }
        }
        OutputData::Lesson(complete) => {
            let lesson = &complete.lesson;
            let _ = writeln!(out, "{}", lesson.title);
            let _ = writeln!(out, "{}", lesson.description);
            let _ = writeln!(out);
            for outcome in &lesson.learning_outcomes {
                let _ = writeln!(out, "- {}", outcome);
            }
            for concept in &lesson.key_concepts {
                let _ = writeln!(out, "{}: {}", concept.term, concept.definition);
            }
            for (i, slide) in lesson.slides.iter().enumerate() {
                let _ = writeln!(out, "\n[{}] {}\n{}", i + 1, slide.title, slide.content);
            }
            for (i, mcq) in lesson.mcqs.iter().enumerate() {
                let _ = writeln!(out, "\nQ{}. {}", i + 1, mcq.question);
                for (j, option) in mcq.options.iter().enumerate() {
                    let marker = if mcq.is_correct(j) { "*" } else { " " };
                    let _ = writeln!(out, " {} {}", marker, option);
                }
            }
            let _ = writeln!(out, "\n{}", lesson.summary);
            let _ = writeln!(out, "\n{}", video_text_line(lesson.video_search_topic(), &complete.video));
        }
        OutputData::ConfigInfo(config) => {
            let _ = writeln!(out, "{}", serde_json::to_string_pretty(config)?);
        }
    }
    Ok(out)
}

fn format_pretty_output(data: &OutputData) -> Result<String> {
    let out = match data {
        OutputData::Video(item) => format_video_card(&item.topic, &item.video),
        OutputData::Videos(items) => format_video_table(items),
        OutputData::Lesson(complete) => format_lesson(complete),
        OutputData::ConfigInfo(config) => format!(
            "{}\n\n{}\n",
            paint("Configuration", Style::new().cyan().bold()),
            serde_json::to_string_pretty(config)?
        ),
    };
    Ok(out)
}
