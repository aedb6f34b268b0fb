//! Pretty formatter for terminal output.
//!
//! Cards for single videos, a table for several, and a sectioned layout for
//! lessons. Long text is wrapped to the terminal width; titles in tables are
//! truncated to keep one row per video.

use super::{paint, TopicVideo};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use coursecraft_core::lesson::Mcq;
use coursecraft_core::video::format_clock;
use coursecraft_core::video::resolver::FALLBACK_VIDEO_ID;
use coursecraft_core::{CompleteLesson, VideoRecommendation};
use owo_colors::Style;
use std::fmt::Write as _;

/// Terminal width for formatting (default fallback)
const DEFAULT_WIDTH: usize = 80;

/// Widest text column, even on very wide terminals
const MAX_TEXT_WIDTH: usize = 100;

/// Indent for card content
const CARD_INDENT: &str = "   ";

fn title_style() -> Style {
    Style::new().bold()
}

fn header_style() -> Style {
    Style::new().cyan().bold()
}

fn dim() -> Style {
    Style::new().dimmed()
}

// ============================================================================
// Videos
// ============================================================================

/// Card for one recommended video.
pub fn format_video_card(topic: &str, video: &VideoRecommendation) -> String {
    let width = text_width();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        paint("Video for", dim()),
        paint(topic, header_style())
    );
    out.push('\n');
    let _ = writeln!(out, "{}{}", CARD_INDENT, paint(&video.title, title_style()));

    let mut meta = vec![
        video.channel_name.clone(),
        format_clock(video.duration_seconds),
        format!("{} views", video.views),
    ];
    if video.video_id == FALLBACK_VIDEO_ID {
        meta.push("placeholder".to_string());
    }
    let _ = writeln!(out, "{}{}", CARD_INDENT, paint(&meta.join(" · "), dim()));

    let url = video.watch_url();
    let _ = writeln!(
        out,
        "{}{}",
        CARD_INDENT,
        paint(&format_hyperlink(&url, &url), Style::new().blue())
    );

    if !video.description.is_empty() {
        out.push('\n');
        out.push_str(&wrap_indented(&clean_snippet(&video.description), width, CARD_INDENT));
    }
    out
}

/// One table row per topic.
pub fn format_video_table(items: &[TopicVideo]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<Cell> = ["topic", "title", "length", "views", "channel", "url"]
        .iter()
        .map(|h| Cell::new(paint(h, header_style())))
        .collect();
    table.set_header(headers);

    for item in items {
        let video = &item.video;
        let title = if video.video_id == FALLBACK_VIDEO_ID {
            format!("{} (placeholder)", truncate_str(&video.title, 32))
        } else {
            truncate_str(&video.title, 45)
        };
        table.add_row(vec![
            Cell::new(&item.topic),
            Cell::new(title),
            Cell::new(format_clock(video.duration_seconds)),
            Cell::new(&video.views),
            Cell::new(truncate_str(&video.channel_name, 24)),
            Cell::new(video.watch_url()),
        ]);
    }

    let mut out = table.to_string();
    out.push('\n');
    out
}

// ============================================================================
// Lessons
// ============================================================================

pub fn format_lesson(complete: &CompleteLesson) -> String {
    let lesson = &complete.lesson;
    let width = text_width();
    let mut out = String::new();

    let _ = writeln!(out, "{}", paint(&lesson.title, header_style()));
    if !lesson.description.is_empty() {
        out.push_str(&wrap_indented(&lesson.description, width, ""));
    }

    if !lesson.learning_outcomes.is_empty() {
        out.push_str(&section_header("Learning outcomes"));
        for outcome in &lesson.learning_outcomes {
            out.push_str(&bullet(outcome, width));
        }
    }

    if !lesson.key_concepts.is_empty() {
        out.push_str(&section_header("Key concepts"));
        for concept in &lesson.key_concepts {
            let _ = writeln!(out, "{}{}", CARD_INDENT, paint(&concept.term, title_style()));
            out.push_str(&wrap_indented(&concept.definition, width, "     "));
        }
    }

    if !lesson.slides.is_empty() {
        out.push_str(&section_header("Slides"));
        for (i, slide) in lesson.slides.iter().enumerate() {
            let _ = writeln!(
                out,
                "{} {}",
                paint(&format!("{:>2}.", i + 1), dim()),
                paint(&slide.title, title_style())
            );
            out.push_str(&wrap_indented(&slide.content, width, "    "));
            out.push('\n');
        }
    }

    if !lesson.mcqs.is_empty() {
        out.push_str(&section_header("Quiz"));
        for (i, mcq) in lesson.mcqs.iter().enumerate() {
            out.push_str(&format_mcq(i + 1, mcq, width));
        }
    }

    if !lesson.summary.is_empty() {
        out.push_str(&section_header("Summary"));
        out.push_str(&wrap_indented(&lesson.summary, width, ""));
    }

    out.push_str(&section_header("Video"));
    out.push_str(&format_video_card(lesson.video_search_topic(), &complete.video));
    out
}

fn format_mcq(number: usize, mcq: &Mcq, width: usize) -> String {
    let mut out = String::new();
    let question = format!("{}. {}", number, mcq.question);
    let _ = write!(out, "{}", wrap_indented(&question, width, ""));
    for (j, option) in mcq.options.iter().enumerate() {
        let letter = (b'a' + (j % 26) as u8) as char;
        let line = format!("   {}) {}", letter, option);
        if mcq.is_correct(j) {
            let _ = writeln!(out, "{} {}", paint(&line, Style::new().green()), paint("✓", Style::new().green()));
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
    out.push('\n');
    out
}

// ============================================================================
// Utility Functions
// ============================================================================

fn section_header(label: &str) -> String {
    format!("\n{}\n", paint(label, header_style()))
}

fn bullet(text: &str, width: usize) -> String {
    let options = textwrap::Options::new(width)
        .initial_indent("  • ")
        .subsequent_indent("    ");
    let mut out = textwrap::fill(text, options);
    out.push('\n');
    out
}

fn wrap_indented(text: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    let mut out = textwrap::fill(text, options);
    out.push('\n');
    out
}

fn truncate_str(s: &str, max_len: usize) -> String {
    // Take first line only
    let first_line = s.lines().next().unwrap_or(s);

    if first_line.chars().count() <= max_len {
        first_line.to_string()
    } else {
        let truncated: String = first_line.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

fn clean_snippet(s: &str) -> String {
    s.replace('\r', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

fn text_width() -> usize {
    terminal_width().clamp(40, MAX_TEXT_WIDTH)
}

/// OSC 8 hyperlink; terminals without support show the text only.
fn format_hyperlink(url: &str, display_text: &str) -> String {
    format!("\x1b]8;;{}\x07{}\x1b]8;;\x07", url, display_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecraft_core::lesson::{CorrectAnswer, KeyConcept, Lesson, Slide};
    use coursecraft_core::video::fallback_recommendation;

    fn video() -> VideoRecommendation {
        VideoRecommendation {
            video_id: "abc123".into(),
            title: "Tides explained".into(),
            thumbnail_url: "https://i.ytimg.com/vi/abc123/hqdefault.jpg".into(),
            duration_seconds: 3725,
            views: "2,000".into(),
            channel_name: "Ocean Lab".into(),
            description: "Why\nthe   sea moves".into(),
        }
    }

    #[test]
    fn video_card_shows_metadata_and_link() {
        let card = format_video_card("Tides", &video());
        assert!(card.contains("Tides explained"));
        assert!(card.contains("1:02:05"));
        assert!(card.contains("2,000 views"));
        assert!(card.contains("https://www.youtube.com/watch?v=abc123"));
        assert!(card.contains("Why the sea moves"));
        assert!(!card.contains("placeholder"));
    }

    #[test]
    fn placeholder_video_is_marked() {
        let card = format_video_card("Tides", &fallback_recommendation("Tides"));
        assert!(card.contains("placeholder"));
        assert!(card.contains("Tides Tutorial"));
    }

    #[test]
    fn table_has_a_row_per_topic() {
        let items = vec![
            TopicVideo {
                topic: "Tides".into(),
                video: video(),
            },
            TopicVideo {
                topic: "Atoms".into(),
                video: fallback_recommendation("Atoms"),
            },
        ];
        let table = format_video_table(&items);
        assert!(table.contains("Tides"));
        assert!(table.contains("Atoms"));
        assert!(table.contains("(placeholder)"));
    }

    #[test]
    fn lesson_layout_includes_every_section() {
        let lesson = Lesson {
            title: "Understanding Tides".into(),
            description: "How the moon moves the oceans.".into(),
            learning_outcomes: vec!["Explain tidal bulges".into()],
            key_concepts: vec![KeyConcept {
                term: "Spring tide".into(),
                definition: "Largest tidal range".into(),
            }],
            slides: vec![Slide {
                title: "Gravity".into(),
                content: "The moon pulls on water.".into(),
            }],
            mcqs: vec![Mcq {
                question: "What causes tides?".into(),
                options: vec!["Wind".into(), "The moon".into()],
                correct_answer: Some(CorrectAnswer::Index(1)),
            }],
            summary: "Tides follow the moon.".into(),
            video_topic: None,
        };
        let rendered = format_lesson(&CompleteLesson {
            lesson,
            video: video(),
        });
        for expected in [
            "Understanding Tides",
            "Learning outcomes",
            "Spring tide",
            "Gravity",
            "What causes tides?",
            "b) The moon",
            "Tides follow the moon.",
            "Tides explained",
        ] {
            assert!(rendered.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn truncates_long_titles() {
        let truncated = truncate_str("This is a very long string that should be truncated", 20);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 20);
    }
}
