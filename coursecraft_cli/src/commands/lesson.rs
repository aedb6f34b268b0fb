use crate::cli::Cli;
use crate::commands::{gemini_config, spinner, youtube_config, CommandError, Result};
use crate::output::{format_output, OutputData};
use coursecraft_core::{build_lesson_service, TopicInfo};

pub async fn run(cli: &Cli, topic: &str, audience: &str) -> Result<()> {
    let service = build_lesson_service(gemini_config(cli)?, youtube_config(cli)?)?;
    let info = TopicInfo::new(topic, audience);

    let spinner = spinner(format!("Writing a lesson on {} for {}...", topic, audience));
    let result = service.generate_complete_lesson(&info).await;
    spinner.finish_and_clear();

    let complete = result.map_err(|e| CommandError::Generation(e.to_string()))?;
    format_output(&OutputData::Lesson(complete), &cli.output)
}
