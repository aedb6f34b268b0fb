use crate::cli::Cli;
use crate::commands::{spinner, youtube_config, Result};
use crate::output::{format_output, OutputData, TopicVideo};
use coursecraft_core::build_video_resolver;
use tracing::debug;

pub async fn run(cli: &Cli, topic: &str) -> Result<()> {
    let resolver = build_video_resolver(youtube_config(cli)?)?;

    let spinner = spinner(format!("Finding a tutorial video for {}...", topic));
    let video = resolver.resolve(topic).await;
    spinner.finish_and_clear();
    debug!(topic, video_id = %video.video_id, "Resolved video");

    let data = OutputData::Video(TopicVideo {
        topic: topic.to_string(),
        video,
    });
    format_output(&data, &cli.output)
}

pub async fn run_many(cli: &Cli, topics: &[String]) -> Result<()> {
    let resolver = build_video_resolver(youtube_config(cli)?)?;

    let spinner = spinner(format!("Finding tutorial videos for {} topics...", topics.len()));
    let videos = resolver.resolve_many(topics).await;
    spinner.finish_and_clear();

    let items = topics
        .iter()
        .cloned()
        .zip(videos)
        .map(|(topic, video)| TopicVideo { topic, video })
        .collect();
    format_output(&OutputData::Videos(items), &cli.output)
}
