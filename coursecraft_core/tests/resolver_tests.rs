use async_trait::async_trait;
use coursecraft_core::error::ProviderError;
use coursecraft_core::video::{
    fallback_recommendation, FetchFailure, SearchHit, SearchRequest, Thumbnails, VideoDetail,
    VideoProvider, VideoRecommendationResolver,
};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

/// Canned provider that records what the resolver asked for.
#[derive(Default)]
struct FakeProvider {
    hits: Option<Vec<SearchHit>>,
    details: Option<Vec<VideoDetail>>,
    queries: Mutex<Vec<String>>,
    detail_ids: Mutex<Vec<Vec<String>>>,
}

impl FakeProvider {
    fn with_hits(ids: &[&str]) -> Self {
        Self {
            hits: Some(
                ids.iter()
                    .map(|id| SearchHit {
                        video_id: id.to_string(),
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    fn details(mut self, details: Vec<VideoDetail>) -> Self {
        self.details = Some(details);
        self
    }
}

#[async_trait]
impl VideoProvider for FakeProvider {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, ProviderError> {
        self.queries.lock().unwrap().push(request.query.clone());
        self.hits
            .clone()
            .ok_or_else(|| ProviderError::Api {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "backend unavailable".into(),
            })
    }

    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetail>, ProviderError> {
        self.detail_ids.lock().unwrap().push(ids.to_vec());
        self.details
            .clone()
            .ok_or_else(|| ProviderError::Timeout("operation timed out".into()))
    }
}

fn detail(id: &str, duration: &str, views: &str) -> VideoDetail {
    VideoDetail {
        video_id: id.to_string(),
        title: Some(format!("Video {}", id)),
        thumbnails: Thumbnails {
            high: Some(format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id)),
            default: Some(format!("https://i.ytimg.com/vi/{}/default.jpg", id)),
        },
        iso_duration: Some(duration.to_string()),
        view_count: Some(views.to_string()),
        channel_name: Some(format!("Channel {}", id)),
        description: Some(format!("About {}", id)),
    }
}

fn resolver(provider: &Arc<FakeProvider>) -> VideoRecommendationResolver {
    VideoRecommendationResolver::new(provider.clone())
}

#[tokio::test]
async fn chooses_most_viewed_video_of_five_minutes_or_more() {
    let provider = Arc::new(FakeProvider::with_hits(&["a", "b", "c"]).details(vec![
        detail("a", "PT3M20S", "1000"),
        detail("b", "PT6M40S", "500"),
        detail("c", "PT10M", "2000"),
    ]));

    let rec = resolver(&provider).resolve("Fractions").await;

    assert_eq!(rec.video_id, "c");
    assert_eq!(rec.title, "Video c");
    assert_eq!(rec.duration_seconds, 600);
    assert_eq!(rec.views, "2,000");
    assert_eq!(rec.channel_name, "Channel c");
    assert_eq!(rec.description, "About c");
    assert_eq!(rec.thumbnail_url, "https://i.ytimg.com/vi/c/hqdefault.jpg");
}

#[tokio::test]
async fn all_short_videos_yield_first_detail_item() {
    let provider = Arc::new(FakeProvider::with_hits(&["a", "b"]).details(vec![
        detail("a", "PT2M", "5"),
        detail("b", "PT4M", "9000000"),
    ]));

    let rec = resolver(&provider).resolve("Fractions").await;
    assert_eq!(rec.video_id, "a");
    assert_eq!(rec.duration_seconds, 120);
    assert_eq!(rec.views, "5");
}

#[tokio::test]
async fn appends_tutorial_and_forwards_only_three_candidates() {
    let provider = Arc::new(
        FakeProvider::with_hits(&["v1", "v2", "v3", "v4", "v5"])
            .details(vec![detail("v1", "PT8M", "1")]),
    );

    resolver(&provider).resolve("  Plate tectonics ").await;

    assert_eq!(
        *provider.queries.lock().unwrap(),
        vec!["Plate tectonics tutorial".to_string()]
    );
    assert_eq!(
        *provider.detail_ids.lock().unwrap(),
        vec![vec!["v1".to_string(), "v2".to_string(), "v3".to_string()]]
    );
}

#[tokio::test]
async fn no_search_hits_returns_fallback_without_detail_call() {
    let provider = Arc::new(FakeProvider::with_hits(&[]));
    let r = resolver(&provider);

    assert_eq!(r.resolve("Volcanoes").await, fallback_recommendation("Volcanoes"));
    assert!(matches!(
        r.try_resolve("Volcanoes").await,
        Err(FetchFailure::NoSearchResults)
    ));
    assert!(provider.detail_ids.lock().unwrap().is_empty());
}

#[tokio::test]
async fn no_detail_items_returns_fallback() {
    let provider = Arc::new(FakeProvider::with_hits(&["a"]).details(vec![]));
    let r = resolver(&provider);

    assert_eq!(r.resolve("Volcanoes").await, fallback_recommendation("Volcanoes"));
    assert!(matches!(
        r.try_resolve("Volcanoes").await,
        Err(FetchFailure::NoVideoDetails)
    ));
}

#[tokio::test]
async fn search_failure_returns_fallback() {
    let provider = Arc::new(FakeProvider::default());
    let r = resolver(&provider);

    let failure = r.try_resolve("Volcanoes").await.unwrap_err();
    assert_eq!(failure.stage(), "search");
    assert_eq!(r.resolve("Volcanoes").await, fallback_recommendation("Volcanoes"));
}

#[tokio::test]
async fn detail_network_error_yields_exact_fallback() {
    // search succeeds with three hits, detail call fails
    let provider = Arc::new(FakeProvider::with_hits(&["a", "b", "c"]));

    let rec = resolver(&provider).resolve("Photosynthesis").await;

    assert_eq!(rec.video_id, "dQw4w9WgXcQ");
    assert_eq!(rec.title, "Photosynthesis Tutorial");
    assert_eq!(rec.description, "Photosynthesis Tutorial");
    assert_eq!(
        rec.thumbnail_url,
        "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
    );
    assert_eq!(rec.duration_seconds, 0);
    assert_eq!(rec.views, "0");
    assert_eq!(rec.channel_name, "Unknown");
}

#[tokio::test]
async fn chosen_video_without_thumbnails_falls_back() {
    let mut bare = detail("a", "PT9M", "10");
    bare.thumbnails = Thumbnails::default();
    let provider = Arc::new(FakeProvider::with_hits(&["a"]).details(vec![bare]));

    let r = resolver(&provider);
    assert!(matches!(
        r.try_resolve("Tides").await,
        Err(FetchFailure::Malformed(_))
    ));
    assert_eq!(r.resolve("Tides").await, fallback_recommendation("Tides"));
}

#[tokio::test]
async fn padded_topic_is_trimmed_on_success_and_failure() {
    let mut undescribed = detail("a", "PT9M", "10");
    undescribed.description = None;
    let found = Arc::new(FakeProvider::with_hits(&["a"]).details(vec![undescribed]));
    let rec = resolver(&found).resolve("  Tides ").await;
    assert_eq!(rec.description, "Tides Tutorial");

    let failing = Arc::new(FakeProvider::with_hits(&["a"]));
    let rec = resolver(&failing).resolve("  Tides ").await;
    assert_eq!(rec, fallback_recommendation("Tides"));
}

#[tokio::test]
async fn empty_topic_never_calls_provider() {
    let provider = Arc::new(FakeProvider::with_hits(&["a"]));
    let r = resolver(&provider);

    assert!(matches!(r.try_resolve("   ").await, Err(FetchFailure::EmptyTopic)));
    let rec = r.resolve("").await;
    assert_eq!(rec.video_id, "dQw4w9WgXcQ");
    assert!(provider.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn resolve_many_keeps_topic_order() {
    // no hits, so each record is the fallback titled after its own topic
    let provider = Arc::new(FakeProvider::with_hits(&[]));

    let recs = resolver(&provider)
        .resolve_many(&["Cells", "Atoms", "Stars"])
        .await;

    let titles: Vec<_> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Cells Tutorial", "Atoms Tutorial", "Stars Tutorial"]);
    let mut queries = provider.queries.lock().unwrap().clone();
    queries.sort();
    assert_eq!(
        queries,
        vec!["Atoms tutorial", "Cells tutorial", "Stars tutorial"]
    );
}

#[tokio::test]
async fn resolve_many_runs_full_pipeline_per_topic() {
    let provider = Arc::new(
        FakeProvider::with_hits(&["a", "b"])
            .details(vec![detail("a", "PT6M", "1"), detail("b", "PT7M", "2")]),
    );

    let recs = resolver(&provider).resolve_many(&["Cells", "Atoms"]).await;

    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|r| r.video_id == "b"));
    assert_eq!(provider.detail_ids.lock().unwrap().len(), 2);
}
