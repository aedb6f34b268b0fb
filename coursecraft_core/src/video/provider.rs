use crate::error::ProviderError;
use crate::video::types::{SearchHit, SearchRequest, VideoDetail};
use async_trait::async_trait;

/// The two remote capabilities the recommendation pipeline needs.
///
/// [`crate::video::YouTubeClient`] is the production implementation; tests
/// plug in fakes that return canned hits and details.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Keyword search. Hits come back in relevance order.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, ProviderError>;

    /// Batched metadata lookup for the given video ids.
    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetail>, ProviderError>;
}
