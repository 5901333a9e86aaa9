use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::FramePath;
use super::ProcessResult;
use super::QueryType;
use super::ResultItem;
use super::VideoMetadata;

/// A composed search request. One filled fragment becomes a form-encoded
/// single-type search; two or more become a combined search whose parallel
/// arrays keep the fragments' positional correspondence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchRequest {
    Single {
        method: QueryType,
        query: String,
        topk: usize,
    },
    Combined {
        queries: Vec<String>,
        methods: Vec<QueryType>,
        topk: usize,
    },
}

#[async_trait]
pub trait RetrievalBackend {
    /// Runs a text search and returns the ranked result set.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<ResultItem>>;

    /// Runs an image-similarity search seeded from a frame reference.
    async fn search_similar(&self, frame: &FramePath, topk: usize) -> Result<Vec<ResultItem>>;

    /// Fetches the raw frame-to-timestamp CSV for a video source.
    async fn mapframe(&self, source: &str) -> Result<String>;

    /// Fetches the video metadata document for a source.
    async fn video_metadata(&self, source: &str) -> Result<VideoMetadata>;
}

pub type RetrievalBox = Arc<dyn RetrievalBackend + Send + Sync>;

#[async_trait]
pub trait ProcessingBackend {
    /// Applies a natural-language edit instruction to a set of result items.
    async fn process(&self, instruction: &str, images: &[ResultItem]) -> Result<ProcessResult>;
}

pub type ProcessingBox = Arc<dyn ProcessingBackend + Send + Sync>;
