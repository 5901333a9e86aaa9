#[cfg(test)]
#[path = "retrieval_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::FramePath;
use crate::domain::models::QueryType;
use crate::domain::models::ResultItem;
use crate::domain::models::RetrievalBackend;
use crate::domain::models::SearchRequest;
use crate::domain::models::VideoMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct CombinedSearchRequest<'a> {
    query: &'a [String],
    methods: &'a [QueryType],
    topk: usize,
}

pub struct RetrievalClient {
    url: String,
}

impl Default for RetrievalClient {
    fn default() -> RetrievalClient {
        return RetrievalClient {
            url: Config::get(ConfigKey::RetrievalUrl)
                .trim_end_matches('/')
                .to_string(),
        };
    }
}

#[async_trait]
impl RetrievalBackend for RetrievalClient {
    #[allow(clippy::implicit_return)]
    async fn search(&self, request: &SearchRequest) -> Result<Vec<ResultItem>> {
        let res = match request {
            SearchRequest::Single {
                method,
                query,
                topk,
            } => {
                let topk = topk.to_string();
                reqwest::Client::new()
                    .post(format!(
                        "{url}/{endpoint}",
                        url = self.url,
                        endpoint = method.endpoint()
                    ))
                    .form(&[("query", query.as_str()), ("topk", topk.as_str())])
                    .send()
                    .await?
            }
            SearchRequest::Combined {
                queries,
                methods,
                topk,
            } => {
                reqwest::Client::new()
                    .post(format!("{url}/combine_search", url = self.url))
                    .json(&CombinedSearchRequest {
                        query: queries,
                        methods,
                        topk: *topk,
                    })
                    .send()
                    .await?
            }
        };

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "search request rejected");
            bail!("search request rejected");
        }

        let items = res.json::<Vec<ResultItem>>().await?;
        return Ok(items);
    }

    #[allow(clippy::implicit_return)]
    async fn search_similar(&self, frame: &FramePath, topk: usize) -> Result<Vec<ResultItem>> {
        let topk = topk.to_string();
        let res = reqwest::Client::new()
            .post(format!("{url}/image_search", url = self.url))
            .form(&[("image_path", frame.as_str()), ("topk", topk.as_str())])
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "image search rejected");
            bail!("image search rejected");
        }

        let items = res.json::<Vec<ResultItem>>().await?;
        return Ok(items);
    }

    #[allow(clippy::implicit_return)]
    async fn mapframe(&self, source: &str) -> Result<String> {
        let res = reqwest::Client::new()
            .get(format!("{url}/mapframe/{source}.csv", url = self.url))
            .send()
            .await?;

        if !res.status().is_success() {
            bail!("mapframe request rejected");
        }

        return Ok(res.text().await?);
    }

    #[allow(clippy::implicit_return)]
    async fn video_metadata(&self, source: &str) -> Result<VideoMetadata> {
        let res = reqwest::Client::new()
            .get(format!("{url}/metadata/{source}.json", url = self.url))
            .send()
            .await?;

        if !res.status().is_success() {
            bail!("metadata request rejected");
        }

        return Ok(res.json::<VideoMetadata>().await?);
    }
}
