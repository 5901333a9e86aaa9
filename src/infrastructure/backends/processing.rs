#[cfg(test)]
#[path = "processing_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ProcessResponse;
use crate::domain::models::ProcessResult;
use crate::domain::models::ProcessingBackend;
use crate::domain::models::ResultItem;

// The result set rides along verbatim; items keep their wire shape.
#[derive(Serialize)]
struct ProcessRequest<'a> {
    instruction: &'a str,
    images: &'a [ResultItem],
}

pub struct ProcessingClient {
    url: String,
}

impl Default for ProcessingClient {
    fn default() -> ProcessingClient {
        return ProcessingClient {
            url: Config::get(ConfigKey::ProcessingUrl)
                .trim_end_matches('/')
                .to_string(),
        };
    }
}

#[async_trait]
impl ProcessingBackend for ProcessingClient {
    #[allow(clippy::implicit_return)]
    async fn process(&self, instruction: &str, images: &[ResultItem]) -> Result<ProcessResult> {
        let res = reqwest::Client::new()
            .post(format!("{url}/process", url = self.url))
            .json(&ProcessRequest {
                instruction,
                images,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "process request rejected");
            bail!("process request rejected");
        }

        let body = res.json::<ProcessResponse>().await?;
        return Ok(body.result);
    }
}
