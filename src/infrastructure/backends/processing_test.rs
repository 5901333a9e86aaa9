use anyhow::Result;
use mockito::Matcher;

use super::ProcessingClient;
use crate::domain::models::ProcessResult;
use crate::domain::models::ProcessingBackend;
use crate::domain::models::ResultItem;

impl ProcessingClient {
    fn with_url(url: String) -> ProcessingClient {
        return ProcessingClient {
            url: url.trim_end_matches('/').to_string(),
        };
    }
}

fn images_fixture() -> Vec<ResultItem> {
    return serde_json::from_str(test_utils::result_set_fixture()).unwrap();
}

#[tokio::test]
async fn it_posts_the_instruction_with_the_result_set_verbatim() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/process")
        .match_body(Matcher::Json(serde_json::json!({
            "instruction": "make it black and white",
            "images": [
                {"frame": "keyframes/V001/0000123.jpg"},
                {"frame": "keyframes/V042/0001987.jpg"},
                "aGVsbG8gd29ybGQ=",
            ],
        })))
        .with_status(200)
        .with_body(test_utils::process_images_fixture())
        .create();

    let backend = ProcessingClient::with_url(server.url());
    let result = backend
        .process("make it black and white", &images_fixture())
        .await?;

    mock.assert();
    match result {
        ProcessResult::Images(images) => {
            assert_eq!(
                images,
                vec!["aGVsbG8gd29ybGQ=".to_string(), "b3RoZXIgaW1hZ2U=".to_string()]
            );
        }
        _ => panic!("expected an image result"),
    }
    return Ok(());
}

#[tokio::test]
async fn it_parses_scalar_results_as_video() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/process")
        .with_status(200)
        .with_body(test_utils::process_video_fixture())
        .create();

    let backend = ProcessingClient::with_url(server.url());
    let result = backend.process("render a clip", &images_fixture()).await?;

    mock.assert();
    match result {
        ProcessResult::Video(payload) => assert_eq!(payload, "dmlkZW8gYnl0ZXM="),
        _ => panic!("expected a video result"),
    }
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_error_statuses() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/process").with_status(500).create();

    let backend = ProcessingClient::with_url(server.url());
    let res = backend.process("sharpen", &images_fixture()).await;

    mock.assert();
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_on_malformed_bodies() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/process")
        .with_status(200)
        .with_body(r#"{"unexpected": true}"#)
        .create();

    let backend = ProcessingClient::with_url(server.url());
    let res = backend.process("sharpen", &images_fixture()).await;

    mock.assert();
    assert!(res.is_err());
}
