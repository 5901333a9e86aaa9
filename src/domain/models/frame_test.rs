use super::FramePath;
use super::VideoMetadata;

#[test]
fn it_extracts_source_and_index() {
    let frame = FramePath::new("keyframes/V001/0000123.jpg");
    assert_eq!(frame.source(), Some("V001"));
    assert_eq!(frame.index(), Some(123));
}

#[test]
fn it_handles_malformed_paths() {
    let frame = FramePath::new("V001");
    assert_eq!(frame.source(), None);
    assert_eq!(frame.index(), None);

    let frame = FramePath::new("keyframes/V001/notanumber.jpg");
    assert_eq!(frame.source(), Some("V001"));
    assert_eq!(frame.index(), None);
}

#[test]
fn it_round_trips_through_serde() {
    let frame: FramePath = serde_json::from_str("\"keyframes/V001/0000123.jpg\"").unwrap();
    assert_eq!(frame.as_str(), "keyframes/V001/0000123.jpg");
    assert_eq!(
        serde_json::to_string(&frame).unwrap(),
        "\"keyframes/V001/0000123.jpg\""
    );
}

#[test]
fn it_builds_embed_urls() {
    let metadata: VideoMetadata = serde_json::from_str(test_utils::metadata_fixture()).unwrap();
    assert_eq!(
        metadata.embed_url(12).unwrap(),
        "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&start=12"
    );
}

#[test]
fn it_rejects_watch_urls_without_video_ids() {
    let metadata = VideoMetadata {
        watch_url: "https://example.com/video".to_string(),
    };
    assert_eq!(metadata.embed_url(0), None);

    let metadata = VideoMetadata {
        watch_url: "https://www.youtube.com/watch?v=".to_string(),
    };
    assert_eq!(metadata.embed_url(0), None);
}
