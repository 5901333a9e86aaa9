use serde_json::from_str;
use test_utils::process_images_fixture;
use test_utils::process_video_fixture;

use super::InstructionMessage;
use super::Media;
use super::ProcessResponse;

#[test]
fn it_starts_loading_with_zero_progress() {
    let msg = InstructionMessage::new(0, "make it black and white");
    assert_eq!(msg.id, 0);
    assert_eq!(msg.text, "make it black and white");
    assert!(msg.is_loading);
    assert_eq!(msg.progress, 0.0);
    assert!(msg.media.is_none());
}

#[test]
fn it_converts_array_results_to_image_uris() {
    let response: ProcessResponse = from_str(process_images_fixture()).unwrap();
    let media = Media::from(response.result);
    assert_eq!(
        media,
        Media::Images(vec![
            "data:image/jpeg;base64,aGVsbG8gd29ybGQ=".to_string(),
            "data:image/jpeg;base64,b3RoZXIgaW1hZ2U=".to_string(),
        ])
    );
}

#[test]
fn it_converts_scalar_results_to_a_video_uri() {
    let response: ProcessResponse = from_str(process_video_fixture()).unwrap();
    let media = Media::from(response.result);
    assert_eq!(
        media,
        Media::Video("data:video/mp4;base64,dmlkZW8gYnl0ZXM=".to_string())
    );
}

#[test]
fn it_completes_with_full_progress() {
    let mut msg = InstructionMessage::new(3, "sharpen");
    msg.advance(10.0);
    msg.complete(Media::Video("data:video/mp4;base64,eA==".to_string()));

    assert!(!msg.is_loading);
    assert_eq!(msg.progress, 100.0);
    assert!(!msg.failed());
}

#[test]
fn it_fails_back_to_zero_progress() {
    let mut msg = InstructionMessage::new(1, "sharpen");
    msg.advance(10.0);
    msg.advance(10.0);
    msg.fail();

    assert!(!msg.is_loading);
    assert_eq!(msg.progress, 0.0);
    assert!(msg.media.is_none());
    assert!(msg.failed());
}

#[test]
fn it_clamps_progress_at_the_target() {
    let mut msg = InstructionMessage::new(0, "sharpen");
    for _ in 0..20 {
        msg.advance(10.0);
    }
    assert_eq!(msg.progress, 100.0);
}

#[test]
fn it_ignores_ticks_after_terminal_states() {
    let mut msg = InstructionMessage::new(0, "sharpen");
    msg.fail();
    msg.advance(10.0);
    assert_eq!(msg.progress, 0.0);

    let mut msg = InstructionMessage::new(1, "sharpen");
    msg.complete(Media::Images(vec![]));
    msg.advance(10.0);
    assert_eq!(msg.progress, 100.0);
}
