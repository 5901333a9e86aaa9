/// A base64 payload that survives a decode/re-encode round trip, which is how
/// the client distinguishes inline image data from frame references.
pub fn inline_payload_fixture() -> &'static str {
    return "aGVsbG8gd29ybGQ=";
}

pub fn result_set_fixture() -> &'static str {
    return r#"[{"frame":"keyframes/V001/0000123.jpg"},{"frame":"keyframes/V042/0001987.jpg"},"aGVsbG8gd29ybGQ="]"#;
}

pub fn mapframe_fixture() -> &'static str {
    return "n,pts_time,fps,frame_idx\n\
            0,0.0,25.0,0\n\
            1,6.16,25.0,154\n\
            2,12.52,25.0,313\n\
            \n\
            3,18.08,25.0,452\n";
}

pub fn metadata_fixture() -> &'static str {
    return r#"{"watch_url":"https://www.youtube.com/watch?v=dQw4w9WgXcQ&ab_channel=demo"}"#;
}

pub fn process_images_fixture() -> &'static str {
    return r#"{"result":["aGVsbG8gd29ybGQ=","b3RoZXIgaW1hZ2U="]}"#;
}

pub fn process_video_fixture() -> &'static str {
    return r#"{"result":"dmlkZW8gYnl0ZXM="}"#;
}
