use test_utils::inline_payload_fixture;
use test_utils::result_set_fixture;

use super::frame_url;
use super::FramePath;
use super::ResultItem;

#[test]
fn it_tags_valid_base64_as_inline() {
    let item = ResultItem::from_payload(inline_payload_fixture());
    assert_eq!(item, ResultItem::Inline(inline_payload_fixture().to_string()));
}

#[test]
fn it_tags_paths_as_references() {
    let item = ResultItem::from_payload("keyframes/V001/0000123.jpg");
    assert_eq!(
        item,
        ResultItem::Reference(FramePath::new("keyframes/V001/0000123.jpg"))
    );
}

#[test]
fn it_deserializes_a_mixed_result_set() {
    let items: Vec<ResultItem> = serde_json::from_str(result_set_fixture()).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0],
        ResultItem::Reference(FramePath::new("keyframes/V001/0000123.jpg"))
    );
    assert_eq!(
        items[1],
        ResultItem::Reference(FramePath::new("keyframes/V042/0001987.jpg"))
    );
    assert_eq!(
        items[2],
        ResultItem::Inline(inline_payload_fixture().to_string())
    );
}

#[test]
fn it_serializes_back_to_the_wire_shape() {
    let items: Vec<ResultItem> = serde_json::from_str(result_set_fixture()).unwrap();
    assert_eq!(
        serde_json::to_string(&items).unwrap(),
        result_set_fixture().to_string()
    );
}

#[test]
fn it_renders_inline_payloads_as_data_uris() {
    let item = ResultItem::Inline(inline_payload_fixture().to_string());
    assert_eq!(
        item.render_src("http://localhost:8000"),
        format!("data:image/jpeg;base64,{}", inline_payload_fixture())
    );
}

#[test]
fn it_renders_references_through_the_frame_endpoint_unaltered() {
    let frame = FramePath::new("keyframes/V001/0000123.jpg");
    let item = ResultItem::Reference(frame.clone());
    assert_eq!(
        item.render_src("http://localhost:8000/"),
        "http://localhost:8000/frame/keyframes/V001/0000123.jpg"
    );
    assert_eq!(
        frame_url("http://localhost:8000", &frame),
        "http://localhost:8000/frame/keyframes/V001/0000123.jpg"
    );
}
