use test_utils::mapframe_fixture;

use super::parse;
use super::timestamp_for_frame;

#[test]
fn it_excludes_the_header_and_blank_lines() {
    let rows = parse(mapframe_fixture());
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], vec!["0", "0.0", "25.0", "0"]);
    assert_eq!(rows[3], vec!["3", "18.08", "25.0", "452"]);
}

#[test]
fn it_finds_the_timestamp_for_a_frame_index() {
    let rows = parse(mapframe_fixture());
    assert_eq!(timestamp_for_frame(&rows, 313), Some(12.52));
    assert_eq!(timestamp_for_frame(&rows, 0), Some(0.0));
}

#[test]
fn it_returns_none_for_unknown_frame_indexes() {
    let rows = parse(mapframe_fixture());
    assert_eq!(timestamp_for_frame(&rows, 99999), None);
}

#[test]
fn it_handles_short_rows() {
    let rows = parse("header\nonly,two\n");
    assert_eq!(timestamp_for_frame(&rows, 2), None);
}
