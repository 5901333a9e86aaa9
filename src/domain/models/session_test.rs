use test_utils::result_set_fixture;

use super::ResultItem;
use super::SessionState;

#[test]
fn it_starts_empty_with_the_default_limit() {
    let session = SessionState::default();
    assert!(!session.has_results());
    assert_eq!(session.result_limit, 15);
    assert_eq!(session.active_query, "");
    assert_eq!(session.seq(), 0);
}

#[test]
fn it_replaces_results_wholesale() {
    let mut session = SessionState::default();
    let first: Vec<ResultItem> = serde_json::from_str(result_set_fixture()).unwrap();
    session.replace_results(first.clone());
    assert_eq!(session.results(), first.as_slice());
    assert_eq!(session.seq(), 1);

    let second = vec![ResultItem::from_payload("keyframes/V009/0000001.jpg")];
    session.replace_results(second.clone());
    assert_eq!(session.results(), second.as_slice());
    assert_eq!(session.seq(), 2);

    session.replace_results(vec![]);
    assert!(!session.has_results());
    assert_eq!(session.seq(), 3);
}
