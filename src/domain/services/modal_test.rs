use super::MediaModal;

#[test]
fn it_opens_for_inline_image_data() {
    let mut modal = MediaModal::default();
    assert!(modal.open("data:image/jpeg;base64,eA=="));
    assert!(modal.is_open());
    assert_eq!(modal.src(), Some("data:image/jpeg;base64,eA=="));
}

#[test]
fn it_refuses_videos_and_path_references() {
    let mut modal = MediaModal::default();
    assert!(!modal.open("data:video/mp4;base64,eA=="));
    assert!(!modal.open("http://localhost:8000/frame/keyframes/V001/0000123.jpg"));
    assert!(!modal.is_open());
}

#[test]
fn it_closes() {
    let mut modal = MediaModal::default();
    modal.open("data:image/jpeg;base64,eA==");
    modal.close();
    assert!(!modal.is_open());
    assert_eq!(modal.src(), None);
}
