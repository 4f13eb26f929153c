use super::*;

#[test]
fn decode_accepts_json_and_rejects_garbage() {
    assert_eq!(decode::<bool>("false"), Some(false));
    assert_eq!(decode::<bool>("maybe"), None);
    assert_eq!(decode::<Vec<u8>>("[1,2]"), Some(vec![1, 2]));
}

#[test]
fn notify_defaults_on_outside_the_browser() {
    save_notify(false);
    assert!(load_notify());
}
