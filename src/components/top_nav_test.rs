use super::*;

#[test]
fn root_tab_matches_only_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/board", "/"));
}

#[test]
fn section_tabs_cover_sub_routes() {
    assert!(is_active("/board", "/board"));
    assert!(is_active("/board/12", "/board"));
    assert!(is_active("/board/write", "/board"));
    assert!(!is_active("/boardroom", "/board"));
    assert!(!is_active("/rank", "/board"));
}
