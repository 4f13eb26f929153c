use futures::executor::block_on;
use futures::future::{Abortable, pending};

use super::*;

fn post(id: &str) -> BoardPost {
    BoardPost {
        id: id.into(),
        title: "t".into(),
        content: String::new(),
        author: "a".into(),
        created_at: None,
        likes: 0,
        images: Vec::new(),
    }
}

#[test]
fn successful_load_replaces_posts() {
    let mut feed = BoardFeed::default();
    assert!(feed.loading);
    feed.settle(Ok(vec![post("1")]));
    assert!(!feed.loading);
    assert_eq!(feed.posts.len(), 1);
    assert_eq!(feed.error, None);
}

#[test]
fn failures_pick_a_message_by_kind() {
    let mut feed = BoardFeed::default();
    feed.settle(Err(ApiError::Auth { status: 401, message: "x".into() }));
    assert_eq!(feed.error.as_deref(), Some(LOGIN_REQUIRED_MESSAGE));

    feed.begin();
    assert_eq!(feed.error, None);
    feed.settle(Err(ApiError::Server { status: 503, message: "down".into() }));
    assert_eq!(feed.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(!feed.loading);
}

#[test]
fn canceled_load_leaves_feed_alone() {
    let mut feed = BoardFeed::default();
    feed.settle(Ok(vec![post("1")]));
    feed.begin();
    feed.settle(Err(ApiError::Canceled));
    assert!(feed.loading);
    assert_eq!(feed.error, None);
    assert_eq!(feed.posts.len(), 1);
}

#[test]
fn starting_a_fetch_aborts_the_previous_one() {
    let mut slot = LatestFetch::default();
    let first = slot.start();
    let second = slot.start();

    assert!(block_on(Abortable::new(pending::<()>(), first)).is_err());

    slot.cancel();
    assert!(block_on(Abortable::new(pending::<()>(), second)).is_err());
}
