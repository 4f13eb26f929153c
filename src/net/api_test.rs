use futures::executor::block_on;
use futures::future::AbortHandle;
use time::macros::date;

use super::*;
use crate::net::test_support::*;
use crate::net::transport::Method;
use crate::net::types::Gender;

fn ok_client(body: &'static str) -> (ScriptedTransport, TestClient) {
    let transport = ScriptedTransport::new(move |_| reply(200, body));
    let client = test_client(transport.clone(), MemoryCredentials::with_stored("t"));
    (transport, client)
}

#[test]
fn board_list_sends_paging_and_trimmed_title() {
    let (transport, client) = ok_client(r#"[{"id":1,"title":"Hi"}]"#);
    let query = BoardQuery { title: Some(" stew ".to_owned()), ..BoardQuery::default() };

    let posts = block_on(list_board(&client, &query, RequestOptions::default())).unwrap();

    assert_eq!(posts[0].title, "Hi");
    let calls = transport.calls();
    assert!(calls[0].url.ends_with(BOARD_LIST_PATH));
    assert_eq!(
        calls[0].query,
        vec![
            ("skip".to_owned(), "0".to_owned()),
            ("limit".to_owned(), "100".to_owned()),
            ("title".to_owned(), "stew".to_owned()),
        ]
    );
}

#[test]
fn aborted_board_fetch_reports_canceled() {
    let (transport, client) = ok_client("[]");
    let (handle, registration) = AbortHandle::new_pair();
    handle.abort();

    let outcome = block_on(list_board(&client, &BoardQuery::default(), RequestOptions::with_signal(registration)));

    assert_eq!(outcome, Err(ApiError::Canceled));
    assert!(transport.calls().is_empty());
}

#[test]
fn post_detail_keeps_requested_id_when_body_lacks_one() {
    let (transport, client) = ok_client(r#"{"title":"Pancakes","content":"flour"}"#);

    let post = block_on(fetch_post(&client, "42")).unwrap();

    assert_eq!(post.id, "42");
    assert_eq!(post.content, "flour");
    assert!(transport.calls()[0].url.ends_with("/board/42"));
}

#[test]
fn new_post_is_multipart_with_image() {
    let transport = ScriptedTransport::new(|_| reply(201, ""));
    let client = test_client(transport.clone(), MemoryCredentials::default());
    let image = ImageUpload { file_name: "a.png".into(), mime: "image/png".into(), bytes: vec![1, 2, 3] };

    block_on(create_post(&client, " Title ", "Body", Some(&image))).unwrap();

    let calls = transport.calls();
    let Body::Multipart(parts) = &calls[0].body else {
        panic!("expected multipart body, got {:?}", calls[0].body);
    };
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], FormPart::Text { name: "title".into(), value: "Title".into() });
    assert!(matches!(&parts[2], FormPart::File { name, .. } if name == "images"));
}

#[test]
fn ingredient_delete_passes_id_as_query() {
    let (transport, client) = ok_client("");

    block_on(delete_ingredient(&client, "ing-9")).unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].method, Method::Delete);
    assert_eq!(calls[0].query, vec![("id".to_owned(), "ing-9".to_owned())]);
}

#[test]
fn pantry_and_added_items_are_normalized() {
    let (_, client) = ok_client(r#"{"items":[{"id":"a","name":"milk","date":"20200101"}]}"#);
    let today = date!(2024 - 06 - 10);

    let items = block_on(list_pantry(&client, today)).unwrap();
    assert!(items[0].expired);

    let (transport, client) = ok_client(r#"{"id":"n1","name":"egg","qty":6}"#);
    let new = NewIngredient { name: "egg".into(), category: None, expiration_date: None, quantity: 6 };
    let added = block_on(add_ingredient(&client, &new, today)).unwrap();
    assert_eq!(added.map(|i| i.qty), Some(6));
    assert_eq!(transport.calls()[0].body, Body::Json(json!({ "name": "egg", "quantity": 6 })));
}

#[test]
fn recipe_search_posts_ingredient_list() {
    let (transport, client) = ok_client(r#"{"food":"Omelette","use_ingredients":["egg"]}"#);

    let recipes = block_on(search_recipes(&client, &["egg".to_owned(), "milk".to_owned()])).unwrap();

    assert_eq!(recipes[0].food, "Omelette");
    assert_eq!(transport.calls()[0].body, Body::Json(json!({ "ingredients": ["egg", "milk"] })));
}

#[test]
fn sign_up_serializes_payload_and_skips_refresh() {
    let transport = ScriptedTransport::new(|_| reply(401, ""));
    let client = test_client(transport.clone(), MemoryCredentials::default());
    let payload = SignUpPayload {
        email: "a@x.com".into(),
        password: "password1".into(),
        checked_password: "password1".into(),
        name: "Kim".into(),
        nickname: "kimchi".into(),
        phone_num: "01012345678".into(),
        birth: "1999-01-02".into(),
        gender: Gender::Female,
    };

    let outcome = block_on(sign_up(&client, &payload));

    assert!(outcome.is_err_and(|e| e.is_auth()));
    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    let Body::Json(sent) = &calls[0].body else {
        panic!("expected json body");
    };
    assert_eq!(sent["gender"], "female");
    assert_eq!(sent["phone_num"], "01012345678");
}

#[test]
fn like_recipe_sends_backend_object_verbatim() {
    let (transport, client) = ok_client("{}");
    let recipe = crate::net::normalize::normalize_recipe(&json!({ "food": "Soup", "extra": 1 }));

    block_on(like_recipe(&client, &recipe)).unwrap();

    assert_eq!(transport.calls()[0].body, Body::Json(json!({ "food": "Soup", "extra": 1 })));
}
