use super::*;

#[test]
fn query_splits_on_commas() {
    assert_eq!(split_ingredients(" egg, onion ,, ham "), vec!["egg", "onion", "ham"]);
    assert_eq!(split_ingredients("egg，milk"), vec!["egg", "milk"]);
    assert!(split_ingredients(" , ").is_empty());
    assert_eq!(split_ingredients("spring onion"), vec!["spring onion"]);
}

#[test]
fn search_labels() {
    assert_eq!(SearchKind::Ingredients(vec!["egg".into(), "ham".into()]).label(), "egg, ham");
    assert_eq!(SearchKind::Dish("Ramen".into()).label(), "Ramen");
}

#[test]
fn results_replace_previous_search() {
    let mut state = RecommendState::default();
    state.begin(SearchKind::Dish("Soup".into()));
    state.settle(Ok(vec![Recipe { food: "Soup".into(), ..Recipe::default() }]));
    assert_eq!(state.results.len(), 1);

    state.begin(SearchKind::Suggestion);
    assert!(state.results.is_empty());
    assert!(state.loading);
    state.settle(Err(ApiError::Network("offline".into())));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Could not reach the server. Please try again."));
}

#[test]
fn likes_are_remembered_once() {
    let mut state = RecommendState::default();
    state.mark_liked("Soup");
    state.mark_liked("Soup");
    assert!(state.is_liked("Soup"));
    assert_eq!(state.liked.len(), 1);
}
