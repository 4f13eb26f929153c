use time::macros::date;

use super::*;

fn item(id: &str, name: &str, expired: bool) -> PantryItem {
    PantryItem {
        id: id.into(),
        name: name.into(),
        category: None,
        qty: 1,
        expires_on: None,
        expired,
        alert: expired,
    }
}

fn stocked() -> PantryState {
    PantryState::from_items(vec![
        item("1", "Milk", false),
        item("2", "Old bread", true),
        item("3", "Almond milk", false),
        item("4", "Eggs", false),
    ])
}

#[test]
fn items_split_by_expiry_in_order() {
    let state = stocked();
    let active: Vec<&str> = state.active.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(active, vec!["1", "3", "4"]);
    assert_eq!(state.expired.len(), 1);
}

#[test]
fn search_is_case_insensitive_over_active_items() {
    let mut state = stocked();
    state.query = "  MILK ".into();
    let names: Vec<&str> = state.visible().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Almond milk"]);

    state.query = "bread".into();
    assert!(state.visible().is_empty());
    state.query.clear();
    assert_eq!(state.visible().len(), 3);
}

#[test]
fn quantity_edits_target_the_right_shelf() {
    let mut state = stocked();
    state.increment("2", Shelf::Expired);
    state.increment("2", Shelf::Active);
    assert_eq!(state.expired[0].qty, 2);

    state.decrement("1", Shelf::Active);
    state.decrement("1", Shelf::Active);
    assert_eq!(state.active[0].qty, 0);

    assert_eq!(state.remove("4", Shelf::Active).map(|i| i.name), Some("Eggs".to_owned()));
    assert_eq!(state.remove("4", Shelf::Active), None);
    assert_eq!(state.active.len(), 2);
}

#[test]
fn drafts_need_a_name_and_parse_quantity() {
    let draft = PantryDraft { name: "  ".into(), ..PantryDraft::default() };
    assert_eq!(draft.to_request(), Err(FormError::MissingIngredient));

    let draft = PantryDraft { name: " Tofu ".into(), qty: "3 packs".into(), ..PantryDraft::default() };
    let request = draft.to_request().unwrap();
    assert_eq!(request.name, "Tofu");
    assert_eq!(request.quantity, 3);
    assert_eq!(request.category, None);

    assert_eq!(parse_quantity(""), 1);
    assert_eq!(parse_quantity("0"), 1);
    assert_eq!(parse_quantity("x2"), 1);
}

#[test]
fn local_items_land_on_the_matching_shelf() {
    let today = date!(2024 - 06 - 10);
    let mut state = stocked();

    let fresh = PantryDraft { name: "Kale".into(), date: "20240701".into(), ..PantryDraft::default() };
    state.add(fresh.to_local_item(today).unwrap());
    assert_eq!(state.active[0].name, "Kale");
    assert!(state.active[0].id.starts_with("item-"));

    let stale = PantryDraft { name: "Cream".into(), date: "2024-06-10".into(), ..PantryDraft::default() };
    state.add(stale.to_local_item(today).unwrap());
    assert_eq!(state.expired[0].name, "Cream");
    assert!(state.expired[0].alert);
}

#[test]
fn view_mode_toggles() {
    assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
    assert_eq!(ViewMode::List.toggled().toggled(), ViewMode::List);
}
