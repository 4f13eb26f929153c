use super::*;

fn row(id: &str, date: &str) -> ReceiptItem {
    ReceiptItem { id: id.into(), name: format!("item {id}"), purchase_date: date.into() }
}

#[test]
fn groups_newest_first_with_rows_in_arrival_order() {
    let groups = group_receipts(vec![
        row("1", "2024-05-01"),
        row("2", "2024-06-02"),
        row("3", "2024-05-01"),
        row("4", "2024-06-02"),
    ]);
    let dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-06-02", "2024-05-01"]);
    let ids: Vec<&str> = groups[1].items.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn undated_groups_trail_in_first_seen_order() {
    let groups = group_receipts(vec![
        row("1", "unknown"),
        row("2", "20240101"),
        row("3", ""),
        row("4", "unknown"),
    ]);
    let dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
    assert_eq!(dates, vec!["20240101", "unknown", ""]);
    assert_eq!(groups[1].items.len(), 2);
}

#[test]
fn no_rows_no_groups() {
    assert!(group_receipts(Vec::new()).is_empty());
}
