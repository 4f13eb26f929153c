//! Group purchased ingredients into per-day receipts.

#[cfg(test)]
#[path = "receipts_test.rs"]
mod receipts_test;

use std::cmp::Reverse;

use crate::net::types::{ReceiptGroup, ReceiptItem};
use crate::util::dates::parse_loose_date;

/// One group per distinct `purchase_date`, newest day first.
///
/// Rows keep their arrival order within a group. Groups whose date does not
/// parse sort after every dated group, in the order they were first seen.
pub fn group_receipts(rows: Vec<ReceiptItem>) -> Vec<ReceiptGroup> {
    let mut groups: Vec<ReceiptGroup> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|g| g.date == row.purchase_date) {
            Some(group) => group.items.push(row),
            None => groups.push(ReceiptGroup { date: row.purchase_date.clone(), items: vec![row] }),
        }
    }
    // Stable sort keeps first-seen order among equal keys.
    groups.sort_by_key(|g| match parse_loose_date(&g.date) {
        Some(date) => (0, Some(Reverse(date))),
        None => (1, None),
    });
    groups
}
