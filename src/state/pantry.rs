//! Pantry ("box") screen state: active and expired shelves, search, and
//! local quantity edits.

#[cfg(test)]
#[path = "pantry_test.rs"]
mod pantry_test;

use time::Date;

use crate::net::types::{NewIngredient, PantryItem};
use crate::util::dates;
use crate::util::validation::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    Active,
    Expired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PantryState {
    pub active: Vec<PantryItem>,
    pub expired: Vec<PantryItem>,
    pub query: String,
    pub view: ViewMode,
}

impl PantryState {
    /// Split normalized items onto their shelves, preserving order.
    pub fn from_items(items: Vec<PantryItem>) -> Self {
        let (expired, active) = items.into_iter().partition(|item| item.expired);
        Self { active, expired, ..Self::default() }
    }

    /// Active items whose name contains the search query, ignoring case.
    pub fn visible(&self) -> Vec<&PantryItem> {
        let needle = self.query.trim().to_lowercase();
        self.active
            .iter()
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn shelf_mut(&mut self, shelf: Shelf) -> &mut Vec<PantryItem> {
        match shelf {
            Shelf::Active => &mut self.active,
            Shelf::Expired => &mut self.expired,
        }
    }

    pub fn increment(&mut self, id: &str, shelf: Shelf) {
        if let Some(item) = self.shelf_mut(shelf).iter_mut().find(|item| item.id == id) {
            item.qty = item.qty.saturating_add(1);
        }
    }

    /// Decrease by one, stopping at zero.
    pub fn decrement(&mut self, id: &str, shelf: Shelf) {
        if let Some(item) = self.shelf_mut(shelf).iter_mut().find(|item| item.id == id) {
            item.qty = item.qty.saturating_sub(1);
        }
    }

    pub fn remove(&mut self, id: &str, shelf: Shelf) -> Option<PantryItem> {
        let items = self.shelf_mut(shelf);
        let index = items.iter().position(|item| item.id == id)?;
        Some(items.remove(index))
    }

    /// Put a new item at the top of its shelf.
    pub fn add(&mut self, item: PantryItem) {
        let shelf = if item.expired { Shelf::Expired } else { Shelf::Active };
        self.shelf_mut(shelf).insert(0, item);
    }
}

/// Inputs of the "add ingredient" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PantryDraft {
    pub name: String,
    pub category: String,
    pub date: String,
    pub qty: String,
}

/// Quantity from the leading digits of `raw`; blank, zero, or junk means 1.
pub fn parse_quantity(raw: &str) -> u32 {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok().filter(|n| *n > 0).unwrap_or(1)
}

impl PantryDraft {
    /// Body for `POST /ingredients`.
    ///
    /// # Errors
    ///
    /// `FormError::MissingIngredient` when the name is blank.
    pub fn to_request(&self) -> Result<NewIngredient, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingIngredient);
        }
        let non_blank = |s: &str| Some(s.trim().to_owned()).filter(|s| !s.is_empty());
        Ok(NewIngredient {
            name: name.to_owned(),
            category: non_blank(&self.category),
            expiration_date: non_blank(&self.date),
            quantity: parse_quantity(&self.qty),
        })
    }

    /// Client-side item for when the backend does not echo one back.
    ///
    /// # Errors
    ///
    /// `FormError::MissingIngredient` when the name is blank.
    pub fn to_local_item(&self, today: Date) -> Result<PantryItem, FormError> {
        let request = self.to_request()?;
        let expired = request.expiration_date.as_deref().is_some_and(|d| dates::is_expired(d, today));
        Ok(PantryItem {
            id: format!("item-{}", uuid::Uuid::new_v4()),
            name: request.name,
            category: request.category,
            qty: request.quantity,
            expires_on: request.expiration_date,
            expired,
            alert: expired,
        })
    }
}
