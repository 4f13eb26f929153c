//! Records the screens render, after normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: Option<String>,
    pub likes: u64,
    pub images: Vec<String>,
}

/// One pantry ("box") entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub qty: u32,
    pub expires_on: Option<String>,
    pub expired: bool,
    /// Highlight in the list; set by the backend or implied by expiry.
    pub alert: bool,
}

/// Body of `POST /ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIngredient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptItem {
    pub id: String,
    pub name: String,
    pub purchase_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptGroup {
    pub date: String,
    pub items: Vec<ReceiptItem>,
}

/// A recommended recipe. `raw` keeps the backend's object so it can be sent
/// back verbatim when the user likes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    pub food: String,
    pub difficulty: Option<String>,
    pub cooking_time: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tip: Option<String>,
    pub video: Option<String>,
    pub tags: Vec<String>,
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LikeEntry {
    pub id: Option<String>,
    pub recipe: Recipe,
}

impl LikeEntry {
    /// Up to two ingredient labels for the card subtitle.
    pub fn preview_ingredients(&self) -> Vec<&str> {
        self.recipe.ingredients.iter().take(2).map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub rank: usize,
    pub name: String,
    pub likes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Body of `POST /users/sign-up`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpPayload {
    pub email: String,
    pub password: String,
    pub checked_password: String,
    pub name: String,
    pub nickname: String,
    pub phone_num: String,
    /// `YYYY-MM-DD`.
    pub birth: String,
    pub gender: Gender,
}

/// An image picked for a new board post, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Query for `GET /board/list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardQuery {
    pub skip: u32,
    pub limit: u32,
    pub title: Option<String>,
}

impl Default for BoardQuery {
    fn default() -> Self {
        Self { skip: 0, limit: 100, title: None }
    }
}
