//! Flatten the backend's inconsistent response shapes into `types` records.
//!
//! DESIGN
//! ======
//! Each field has a prioritized key list; the first key holding a non-null
//! value wins. Numbers and numeric strings are interchangeable, and list
//! endpoints may answer with a bare array or an `{ items: [...] }` envelope.
//! Missing ids get a positional fallback so rendering keys stay unique.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde_json::Value;
use time::Date;

use super::types::{BoardPost, LikeEntry, PantryItem, RankingEntry, ReceiptItem, Recipe};
use crate::util::dates;

pub const POST_ID_KEYS: &[&str] = &["id", "boardId", "_id"];
pub const POST_TITLE_KEYS: &[&str] = &["title"];
pub const POST_CONTENT_KEYS: &[&str] = &["content", "body"];
pub const POST_AUTHOR_KEYS: &[&str] = &["author", "writer", "nickname"];
pub const POST_CREATED_KEYS: &[&str] = &["createdAt", "created_at", "regDate"];
pub const POST_IMAGE_KEYS: &[&str] = &["images", "image_urls", "imageUrls"];
pub const LIKE_KEYS: &[&str] = &["likes", "like", "likeCount"];

pub const PANTRY_ID_KEYS: &[&str] = &["id", "ingredientId", "uuid"];
pub const PANTRY_NAME_KEYS: &[&str] = &["name", "title", "ingredient_name"];
pub const PANTRY_QTY_KEYS: &[&str] = &["qty", "quantity", "count"];
pub const PANTRY_EXPIRED_KEYS: &[&str] = &["expired", "isExpired"];
pub const PANTRY_DATE_KEYS: &[&str] = &["expirationDate", "expireDate", "date"];

pub const RECIPE_NAME_KEYS: &[&str] = &["food", "name", "title"];

/// Rows of a list response: a top-level array, else `items`, else nothing.
pub fn list_items(value: &Value) -> &[Value] {
    match value {
        Value::Array(rows) => rows,
        _ => value.get("items").and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default(),
    }
}

/// First non-null value under `keys`.
pub fn pick<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| value.get(*key)).find(|v| !v.is_null())
}

/// First non-blank string (or number, stringified) under `keys`.
pub fn pick_str(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// First integer (or integer-valued string) under `keys`.
pub fn pick_i64(value: &Value, keys: &[&str]) -> Option<i64> {
    keys.iter().filter_map(|key| value.get(*key)).find_map(as_i64)
}

pub fn pick_u64(value: &Value, keys: &[&str]) -> Option<u64> {
    pick_i64(value, keys).and_then(|n| u64::try_from(n).ok())
}

/// First boolean under `keys`; `"true"`/`"false"` and `0`/`1` count too.
pub fn pick_bool(value: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find_map(|v| match v {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse().ok(),
            Value::Number(n) => n.as_i64().map(|n| n != 0),
            _ => None,
        })
}

#[allow(clippy::cast_possible_truncation)]
fn as_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn normalize_post(row: &Value, index: usize) -> BoardPost {
    BoardPost {
        id: pick_str(row, POST_ID_KEYS).unwrap_or_else(|| format!("post-{index}")),
        title: pick_str(row, POST_TITLE_KEYS).unwrap_or_else(|| "Untitled".to_owned()),
        content: pick_str(row, POST_CONTENT_KEYS).unwrap_or_default(),
        author: pick_str(row, POST_AUTHOR_KEYS).unwrap_or_else(|| "Anonymous".to_owned()),
        created_at: pick_str(row, POST_CREATED_KEYS),
        likes: pick_u64(row, LIKE_KEYS).unwrap_or(0),
        images: pick(row, POST_IMAGE_KEYS).map(string_list).unwrap_or_default(),
    }
}

pub fn normalize_posts(body: &Value) -> Vec<BoardPost> {
    list_items(body).iter().enumerate().map(|(i, row)| normalize_post(row, i)).collect()
}

/// Normalize one pantry row. Expiry is judged against `today` unless the
/// backend already decided.
pub fn normalize_pantry_item(row: &Value, index: usize, today: Date) -> PantryItem {
    let expires_on = pick_str(row, PANTRY_DATE_KEYS);
    let expired = pick_bool(row, PANTRY_EXPIRED_KEYS)
        .unwrap_or_else(|| expires_on.as_deref().is_some_and(|d| dates::is_expired(d, today)));
    let qty = pick_i64(row, PANTRY_QTY_KEYS)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0)
        .unwrap_or(1);
    PantryItem {
        id: pick_str(row, PANTRY_ID_KEYS).unwrap_or_else(|| format!("item-{index}")),
        name: pick_str(row, PANTRY_NAME_KEYS).unwrap_or_else(|| "Ingredient".to_owned()),
        category: pick_str(row, &["category"]),
        qty,
        expires_on,
        expired,
        alert: pick_bool(row, &["alert"]).unwrap_or(expired),
    }
}

pub fn normalize_pantry(body: &Value, today: Date) -> Vec<PantryItem> {
    list_items(body)
        .iter()
        .enumerate()
        .map(|(i, row)| normalize_pantry_item(row, i, today))
        .collect()
}

/// Rows of `GET /ingredients/detail` (`{ ingredients: [...] }`).
pub fn normalize_receipt_rows(body: &Value) -> Vec<ReceiptItem> {
    let rows = body
        .get("ingredients")
        .and_then(Value::as_array)
        .map_or_else(|| list_items(body), Vec::as_slice);
    rows.iter()
        .enumerate()
        .map(|(i, row)| ReceiptItem {
            id: pick_str(row, PANTRY_ID_KEYS).unwrap_or_else(|| format!("item-{i}")),
            name: pick_str(row, &["ingredient_name", "name"]).unwrap_or_else(|| "Ingredient".to_owned()),
            purchase_date: pick_str(row, &["purchase_date"]).unwrap_or_default(),
        })
        .collect()
}

/// Label for a recipe ingredient: strings as-is, objects by `name`.
pub fn ingredient_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Object(_) => pick_str(value, &["name"]),
        _ => None,
    }
}

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(ingredient_label).collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_owned()],
        _ => Vec::new(),
    }
}

pub fn normalize_recipe(value: &Value) -> Recipe {
    Recipe {
        food: pick_str(value, RECIPE_NAME_KEYS).unwrap_or_else(|| "Recipe".to_owned()),
        difficulty: pick_str(value, &["difficulty"]),
        cooking_time: pick_str(value, &["cooking_time"]),
        ingredients: pick(value, &["use_ingredients"]).map(string_list).unwrap_or_default(),
        steps: pick(value, &["step", "steps"]).map(string_list).unwrap_or_default(),
        tip: pick_str(value, &["tip"]),
        video: pick_str(value, &["video"]),
        tags: pick(value, &["tag", "tags"]).map(string_list).unwrap_or_default(),
        raw: value.clone(),
    }
}

/// Recipe search answers with one recipe, a list, or a list envelope.
pub fn normalize_recipes(body: &Value) -> Vec<Recipe> {
    if body.is_object() && body.get("items").is_none() {
        return vec![normalize_recipe(body)];
    }
    list_items(body).iter().map(normalize_recipe).collect()
}

/// Rows of `GET /recipe/like`: `{ id, recipe: {...} }`, or a bare recipe.
pub fn normalize_likes(body: &Value) -> Vec<LikeEntry> {
    list_items(body)
        .iter()
        .map(|row| LikeEntry {
            id: pick_str(row, &["id"]),
            recipe: normalize_recipe(row.get("recipe").filter(|r| r.is_object()).unwrap_or(row)),
        })
        .collect()
}

/// Ranking rows, numbered in the order the backend returned them.
pub fn normalize_ranking(body: &Value) -> Vec<RankingEntry> {
    list_items(body)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let recipe = row.get("recipe").filter(|r| r.is_object()).unwrap_or(row);
            RankingEntry {
                rank: i + 1,
                name: pick_str(recipe, RECIPE_NAME_KEYS).unwrap_or_else(|| "Recipe".to_owned()),
                likes: pick_u64(row, LIKE_KEYS).or_else(|| pick_u64(recipe, LIKE_KEYS)).unwrap_or(0),
            }
        })
        .collect()
}
