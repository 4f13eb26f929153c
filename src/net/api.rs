//! Typed calls for each backend endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens call these instead of building requests by hand. Each function
//! goes through the shared `HttpClient`, so credential attachment and 401
//! recovery apply uniformly, and hands back normalized `types` records.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns the pipeline's `ApiError` unchanged; screens decide how
//! to present it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Value, json};
use time::Date;

use super::client::{ApiRequest, HttpClient, RequestOptions};
use super::credentials::CredentialStore;
use super::error::ApiError;
use super::normalize;
use super::transport::{Body, FormPart, Transport};
use super::types::{
    BoardPost, BoardQuery, ImageUpload, LikeEntry, NewIngredient, PantryItem, RankingEntry, ReceiptItem, Recipe,
    SignUpPayload,
};

pub const SIGN_UP_PATH: &str = "/users/sign-up";
pub const INGREDIENTS_PATH: &str = "/ingredients";
pub const INGREDIENT_DETAIL_PATH: &str = "/ingredients/detail";
pub const BOARD_LIST_PATH: &str = "/board/list";
pub const BOARD_PATH: &str = "/board";
pub const RECIPE_SEARCH_PATH: &str = "/recipe/ingredient-cook";
pub const RECIPE_SUGGEST_PATH: &str = "/recipe/suggest";
pub const RECIPE_FOR_FOOD_PATH: &str = "/recipe/food-cook";
pub const RECIPE_RANKING_PATH: &str = "/recipe/ranking";
pub const RECIPE_LIKE_PATH: &str = "/recipe/like";

fn board_post_path(id: &str) -> String {
    format!("{BOARD_PATH}/{id}")
}

/// `POST /users/sign-up`.
///
/// # Errors
///
/// `ApiError::Validation` carries the backend's reason (duplicate email, etc.).
pub async fn sign_up<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    payload: &SignUpPayload,
) -> Result<(), ApiError> {
    let call = ApiRequest::post(SIGN_UP_PATH).json(serde_json::to_value(payload)?).without_refresh();
    client.request(call, RequestOptions::default()).await?;
    Ok(())
}

/// `GET /ingredients`, normalized against `today`.
///
/// # Errors
///
/// Any pipeline error.
pub async fn list_pantry<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    today: Date,
) -> Result<Vec<PantryItem>, ApiError> {
    let body: Value = client.fetch_json(ApiRequest::get(INGREDIENTS_PATH)).await?;
    Ok(normalize::normalize_pantry(&body, today))
}

/// `POST /ingredients`. Returns the stored item when the backend echoes it.
///
/// # Errors
///
/// Any pipeline error.
pub async fn add_ingredient<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    item: &NewIngredient,
    today: Date,
) -> Result<Option<PantryItem>, ApiError> {
    let call = ApiRequest::post(INGREDIENTS_PATH).json(serde_json::to_value(item)?);
    let body: Value = client.fetch_json(call).await?;
    Ok(body.is_object().then(|| normalize::normalize_pantry_item(&body, 0, today)))
}

/// `DELETE /ingredients?id=<id>`.
///
/// # Errors
///
/// Any pipeline error.
pub async fn delete_ingredient<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    id: &str,
) -> Result<(), ApiError> {
    let call = ApiRequest::delete(INGREDIENTS_PATH).query("id", id);
    client.request(call, RequestOptions::default()).await?;
    Ok(())
}

/// `GET /ingredients/detail`, one row per purchased ingredient.
///
/// # Errors
///
/// Any pipeline error.
pub async fn list_receipt_rows<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
) -> Result<Vec<ReceiptItem>, ApiError> {
    let body: Value = client.fetch_json(ApiRequest::get(INGREDIENT_DETAIL_PATH)).await?;
    Ok(normalize::normalize_receipt_rows(&body))
}

/// `GET /board/list`. Takes request options so the feed can abort a stale fetch.
///
/// # Errors
///
/// Any pipeline error, including `ApiError::Canceled`.
pub async fn list_board<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    query: &BoardQuery,
    options: RequestOptions,
) -> Result<Vec<BoardPost>, ApiError> {
    let mut call = ApiRequest::get(BOARD_LIST_PATH).query("skip", query.skip).query("limit", query.limit);
    if let Some(title) = query.title.as_deref().filter(|t| !t.trim().is_empty()) {
        call = call.query("title", title.trim());
    }
    let body: Value = client.request(call, options).await?.json()?;
    Ok(normalize::normalize_posts(&body))
}

/// `GET /board/{id}`.
///
/// # Errors
///
/// Any pipeline error.
pub async fn fetch_post<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    id: &str,
) -> Result<BoardPost, ApiError> {
    let body: Value = client.fetch_json(ApiRequest::get(board_post_path(id))).await?;
    let mut post = normalize::normalize_post(&body, 0);
    if normalize::pick_str(&body, normalize::POST_ID_KEYS).is_none() {
        id.clone_into(&mut post.id);
    }
    Ok(post)
}

fn post_form(title: &str, content: &str, image: Option<&ImageUpload>) -> Vec<FormPart> {
    let mut parts = vec![
        FormPart::Text { name: "title".to_owned(), value: title.trim().to_owned() },
        FormPart::Text { name: "content".to_owned(), value: content.trim().to_owned() },
    ];
    if let Some(image) = image {
        parts.push(FormPart::File {
            name: "images".to_owned(),
            file_name: image.file_name.clone(),
            mime: image.mime.clone(),
            bytes: image.bytes.clone(),
        });
    }
    parts
}

/// `POST /board` as multipart (`title`, `content`, optional `images`).
///
/// # Errors
///
/// Any pipeline error.
pub async fn create_post<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    title: &str,
    content: &str,
    image: Option<&ImageUpload>,
) -> Result<(), ApiError> {
    let call = ApiRequest::post(BOARD_PATH).body(Body::Multipart(post_form(title, content, image)));
    let response = client.request(call, RequestOptions::default()).await?;
    if response.status != 201 {
        log::debug!("[api] board post accepted with status {}", response.status);
    }
    Ok(())
}

/// `POST /recipe/ingredient-cook` with the ingredient names to cook from.
///
/// # Errors
///
/// Any pipeline error.
pub async fn search_recipes<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    ingredients: &[String],
) -> Result<Vec<Recipe>, ApiError> {
    let call = ApiRequest::post(RECIPE_SEARCH_PATH).json(json!({ "ingredients": ingredients }));
    let body: Value = client.fetch_json(call).await?;
    Ok(normalize::normalize_recipes(&body))
}

/// `GET /recipe/suggest`.
///
/// # Errors
///
/// Any pipeline error.
pub async fn suggest_recipe<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
) -> Result<Option<Recipe>, ApiError> {
    let body: Value = client.fetch_json(ApiRequest::get(RECIPE_SUGGEST_PATH)).await?;
    Ok(normalize::normalize_recipes(&body).into_iter().next())
}

/// `POST /recipe/food-cook` for a dish the user named.
///
/// # Errors
///
/// Any pipeline error.
pub async fn recipe_for_food<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    food: &str,
) -> Result<Vec<Recipe>, ApiError> {
    let call = ApiRequest::post(RECIPE_FOR_FOOD_PATH).json(json!({ "food": food.trim() }));
    let body: Value = client.fetch_json(call).await?;
    Ok(normalize::normalize_recipes(&body))
}

/// `GET /recipe/ranking`.
///
/// # Errors
///
/// Any pipeline error.
pub async fn ranking<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
) -> Result<Vec<RankingEntry>, ApiError> {
    let body: Value = client.fetch_json(ApiRequest::get(RECIPE_RANKING_PATH)).await?;
    Ok(normalize::normalize_ranking(&body))
}

/// `GET /recipe/like`.
///
/// # Errors
///
/// Any pipeline error.
pub async fn liked_recipes<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
) -> Result<Vec<LikeEntry>, ApiError> {
    let body: Value = client.fetch_json(ApiRequest::get(RECIPE_LIKE_PATH)).await?;
    Ok(normalize::normalize_likes(&body))
}

/// `POST /recipe/like` with the recipe as the backend produced it.
///
/// # Errors
///
/// Any pipeline error.
pub async fn like_recipe<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    recipe: &Recipe,
) -> Result<(), ApiError> {
    let call = ApiRequest::post(RECIPE_LIKE_PATH).json(recipe.raw.clone());
    client.request(call, RequestOptions::default()).await?;
    Ok(())
}
