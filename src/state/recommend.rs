//! Recommendation search: query parsing and the results carried from the
//! search screen to the result screen.

#[cfg(test)]
#[path = "recommend_test.rs"]
mod recommend_test;

use crate::net::error::ApiError;
use crate::net::types::Recipe;

/// Ingredient names from a comma-separated query, trimmed, blanks dropped.
pub fn split_ingredients(query: &str) -> Vec<String> {
    query
        .split([',', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKind {
    Ingredients(Vec<String>),
    Dish(String),
    Suggestion,
}

impl SearchKind {
    /// Heading for the result screen.
    pub fn label(&self) -> String {
        match self {
            Self::Ingredients(names) => names.join(", "),
            Self::Dish(name) => name.clone(),
            Self::Suggestion => "Today's suggestion".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendState {
    pub search: Option<SearchKind>,
    pub results: Vec<Recipe>,
    pub loading: bool,
    pub error: Option<String>,
    /// Dishes liked during this visit, so the button can show it.
    pub liked: Vec<String>,
}

impl RecommendState {
    pub fn begin(&mut self, search: SearchKind) {
        self.search = Some(search);
        self.results.clear();
        self.loading = true;
        self.error = None;
    }

    pub fn settle(&mut self, outcome: Result<Vec<Recipe>, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(results) => self.results = results,
            Err(ApiError::Canceled) => {}
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    pub fn mark_liked(&mut self, food: &str) {
        if !self.is_liked(food) {
            self.liked.push(food.to_owned());
        }
    }

    pub fn is_liked(&self, food: &str) -> bool {
        self.liked.iter().any(|f| f == food)
    }
}
