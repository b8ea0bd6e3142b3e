// src/server/handlers/recipes.rs
//! Recipe submission handler

use crate::server::{views, ServerState};
use crate::validate::{split_ingredients, RecipeDraft};
use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Raw form fields as submitted. Kept stringly so a failed submission can be
/// re-rendered with exactly what the user typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeForm {
    #[serde(default)]
    pub title: String,
    /// Newline-delimited textarea, one ingredient per row
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub cook_time_min: String,
    #[serde(default)]
    pub servings: String,
}

impl RecipeForm {
    /// Split the ingredients block and normalize empty numeric fields to
    /// absent, producing the validator's input shape.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            ingredients: split_ingredients(&self.ingredients),
            instructions: self.instructions.clone(),
            cook_time_min: optional_field(&self.cook_time_min),
            servings: optional_field(&self.servings),
        }
    }
}

/// An empty field is an omitted field; anything else must survive validation
fn optional_field(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Submit a new recipe to a category
///
/// POST /recipes/:category_id/new
///
/// 302 redirect to the category view on success, 400 re-render with errors
/// and prefilled values on validation failure, 404 for unknown categories.
pub async fn submit_recipe(
    State(state): State<Arc<RwLock<ServerState>>>,
    Path(category_id): Path<String>,
    Form(form): Form<RecipeForm>,
) -> Response {
    let mut state = state.write().await;
    if !state.store.contains(&category_id) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match form.to_draft().into_recipe() {
        Ok(recipe) => {
            info!("Adding recipe '{}' to category '{}'", recipe.title, category_id);
            state.store.add_recipe(&category_id, recipe);
            (
                StatusCode::FOUND,
                [(header::LOCATION, format!("/recipes/{}", category_id))],
            )
                .into_response()
        }
        Err(errors) => {
            // The write guard is held since the existence check
            let Some(category) = state.store.get(&category_id) else {
                return StatusCode::NOT_FOUND.into_response();
            };
            let title = format!("Nowy przepis — {}", category.name);
            (
                StatusCode::BAD_REQUEST,
                views::category_page(&title, category, &form, &errors),
            )
                .into_response()
        }
    }
}
