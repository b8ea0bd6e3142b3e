// src/server/handlers/categories.rs
//! Category list and detail views

use crate::server::handlers::RecipeForm;
use crate::server::{views, ServerState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;
use std::sync::Arc;
use tokio::sync::RwLock;

/// List all category summaries
///
/// GET /recipes
pub async fn list_categories(State(state): State<Arc<RwLock<ServerState>>>) -> Markup {
    let state = state.read().await;
    views::categories_page(&state.store.summaries())
}

/// Show a category with its recipes and an empty submission form
///
/// GET /recipes/:category_id
pub async fn show_category(
    State(state): State<Arc<RwLock<ServerState>>>,
    Path(category_id): Path<String>,
) -> Response {
    let state = state.read().await;
    match state.store.get(&category_id) {
        Some(category) => {
            views::category_page(&category.name, category, &RecipeForm::default(), &[])
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
