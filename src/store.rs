// src/store.rs
//! In-memory recipe store
//!
//! Categories are created once at process start from seed data and never
//! deleted; the only mutation is appending a validated recipe. Summaries
//! preserve insertion order, so the store keeps categories in a `Vec` and
//! resolves ids with a linear scan (the category set is tiny and fixed).

/// A single dish entry. Immutable once appended to a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    /// Non-empty after validation
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// Minutes, non-negative
    pub cook_time_min: Option<u32>,
    /// Positive
    pub servings: Option<u32>,
}

/// Named grouping of recipes, identified by a stable string key.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Append order is preserved
    pub recipes: Vec<Recipe>,
}

/// Id + name pair for the category list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
}

/// Owned collection of categories, handed to the handlers at startup.
///
/// Process-local; all state is reset on restart.
#[derive(Debug, Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the built-in seed categories
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.insert_category("dania-glowne", "Dania główne");
        store.add_recipe(
            "dania-glowne",
            Recipe {
                title: "Kurczak pieczony z ziemniakami".to_string(),
                ingredients: vec![
                    "1 kg kurczaka".to_string(),
                    "500 g ziemniaków".to_string(),
                    "sól".to_string(),
                    "pieprz".to_string(),
                    "oliwa".to_string(),
                ],
                instructions: "Przypraw kurczaka, ułóż z ziemniakami, piecz 60 min w 200°C."
                    .to_string(),
                cook_time_min: Some(70),
                servings: Some(4),
            },
        );
        store.insert_category("desery", "Desery");
        store.add_recipe(
            "desery",
            Recipe {
                title: "Szarlotka".to_string(),
                ingredients: vec![
                    "jabłka".to_string(),
                    "mąka".to_string(),
                    "cukier".to_string(),
                    "masło".to_string(),
                    "cynamon".to_string(),
                ],
                instructions: "Przygotuj ciasto, wyłóż jabłka, piecz 50 min.".to_string(),
                cook_time_min: Some(80),
                servings: Some(8),
            },
        );
        store
    }

    /// Register a new category. Later categories appear after earlier ones
    /// in the summary listing.
    pub fn insert_category(&mut self, id: &str, name: &str) {
        self.categories.push(Category {
            id: id.to_string(),
            name: name.to_string(),
            recipes: Vec::new(),
        });
    }

    /// List id + name pairs in insertion order
    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|c| CategorySummary {
                id: c.id.clone(),
                name: c.name.clone(),
            })
            .collect()
    }

    /// Check category existence by id
    pub fn contains(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Fetch a full category, or `None` when the id is unknown
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Append a recipe to a category.
    ///
    /// Returns `false` silently when the category id is unknown.
    pub fn add_recipe(&mut self, id: &str, recipe: Recipe) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.recipes.push(recipe);
                true
            }
            None => false,
        }
    }
}
