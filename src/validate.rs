// src/validate.rs
//! Recipe submission validation
//!
//! A [`RecipeDraft`] is the raw shape of a form submission: ingredients
//! already split into lines, numeric fields still carried as the submitted
//! strings so that an unparseable value surfaces as a validation message
//! rather than a transport error. Checks are independent and accumulate in
//! field order; an empty list means the draft is valid.

use crate::store::Recipe;

/// Candidate recipe as submitted, before validation.
///
/// Numeric fields are `None` when the form field was absent or empty.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cook_time_min: Option<String>,
    pub servings: Option<String>,
}

impl RecipeDraft {
    /// Check every field rule, returning the violations in field order
    /// (title, ingredients, instructions, cook_time_min, servings).
    ///
    /// Pure; never short-circuits.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Brak tytułu przepisu".to_string());
        }
        if self.ingredients.is_empty() {
            errors.push("Składniki muszą być niepustą tablicą".to_string());
        }
        if self.instructions.trim().is_empty() {
            errors.push("Brak instrukcji przygotowania".to_string());
        }
        // Parsed as u32 so the checks agree exactly with what into_recipe
        // can store; negative and oversized values fail the same way
        if let Some(raw) = &self.cook_time_min {
            if raw.trim().parse::<u32>().is_err() {
                errors.push("Czas przygotowania musi być nieujemną liczbą całkowitą".to_string());
            }
        }
        if let Some(raw) = &self.servings {
            if !matches!(raw.trim().parse::<u32>(), Ok(n) if n > 0) {
                errors.push("Porcje muszą być dodatnią liczbą całkowitą".to_string());
            }
        }

        errors
    }

    /// Validate and build the final [`Recipe`], or return the full list of
    /// violations.
    pub fn into_recipe(self) -> Result<Recipe, Vec<String>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Recipe {
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            // Validation guarantees these parse and fit the range
            cook_time_min: self.cook_time_min.and_then(|s| s.trim().parse().ok()),
            servings: self.servings.and_then(|s| s.trim().parse().ok()),
        })
    }
}

/// Split a newline-delimited ingredients block (one ingredient per textarea
/// row) into trimmed, blank-filtered lines. Handles CRLF submissions.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
