// src/server/handlers/mod.rs
//! HTTP request handlers for the kuchnia server

pub mod categories;
pub mod recipes;

pub use recipes::RecipeForm;
