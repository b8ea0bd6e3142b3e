// src/server/views.rs
//! Server-rendered HTML views
//!
//! Maud templates: compile-time checked, every interpolation auto-escaped.
//! The category page doubles as the submission form; on validation failure
//! it re-renders with the error list and the raw submitted values prefilled.

use crate::server::handlers::RecipeForm;
use crate::store::{Category, CategorySummary};
use maud::{html, Markup, DOCTYPE};

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
}

/// Category list view: every category name linked to its detail page
pub fn categories_page(categories: &[CategorySummary]) -> Markup {
    layout(
        "Kategorie przepisów",
        html! {
            h1 { "Kategorie przepisów" }
            ul {
                @for category in categories {
                    li {
                        a href=(format!("/recipes/{}", category.id)) { (category.name) }
                    }
                }
            }
        },
    )
}

/// Category detail view: recipes in append order plus the submission form
pub fn category_page(
    title: &str,
    category: &Category,
    form: &RecipeForm,
    errors: &[String],
) -> Markup {
    layout(
        title,
        html! {
            h1 { (category.name) }
            p { a href="/recipes" { "Wszystkie kategorie" } }

            @if category.recipes.is_empty() {
                p { "Brak przepisów w tej kategorii." }
            }
            @for recipe in &category.recipes {
                article {
                    h2 { (recipe.title) }
                    ul {
                        @for ingredient in &recipe.ingredients {
                            li { (ingredient) }
                        }
                    }
                    p { (recipe.instructions) }
                    @if recipe.cook_time_min.is_some() || recipe.servings.is_some() {
                        p {
                            @if let Some(minutes) = recipe.cook_time_min {
                                "Czas przygotowania: " (minutes) " min. "
                            }
                            @if let Some(servings) = recipe.servings {
                                "Porcje: " (servings)
                            }
                        }
                    }
                }
            }

            h2 { "Nowy przepis" }
            @if !errors.is_empty() {
                ul class="errors" {
                    @for error in errors {
                        li { (error) }
                    }
                }
            }
            form method="post" action=(format!("/recipes/{}/new", category.id)) {
                p {
                    label for="title" { "Tytuł" }
                    input type="text" id="title" name="title" value=(form.title);
                }
                p {
                    label for="ingredients" { "Składniki (jeden na wiersz)" }
                    textarea id="ingredients" name="ingredients" rows="6" {
                        (form.ingredients)
                    }
                }
                p {
                    label for="instructions" { "Instrukcje" }
                    textarea id="instructions" name="instructions" rows="4" {
                        (form.instructions)
                    }
                }
                p {
                    label for="cook_time_min" { "Czas przygotowania (min)" }
                    input type="text" id="cook_time_min" name="cook_time_min"
                        value=(form.cook_time_min);
                }
                p {
                    label for="servings" { "Porcje" }
                    input type="text" id="servings" name="servings" value=(form.servings);
                }
                p {
                    button type="submit" { "Dodaj przepis" }
                }
            }
        },
    )
}
