//! Demo-mode dinner recommendation engine.
//!
//! When no language model credential is available the server still has to answer
//! `/api/recommend` with something that looks like a model reply. This crate does
//! that with a fixed recipe catalog and a small keyword scorer:
//!
//! 1. [`tokenizer`] splits the fridge ingredient text into normalized tokens
//! 2. [`scoring`] ranks every catalog recipe against those tokens
//! 3. [`sequencer`] picks the candidate at the caller's click index
//! 4. [`composer`] renders the `analysis` / `recipes` / `message` payload
//!
//! Every step is pure and synchronous. The catalog is immutable, so the engine can
//! be called from any number of request handlers without coordination.

pub mod catalog;
pub mod composer;
pub mod scoring;
pub mod sequencer;
pub mod tokenizer;

pub use catalog::{Difficulty, LIBRARY, RecipeRecord, categories};
pub use composer::{RecipeDetail, Recommendation, compose};
pub use scoring::{MatchResult, rank};
pub use sequencer::{Selection, select};
pub use tokenizer::IngredientQuery;

/// Recommend a dinner recipe from the built-in catalog.
///
/// `click_count` is owned by the client: sending the same ingredients with 0, 1, 2...
/// walks through the ranked candidates until the exhausted payload comes back.
pub fn recommend(lunch: &str, ingredients: &str, click_count: u32) -> Recommendation {
    recommend_from(LIBRARY, lunch, ingredients, click_count)
}

/// Same as [`recommend`] against an arbitrary catalog.
pub fn recommend_from(
    library: &[RecipeRecord],
    lunch: &str,
    ingredients: &str,
    click_count: u32,
) -> Recommendation {
    let query = IngredientQuery::parse(ingredients);
    let candidates = rank(&query, library);

    tracing::debug!(
        tokens = ?query.tokens(),
        candidates = candidates.len(),
        click_count,
        "ranked demo recipes"
    );

    let selection = select(&candidates, click_count);
    compose(selection, lunch, &query, library)
}
