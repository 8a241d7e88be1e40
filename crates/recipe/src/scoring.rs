//! Keyword scorer for the demo catalog.
//!
//! Per user token and per recipe keyword:
//! - one-character token: +2 only when it equals the keyword
//! - longer token: +2 when the keyword contains it
//!
//! and +1 per token contained in the recipe name. Recipes scoring 0 are dropped.
//! Single characters such as "무" or "떡" would otherwise match half the catalog.

use crate::catalog::RecipeRecord;
use crate::tokenizer::IngredientQuery;

pub const KEYWORD_POINTS: u32 = 2;
pub const NAME_POINTS: u32 = 1;

/// A recipe paired with its score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub recipe: &'a RecipeRecord,
    pub score: u32,
}

/// Whether a lower-cased token hits a keyword.
pub fn token_matches_keyword(token: &str, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    if token.chars().count() == 1 {
        token == keyword
    } else {
        keyword.contains(token)
    }
}

pub fn score_recipe(tokens: &[String], recipe: &RecipeRecord) -> u32 {
    let name = recipe.name.to_lowercase();

    tokens
        .iter()
        .map(|token| {
            let keyword_hits = recipe
                .keywords
                .iter()
                .filter(|keyword| token_matches_keyword(token, keyword))
                .count() as u32;

            let name_hit = if name.contains(token.as_str()) {
                NAME_POINTS
            } else {
                0
            };

            keyword_hits * KEYWORD_POINTS + name_hit
        })
        .sum()
}

/// Rank the catalog against a query, best first.
///
/// Ties keep catalog order. An empty query returns the whole catalog in catalog
/// order with score 0, so clicking through it walks every recipe.
pub fn rank<'a>(query: &IngredientQuery, library: &'a [RecipeRecord]) -> Vec<MatchResult<'a>> {
    if query.is_empty() {
        return library
            .iter()
            .map(|recipe| MatchResult { recipe, score: 0 })
            .collect();
    }

    let mut results: Vec<MatchResult<'a>> = library
        .iter()
        .map(|recipe| MatchResult {
            recipe,
            score: score_recipe(query.tokens(), recipe),
        })
        .filter(|result| result.score > 0)
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
