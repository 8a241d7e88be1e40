//! Builds the JSON-shaped payload returned by `/api/recommend` in demo mode.

use serde::{Deserialize, Serialize};

use crate::catalog::{Difficulty, RecipeRecord, categories};
use crate::sequencer::Selection;
use crate::tokenizer::IngredientQuery;

/// Response body shared with the live model prompt: exactly `analysis`,
/// `recipes` and `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub analysis: String,
    pub recipes: Vec<RecipeDetail>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub name: String,
    pub desc: String,
    /// Minutes, as a string ("20").
    pub time: String,
    pub diff: Difficulty,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tip: String,
}

impl From<&RecipeRecord> for RecipeDetail {
    fn from(recipe: &RecipeRecord) -> Self {
        Self {
            name: recipe.name.to_string(),
            desc: recipe.desc.to_string(),
            time: recipe.minutes.to_string(),
            diff: recipe.difficulty,
            ingredients: recipe.ingredients.iter().map(ToString::to_string).collect(),
            steps: recipe.steps.iter().map(ToString::to_string).collect(),
            tip: recipe.tip.to_string(),
        }
    }
}

/// Turn a selection into the response payload. No I/O.
pub fn compose(
    selection: Selection<'_>,
    lunch: &str,
    query: &IngredientQuery,
    library: &[RecipeRecord],
) -> Recommendation {
    match selection {
        Selection::Chosen(recipe) => chosen(recipe, lunch),
        Selection::NoMatch => no_match(query, library),
        Selection::Exhausted { shown } => exhausted(query, shown),
    }
}

fn chosen(recipe: &RecipeRecord, lunch: &str) -> Recommendation {
    let lunch = lunch.trim();
    let analysis = if lunch.is_empty() {
        recipe.analysis.to_string()
    } else {
        format!("오늘 점심은 '{lunch}'였네요. {}", recipe.analysis)
    };

    Recommendation {
        analysis,
        recipes: vec![RecipeDetail::from(recipe)],
        message: recipe.message.to_string(),
    }
}

fn no_match(query: &IngredientQuery, library: &[RecipeRecord]) -> Recommendation {
    let covered = categories(library)
        .iter()
        .map(|category| format!("'{category}'"))
        .collect::<Vec<_>>()
        .join(", ");

    Recommendation {
        analysis: format!(
            "입력하신 재료({})로 만들 수 있는 추천 레시피가 현재 데모 데이터베이스에 없습니다. ㅠㅠ",
            query.raw().trim()
        ),
        recipes: Vec::new(),
        message: format!(
            "죄송합니다! 데모 모드에서는 {covered} 위주로만 레시피가 준비되어 있어요. 실제 버전에서는 어떤 재료든 AI가 뚝딱 만들어 드린답니다! 😅"
        ),
    }
}

fn exhausted(query: &IngredientQuery, shown: usize) -> Recommendation {
    let analysis = if query.is_empty() {
        format!("준비된 추천 레시피 {shown}개를 모두 보여드렸어요.")
    } else {
        format!(
            "입력하신 재료({})로 추천할 수 있는 레시피 {shown}개를 모두 보여드렸어요.",
            query.raw().trim()
        )
    };

    Recommendation {
        analysis,
        recipes: Vec::new(),
        message: "냉장고 재료를 바꿔서 입력하시거나 처음부터 다시 추천받아 보세요! 🙌".to_string(),
    }
}
