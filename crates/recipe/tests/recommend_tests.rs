//! End-to-end checks of the demo recommendation engine: tokenize, rank, select, compose.

use lunchcheck_recipe::{
    Difficulty, IngredientQuery, LIBRARY, RecipeRecord, Recommendation, rank, recommend,
    recommend_from,
};

#[test]
fn test_mackerel_and_radish_top_pick() {
    let query = IngredientQuery::parse("고등어, 무");
    let ranked = rank(&query, LIBRARY);

    assert!(!ranked.is_empty());
    let top = ranked[0].recipe;
    assert!(top.keywords.contains(&"고등어"));
    assert!(top.keywords.contains(&"무"));

    let payload = recommend("", "고등어, 무", 0);
    assert_eq!(payload.recipes[0].name, top.name);
}

#[test]
fn test_potato_then_exhausted() {
    // 간장 떡볶이, 포근포근 감자조림, 고등어 무조림
    let library: &[RecipeRecord] = &LIBRARY[3..6];

    let first = recommend_from(library, "", "감자", 0);
    assert_eq!(first.recipes.len(), 1);
    assert_eq!(first.recipes[0].name, "포근포근 감자조림");

    let second = recommend_from(library, "", "감자", 1);
    assert!(second.recipes.is_empty());
    assert!(second.analysis.contains("1개"));
}

#[test]
fn test_empty_ingredients_walk_the_library() {
    let first = recommend("카레라이스", "", 0);
    assert_eq!(first.recipes[0].name, LIBRARY[0].name);

    let last = recommend("", "", (LIBRARY.len() - 1) as u32);
    assert_eq!(last.recipes[0].name, LIBRARY[LIBRARY.len() - 1].name);

    let done = recommend("", "   ", LIBRARY.len() as u32);
    assert!(done.recipes.is_empty());
}

#[test]
fn test_unknown_ingredients_is_no_match_not_exhausted() {
    let at_zero = recommend("", "초콜릿, 바나나", 0);
    let at_three = recommend("", "초콜릿, 바나나", 3);

    assert!(at_zero.recipes.is_empty());
    assert!(at_zero.analysis.contains("초콜릿, 바나나"));
    assert_eq!(at_zero, at_three);
}

/// For every query, clicks 0..N-1 are recipes and N.. is the exhausted payload.
#[test]
fn test_monotonic_exhaustion() {
    for input in ["소고기", "떡", "무", "김치", "양파", "소고기 떡 무 김치"] {
        let n = rank(&IngredientQuery::parse(input), LIBRARY).len();
        assert!(n > 0, "{input} should match something");

        let mut seen = Vec::new();
        for click in 0..n {
            let payload = recommend("", input, click as u32);
            assert_eq!(payload.recipes.len(), 1, "{input} click {click}");
            seen.push(payload.recipes[0].name.clone());
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), n, "{input} repeats a recipe");

        let exhausted = recommend("", input, n as u32);
        assert!(exhausted.recipes.is_empty());
        assert_eq!(exhausted, recommend("", input, n as u32 + 10));
    }
}

#[test]
fn test_single_char_token_exact_only() {
    // "떡" matches the "떡" tag exactly, never "가래떡" by containment
    let ranked = rank(&IngredientQuery::parse("떡"), LIBRARY);
    assert!(
        ranked
            .iter()
            .all(|r| r.recipe.keywords.contains(&"떡") || r.recipe.name.contains('떡'))
    );

    // "파" must not match "대파" or "파프리카"
    let ranked = rank(&IngredientQuery::parse("파"), LIBRARY);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].recipe.name, "영양 가득 계란말이");
}

#[test]
fn test_deterministic_payloads() {
    for click in 0..4 {
        let a = recommend("비빔밥", "소고기, 떡, 무", click);
        let b = recommend("비빔밥", "소고기, 떡, 무", click);
        assert_eq!(a, b);
    }
}

#[test]
fn test_chosen_payload_round_trips_through_json() {
    let payload = recommend("돈가스", "두부", 0);
    let json = serde_json::to_string(&payload).unwrap();
    let parsed: Recommendation = serde_json::from_str(&json).unwrap();

    let record = LIBRARY.iter().find(|r| r.name == "매콤 두부조림").unwrap();
    let detail = &parsed.recipes[0];
    assert_eq!(detail.name, record.name);
    assert_eq!(detail.ingredients, record.ingredients);
    assert_eq!(detail.steps, record.steps);
    assert_eq!(detail.diff, Difficulty::Easy);
}
