use crate::catalog::RecipeRecord;
use crate::scoring::MatchResult;

/// What to show for a given click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Chosen(&'a RecipeRecord),
    /// Nothing in the catalog matched the query.
    NoMatch,
    /// Every candidate has already been shown.
    Exhausted { shown: usize },
}

/// Pick the candidate at `click_count`.
///
/// The server keeps no session: the client increments `click_count` and replays
/// the same query to page through the ranked list.
pub fn select<'a>(candidates: &[MatchResult<'a>], click_count: u32) -> Selection<'a> {
    if candidates.is_empty() {
        return Selection::NoMatch;
    }

    let index = usize::try_from(click_count).unwrap_or(usize::MAX);
    match candidates.get(index) {
        Some(candidate) => Selection::Chosen(candidate.recipe),
        None => Selection::Exhausted {
            shown: candidates.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LIBRARY;

    fn candidates(n: usize) -> Vec<MatchResult<'static>> {
        LIBRARY
            .iter()
            .take(n)
            .map(|recipe| MatchResult { recipe, score: 1 })
            .collect()
    }

    #[test]
    fn test_empty_candidates_is_no_match() {
        assert_eq!(select(&[], 0), Selection::NoMatch);
        assert_eq!(select(&[], 5), Selection::NoMatch);
    }

    #[test]
    fn test_click_indexes_candidates() {
        let list = candidates(3);
        for (i, candidate) in list.iter().enumerate() {
            assert_eq!(select(&list, i as u32), Selection::Chosen(candidate.recipe));
        }
    }

    #[test]
    fn test_exhaustion_at_and_beyond_length() {
        for n in 1..=4 {
            let list = candidates(n);
            assert_eq!(
                select(&list, (n - 1) as u32),
                Selection::Chosen(list[n - 1].recipe)
            );
            assert_eq!(select(&list, n as u32), Selection::Exhausted { shown: n });
            assert_eq!(select(&list, u32::MAX), Selection::Exhausted { shown: n });
        }
    }
}
