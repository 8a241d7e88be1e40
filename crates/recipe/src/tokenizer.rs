/// A fridge ingredient query split into comparable tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    raw: String,
    tokens: Vec<String>,
}

impl IngredientQuery {
    /// Split on commas, slashes and whitespace. Tokens are trimmed and
    /// lower-cased; duplicates and order are kept.
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self {
            raw: raw.to_string(),
            tokens,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_all_delimiters() {
        let query = IngredientQuery::parse("소고기, 무/감자  두부\t계란\n파");
        assert_eq!(query.tokens(), ["소고기", "무", "감자", "두부", "계란", "파"]);
    }

    #[test]
    fn test_delimiters_only_is_empty() {
        for input in ["", "   ", ",,,", " / , / ", "\t\n", ",/ ,/"] {
            let query = IngredientQuery::parse(input);
            assert!(query.is_empty(), "{input:?} should yield no tokens");
        }
    }

    #[test]
    fn test_keeps_duplicates_and_order() {
        let query = IngredientQuery::parse("무, 감자, 무");
        assert_eq!(query.tokens(), ["무", "감자", "무"]);
    }

    #[test]
    fn test_lowercases_and_keeps_raw() {
        let query = IngredientQuery::parse(" SPAM, Tofu ");
        assert_eq!(query.tokens(), ["spam", "tofu"]);
        assert_eq!(query.raw(), " SPAM, Tofu ");
    }

    #[test]
    fn test_full_width_space_is_whitespace() {
        let query = IngredientQuery::parse("고등어\u{3000}무");
        assert_eq!(query.tokens(), ["고등어", "무"]);
    }
}
