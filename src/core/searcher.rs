/// Recipe searcher with fuzzy matching
///
/// Matches a query against recipe names and ingredients.

use crate::store::{Recipe, RecipeCollection};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A recipe and how well it matched
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub recipe: Recipe,
    pub score: i64,
}

/// Handles recipe searching with fuzzy matching
pub struct Searcher {
    matcher: SkimMatcherV2,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Search recipes with fuzzy matching
    ///
    /// # Arguments
    /// * `collection` - Recipes to look through
    /// * `query` - Search query
    /// * `limit` - Maximum results to return
    ///
    /// # Returns
    /// Results sorted by score, best first. Equal scores keep list order.
    pub fn search(&self, collection: &RecipeCollection, query: &str, limit: usize) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult> = collection
            .recipes()
            .iter()
            .filter_map(|recipe| {
                self.score(recipe, query).map(|score| SearchResult {
                    recipe: recipe.clone(),
                    score,
                })
            })
            .collect();

        // Sort by score (highest first)
        results.sort_by(|a, b| b.score.cmp(&a.score));

        results.truncate(limit);
        results
    }

    // Best score across the name and every ingredient
    fn score(&self, recipe: &Recipe, query: &str) -> Option<i64> {
        std::iter::once(recipe.name.as_str())
            .chain(recipe.ingredients.iter().map(String::as_str))
            .filter_map(|field| self.matcher.fuzzy_match(field, query))
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> RecipeCollection {
        let mut collection = RecipeCollection::new();
        for (id, name, ingredients) in [
            (1, "Tomato Soup", vec!["tomato", "water", "salt"]),
            (2, "Bread", vec!["flour", "yeast", "salt"]),
            (3, "Pancakes", vec!["flour", "milk", "eggs"]),
        ] {
            collection.add_recipe(Recipe {
                id,
                name: name.to_string(),
                ingredients: ingredients.into_iter().map(String::from).collect(),
                instructions: "Cook".to_string(),
            });
        }
        collection
    }

    #[test]
    fn test_search_by_name() {
        let searcher = Searcher::new();
        let results = searcher.search(&collection(), "soup", 10);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].recipe.id, 1);
    }

    #[test]
    fn test_search_by_ingredient() {
        let searcher = Searcher::new();
        let ids: Vec<_> = searcher
            .search(&collection(), "flour", 10)
            .into_iter()
            .map(|r| r.recipe.id)
            .collect();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&2));
        assert!(ids.contains(&3));
    }

    #[test]
    fn test_search_limit_and_empty_query() {
        let searcher = Searcher::new();
        assert_eq!(searcher.search(&collection(), "salt", 1).len(), 1);
        assert!(searcher.search(&collection(), "   ", 10).is_empty());
    }

    #[test]
    fn test_equal_scores_keep_list_order() {
        let mut collection = RecipeCollection::new();
        for (id, name) in [(1, "salt bread"), (2, "salt cake"), (3, "salt pie")] {
            collection.add_recipe(Recipe {
                id,
                name: name.to_string(),
                ingredients: vec!["flour".to_string()],
                instructions: "Bake".to_string(),
            });
        }

        let results = Searcher::new().search(&collection, "salt", 10);
        assert!(results.windows(2).all(|w| w[0].score == w[1].score));
        let ids: Vec<_> = results.iter().map(|r| r.recipe.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_search_no_match() {
        let searcher = Searcher::new();
        assert!(searcher.search(&collection(), "zzqx", 10).is_empty());
    }
}
