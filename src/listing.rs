use std::str::FromStr;

use crate::model::{Difficulty, Recipe};

/// Sort keys offered by the listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Alphabetic by name.
    #[default]
    Name,
    /// Numeric prefix of the cooking-time display string.
    Time,
    /// Easy < Medium < Hard.
    Difficulty,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "time" => Ok(SortKey::Time),
            "difficulty" => Ok(SortKey::Difficulty),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Filter and sort state of the listing page. Re-applied synchronously
/// whenever any field changes.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub sort: SortKey,
}

/// Apply live search, difficulty filter, and sort to a fetched listing.
pub fn apply(recipes: &[Recipe], query: &ListingQuery) -> Vec<Recipe> {
    let mut results: Vec<Recipe> = match query.search.as_deref() {
        Some(term) if !term.is_empty() => {
            let term = term.to_lowercase();
            recipes
                .iter()
                .filter(|recipe| matches_search(recipe, &term))
                .cloned()
                .collect()
        }
        _ => recipes.to_vec(),
    };

    if let Some(level) = query.difficulty {
        results.retain(|recipe| recipe.difficulty == level);
    }

    match query.sort {
        SortKey::Name => results.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Time => results.sort_by_key(|recipe| time_minutes(&recipe.time)),
        SortKey::Difficulty => results.sort_by_key(|recipe| recipe.difficulty),
    }

    results
}

/// The listing search matches name, category, description, or any single
/// ingredient, case-insensitively. `term` must already be lowercased.
fn matches_search(recipe: &Recipe, term: &str) -> bool {
    recipe.name.to_lowercase().contains(term)
        || recipe.category.as_str().to_lowercase().contains(term)
        || recipe.description.to_lowercase().contains(term)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(term))
}

/// Numeric prefix of a time display string: "30-45 mins" reads as 30.
fn time_minutes(time: &str) -> u32 {
    let digits: String = time.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn recipe(id: u32, name: &str, time: &str, difficulty: Difficulty) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            icon: "🍽️".to_string(),
            category: Category::Dinner,
            time: time.to_string(),
            difficulty,
            servings: "4".to_string(),
            description: format!("A plate of {}", name),
            image: None,
            ingredients: vec!["2 cups rice".to_string(), "1 tsp saffron".to_string()],
            instructions: vec!["Cook".to_string()],
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe(1, "Paella", "50 mins", Difficulty::Hard),
            recipe(2, "Omelette", "10 mins", Difficulty::Easy),
            recipe(3, "Risotto", "35 mins", Difficulty::Medium),
        ]
    }

    #[test]
    fn search_is_case_insensitive_over_name() {
        let query = ListingQuery {
            search: Some("PAELLA".to_string()),
            ..Default::default()
        };
        let results = apply(&sample(), &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Paella");
    }

    #[test]
    fn search_matches_category_description_and_ingredients() {
        let recipes = sample();
        for term in ["dinner", "a plate of", "saffron"] {
            let query = ListingQuery {
                search: Some(term.to_string()),
                ..Default::default()
            };
            assert_eq!(apply(&recipes, &query).len(), 3, "term {:?}", term);
        }
    }

    #[test]
    fn unmatched_search_yields_empty_list() {
        let query = ListingQuery {
            search: Some("quinoa".to_string()),
            ..Default::default()
        };
        assert!(apply(&sample(), &query).is_empty());
    }

    #[test]
    fn empty_search_keeps_everything() {
        let query = ListingQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(apply(&sample(), &query).len(), 3);
    }

    #[test]
    fn difficulty_filter_retains_matching_level() {
        let query = ListingQuery {
            difficulty: Some(Difficulty::Easy),
            ..Default::default()
        };
        let results = apply(&sample(), &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Omelette");
    }

    #[test]
    fn sort_by_difficulty_orders_easy_medium_hard() {
        let recipes = vec![
            recipe(1, "C", "10 mins", Difficulty::Hard),
            recipe(2, "A", "10 mins", Difficulty::Easy),
            recipe(3, "B", "10 mins", Difficulty::Medium),
        ];
        let query = ListingQuery {
            sort: SortKey::Difficulty,
            ..Default::default()
        };
        let sorted: Vec<Difficulty> = apply(&recipes, &query)
            .iter()
            .map(|recipe| recipe.difficulty)
            .collect();
        assert_eq!(
            sorted,
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }

    #[test]
    fn sort_by_time_uses_numeric_prefix() {
        let query = ListingQuery {
            sort: SortKey::Time,
            ..Default::default()
        };
        let names: Vec<String> = apply(&sample(), &query)
            .iter()
            .map(|recipe| recipe.name.clone())
            .collect();
        assert_eq!(names, vec!["Omelette", "Risotto", "Paella"]);
    }

    #[test]
    fn sort_by_name_is_alphabetic() {
        let query = ListingQuery::default();
        let names: Vec<String> = apply(&sample(), &query)
            .iter()
            .map(|recipe| recipe.name.clone())
            .collect();
        assert_eq!(names, vec!["Omelette", "Paella", "Risotto"]);
    }

    #[test]
    fn time_prefix_parsing() {
        assert_eq!(time_minutes("30-45 mins"), 30);
        assert_eq!(time_minutes("5 mins"), 5);
        assert_eq!(time_minutes("about an hour"), 0);
    }

    #[test]
    fn sort_key_parses_from_cli_strings() {
        assert_eq!("difficulty".parse::<SortKey>().unwrap(), SortKey::Difficulty);
        assert!("rating".parse::<SortKey>().is_err());
    }
}
