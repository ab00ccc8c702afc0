use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, error, warn};

use crate::config::AppConfig;
use crate::dataset;
use crate::mealdb::{normalize, MealDbClient, MealSummary};
use crate::model::Recipe;

/// Remote categories walked when aggregating the full listing.
const AGGREGATE_CATEGORIES: [&str; 10] = [
    "Chicken",
    "Beef",
    "Dessert",
    "Vegetarian",
    "Seafood",
    "Pasta",
    "Pork",
    "Lamb",
    "Breakfast",
    "Side",
];

/// First N summaries taken per category during aggregation.
const AGGREGATE_PER_CATEGORY: usize = 8;
/// Detail lookups per category page.
const CATEGORY_DETAIL_LIMIT: usize = 10;
/// Detail lookups per cuisine query.
const AREA_DETAIL_LIMIT: usize = 15;
/// Detail lookups in the ingredient search pass.
const INGREDIENT_DETAIL_LIMIT: usize = 10;

/// Capability interface over the recipe data source: one method per logical
/// query. Callers never see errors; a failing source degrades to fallback or
/// empty data, so swapping in a different implementation (say, one that runs
/// its detail lookups concurrently) cannot change caller behavior.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Everything the source can list.
    async fn all_recipes(&self) -> Vec<Recipe>;

    /// One recipe by id, `None` when neither remote nor local data has it.
    async fn recipe_by_id(&self, id: u32) -> Option<Recipe>;

    /// Recipes for a display category name.
    async fn recipes_by_category(&self, category: &str) -> Vec<Recipe>;

    /// Recipes for a cuisine/area label.
    async fn recipes_by_area(&self, area: &str) -> Vec<Recipe>;

    /// Free-text search.
    async fn search(&self, query: &str) -> Vec<Recipe>;

    /// Resolve favorite ids to recipes, one lookup per id, all in flight at
    /// once. Ids that no longer resolve are dropped; input order is kept.
    async fn resolve_favorites(&self, ids: &[u32]) -> Vec<Recipe> {
        let lookups = ids.iter().map(|&id| self.recipe_by_id(id));
        join_all(lookups).await.into_iter().flatten().collect()
    }
}

/// Production source: TheMealDB over HTTP with the bundled dataset as
/// fallback. Detail lookups inside aggregate operations run sequentially.
pub struct RecipeService {
    client: MealDbClient,
    use_api: bool,
}

impl RecipeService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MealDbClient::new(&config.base_url, Duration::from_secs(config.timeout)),
            use_api: config.use_api,
        }
    }

    /// Map a display category to the raw API category used for filtering.
    fn api_category(category: &str) -> &'static str {
        match category.to_lowercase().as_str() {
            "breakfast" => "Breakfast",
            "lunch" => "Vegetarian",
            "dinner" => "Chicken",
            "desserts" => "Dessert",
            "snacks" => "Starter",
            "drinks" => "Dessert",
            _ => "Chicken",
        }
    }

    /// Full detail for one summary, already normalized. Lookup failures are
    /// logged and read as "no result".
    async fn detail(&self, id: &str, fallback_id: u32) -> Option<Recipe> {
        match self.client.lookup(id).await {
            Ok(Some(meal)) => Some(normalize(&meal, fallback_id)),
            Ok(None) => None,
            Err(e) => {
                warn!("Error fetching detail for meal {}: {}", id, e);
                None
            }
        }
    }

    /// Sequential detail pass over the first `limit` summaries.
    async fn detail_pass(&self, summaries: &[MealSummary], limit: usize) -> Vec<Recipe> {
        let mut detailed = Vec::new();
        for summary in summaries.iter().take(limit) {
            if let Some(recipe) = self.detail(&summary.id, detailed.len() as u32).await {
                detailed.push(recipe);
            }
        }
        detailed
    }

    async fn remote_all(&self) -> Vec<Recipe> {
        let mut all = Vec::new();
        for category in AGGREGATE_CATEGORIES {
            match self.client.filter_by_category(category).await {
                Ok(summaries) => {
                    for summary in summaries.iter().take(AGGREGATE_PER_CATEGORY) {
                        let fallback_id = all.len() as u32 + 1;
                        if let Some(recipe) = self.detail(&summary.id, fallback_id).await {
                            all.push(recipe);
                        }
                    }
                }
                Err(e) => warn!("Error fetching category {}: {}", category, e),
            }
        }
        all
    }

    fn local_by_category(category: &str) -> Vec<Recipe> {
        dataset::recipes()
            .iter()
            .filter(|recipe| recipe.category.as_str().eq_ignore_ascii_case(category))
            .cloned()
            .collect()
    }

    fn local_search(query: &str) -> Vec<Recipe> {
        let query = query.to_lowercase();
        dataset::recipes()
            .iter()
            .filter(|recipe| {
                recipe.name.to_lowercase().contains(&query)
                    || recipe.category.as_str().to_lowercase().contains(&query)
                    || recipe.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RecipeSource for RecipeService {
    async fn all_recipes(&self) -> Vec<Recipe> {
        if !self.use_api {
            return dataset::recipes().to_vec();
        }

        let all = self.remote_all().await;
        if all.is_empty() {
            debug!("Remote aggregate came back empty, using local dataset");
            return dataset::recipes().to_vec();
        }
        all
    }

    async fn recipe_by_id(&self, id: u32) -> Option<Recipe> {
        // Remote is attempted even when use_api is off; the local dataset
        // answers whenever the lookup fails or misses.
        match self.client.lookup(&id.to_string()).await {
            Ok(Some(meal)) => return Some(normalize(&meal, id)),
            Ok(None) => {}
            Err(e) => error!("Error fetching recipe {}: {}", id, e),
        }
        dataset::recipe_by_id(id)
    }

    async fn recipes_by_category(&self, category: &str) -> Vec<Recipe> {
        let api_category = Self::api_category(category);
        match self.client.filter_by_category(api_category).await {
            Ok(summaries) if !summaries.is_empty() => {
                self.detail_pass(&summaries, CATEGORY_DETAIL_LIMIT).await
            }
            Ok(_) => Self::local_by_category(category),
            Err(e) => {
                error!("Error fetching category recipes: {}", e);
                Self::local_by_category(category)
            }
        }
    }

    async fn recipes_by_area(&self, area: &str) -> Vec<Recipe> {
        // No local fallback on this path: the bundled dataset carries no
        // cuisine field, so a failed area query reads as "no recipes".
        match self.client.filter_by_area(area).await {
            Ok(summaries) if !summaries.is_empty() => {
                self.detail_pass(&summaries, AREA_DETAIL_LIMIT).await
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                error!("Error fetching recipes by area: {}", e);
                Vec::new()
            }
        }
    }

    async fn search(&self, query: &str) -> Vec<Recipe> {
        if !self.use_api {
            return Self::local_search(query);
        }

        let mut results: Vec<Recipe> = Vec::new();

        // 1. Match by name.
        match self.client.search_by_name(query).await {
            Ok(meals) => results.extend(
                meals
                    .iter()
                    .enumerate()
                    .map(|(i, meal)| normalize(meal, i as u32)),
            ),
            Err(e) => warn!("Name search error: {}", e),
        }

        // 2. Match by first letter, single-character queries only. These
        // results are concatenated without deduplicating against the name
        // pass.
        if query.chars().count() == 1 {
            match self.client.search_by_letter(query).await {
                Ok(meals) => {
                    let base = results.len();
                    results.extend(
                        meals
                            .iter()
                            .enumerate()
                            .map(|(i, meal)| normalize(meal, (base + i) as u32)),
                    );
                }
                Err(e) => warn!("Letter search error: {}", e),
            }
        }

        // 3. Match by ingredient, capped detail lookups, deduplicated by id
        // against everything collected so far.
        match self.client.filter_by_ingredient(query).await {
            Ok(summaries) => {
                for summary in summaries.iter().take(INGREDIENT_DETAIL_LIMIT) {
                    let fallback_id = results.len() as u32;
                    if let Some(recipe) = self.detail(&summary.id, fallback_id).await {
                        if !results.iter().any(|seen| seen.id == recipe.id) {
                            results.push(recipe);
                        }
                    }
                }
            }
            Err(e) => warn!("Ingredient search error: {}", e),
        }

        results
    }
}
