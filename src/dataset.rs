use std::sync::OnceLock;

use crate::model::Recipe;

static RECIPES: OnceLock<Vec<Recipe>> = OnceLock::new();

/// The bundled fallback dataset, parsed once on first use.
///
/// This is the guaranteed data source: it backs every operation when remote
/// fetching is disabled and every fallback path when it is enabled.
pub fn recipes() -> &'static [Recipe] {
    RECIPES.get_or_init(|| {
        serde_json::from_str(include_str!("../data/recipes.json"))
            .expect("bundled data/recipes.json is malformed")
    })
}

/// Find one bundled recipe by id.
pub fn recipe_by_id(id: u32) -> Option<Recipe> {
    recipes().iter().find(|recipe| recipe.id == id).cloned()
}
