use crate::model::{Category, Difficulty, Recipe};

use super::record::{MealRecord, SLOT_COUNT};

// Placeholders for fields the remote API does not supply.
const DEFAULT_TIME: &str = "30-45 mins";
const DEFAULT_SERVINGS: &str = "4";

/// Reshape one raw meal record into the canonical recipe shape.
///
/// `fallback_id` is used when `idMeal` is missing or non-numeric, so ids stay
/// stable relative to the position the caller assigns.
pub fn normalize(meal: &MealRecord, fallback_id: u32) -> Recipe {
    let mut ingredients = Vec::new();
    for i in 1..=SLOT_COUNT {
        if let Some(name) = meal.ingredient(i) {
            let measure = meal.measure(i).unwrap_or("");
            ingredients.push(format!("{} {}", measure, name).trim().to_string());
        }
    }

    let raw_category = meal.category.as_deref().unwrap_or("");
    let id = meal
        .id
        .as_deref()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(fallback_id);

    Recipe {
        id,
        name: meal.name.clone(),
        icon: category_icon(raw_category).to_string(),
        category: map_category(raw_category),
        time: DEFAULT_TIME.to_string(),
        difficulty: Difficulty::Medium,
        servings: DEFAULT_SERVINGS.to_string(),
        description: meal.name.clone(),
        image: meal.thumb.clone(),
        ingredients,
        instructions: split_instructions(meal.instructions.as_deref()),
    }
}

/// Map a raw API category onto a display category.
fn map_category(raw: &str) -> Category {
    match raw {
        "Breakfast" => Category::Breakfast,
        "Dessert" => Category::Desserts,
        "Starter" | "Side" => Category::Snacks,
        "Vegetarian" | "Pasta" => Category::Lunch,
        "Seafood" | "Chicken" | "Beef" | "Lamb" | "Pork" => Category::Dinner,
        _ => Category::Lunch,
    }
}

/// Icon keyed by the raw API category, not the mapped display one.
fn category_icon(raw: &str) -> &'static str {
    match raw {
        "Breakfast" => "🍳",
        "Dessert" => "🍰",
        "Starter" => "🍿",
        "Seafood" => "🐟",
        "Chicken" => "🍗",
        "Beef" => "🥩",
        "Lamb" => "🍖",
        "Pork" => "🥓",
        "Pasta" => "🍝",
        "Vegetarian" => "🥗",
        _ => "🍽️",
    }
}

/// Split free-text instructions into steps: on line breaks when the text has
/// any, otherwise on sentence-ending periods. Blank fragments are dropped.
fn split_instructions(raw: Option<&str>) -> Vec<String> {
    let Some(text) = raw else {
        return Vec::new();
    };

    let fragments: Vec<&str> = if text.contains('\n') {
        text.lines().collect()
    } else {
        text.split('.').collect()
    };

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}
