use std::fmt::Write;

use crate::model::Recipe;

/// One listing card: icon/name line, meta line, description preview.
pub fn card(recipe: &Recipe, is_favorite: bool) -> String {
    let heart = if is_favorite { "❤️" } else { "🤍" };
    let mut out = String::new();
    let _ = writeln!(out, "{} {}  {} [#{}]", heart, recipe.icon, recipe.name, recipe.id);
    let _ = writeln!(
        out,
        "   ⏱️ {}  👨‍🍳 {}  🏷️ {}",
        recipe.time, recipe.difficulty, recipe.category
    );
    let _ = write!(out, "   {}", recipe.description);
    out
}

/// The full detail page.
pub fn detail(recipe: &Recipe, is_favorite: bool) -> String {
    let mut out = String::new();
    let saved = if is_favorite {
        "❤️ Saved"
    } else {
        "🤍 Not saved"
    };

    let _ = writeln!(out, "{} {}", recipe.icon, recipe.name);
    let _ = writeln!(out, "{}", recipe.description);
    if let Some(image) = &recipe.image {
        let _ = writeln!(out, "Image: {}", image);
    }
    let _ = writeln!(
        out,
        "⏱️ Time: {}  👨‍🍳 Difficulty: {}  🍽️ Servings: {}  🏷️ Category: {}",
        recipe.time, recipe.difficulty, recipe.servings, recipe.category
    );
    let _ = writeln!(out, "{}", saved);

    let _ = writeln!(out, "\n📝 Ingredients");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  ✓ {}", ingredient);
    }

    let _ = writeln!(out, "\n👩‍🍳 Instructions");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  Step {}: {}", i + 1, step);
    }

    out
}

/// Print-friendly sheet: plain text, no emoji, suitable for piping to a
/// printer spooler.
pub fn printable(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.name.to_uppercase());
    let _ = writeln!(out, "{}", "=".repeat(recipe.name.chars().count().max(8)));
    let _ = writeln!(
        out,
        "Time: {} | Difficulty: {} | Servings: {} | Category: {}",
        recipe.time, recipe.difficulty, recipe.servings, recipe.category
    );

    let _ = writeln!(out, "\nIngredients:");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  - {}", ingredient);
    }

    let _ = writeln!(out, "\nInstructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }

    out
}
