use std::collections::HashMap;

use serde::Deserialize;

/// JSON envelope every TheMealDB endpoint returns: `{"meals": [...]}`, with
/// `null` standing in for "no matches".
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// Slim record returned by the filter endpoints (category, area, ingredient).
#[derive(Debug, Clone, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,
}

/// Full record from the lookup and search endpoints. Only the fields the
/// normalizer consumes are named; the 20 indexed ingredient/measure slots
/// (and whatever else the API carries) land in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Option<String>>,
}

/// Number of indexed ingredient/measure slot pairs a record can carry.
pub const SLOT_COUNT: usize = 20;

impl MealRecord {
    /// Trimmed value of an extra field, `None` when absent or blank.
    fn slot(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(|value| value.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Ingredient name in slot `i` (1-based).
    pub fn ingredient(&self, i: usize) -> Option<&str> {
        self.slot(&format!("strIngredient{}", i))
    }

    /// Measure paired with slot `i` (1-based).
    pub fn measure(&self, i: usize) -> Option<&str> {
        self.slot(&format!("strMeasure{}", i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_null_meals_is_empty() {
        let envelope: MealsEnvelope<MealSummary> =
            serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_none());
    }

    #[test]
    fn slots_land_in_extra() {
        let record: MealRecord = serde_json::from_str(
            r#"{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strCategory": "Chicken",
                "strInstructions": "Preheat oven.",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": " ",
                "strMeasure2": "",
                "strIngredient3": null
            }"#,
        )
        .unwrap();

        assert_eq!(record.ingredient(1), Some("soy sauce"));
        assert_eq!(record.measure(1), Some("3/4 cup"));
        // blank and null slots read as absent
        assert_eq!(record.ingredient(2), None);
        assert_eq!(record.ingredient(3), None);
        assert_eq!(record.ingredient(4), None);
    }
}
