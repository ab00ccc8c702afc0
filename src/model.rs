use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The canonical recipe shape every view consumes, regardless of data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    /// Emoji stand-in rendered when no image URL is available.
    pub icon: String,
    pub category: Category,
    /// Display string, e.g. "30-45 mins". Sorting uses the numeric prefix.
    pub time: String,
    pub difficulty: Difficulty,
    pub servings: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Display categories shown to the user. Remote API categories are mapped onto
/// these through a fixed table in the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Desserts,
    Snacks,
    Drinks,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Desserts,
        Category::Snacks,
        Category::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Desserts => "Desserts",
            Category::Snacks => "Snacks",
            Category::Drinks => "Drinks",
        }
    }

    /// Emoji used on the category overview page.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Breakfast => "🍳",
            Category::Lunch => "🍛",
            Category::Dinner => "🍝",
            Category::Desserts => "🍰",
            Category::Snacks => "🍿",
            Category::Drinks => "🥤",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Category::Breakfast),
            "lunch" => Ok(Category::Lunch),
            "dinner" => Ok(Category::Dinner),
            "desserts" => Ok(Category::Desserts),
            "snacks" => Ok(Category::Snacks),
            "drinks" => Ok(Category::Drinks),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// Difficulty levels, ordered for sorting: Easy < Medium < Hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn category_round_trips_through_display() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!("DESSERTS".parse::<Category>().unwrap(), Category::Desserts);
        assert!("brunch".parse::<Category>().is_err());
    }
}
