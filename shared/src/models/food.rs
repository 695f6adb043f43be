//! Menu item vocabulary
//!
//! Wire values match the admin panel's select options ("Main", "Vegan",
//! "Non-Vegetarian", ...), so the serde renames are load-bearing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::InvalidEnumValue;

/// Menu item category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    Main,
    Breakfast,
    Side,
    Dessert,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 4] = [
        FoodCategory::Main,
        FoodCategory::Breakfast,
        FoodCategory::Side,
        FoodCategory::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Main => "Main",
            FoodCategory::Breakfast => "Breakfast",
            FoodCategory::Side => "Side",
            FoodCategory::Dessert => "Dessert",
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Main" => Ok(FoodCategory::Main),
            "Breakfast" => Ok(FoodCategory::Breakfast),
            "Side" => Ok(FoodCategory::Side),
            "Dessert" => Ok(FoodCategory::Dessert),
            other => Err(InvalidEnumValue::new("category", other)),
        }
    }
}

/// Dietary classification of a menu item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietaryType {
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegetarian,
    Vegan,
}

impl DietaryType {
    pub const ALL: [DietaryType; 3] = [
        DietaryType::NonVegetarian,
        DietaryType::Vegetarian,
        DietaryType::Vegan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryType::NonVegetarian => "Non-Vegetarian",
            DietaryType::Vegetarian => "Vegetarian",
            DietaryType::Vegan => "Vegan",
        }
    }
}

impl std::fmt::Display for DietaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Non-Vegetarian" => Ok(DietaryType::NonVegetarian),
            "Vegetarian" => Ok(DietaryType::Vegetarian),
            "Vegan" => Ok(DietaryType::Vegan),
            other => Err(InvalidEnumValue::new("dietary", other)),
        }
    }
}
