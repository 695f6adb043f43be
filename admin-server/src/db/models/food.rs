//! Food (menu item) model
//!
//! Nutrition and descriptive fields mirror the admin panel's food form; all
//! of them are optional and carried through unchanged.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;
use shared::{DietaryType, FoodCategory};

/// Food record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub category: FoodCategory,
    pub price: f64,
    pub dietary: DietaryType,
    #[serde(default = "default_true")]
    pub availability: bool,

    // -- Descriptive fields --
    pub description: Option<String>,
    pub origin: Option<String>,
    pub flavor: Option<String>,
    pub serving_size: Option<String>,
    pub image_url: Option<String>,
    /// Preparation time in minutes
    pub preparation_time: Option<i32>,
    /// Star rating, 0 to 5
    pub rating: Option<f64>,
    /// Spice level, 0 to 5
    pub spice_level: Option<i32>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    // -- Nutrition fields --
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,

    /// RFC 3339 creation timestamp, set by the server
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Create food payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FoodCreate {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub name: String,
    pub category: FoodCategory,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: f64,
    pub dietary: DietaryType,
    pub availability: Option<bool>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(max = 200))]
    pub origin: Option<String>,
    #[validate(length(max = 200))]
    pub flavor: Option<String>,
    #[validate(length(max = 200))]
    pub serving_size: Option<String>,
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
    #[validate(range(min = 0))]
    pub preparation_time: Option<i32>,
    #[validate(range(min = 0.0, max = 5.0, message = "must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[validate(range(min = 0, max = 5, message = "must be between 0 and 5"))]
    pub spice_level: Option<i32>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    #[validate(range(min = 0.0))]
    pub calories: Option<f64>,
    #[validate(range(min = 0.0))]
    pub protein: Option<f64>,
    #[validate(range(min = 0.0))]
    pub carbs: Option<f64>,
    #[validate(range(min = 0.0))]
    pub fats: Option<f64>,
}

/// Update food payload
///
/// `None` fields are left untouched (merge semantics), so every field is
/// skipped during serialization when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct FoodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary: Option<DietaryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub flavor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub serving_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub preparation_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 5.0, message = "must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 5, message = "must be between 0 and 5"))]
    pub spice_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub carbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub fats: Option<f64>,
}

impl Food {
    /// Build a new record from a validated create payload
    pub fn from_create(data: FoodCreate, created_at: String) -> Self {
        Self {
            id: None,
            name: data.name,
            category: data.category,
            price: data.price,
            dietary: data.dietary,
            availability: data.availability.unwrap_or(true),
            description: data.description,
            origin: data.origin,
            flavor: data.flavor,
            serving_size: data.serving_size,
            image_url: data.image_url,
            preparation_time: data.preparation_time,
            rating: data.rating,
            spice_level: data.spice_level,
            ingredients: data.ingredients,
            tags: data.tags,
            calories: data.calories,
            protein: data.protein,
            carbs: data.carbs,
            fats: data.fats,
            created_at: Some(created_at),
        }
    }

    /// Record id rendered as "food:<key>", empty when unsaved
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}
