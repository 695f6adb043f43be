//! Collection filter predicates
//!
//! The admin panel filters fetched collections in memory: free-text search
//! is a case-insensitive substring match, enum and boolean criteria are
//! exact matches, and all active criteria are AND-combined. An empty filter
//! passes everything.

use shared::{DietaryType, FoodCategory, OrderStatus};

use crate::db::models::{Food, Order};

/// Case-insensitive substring match
fn text_matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter criteria for the foods collection
#[derive(Debug, Clone, Default)]
pub struct FoodFilter {
    /// Substring of the food name
    pub search: Option<String>,
    pub category: Option<FoodCategory>,
    pub dietary: Option<DietaryType>,
    pub available: Option<bool>,
}

impl FoodFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.dietary.is_none()
            && self.available.is_none()
    }

    pub fn matches(&self, food: &Food) -> bool {
        if let Some(search) = &self.search
            && !search.is_empty()
            && !text_matches(&food.name, search)
        {
            return false;
        }
        if let Some(category) = self.category
            && food.category != category
        {
            return false;
        }
        if let Some(dietary) = self.dietary
            && food.dietary != dietary
        {
            return false;
        }
        if let Some(available) = self.available
            && food.availability != available
        {
            return false;
        }
        true
    }

    pub fn apply(&self, foods: Vec<Food>) -> Vec<Food> {
        if self.is_empty() {
            return foods;
        }
        foods.into_iter().filter(|f| self.matches(f)).collect()
    }
}

/// Filter criteria for the orders collection
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    /// Substring of the decimal table number (the panel's search box)
    pub table: Option<String>,
}

impl OrderFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.table.is_none()
    }

    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }
        if let Some(table) = &self.table
            && !table.is_empty()
            && !order.table_number.to_string().contains(table.trim())
        {
            return false;
        }
        true
    }

    pub fn apply(&self, orders: Vec<Order>) -> Vec<Order> {
        if self.is_empty() {
            return orders;
        }
        orders.into_iter().filter(|o| self.matches(o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::OrderLine;

    fn food(name: &str, category: FoodCategory, dietary: DietaryType, available: bool) -> Food {
        Food {
            id: None,
            name: name.to_string(),
            category,
            price: 100.0,
            dietary,
            availability: available,
            description: None,
            origin: None,
            flavor: None,
            serving_size: None,
            image_url: None,
            preparation_time: None,
            rating: None,
            spice_level: None,
            ingredients: vec![],
            tags: vec![],
            calories: None,
            protein: None,
            carbs: None,
            fats: None,
            created_at: None,
        }
    }

    fn order(table_number: i32, status: OrderStatus) -> Order {
        Order {
            id: None,
            table_number,
            items: vec![OrderLine {
                food_id: "food:a".into(),
                quantity: 1,
            }],
            status,
            created_at: None,
        }
    }

    fn sample_foods() -> Vec<Food> {
        vec![
            food(
                "Chicken Kottu",
                FoodCategory::Main,
                DietaryType::NonVegetarian,
                true,
            ),
            food(
                "Vegetable Roti",
                FoodCategory::Side,
                DietaryType::Vegan,
                true,
            ),
            food(
                "Milk Rice",
                FoodCategory::Breakfast,
                DietaryType::Vegetarian,
                false,
            ),
        ]
    }

    #[test]
    fn empty_filter_returns_everything() {
        let filter = FoodFilter::default();
        assert_eq!(filter.apply(sample_foods()).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = FoodFilter {
            search: Some("kOtTu".into()),
            ..Default::default()
        };
        let result = filter.apply(sample_foods());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Chicken Kottu");
    }

    #[test]
    fn criteria_are_and_combined() {
        let filter = FoodFilter {
            search: Some("i".into()),
            available: Some(true),
            ..Default::default()
        };
        // "Milk Rice" matches the search but is unavailable
        let result = filter.apply(sample_foods());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn unmatched_criterion_returns_empty() {
        let filter = FoodFilter {
            category: Some(FoodCategory::Dessert),
            ..Default::default()
        };
        assert!(filter.apply(sample_foods()).is_empty());
    }

    #[test]
    fn dietary_is_exact_match() {
        let filter = FoodFilter {
            dietary: Some(DietaryType::Vegan),
            ..Default::default()
        };
        let result = filter.apply(sample_foods());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Vegetable Roti");
    }

    #[test]
    fn order_status_is_exact_match() {
        let orders = vec![
            order(1, OrderStatus::Pending),
            order(12, OrderStatus::Completed),
        ];
        let filter = OrderFilter {
            status: Some(OrderStatus::Completed),
            ..Default::default()
        };
        let result = filter.apply(orders);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].table_number, 12);
    }

    #[test]
    fn table_search_is_substring_of_number() {
        let orders = vec![
            order(1, OrderStatus::Pending),
            order(12, OrderStatus::Pending),
            order(21, OrderStatus::Pending),
        ];
        let filter = OrderFilter {
            table: Some("1".into()),
            ..Default::default()
        };
        // 1, 12 and 21 all contain the digit 1
        assert_eq!(filter.apply(orders).len(), 3);
    }
}
