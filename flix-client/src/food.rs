use crate::http::MovieflixClient;
use crate::models::FoodItem;
use flix_core::ApiError;

impl MovieflixClient {
    /// Concession categories offered alongside tickets.
    pub async fn food_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/api/food/categories", &[]).await
    }

    /// Concession items, optionally filtered to one category.
    pub async fn food_items(&self, category: Option<&str>) -> Result<Vec<FoodItem>, ApiError> {
        let query: Vec<(&str, &str)> = match category {
            Some(category) => vec![("category", category)],
            None => Vec::new(),
        };
        self.get_json("/api/food/items", &query).await
    }

    /// Search concession items by name across all categories.
    pub async fn search_food(&self, query: &str) -> Result<Vec<FoodItem>, ApiError> {
        self.get_json("/api/food/search", &[("query", query)]).await
    }
}
