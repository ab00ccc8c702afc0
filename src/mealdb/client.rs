use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::RecipeError;

use super::record::{MealRecord, MealSummary, MealsEnvelope};

/// Thin typed wrapper over TheMealDB query endpoints. Policy (fallbacks,
/// result caps, aggregation) lives in the service layer.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("recipe-hub/0.3")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        value: &str,
    ) -> Result<Vec<T>, RecipeError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}?{}={}", url, key, value);
        let response = self.client.get(&url).query(&[(key, value)]).send().await?;
        let envelope: MealsEnvelope<T> = response.json().await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    /// `filter.php?c=`: slim records for one raw API category.
    pub async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, RecipeError> {
        self.get_meals("filter.php", "c", category).await
    }

    /// `filter.php?a=`: slim records for one cuisine/area.
    pub async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, RecipeError> {
        self.get_meals("filter.php", "a", area).await
    }

    /// `filter.php?i=`: slim records containing one ingredient.
    pub async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, RecipeError> {
        self.get_meals("filter.php", "i", ingredient).await
    }

    /// `lookup.php?i=`: full detail for one meal id.
    pub async fn lookup(&self, id: &str) -> Result<Option<MealRecord>, RecipeError> {
        let mut meals: Vec<MealRecord> = self.get_meals("lookup.php", "i", id).await?;
        if meals.is_empty() {
            Ok(None)
        } else {
            Ok(Some(meals.remove(0)))
        }
    }

    /// `search.php?s=`: full records matching a name query.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<MealRecord>, RecipeError> {
        self.get_meals("search.php", "s", query).await
    }

    /// `search.php?f=`: full records whose name starts with a letter.
    pub async fn search_by_letter(&self, letter: &str) -> Result<Vec<MealRecord>, RecipeError> {
        self.get_meals("search.php", "f", letter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> MealDbClient {
        MealDbClient::new(server.url(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_lookup_returns_first_meal() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "52772".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals": [{"idMeal": "52772", "strMeal": "Teriyaki Chicken Casserole", "strCategory": "Chicken", "strInstructions": "Preheat oven."}]}"#,
            )
            .create();

        let meal = client_for(&server).lookup("52772").await.unwrap();
        assert_eq!(meal.unwrap().name, "Teriyaki Chicken Casserole");
        mock.assert();
    }

    #[tokio::test]
    async fn test_lookup_null_envelope_is_none() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "99999".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create();

        let meal = client_for(&server).lookup("99999").await.unwrap();
        assert!(meal.is_none());
        mock.assert();
    }

    #[tokio::test]
    async fn test_filter_by_category_lists_summaries() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("c".into(), "Seafood".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals": [
                    {"idMeal": "52819", "strMeal": "Cajun spiced fish tacos", "strMealThumb": null},
                    {"idMeal": "52944", "strMeal": "Escovitch Fish", "strMealThumb": "https://example.com/fish.jpg"}
                ]}"#,
            )
            .create();

        let meals = client_for(&server).filter_by_category("Seafood").await.unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].id, "52819");
        mock.assert();
    }

    #[tokio::test]
    async fn test_non_json_body_is_an_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::UrlEncoded("s".into(), "pasta".into()))
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>rate limited</html>")
            .create();

        let result = client_for(&server).search_by_name("pasta").await;
        assert!(result.is_err());
        mock.assert();
    }
}
