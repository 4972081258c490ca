#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use recipe_desk::api::wire::RecipePayload;
use recipe_desk::{AppConfig, AppError, Ingredient, Recipe, RecipeApi, RecipeSummary};

/// In-process stand-in for the recipe API.
#[derive(Default)]
pub struct FakeApi {
    pub recipes: HashMap<String, Recipe>,
    pub results: Vec<RecipeSummary>,
    pub fail: bool,
    pub created: Mutex<Vec<RecipePayload>>,
}

impl FakeApi {
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        FakeApi {
            recipes: recipes.into_iter().map(|r| (r.id.clone(), r)).collect(),
            ..Default::default()
        }
    }

    pub fn with_results(ids: &[&str]) -> Self {
        FakeApi {
            results: ids.iter().map(|id| summary(id)).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        FakeApi {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl RecipeApi for FakeApi {
    async fn get_recipe(&self, id: &str) -> Result<Recipe, AppError> {
        if self.fail {
            return Err(AppError::Timeout(10));
        }
        self.recipes.get(id).cloned().ok_or(AppError::Status {
            status: 400,
            message: format!("Invalid _id: {}", id),
        })
    }

    async fn search(&self, _query: &str) -> Result<Vec<RecipeSummary>, AppError> {
        if self.fail {
            return Err(AppError::Transform("missing recipes".to_string()));
        }
        Ok(self.results.clone())
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, AppError> {
        if self.fail {
            return Err(AppError::Timeout(10));
        }
        self.created.lock().unwrap().push(payload.clone());
        Ok(Recipe {
            id: "new-1".to_string(),
            title: payload.title.clone(),
            publisher: payload.publisher.clone(),
            source_url: payload.source_url.clone(),
            image: payload.image_url.clone(),
            servings: payload.servings,
            cooking_time: payload.cooking_time,
            ingredients: payload
                .ingredients
                .iter()
                .cloned()
                .map(Ingredient::from)
                .collect(),
            key: Some("user-key".to_string()),
            bookmarked: false,
        })
    }
}

pub fn summary(id: &str) -> RecipeSummary {
    RecipeSummary {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        publisher: "Test Kitchen".to_string(),
        image: format!("https://example.com/{}.jpg", id),
        key: None,
    }
}

pub fn recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        publisher: "Test Kitchen".to_string(),
        source_url: format!("https://example.com/{}", id),
        image: format!("https://example.com/{}.jpg", id),
        servings: 4.0,
        cooking_time: 30,
        ingredients: vec![
            Ingredient {
                quantity: Some(200.0),
                unit: "g".to_string(),
                description: "flour".to_string(),
            },
            Ingredient {
                quantity: None,
                unit: String::new(),
                description: "salt to taste".to_string(),
            },
        ],
        key: None,
        bookmarked: false,
    }
}

pub fn config(results_per_page: usize) -> AppConfig {
    AppConfig {
        results_per_page,
        modal_close_sec: 0.0,
        icons_url: "icons.svg".to_string(),
        ..AppConfig::default()
    }
}
