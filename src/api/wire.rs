//! Wire format of the recipe API and its mapping onto the model.
//!
//! The API uses snake_case names (`source_url`, `image_url`, `cooking_time`)
//! and wraps every payload in a `{ "data": { ... } }` envelope. This module is
//! the only place that knows about either.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::{Ingredient, Recipe, RecipeSummary};

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct RecipeData {
    pub recipe: WireRecipe,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub recipes: Vec<WireSummary>,
}

/// Error body returned together with a non-success status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireIngredient {
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct WireRecipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub image_url: String,
    pub servings: f64,
    #[serde(default)]
    pub cooking_time: u32,
    #[serde(default)]
    pub ingredients: Vec<WireIngredient>,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub key: Option<String>,
}

/// Body of a recipe submission.
#[derive(Debug, Clone, Serialize)]
pub struct RecipePayload {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: f64,
    pub ingredients: Vec<WireIngredient>,
}

impl From<WireIngredient> for Ingredient {
    fn from(wire: WireIngredient) -> Self {
        Ingredient {
            quantity: wire.quantity,
            unit: wire.unit,
            description: wire.description,
        }
    }
}

impl From<Ingredient> for WireIngredient {
    fn from(ingredient: Ingredient) -> Self {
        WireIngredient {
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            description: ingredient.description,
        }
    }
}

impl TryFrom<WireRecipe> for Recipe {
    type Error = AppError;

    fn try_from(wire: WireRecipe) -> Result<Self, Self::Error> {
        if !(wire.servings.is_finite() && wire.servings > 0.0) {
            return Err(AppError::Transform(format!(
                "recipe {} has invalid servings {}",
                wire.id, wire.servings
            )));
        }

        Ok(Recipe {
            id: wire.id,
            title: wire.title,
            publisher: wire.publisher,
            source_url: wire.source_url,
            image: wire.image_url,
            servings: wire.servings,
            cooking_time: wire.cooking_time,
            ingredients: wire.ingredients.into_iter().map(Ingredient::from).collect(),
            // The API echoes an empty key for public recipes
            key: wire.key.filter(|k| !k.is_empty()),
            bookmarked: false,
        })
    }
}

impl From<WireSummary> for RecipeSummary {
    fn from(wire: WireSummary) -> Self {
        RecipeSummary {
            id: wire.id,
            title: wire.title,
            publisher: wire.publisher,
            image: wire.image_url,
            key: wire.key.filter(|k| !k.is_empty()),
        }
    }
}
