pub mod api;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod model;
pub mod state;
pub mod storage;
pub mod view;

pub use crate::api::{HttpRecipeApi, RecipeApi};
pub use crate::config::AppConfig;
pub use crate::controller::{Controller, Location};
pub use crate::error::AppError;
pub use crate::model::{Ingredient, NewRecipe, Recipe, RecipeSummary, SearchState};
pub use crate::state::Store;
pub use crate::storage::{FileStorage, MemoryStorage, Storage};

/// Build a controller talking to the configured API and persisting
/// bookmarks under the configured storage directory.
pub fn open(config: &AppConfig) -> Result<Controller<HttpRecipeApi, FileStorage>, AppError> {
    let api = HttpRecipeApi::new(config)?;
    let storage = FileStorage::new(&config.storage_dir);
    Ok(Controller::new(api, storage, config))
}
