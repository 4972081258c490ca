//! Application state: the open recipe, the current search and bookmarks.

use log::{debug, error, info, warn};

use crate::api::wire::{RecipePayload, WireIngredient};
use crate::api::RecipeApi;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::{Ingredient, NewRecipe, Recipe, RecipeSummary, SearchState};
use crate::storage::Storage;

/// Durable slot holding the serialized bookmark list.
pub const BOOKMARKS_KEY: &str = "bookmarks";

const INGREDIENT_FORMAT_ERROR: &str = "Wrong ingredient format! Please use the correct format.";

pub struct Store<A, S> {
    api: A,
    storage: S,
    recipe: Option<Recipe>,
    search: SearchState,
    bookmarks: Vec<Recipe>,
}

impl<A: RecipeApi, S: Storage> Store<A, S> {
    /// Create a store and restore bookmarks from `storage`.
    ///
    /// A missing or unreadable slot leaves the bookmark list empty.
    pub fn new(api: A, storage: S, config: &AppConfig) -> Self {
        let mut store = Store {
            api,
            storage,
            recipe: None,
            search: SearchState::new(config.results_per_page),
            bookmarks: Vec::new(),
        };
        store.restore_bookmarks();
        store
    }

    fn restore_bookmarks(&mut self) {
        let stored = match self.storage.get(BOOKMARKS_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return,
            Err(e) => {
                warn!("Could not read bookmarks: {}", e);
                return;
            }
        };
        match serde_json::from_str::<Vec<Recipe>>(&stored) {
            Ok(bookmarks) => {
                info!("Restored {} bookmarks", bookmarks.len());
                self.bookmarks = bookmarks;
            }
            Err(e) => warn!("Ignoring corrupt bookmark storage: {}", e),
        }
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn bookmarks(&self) -> &[Recipe] {
        &self.bookmarks
    }

    fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    /// Fetch recipe `id` and make it the open recipe.
    ///
    /// On failure the previously open recipe is kept.
    pub async fn load_recipe(&mut self, id: &str) -> Result<(), AppError> {
        let mut recipe = self.api.get_recipe(id).await.map_err(|e| {
            error!("Loading recipe {} failed: {}", id, e);
            e
        })?;
        recipe.bookmarked = self.is_bookmarked(id);
        debug!("Loaded recipe {} ({})", recipe.id, recipe.title);
        self.recipe = Some(recipe);
        Ok(())
    }

    /// Run a search for `query` and go back to the first page.
    ///
    /// The query is recorded before the fetch, so it stays overwritten even
    /// when the fetch fails and the old results are kept.
    pub async fn load_search_results(&mut self, query: &str) -> Result<(), AppError> {
        self.search.query = query.to_string();
        let results = self.api.search(query).await.map_err(|e| {
            error!("Search for '{}' failed: {}", query, e);
            e
        })?;
        debug!("Search for '{}' returned {} results", query, results.len());
        self.search.results = results;
        self.search.page = 1;
        Ok(())
    }

    /// Move to `page` (or stay on the current one) and return its results.
    ///
    /// Pages past the end yield an empty slice. Page 0 does not exist; it
    /// yields an empty slice and leaves the current page alone.
    pub fn get_search_results_page(&mut self, page: Option<usize>) -> &[RecipeSummary] {
        let page = page.unwrap_or(self.search.page);
        if page == 0 {
            warn!("Requested search results page 0");
            return &[];
        }
        self.search.page = page;

        let per_page = self.search.results_per_page;
        let len = self.search.results.len();
        let start = (page - 1).saturating_mul(per_page).min(len);
        let end = page.saturating_mul(per_page).min(len);
        &self.search.results[start..end]
    }

    /// Scale every ingredient quantity of the open recipe to `new_servings`.
    pub fn update_servings(&mut self, new_servings: f64) -> Result<(), AppError> {
        if !(new_servings.is_finite() && new_servings > 0.0) {
            return Err(AppError::Validation(format!(
                "Servings must be a positive number, got {}",
                new_servings
            )));
        }
        let recipe = self
            .recipe
            .as_mut()
            .ok_or_else(|| AppError::Validation("No recipe is loaded".to_string()))?;

        let old_servings = recipe.servings;
        if !(old_servings.is_finite() && old_servings > 0.0) {
            return Err(AppError::Validation(format!(
                "Recipe {} has no usable servings ({}) to scale from",
                recipe.id, old_servings
            )));
        }
        for ing in recipe.ingredients.iter_mut() {
            if let Some(quantity) = ing.quantity.as_mut() {
                *quantity = *quantity * new_servings / old_servings;
            }
        }
        recipe.servings = new_servings;
        Ok(())
    }

    fn persist_bookmarks(&mut self) -> Result<(), AppError> {
        let serialized = serde_json::to_string(&self.bookmarks)?;
        self.storage.set(BOOKMARKS_KEY, &serialized).map_err(|e| {
            error!("Persisting bookmarks failed: {}", e);
            e
        })
    }

    /// Bookmark `recipe` unless it is missing or already bookmarked. The
    /// bookmark list is written back to storage in either case.
    pub fn add_bookmark(&mut self, recipe: Option<Recipe>) -> Result<(), AppError> {
        if let Some(mut recipe) = recipe.filter(|r| !self.is_bookmarked(&r.id)) {
            if let Some(current) = self.recipe.as_mut().filter(|c| c.id == recipe.id) {
                current.bookmarked = true;
            }
            recipe.bookmarked = true;
            debug!("Bookmarked {}", recipe.id);
            self.bookmarks.push(recipe);
        }
        self.persist_bookmarks()
    }

    pub fn delete_bookmark(&mut self, id: &str) -> Result<(), AppError> {
        if let Some(index) = self.bookmarks.iter().position(|b| b.id == id) {
            self.bookmarks.remove(index);
            debug!("Removed bookmark {}", id);
        }
        if let Some(current) = self.recipe.as_mut().filter(|c| c.id == id) {
            current.bookmarked = false;
        }
        self.persist_bookmarks()
    }

    /// Remove the durable bookmark slot. The in-memory list is untouched and
    /// is written again by the next bookmark change.
    pub fn clear_bookmarks(&mut self) -> Result<(), AppError> {
        self.storage.remove(BOOKMARKS_KEY)
    }

    /// Submit a new recipe from form fields, open it and bookmark it.
    pub async fn upload_recipe(&mut self, form: &NewRecipe) -> Result<(), AppError> {
        let payload = build_payload(form).map_err(|e| {
            error!("Rejected recipe submission: {}", e);
            e
        })?;

        let mut recipe = self.api.create_recipe(&payload).await.map_err(|e| {
            error!("Uploading recipe failed: {}", e);
            e
        })?;
        recipe.bookmarked = false;
        info!("Uploaded recipe {}", recipe.id);

        self.recipe = Some(recipe.clone());
        self.add_bookmark(Some(recipe))
    }
}

/// Parse one `quantity,unit,description` ingredient field.
fn parse_ingredient(value: &str) -> Result<Ingredient, AppError> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [quantity, unit, description] = parts.as_slice() else {
        return Err(AppError::Validation(INGREDIENT_FORMAT_ERROR.to_string()));
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        match quantity.parse::<f64>() {
            Ok(q) if q.is_finite() && q > 0.0 => Some(q),
            _ => return Err(AppError::Validation(INGREDIENT_FORMAT_ERROR.to_string())),
        }
    };

    Ok(Ingredient {
        quantity,
        unit: unit.to_string(),
        description: description.to_string(),
    })
}

fn parse_number(form: &NewRecipe, name: &str) -> Result<f64, AppError> {
    form.get(name)
        .map(str::trim)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| AppError::Validation(format!("'{}' must be a number", name)))
}

fn build_payload(form: &NewRecipe) -> Result<RecipePayload, AppError> {
    let ingredients = form
        .fields()
        .filter(|(name, value)| name.starts_with("ingredient") && !value.trim().is_empty())
        .map(|(_, value)| parse_ingredient(value).map(WireIngredient::from))
        .collect::<Result<Vec<_>, _>>()?;

    let servings = parse_number(form, "servings")?;
    if servings == 0.0 {
        return Err(AppError::Validation(
            "'servings' must be a positive number".to_string(),
        ));
    }
    let cooking_time = parse_number(form, "cookingTime")?.round() as u32;
    let field = |name: &str| form.get(name).unwrap_or_default().to_string();

    Ok(RecipePayload {
        title: field("title"),
        source_url: field("sourceUrl"),
        image_url: field("image"),
        publisher: field("publisher"),
        cooking_time,
        servings,
        ingredients,
    })
}
