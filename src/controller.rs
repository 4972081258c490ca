//! Reacts to user actions by driving the store and the views.
//!
//! Every `control_*` method is a recovery boundary: store errors are logged
//! and shown in the affected region, never returned.

use log::{error, warn};
use std::time::Duration;

use crate::api::RecipeApi;
use crate::config::AppConfig;
use crate::dom::Document;
use crate::model::{NewRecipe, RecipeSummary};
use crate::state::Store;
use crate::storage::Storage;
use crate::view::{
    BookmarksRegion, Icons, PaginationRegion, PreviewList, PreviewRegion, RecipeRegion,
    ResultsRegion, UploadRegion, View,
};

/// The URL fragment, holding the id of the open recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    hash: String,
}

impl Location {
    /// Id in the fragment, without the leading `#`.
    pub fn id(&self) -> &str {
        self.hash.trim_start_matches('#')
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Rewrite the fragment without notifying anyone.
    pub fn push_state(&mut self, id: &str) {
        self.hash = format!("#{}", id);
    }
}

pub struct Controller<A, S> {
    store: Store<A, S>,
    document: Document,
    location: Location,
    recipe_view: View<RecipeRegion>,
    results_view: View<ResultsRegion>,
    pagination_view: View<PaginationRegion>,
    bookmarks_view: View<BookmarksRegion>,
    upload_view: View<UploadRegion>,
    modal_close_delay: Duration,
}

impl<A: RecipeApi, S: Storage> Controller<A, S> {
    /// Build the page skeleton, restore bookmarks and render the initial
    /// state of every region.
    pub fn new(api: A, storage: S, config: &AppConfig) -> Self {
        let store = Store::new(api, storage, config);
        let icons = Icons::new(config.icons_url.clone());

        let mut document = Document::new();
        let root = document.root();
        let recipe = document.append_element(root, "div", &[("class", "recipe")]);
        let results = document.append_element(root, "ul", &[("class", "results")]);
        let pagination = document.append_element(root, "div", &[("class", "pagination")]);
        let bookmarks = document.append_element(root, "ul", &[("class", "bookmarks__list")]);
        let upload = document.append_element(root, "form", &[("class", "upload")]);

        let preview = PreviewRegion::new(icons.clone());
        let mut controller = Controller {
            store,
            document,
            location: Location::default(),
            recipe_view: View::new(RecipeRegion::new(icons.clone()), recipe, icons.clone()),
            results_view: View::new(ResultsRegion::new(preview.clone()), results, icons.clone()),
            pagination_view: View::new(PaginationRegion::new(icons.clone()), pagination, icons.clone()),
            bookmarks_view: View::new(BookmarksRegion::new(preview), bookmarks, icons.clone()),
            upload_view: View::new(UploadRegion::new(icons.clone()), upload, icons),
            modal_close_delay: config.modal_close_delay(),
        };

        controller.recipe_view.render_message(&mut controller.document, None);
        controller
            .upload_view
            .render(&mut controller.document, Some(()), true);
        controller.control_bookmarks();
        controller
    }

    pub fn store(&self) -> &Store<A, S> {
        &self.store
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn recipe_html(&self) -> String {
        self.document.inner_html(self.recipe_view.container())
    }

    pub fn results_html(&self) -> String {
        self.document.inner_html(self.results_view.container())
    }

    pub fn pagination_html(&self) -> String {
        self.document.inner_html(self.pagination_view.container())
    }

    pub fn bookmarks_html(&self) -> String {
        self.document.inner_html(self.bookmarks_view.container())
    }

    pub fn upload_html(&self) -> String {
        self.document.inner_html(self.upload_view.container())
    }

    fn active_id(&self) -> Option<&str> {
        Some(self.location.id()).filter(|id| !id.is_empty())
    }

    fn bookmark_previews(&self) -> PreviewList {
        PreviewList::new(
            self.store.bookmarks().iter().map(RecipeSummary::from).collect(),
            self.active_id(),
        )
    }

    fn current_page_previews(&mut self) -> PreviewList {
        let items = self.store.get_search_results_page(None).to_vec();
        PreviewList::new(items, self.active_id())
    }

    /// The user followed a link to recipe `id`.
    pub async fn navigate(&mut self, id: &str) {
        self.location.push_state(id);
        self.control_recipes().await;
    }

    pub async fn control_recipes(&mut self) {
        let id = self.location.id().to_string();
        if id.is_empty() {
            return;
        }
        self.recipe_view.render_spinner(&mut self.document);

        // Highlight the selected recipe in the result and bookmark lists
        let page = self.current_page_previews();
        self.results_view.update(&mut self.document, page);
        let bookmarks = self.bookmark_previews();
        self.bookmarks_view.update(&mut self.document, bookmarks);

        match self.store.load_recipe(&id).await {
            Ok(()) => {
                let recipe = self.store.recipe().cloned();
                self.recipe_view.render(&mut self.document, recipe, true);
            }
            Err(_) => self.recipe_view.render_error(&mut self.document, None),
        }
    }

    pub async fn control_search_results(&mut self, query: &str) {
        self.results_view.render_spinner(&mut self.document);

        let query = query.trim();
        if query.is_empty() {
            return;
        }

        if let Err(e) = self.store.load_search_results(query).await {
            warn!("Search failed: {}", e);
            self.results_view.render_error(&mut self.document, None);
            return;
        }

        let page = self.current_page_previews();
        self.results_view.render(&mut self.document, Some(page), true);
        let search = self.store.search().clone();
        self.pagination_view.render(&mut self.document, Some(search), true);
    }

    pub fn control_pagination(&mut self, go_to_page: usize) {
        let items = self.store.get_search_results_page(Some(go_to_page)).to_vec();
        let page = PreviewList::new(items, self.active_id());
        self.results_view.render(&mut self.document, Some(page), true);

        let search = self.store.search().clone();
        self.pagination_view.render(&mut self.document, Some(search), true);
    }

    pub fn control_servings(&mut self, new_servings: f64) {
        if let Err(e) = self.store.update_servings(new_servings) {
            warn!("Ignoring servings change: {}", e);
            return;
        }
        if let Some(recipe) = self.store.recipe().cloned() {
            self.recipe_view.update(&mut self.document, recipe);
        }
    }

    /// Toggle the bookmark of the open recipe.
    pub fn control_add_bookmark(&mut self) {
        let Some(recipe) = self.store.recipe().cloned() else {
            return;
        };

        let result = if recipe.bookmarked {
            self.store.delete_bookmark(&recipe.id)
        } else {
            self.store.add_bookmark(Some(recipe))
        };
        if let Err(e) = result {
            error!("Bookmark change was not saved: {}", e);
        }

        if let Some(recipe) = self.store.recipe().cloned() {
            self.recipe_view.update(&mut self.document, recipe);
        }
        self.control_bookmarks();
    }

    /// Open recipe `id` and bookmark it unless it already is.
    pub async fn bookmark_recipe(&mut self, id: &str) {
        self.navigate(id).await;
        let needs_bookmark = self
            .store
            .recipe()
            .is_some_and(|recipe| recipe.id == id && !recipe.bookmarked);
        if needs_bookmark {
            self.control_add_bookmark();
        } else {
            self.control_bookmarks();
        }
    }

    /// Remove the bookmark for `id` without loading the recipe.
    pub fn unbookmark_recipe(&mut self, id: &str) {
        if let Err(e) = self.store.delete_bookmark(id) {
            error!("Bookmark change was not saved: {}", e);
        }
        if let Some(recipe) = self.store.recipe().filter(|r| r.id == id).cloned() {
            self.recipe_view.update(&mut self.document, recipe);
        }
        self.control_bookmarks();
    }

    pub fn control_bookmarks(&mut self) {
        let bookmarks = self.bookmark_previews();
        self.bookmarks_view
            .render(&mut self.document, Some(bookmarks), true);
    }

    pub async fn control_add_recipe(&mut self, form: &NewRecipe) {
        self.upload_view.render_spinner(&mut self.document);

        match self.store.upload_recipe(form).await {
            Ok(()) => {
                let recipe = self.store.recipe().cloned();
                if let Some(id) = recipe.as_ref().map(|r| r.id.clone()) {
                    self.location.push_state(&id);
                }
                self.recipe_view.render(&mut self.document, recipe, true);
                self.upload_view.render_message(&mut self.document, None);
                self.control_bookmarks();

                // Leave the success message up for a moment, then reset the form
                tokio::time::sleep(self.modal_close_delay).await;
                self.upload_view.render(&mut self.document, Some(()), true);
            }
            Err(e) => {
                self.upload_view
                    .render_error(&mut self.document, Some(&e.to_string()));
            }
        }
    }

    /// Remove the durable bookmark slot.
    pub fn clear_bookmarks(&mut self) {
        if let Err(e) = self.store.clear_bookmarks() {
            error!("Clearing bookmarks failed: {}", e);
        }
    }
}
