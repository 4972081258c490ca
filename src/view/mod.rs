//! Regions of the page and the generic view that renders them.
//!
//! A [`Region`] only knows how to turn its data into markup. [`View`] owns
//! the container node and the last rendered data, and decides between full
//! replacement (render, spinner, messages) and positional patching (update).

mod bookmarks;
mod format;
mod pagination;
mod preview;
pub mod reconcile;
mod recipe;
mod results;
mod templates;
mod upload;

pub use bookmarks::BookmarksRegion;
pub use format::{format_number, format_quantity};
pub use pagination::PaginationRegion;
pub use preview::{PreviewList, PreviewRegion};
pub use recipe::RecipeRegion;
pub use results::ResultsRegion;
pub use upload::UploadRegion;

use crate::dom::{Document, NodeId};

/// Location of the SVG icon sprite used by generated markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons(String);

impl Icons {
    pub fn new(url: impl Into<String>) -> Self {
        Icons(url.into())
    }

    /// `href` of the icon `name` inside the sprite.
    pub fn href(&self, name: &str) -> String {
        format!("{}#icon-{}", self.0, name)
    }
}

/// An independently renderable slice of the page.
pub trait Region {
    type Data: Clone;

    /// Markup for `data`. Must be deterministic: equal data gives
    /// byte-identical markup.
    fn generate_markup(&self, data: &Self::Data) -> String;

    /// Data that should show the error message instead of markup.
    fn is_empty(&self, _data: &Self::Data) -> bool {
        false
    }

    fn error_message(&self) -> &str {
        ""
    }

    fn message(&self) -> &str {
        ""
    }
}

pub struct View<R: Region> {
    region: R,
    container: NodeId,
    data: Option<R::Data>,
    icons: Icons,
}

impl<R: Region> View<R> {
    pub fn new(region: R, container: NodeId, icons: Icons) -> Self {
        View {
            region,
            container,
            data: None,
            icons,
        }
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Data of the last render or update.
    pub fn data(&self) -> Option<&R::Data> {
        self.data.as_ref()
    }

    /// Render `data` into the region, replacing its content.
    ///
    /// Missing or empty data renders the region's error message instead.
    /// With `insert` set to `false` the markup is returned and the document
    /// is left alone, which lets a parent region compose child markup.
    pub fn render(&mut self, doc: &mut Document, data: Option<R::Data>, insert: bool) -> Option<String> {
        let data = match data {
            Some(data) if !self.region.is_empty(&data) => data,
            _ => {
                self.render_error(doc, None);
                return None;
            }
        };

        let markup = self.region.generate_markup(&data);
        self.data = Some(data);

        if !insert {
            return Some(markup);
        }
        self.replace(doc, &markup);
        None
    }

    /// Regenerate markup for `data` and patch only what changed.
    ///
    /// Only valid while the region keeps the element structure of its last
    /// render; anything that adds or removes elements must use [`render`].
    ///
    /// [`render`]: View::render
    pub fn update(&mut self, doc: &mut Document, data: R::Data) {
        let markup = self.region.generate_markup(&data);
        self.data = Some(data);
        reconcile::patch(doc, self.container, &markup);
    }

    pub fn render_spinner(&self, doc: &mut Document) {
        self.replace(doc, &templates::spinner(&self.icons));
    }

    /// Show `message`, or the region's configured error message.
    pub fn render_error(&self, doc: &mut Document, message: Option<&str>) {
        let message = message.unwrap_or_else(|| self.region.error_message());
        self.replace(doc, &templates::error(&self.icons, message));
    }

    /// Show `message`, or the region's configured success message.
    pub fn render_message(&self, doc: &mut Document, message: Option<&str>) {
        let message = message.unwrap_or_else(|| self.region.message());
        self.replace(doc, &templates::message(&self.icons, message));
    }

    fn replace(&self, doc: &mut Document, markup: &str) {
        doc.clear_children(self.container);
        doc.append_markup(self.container, markup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Names;

    impl Region for Names {
        type Data = Vec<String>;

        fn generate_markup(&self, data: &Vec<String>) -> String {
            data.iter().map(|n| format!("<li>{}</li>", n)).collect()
        }

        fn is_empty(&self, data: &Vec<String>) -> bool {
            data.is_empty()
        }

        fn error_message(&self) -> &str {
            "Nobody here"
        }

        fn message(&self) -> &str {
            "Saved"
        }
    }

    fn setup() -> (Document, View<Names>) {
        let mut doc = Document::new();
        let root = doc.root();
        let container = doc.append_element(root, "ul", &[("class", "names")]);
        (doc, View::new(Names, container, Icons::new("icons.svg")))
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_replaces_content() {
        let (mut doc, mut view) = setup();

        assert_eq!(view.render(&mut doc, Some(names(&["a", "b"])), true), None);
        assert_eq!(doc.inner_html(view.container()), "<li>a</li><li>b</li>");

        view.render(&mut doc, Some(names(&["c"])), true);
        assert_eq!(doc.inner_html(view.container()), "<li>c</li>");
        assert_eq!(view.data(), Some(&names(&["c"])));
    }

    #[test]
    fn test_render_without_insert_returns_markup() {
        let (mut doc, mut view) = setup();
        view.render(&mut doc, Some(names(&["a"])), true);

        let markup = view.render(&mut doc, Some(names(&["x", "y"])), false);

        assert_eq!(markup.as_deref(), Some("<li>x</li><li>y</li>"));
        assert_eq!(doc.inner_html(view.container()), "<li>a</li>");
    }

    #[test]
    fn test_render_empty_shows_error() {
        let (mut doc, mut view) = setup();

        view.render(&mut doc, Some(Vec::new()), true);
        assert!(doc.inner_html(view.container()).contains("<p>Nobody here</p>"));

        view.render(&mut doc, None, true);
        assert!(doc.inner_html(view.container()).contains("Nobody here"));
        assert_eq!(view.data(), None);
    }

    #[test]
    fn test_update_patches_in_place() {
        let (mut doc, mut view) = setup();
        view.render(&mut doc, Some(names(&["a", "b"])), true);
        let items = doc.descendant_elements(view.container());

        view.update(&mut doc, names(&["a", "z"]));

        assert_eq!(doc.inner_html(view.container()), "<li>a</li><li>z</li>");
        assert_eq!(doc.descendant_elements(view.container()), items);
    }

    #[test]
    fn test_spinner_and_messages() {
        let (mut doc, view) = setup();

        view.render_spinner(&mut doc);
        assert!(doc.inner_html(view.container()).contains("icons.svg#icon-loader"));

        view.render_message(&mut doc, None);
        assert!(doc.inner_html(view.container()).contains("<p>Saved</p>"));

        view.render_error(&mut doc, Some("Wrong <format>"));
        let html = doc.inner_html(view.container());
        assert!(html.contains("<p>Wrong &lt;format&gt;</p>"));
        assert!(!html.contains("Saved"));
    }
}
