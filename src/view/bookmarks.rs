use super::{PreviewList, PreviewRegion, Region};

/// Bookmarked recipes, in bookmark order.
#[derive(Debug, Clone)]
pub struct BookmarksRegion {
    preview: PreviewRegion,
}

impl BookmarksRegion {
    pub fn new(preview: PreviewRegion) -> Self {
        Self { preview }
    }
}

impl Region for BookmarksRegion {
    type Data = PreviewList;

    fn generate_markup(&self, data: &PreviewList) -> String {
        self.preview.list_markup(data)
    }

    fn is_empty(&self, data: &PreviewList) -> bool {
        data.items.is_empty()
    }

    fn error_message(&self) -> &str {
        "No bookmarks yet. Find a nice recipe and bookmark it ;)"
    }
}
