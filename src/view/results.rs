use super::{PreviewList, PreviewRegion, Region};

/// Current page of search results.
#[derive(Debug, Clone)]
pub struct ResultsRegion {
    preview: PreviewRegion,
}

impl ResultsRegion {
    pub fn new(preview: PreviewRegion) -> Self {
        Self { preview }
    }
}

impl Region for ResultsRegion {
    type Data = PreviewList;

    fn generate_markup(&self, data: &PreviewList) -> String {
        self.preview.list_markup(data)
    }

    fn is_empty(&self, data: &PreviewList) -> bool {
        data.items.is_empty()
    }

    fn error_message(&self) -> &str {
        "No recipes found for your query! Please try again ;)"
    }
}
