use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub quantity: Option<f64>,
    pub unit: String,
    pub description: String,
}

/// A fully loaded recipe.
///
/// `bookmarked` is derived from the bookmark set every time the recipe is
/// loaded and is never written to durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image: String,
    pub servings: f64,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip)]
    pub bookmarked: bool,
}

/// Lightweight entry of a search result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        RecipeSummary {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            image: recipe.image.clone(),
            key: recipe.key.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<RecipeSummary>,
    pub page: usize,
    pub results_per_page: usize,
}

impl SearchState {
    pub fn new(results_per_page: usize) -> Self {
        SearchState {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            results_per_page,
        }
    }

    /// Number of pages needed to show every result.
    pub fn num_pages(&self) -> usize {
        if self.results_per_page == 0 {
            return 0;
        }
        self.results.len().div_ceil(self.results_per_page)
    }
}

/// Field values of the recipe submission form, in form order.
///
/// Ingredient fields are named `ingredient-1`, `ingredient-2`, ... and hold a
/// `quantity,unit,description` triple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRecipe {
    fields: Vec<(String, String)>,
}

impl NewRecipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing an earlier value with the same name.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NewRecipe {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(NewRecipe::new(), |form, (k, v)| form.field(k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_pages() {
        let mut search = SearchState::new(10);
        assert_eq!(search.num_pages(), 0);

        search.results = (0..21)
            .map(|i| RecipeSummary {
                id: i.to_string(),
                title: String::new(),
                publisher: String::new(),
                image: String::new(),
                key: None,
            })
            .collect();
        assert_eq!(search.num_pages(), 3);
    }

    #[test]
    fn test_bookmarked_is_not_serialized() {
        let recipe = Recipe {
            id: "r1".to_string(),
            title: "Soup".to_string(),
            publisher: "Me".to_string(),
            source_url: "https://example.com".to_string(),
            image: "https://example.com/soup.jpg".to_string(),
            servings: 2.0,
            cooking_time: 30,
            ingredients: vec![],
            key: None,
            bookmarked: true,
        };

        let json = serde_json::to_string(&recipe).unwrap();
        assert!(!json.contains("bookmarked"));
        assert!(json.contains("\"sourceUrl\""));
        assert!(!json.contains("\"key\""));

        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert!(!back.bookmarked);
    }

    #[test]
    fn test_new_recipe_field_replaces() {
        let form = NewRecipe::new()
            .field("title", "A")
            .field("servings", "4")
            .field("title", "B");
        assert_eq!(form.get("title"), Some("B"));
        assert_eq!(form.fields().count(), 2);
    }
}
