use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::{format_number, format_quantity, Icons, Region};
use crate::model::{Ingredient, Recipe};

/// Detail view of the open recipe.
///
/// Servings, quantities and the bookmark icon change between updates; the
/// element structure only depends on the number of ingredients, so scaling
/// and bookmarking can go through `update`.
#[derive(Debug, Clone)]
pub struct RecipeRegion {
    icons: Icons,
}

impl RecipeRegion {
    pub fn new(icons: Icons) -> Self {
        Self { icons }
    }

    fn ingredient_markup(&self, ing: &Ingredient) -> String {
        let quantity = ing.quantity.map(format_quantity).unwrap_or_default();
        format!(
            r#"
      <li class="recipe__ingredient">
        <svg class="recipe__icon">
          <use href="{icon}"></use>
        </svg>
        <div class="recipe__quantity">{quantity}</div>
        <div class="recipe__description">
          <span class="recipe__unit">{unit}</span>
          {description}
        </div>
      </li>
    "#,
            icon = self.icons.href("check"),
            unit = text(&ing.unit),
            description = text(&ing.description),
        )
    }
}

impl Region for RecipeRegion {
    type Data = Recipe;

    fn generate_markup(&self, recipe: &Recipe) -> String {
        let ingredients: String = recipe
            .ingredients
            .iter()
            .map(|ing| self.ingredient_markup(ing))
            .collect();
        let generated = if recipe.key.is_some() { "" } else { "hidden" };
        let bookmark = if recipe.bookmarked {
            "bookmark-fill"
        } else {
            "bookmark"
        };

        format!(
            r#"
    <figure class="recipe__fig">
      <img src="{image}" alt="{alt}" class="recipe__img" />
      <h1 class="recipe__title">
        <span>{title}</span>
      </h1>
    </figure>

    <div class="recipe__details">
      <div class="recipe__info">
        <svg class="recipe__info-icon">
          <use href="{clock}"></use>
        </svg>
        <span class="recipe__info-data recipe__info-data--minutes">{minutes}</span>
        <span class="recipe__info-text">minutes</span>
      </div>
      <div class="recipe__info">
        <svg class="recipe__info-icon">
          <use href="{users}"></use>
        </svg>
        <span class="recipe__info-data recipe__info-data--people">{servings}</span>
        <span class="recipe__info-text">servings</span>

        <div class="recipe__info-buttons">
          <button class="btn--tiny btn--update-servings" data-update-to="{fewer}">
            <svg>
              <use href="{minus}"></use>
            </svg>
          </button>
          <button class="btn--tiny btn--update-servings" data-update-to="{more}">
            <svg>
              <use href="{plus}"></use>
            </svg>
          </button>
        </div>
      </div>

      <div class="recipe__user-generated {generated}">
        <svg>
          <use href="{user}"></use>
        </svg>
      </div>
      <button class="btn--round btn--bookmark">
        <svg class="">
          <use href="{bookmark}"></use>
        </svg>
      </button>
    </div>

    <div class="recipe__ingredients">
      <h2 class="heading--2">Recipe ingredients</h2>
      <ul class="recipe__ingredient-list">{ingredients}</ul>
    </div>

    <div class="recipe__directions">
      <h2 class="heading--2">How to cook it</h2>
      <p class="recipe__directions-text">
        This recipe was carefully designed and tested by
        <span class="recipe__publisher">{publisher}</span>. Please check out
        directions at their website.
      </p>
      <a class="btn--small recipe__btn" href="{source}" target="_blank">
        <span>Directions</span>
        <svg class="search__icon">
          <use href="{arrow}"></use>
        </svg>
      </a>
    </div>
  "#,
            image = attr(&recipe.image),
            alt = attr(&recipe.title),
            title = text(&recipe.title),
            clock = self.icons.href("clock"),
            minutes = recipe.cooking_time,
            users = self.icons.href("users"),
            servings = format_number(recipe.servings),
            fewer = format_number(recipe.servings - 1.0),
            more = format_number(recipe.servings + 1.0),
            minus = self.icons.href("minus-circle"),
            plus = self.icons.href("plus-circle"),
            user = self.icons.href("user"),
            bookmark = self.icons.href(bookmark),
            publisher = text(&recipe.publisher),
            source = attr(&recipe.source_url),
            arrow = self.icons.href("arrow-right"),
        )
    }

    fn error_message(&self) -> &str {
        "We could not find that recipe. Please try another one!"
    }

    fn message(&self) -> &str {
        "Start by searching for a recipe or an ingredient. Have fun!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn recipe() -> Recipe {
        Recipe {
            id: "r1".to_string(),
            title: "Mac & Cheese".to_string(),
            publisher: "Closet Cooking".to_string(),
            source_url: "https://example.com/mac".to_string(),
            image: "https://example.com/mac.jpg".to_string(),
            servings: 4.0,
            cooking_time: 45,
            ingredients: vec![
                Ingredient {
                    quantity: Some(0.5),
                    unit: "cup".to_string(),
                    description: "milk".to_string(),
                },
                Ingredient {
                    quantity: None,
                    unit: String::new(),
                    description: "salt".to_string(),
                },
            ],
            key: None,
            bookmarked: false,
        }
    }

    #[test]
    fn test_recipe_markup() {
        let markup = RecipeRegion::new(Icons::new("icons.svg")).generate_markup(&recipe());

        assert!(markup.contains("<span>Mac &amp; Cheese</span>"));
        assert!(markup.contains(r#"data-update-to="3""#));
        assert!(markup.contains(r#"data-update-to="5""#));
        assert!(markup.contains(r#"<div class="recipe__quantity">1/2</div>"#));
        assert!(markup.contains(r#"<div class="recipe__quantity"></div>"#));
        assert!(markup.contains("icons.svg#icon-bookmark\""));
        assert!(markup.contains("recipe__user-generated hidden"));
    }

    #[test]
    fn test_bookmark_changes_keep_shape() {
        let region = RecipeRegion::new(Icons::new("icons.svg"));
        let plain = recipe();
        let mut marked = recipe();
        marked.bookmarked = true;
        marked.servings = 8.0;

        let a = Document::parse_fragment(&region.generate_markup(&plain));
        let b = Document::parse_fragment(&region.generate_markup(&marked));

        assert_eq!(
            a.descendant_elements(a.root()).len(),
            b.descendant_elements(b.root()).len()
        );
        assert!(region.generate_markup(&marked).contains("icons.svg#icon-bookmark-fill"));
    }
}
