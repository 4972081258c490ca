use super::{Icons, Region};

const INGREDIENT_FIELDS: usize = 6;

/// The recipe submission form.
#[derive(Debug, Clone)]
pub struct UploadRegion {
    icons: Icons,
}

impl UploadRegion {
    pub fn new(icons: Icons) -> Self {
        Self { icons }
    }
}

impl Region for UploadRegion {
    type Data = ();

    fn generate_markup(&self, _data: &()) -> String {
        let ingredients: String = (1..=INGREDIENT_FIELDS)
            .map(|i| {
                format!(
                    r#"
        <label>Ingredient {i}</label>
        <input type="text" name="ingredient-{i}" placeholder="Format: 'Quantity,Unit,Description'" />"#
                )
            })
            .collect();

        format!(
            r#"
      <div class="upload__column">
        <h3 class="upload__heading">Recipe data</h3>
        <label>Title</label>
        <input required name="title" type="text" />
        <label>URL</label>
        <input required name="sourceUrl" type="text" />
        <label>Image URL</label>
        <input required name="image" type="text" />
        <label>Publisher</label>
        <input required name="publisher" type="text" />
        <label>Prep time</label>
        <input required name="cookingTime" type="number" />
        <label>Servings</label>
        <input required name="servings" type="number" />
      </div>
      <div class="upload__column">
        <h3 class="upload__heading">Ingredients</h3>{ingredients}
      </div>
      <button class="btn upload__btn">
        <svg>
          <use href="{icon}"></use>
        </svg>
        <span>Upload</span>
      </button>
    "#,
            icon = self.icons.href("upload-cloud"),
        )
    }

    fn error_message(&self) -> &str {
        "Recipe could not be uploaded. Please try again!"
    }

    fn message(&self) -> &str {
        "Recipe was successfully uploaded :)"
    }
}
