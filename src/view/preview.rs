use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::{Icons, Region};
use crate::model::RecipeSummary;

/// Recipe summaries shown as a list of previews, one of which may be the
/// recipe currently open.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewList {
    pub items: Vec<RecipeSummary>,
    pub active_id: Option<String>,
}

impl PreviewList {
    pub fn new(items: Vec<RecipeSummary>, active_id: Option<&str>) -> Self {
        PreviewList {
            items,
            active_id: active_id.map(str::to_string),
        }
    }
}

/// One `<li>` preview linking to a recipe. Lists of recipes compose their
/// markup out of this region.
#[derive(Debug, Clone)]
pub struct PreviewRegion {
    icons: Icons,
}

impl PreviewRegion {
    pub fn new(icons: Icons) -> Self {
        Self { icons }
    }

    /// Markup of every item in `list`, in order.
    pub fn list_markup(&self, list: &PreviewList) -> String {
        list.items
            .iter()
            .map(|item| self.generate_markup(&(item.clone(), list.active_id.clone())))
            .collect()
    }
}

impl Region for PreviewRegion {
    type Data = (RecipeSummary, Option<String>);

    fn generate_markup(&self, (item, active_id): &Self::Data) -> String {
        let active = if active_id.as_deref() == Some(item.id.as_str()) {
            "preview__link--active"
        } else {
            ""
        };
        let generated = if item.key.is_some() { "" } else { "hidden" };

        format!(
            r##"
    <li class="preview">
      <a class="preview__link {active}" href="#{id}">
        <figure class="preview__fig">
          <img src="{image}" alt="{alt}" />
        </figure>
        <div class="preview__data">
          <h4 class="preview__title">{title}</h4>
          <p class="preview__publisher">{publisher}</p>
          <div class="preview__user-generated {generated}">
            <svg>
              <use href="{icon}"></use>
            </svg>
          </div>
        </div>
      </a>
    </li>
  "##,
            id = attr(&item.id),
            image = attr(&item.image),
            alt = attr(&item.title),
            title = text(&item.title),
            publisher = text(&item.publisher),
            icon = self.icons.href("user"),
        )
    }
}
