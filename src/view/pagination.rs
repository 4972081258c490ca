use super::{Icons, Region};
use crate::model::SearchState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Prev,
    Next,
}

/// Previous/next buttons under the result list.
#[derive(Debug, Clone)]
pub struct PaginationRegion {
    icons: Icons,
}

impl PaginationRegion {
    pub fn new(icons: Icons) -> Self {
        Self { icons }
    }

    fn button(&self, current: usize, direction: Direction) -> String {
        let (go_to, name, arrow) = match direction {
            Direction::Prev => (current - 1, "prev", "left"),
            Direction::Next => (current + 1, "next", "right"),
        };
        format!(
            r#"
        <button data-goto="{go_to}" class="btn--inline pagination__btn--{name}">
            <svg class="search__icon">
              <use href="{icon}"></use>
            </svg>
            <span>Page {go_to}</span>
          </button>
      "#,
            icon = self.icons.href(&format!("arrow-{arrow}")),
        )
    }
}

impl Region for PaginationRegion {
    type Data = SearchState;

    fn generate_markup(&self, data: &SearchState) -> String {
        let current = data.page;
        let num_pages = data.num_pages();

        // First page with more to come
        if current == 1 && num_pages > 1 {
            return self.button(current, Direction::Next);
        }
        // Last page
        if current == num_pages && num_pages > 1 {
            return self.button(current, Direction::Prev);
        }
        // Somewhere in between
        if current > 1 && current < num_pages {
            return format!(
                "{}{}",
                self.button(current, Direction::Prev),
                self.button(current, Direction::Next)
            );
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeSummary;

    fn search(total: usize, page: usize) -> SearchState {
        let mut state = SearchState::new(10);
        state.page = page;
        state.results = (0..total)
            .map(|i| RecipeSummary {
                id: i.to_string(),
                title: String::new(),
                publisher: String::new(),
                image: String::new(),
                key: None,
            })
            .collect();
        state
    }

    fn region() -> PaginationRegion {
        PaginationRegion::new(Icons::new("icons.svg"))
    }

    #[test]
    fn test_first_page_shows_next_only() {
        let markup = region().generate_markup(&search(25, 1));
        assert!(markup.contains(r#"data-goto="2""#));
        assert!(markup.contains("pagination__btn--next"));
        assert!(!markup.contains("pagination__btn--prev"));
    }

    #[test]
    fn test_last_page_shows_prev_only() {
        let markup = region().generate_markup(&search(25, 3));
        assert!(markup.contains(r#"data-goto="2""#));
        assert!(markup.contains("icons.svg#icon-arrow-left"));
        assert!(!markup.contains("pagination__btn--next"));
    }

    #[test]
    fn test_middle_page_shows_both() {
        let markup = region().generate_markup(&search(25, 2));
        assert!(markup.contains(r#"data-goto="1""#));
        assert!(markup.contains(r#"data-goto="3""#));
        assert!(markup.contains("<span>Page 3</span>"));
    }

    #[test]
    fn test_single_or_no_page_is_empty() {
        assert_eq!(region().generate_markup(&search(7, 1)), "");
        assert_eq!(region().generate_markup(&search(0, 1)), "");
        assert_eq!(region().generate_markup(&search(7, 4)), "");
    }
}
