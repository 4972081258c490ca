use log::debug;
use std::env;

use recipe_desk::{AppConfig, AppError};

const USAGE: &str = "Usage: recipe-desk <command>

Commands:
  search <query> [page]   Search recipes and show a page of results
  show <id>               Show a recipe
  servings <id> <n>       Show a recipe scaled to n servings
  bookmarks               List bookmarks
  bookmark <id>           Bookmark a recipe
  unbookmark <id>         Remove a bookmark
  clear-bookmarks         Remove stored bookmarks";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = AppConfig::load().map_err(AppError::from)?;
    debug!("{:?}", config);

    let mut app = recipe_desk::open(&config)?;

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["search", query] => {
            app.control_search_results(query).await;
            println!("{}\n{}", app.results_html(), app.pagination_html());
        }
        ["search", query, page] => {
            let page: usize = page.parse()?;
            app.control_search_results(query).await;
            app.control_pagination(page);
            println!("{}\n{}", app.results_html(), app.pagination_html());
        }
        ["show", id] => {
            app.navigate(id).await;
            println!("{}", app.recipe_html());
        }
        ["servings", id, servings] => {
            let servings: f64 = servings.parse()?;
            app.navigate(id).await;
            app.control_servings(servings);
            println!("{}", app.recipe_html());
        }
        ["bookmarks"] => println!("{}", app.bookmarks_html()),
        ["bookmark", id] => {
            app.bookmark_recipe(id).await;
            println!("{}", app.bookmarks_html());
        }
        ["unbookmark", id] => {
            app.unbookmark_recipe(id);
            println!("{}", app.bookmarks_html());
        }
        ["clear-bookmarks"] => app.clear_bookmarks(),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
