use mockito::{Matcher, Server};

use recipe_desk::{AppConfig, HttpRecipeApi, MemoryStorage, Store};

fn config(server_url: &str) -> AppConfig {
    AppConfig {
        api_url: format!("{}/api/v2/recipes/", server_url),
        api_key: "test-key".to_string(),
        results_per_page: 2,
        timeout: 5,
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_search_and_load_over_http() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/api/v2/recipes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "pizza".into()),
            Matcher::UrlEncoded("key".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status": "success", "results": 3, "data": {"recipes": [
                {"id": "a", "title": "Pizza A", "publisher": "P", "image_url": "a.jpg"},
                {"id": "b", "title": "Pizza B", "publisher": "P", "image_url": "b.jpg"},
                {"id": "c", "title": "Pizza C", "publisher": "P", "image_url": "c.jpg", "key": "test-key"}
            ]}}"#,
        )
        .create_async()
        .await;
    let recipe = server
        .mock("GET", "/api/v2/recipes/c")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status": "success", "data": {"recipe": {
                "id": "c", "title": "Pizza C", "publisher": "P",
                "source_url": "https://example.com/c", "image_url": "c.jpg",
                "servings": 4, "cooking_time": 25, "key": "test-key",
                "ingredients": [{"quantity": 1.5, "unit": "cups", "description": "flour"}]
            }}}"#,
        )
        .create_async()
        .await;

    let config = config(&server.url());
    let api = HttpRecipeApi::new(&config).unwrap();
    let mut store = Store::new(api, MemoryStorage::new(), &config);

    store.load_search_results("pizza").await.unwrap();
    let page = store.get_search_results_page(Some(2)).to_vec();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].key.as_deref(), Some("test-key"));

    store.load_recipe("c").await.unwrap();
    let loaded = store.recipe().unwrap();
    assert_eq!(loaded.source_url, "https://example.com/c");
    assert_eq!(loaded.cooking_time, 25);
    assert_eq!(loaded.ingredients[0].quantity, Some(1.5));

    search.assert_async().await;
    recipe.assert_async().await;
}

#[tokio::test]
async fn test_server_error_leaves_state_untouched() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/recipes/zzz")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"status": "fail", "message": "Invalid _id: zzz"}"#)
        .create_async()
        .await;

    let config = config(&server.url());
    let api = HttpRecipeApi::new(&config).unwrap();
    let mut store = Store::new(api, MemoryStorage::new(), &config);

    let err = store.load_recipe("zzz").await.unwrap_err();

    assert!(err.is_fetch());
    assert!(err.to_string().contains("Invalid _id: zzz"));
    assert!(store.recipe().is_none());
}
