pub mod wire;

use async_trait::async_trait;
use log::debug;
use config::ConfigError;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::{Recipe, RecipeSummary};
use wire::{Envelope, ErrorBody, RecipeData, RecipePayload, SearchData};

/// Remote source of recipes
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch a single recipe by id
    async fn get_recipe(&self, id: &str) -> Result<Recipe, AppError>;

    /// Search recipes matching `query`
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, AppError>;

    /// Store a new recipe and return it as saved by the server
    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, AppError>;
}

pub struct HttpRecipeApi {
    client: Client,
    base_url: Url,
    api_key: String,
    timeout: Duration,
}

impl HttpRecipeApi {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Self::with_base_url(&config.api_url, &config.api_key, config.request_timeout())
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ConfigError::Message(format!("invalid api_url '{}': {}", base_url, e)))?;

        // The limit covers the whole exchange, body included
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; RecipeDesk/0.1)")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
            timeout,
        })
    }

    /// `<base>/<id>`, with `id` percent-encoded as a single path segment.
    fn recipe_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    fn map_error(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::Timeout(self.timeout.as_secs())
        } else {
            AppError::Fetch(e)
        }
    }

    /// Send the request and decode the envelope.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| self.map_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_error(e))?;
        debug!("API responded {} with {} bytes", status, body.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
            return Err(AppError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn get_recipe(&self, id: &str) -> Result<Recipe, AppError> {
        let request = self
            .client
            .get(self.recipe_url(id))
            .query(&[("key", self.api_key.as_str())]);

        let data: RecipeData = self.send(request).await?;
        data.recipe.try_into()
    }

    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, AppError> {
        let request = self
            .client
            .get(self.base_url.clone())
            .query(&[("search", query), ("key", self.api_key.as_str())]);

        let data: SearchData = self.send(request).await?;
        Ok(data.recipes.into_iter().map(RecipeSummary::from).collect())
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, AppError> {
        let request = self
            .client
            .post(self.base_url.clone())
            .query(&[("key", self.api_key.as_str())])
            .json(payload);

        let data: RecipeData = self.send(request).await?;
        data.recipe.try_into()
    }
}
