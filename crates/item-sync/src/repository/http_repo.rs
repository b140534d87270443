//! HTTP Item Repository
//!
//! `Repository<Item>` over a JSON collection endpoint:
//! `GET base`, `POST base`, `PUT base/{id}`, `DELETE base/{id}`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};

use crate::domain::{DomainError, DomainResult, Item};
use super::traits::Repository;

/// reqwest-backed implementation of the item collection
#[derive(Debug, Clone)]
pub struct HttpItemRepository {
    client: Client,
    base_url: Url,
}

impl HttpItemRepository {
    /// `api_url` is the collection URL itself, e.g. `http://127.0.0.1:3000/items`
    pub fn new(api_url: &str) -> DomainResult<Self> {
        Self::with_client(Client::new(), api_url)
    }

    pub fn with_client(client: Client, api_url: &str) -> DomainResult<Self> {
        let base_url = Url::parse(api_url.trim())
            .map_err(|e| DomainError::InvalidInput(format!("{}: {}", api_url, e)))?;
        match base_url.scheme() {
            "http" | "https" => Ok(Self { client, base_url }),
            other => Err(DomainError::InvalidInput(format!(
                "unsupported scheme '{}' in {}",
                other, api_url
            ))),
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `base/{id}`, keeping any query string on the configured URL
    pub fn item_url(&self, id: u32) -> DomainResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::InvalidInput(format!("{} cannot take an item id", self.base_url)))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

/// Map a settled response to Ok only for 2xx statuses
fn check_status(response: Response, what: &str) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::NOT_FOUND {
        Err(DomainError::NotFound(what.to_string()))
    } else {
        Err(DomainError::Network(format!("{} returned HTTP {}", what, status)))
    }
}

fn network_error(err: reqwest::Error) -> DomainError {
    DomainError::Network(err.to_string())
}

#[async_trait]
impl Repository<Item> for HttpItemRepository {
    async fn list(&self) -> DomainResult<Vec<Item>> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(network_error)?;
        let response = check_status(response, "item list")?;

        response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| DomainError::Internal(format!("Failed to decode item list: {}", e)))
    }

    async fn create(&self, entity: &Item) -> DomainResult<()> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(entity)
            .send()
            .await
            .map_err(network_error)?;
        check_status(response, &format!("create item {}", entity.id))?;
        Ok(())
    }

    async fn update(&self, entity: &Item) -> DomainResult<()> {
        let response = self
            .client
            .put(self.item_url(entity.id)?)
            .json(entity)
            .send()
            .await
            .map_err(network_error)?;
        check_status(response, &format!("item {}", entity.id))?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let response = self
            .client
            .delete(self.item_url(id)?)
            .send()
            .await
            .map_err(network_error)?;
        check_status(response, &format!("item {}", id))?;
        Ok(())
    }
}
