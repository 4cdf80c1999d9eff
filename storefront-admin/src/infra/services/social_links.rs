use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use storefront_contracts::routes::{utils, v1};
use storefront_contracts::{SocialLinkRequest, decode_social_links};
use storefront_model::{SocialLink, SocialLinkId};

use crate::infra::api_client::ApiClient;

#[async_trait]
pub trait SocialLinkService: Send + Sync + std::fmt::Debug {
    /// List registered social links
    async fn list_links(&self) -> Result<Vec<SocialLink>>;

    /// Create a link; returns the record as stored by the backend
    async fn create_link(&self, request: &SocialLinkRequest)
    -> Result<SocialLink>;

    /// Replace the value of an existing link
    async fn update_link(
        &self,
        id: &SocialLinkId,
        request: &SocialLinkRequest,
    ) -> Result<()>;

    async fn delete_link(&self, id: &SocialLinkId) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct SocialLinkApiAdapter {
    client: Arc<ApiClient>,
}

impl SocialLinkApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SocialLinkService for SocialLinkApiAdapter {
    async fn list_links(&self) -> Result<Vec<SocialLink>> {
        let raw: Vec<serde_json::Value> =
            self.client.get(v1::social_links::COLLECTION).await?;
        Ok(decode_social_links(raw))
    }

    async fn create_link(
        &self,
        request: &SocialLinkRequest,
    ) -> Result<SocialLink> {
        self.client
            .post(v1::social_links::COLLECTION, request)
            .await
    }

    async fn update_link(
        &self,
        id: &SocialLinkId,
        request: &SocialLinkRequest,
    ) -> Result<()> {
        let path = utils::replace_param(
            v1::social_links::ITEM,
            "{id}",
            id.to_string(),
        );
        self.client.put_no_content(&path, request).await
    }

    async fn delete_link(&self, id: &SocialLinkId) -> Result<()> {
        let path = utils::replace_param(
            v1::social_links::ITEM,
            "{id}",
            id.to_string(),
        );
        self.client.delete_no_content(&path).await
    }
}
