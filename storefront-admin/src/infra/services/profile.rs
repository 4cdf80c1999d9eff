use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use storefront_contracts::UpdateProfileRequest;
use storefront_contracts::requests::logo_form;
use storefront_contracts::routes::{utils, v1};
use storefront_model::{CompanyProfile, ProfileId};

use crate::domains::profile::state::LogoFile;
use crate::infra::api_client::ApiClient;

#[async_trait]
pub trait CompanyProfileService: Send + Sync + std::fmt::Debug {
    /// Fetch the company profile; `None` when the backend has none yet
    async fn fetch_profile(&self) -> Result<Option<CompanyProfile>>;

    /// Replace the profile's text fields
    async fn update_profile(
        &self,
        id: &ProfileId,
        request: &UpdateProfileRequest,
    ) -> Result<()>;

    /// Upload a new logo image
    async fn upload_logo(&self, id: &ProfileId, file: LogoFile) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct CompanyProfileApiAdapter {
    client: Arc<ApiClient>,
}

impl CompanyProfileApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompanyProfileService for CompanyProfileApiAdapter {
    async fn fetch_profile(&self) -> Result<Option<CompanyProfile>> {
        self.client.get_optional(v1::profile::CURRENT).await
    }

    async fn update_profile(
        &self,
        id: &ProfileId,
        request: &UpdateProfileRequest,
    ) -> Result<()> {
        let path =
            utils::replace_param(v1::profile::ITEM, "{id}", id.to_string());
        self.client.put_no_content(&path, request).await
    }

    async fn upload_logo(&self, id: &ProfileId, file: LogoFile) -> Result<()> {
        let path =
            utils::replace_param(v1::profile::LOGO, "{id}", id.to_string());
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)
            .context("invalid logo mime type")?;
        let form = Form::new()
            .text(logo_form::ID, id.to_string())
            .part(logo_form::FILE, part);
        self.client.put_multipart(&path, form).await
    }
}
