use serde::{Deserialize, Serialize};
use storefront_model::NetworkType;
use storefront_model::profile::ProfileFields;

/// Body of `PUT /company/profile/{id}`: always the full field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(flatten)]
    pub fields: ProfileFields,
}

impl From<ProfileFields> for UpdateProfileRequest {
    fn from(fields: ProfileFields) -> Self {
        Self { fields }
    }
}

/// Body of social link create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkRequest {
    pub network: NetworkType,
    pub value: String,
}

/// Multipart form field names used by the logo upload.
pub mod logo_form {
    pub const ID: &str = "id";
    pub const FILE: &str = "logo";
}
