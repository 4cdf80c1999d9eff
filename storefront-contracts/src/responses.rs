use log::warn;
use serde::{Deserialize, Serialize};
use storefront_model::SocialLink;

/// Envelope wrapping every JSON response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Decode a social link collection, dropping entries whose network tag
/// is not one of the supported platforms.
pub fn decode_social_links(raw: Vec<serde_json::Value>) -> Vec<SocialLink> {
    raw.into_iter()
        .filter_map(|value| {
            match serde_json::from_value::<SocialLink>(value.clone()) {
                Ok(link) => Some(link),
                Err(err) => {
                    warn!("Skipping social link {}: {}", value, err);
                    None
                }
            }
        })
        .collect()
}
