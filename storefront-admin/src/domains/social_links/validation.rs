//! Social link input rules

use std::collections::BTreeMap;

use storefront_model::{NetworkType, SocialLink};
use thiserror::Error;

use super::state::SocialLinkForm;

pub const WHATSAPP_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialLinkError {
    #[error("Select a social network first")]
    NoNetwork,
    #[error("Enter a value for {0}")]
    EmptyValue(NetworkType),
    #[error("WhatsApp numbers must have exactly 10 digits")]
    InvalidWhatsappLength,
    #[error("{0} is already registered; edit the existing entry instead")]
    Duplicate(NetworkType),
    #[error("{0} links must start with http:// or https://")]
    MissingScheme(NetworkType),
    #[error("Social links have not loaded yet; reload before adding one")]
    NotLoaded,
}

/// Live input constraint for WhatsApp: digits only, at most ten.
pub fn sanitize_whatsapp_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(WHATSAPP_DIGITS)
        .collect()
}

/// Apply the per-network input constraint to raw text.
pub fn constrain_input(network: Option<NetworkType>, raw: String) -> String {
    match network {
        Some(NetworkType::Whatsapp) => sanitize_whatsapp_input(&raw),
        _ => raw,
    }
}

fn has_web_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Check the form before a create or update is sent; returns the network
/// the value belongs to.
pub fn validate_before_save(
    form: &SocialLinkForm,
    links: &BTreeMap<NetworkType, SocialLink>,
) -> Result<NetworkType, SocialLinkError> {
    let network = form.network.ok_or(SocialLinkError::NoNetwork)?;
    let value = form.value.trim();

    if value.is_empty() {
        return Err(SocialLinkError::EmptyValue(network));
    }
    if network.is_phone() && value.chars().count() != WHATSAPP_DIGITS {
        return Err(SocialLinkError::InvalidWhatsappLength);
    }
    if !form.is_editing() && links.contains_key(&network) {
        return Err(SocialLinkError::Duplicate(network));
    }
    if !network.is_phone() && !has_web_scheme(value) {
        return Err(SocialLinkError::MissingScheme(network));
    }
    Ok(network)
}

/// Value as transmitted to the backend.
pub fn to_wire_value(network: NetworkType, value: &str, prefix: &str) -> String {
    let value = value.trim();
    if network.is_phone() {
        format!("{prefix}{value}")
    } else {
        value.to_string()
    }
}

/// Value as shown in the edit form for a stored record.
pub fn from_wire_value(
    network: NetworkType,
    stored: &str,
    prefix: &str,
) -> String {
    if network.is_phone() {
        let local = stored.strip_prefix(prefix).unwrap_or_else(|| {
            log::warn!(
                "Stored WhatsApp number {} lacks the {} prefix",
                stored,
                prefix
            );
            stored
        });
        sanitize_whatsapp_input(local)
    } else {
        stored.to_string()
    }
}
