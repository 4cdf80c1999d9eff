use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// Social platforms a company can link to.
///
/// The set is closed; the registry holds at most one record per variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
    Whatsapp,
}

impl NetworkType {
    pub const ALL: [NetworkType; 5] = [
        Self::Facebook,
        Self::Twitter,
        Self::Linkedin,
        Self::Instagram,
        Self::Whatsapp,
    ];

    /// Wire tag used by the backend.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Whatsapp => "whatsapp",
        }
    }

    /// Whether the value is a phone number rather than a profile URL.
    pub fn is_phone(self) -> bool {
        matches!(self, Self::Whatsapp)
    }
}

impl Display for NetworkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Facebook => write!(f, "Facebook"),
            Self::Twitter => write!(f, "Twitter"),
            Self::Linkedin => write!(f, "LinkedIn"),
            Self::Instagram => write!(f, "Instagram"),
            Self::Whatsapp => write!(f, "WhatsApp"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|network| network.tag() == normalized)
            .ok_or_else(|| ModelError::UnknownNetwork(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for NetworkType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
