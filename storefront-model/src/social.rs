use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::SocialLinkId;
use crate::network::NetworkType;

/// A registered social network entry.
///
/// `value` is a profile URL, or for WhatsApp the phone number as stored by
/// the backend (country-code prefix included). Fields the backend attaches
/// that this client does not model are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: SocialLinkId,
    pub network: NetworkType,
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SocialLink {
    pub fn new(id: SocialLinkId, network: NetworkType, value: String) -> Self {
        Self {
            id,
            network,
            value,
            extra: Map::new(),
        }
    }

    /// Merge an acknowledged update into this record, keeping every other
    /// field the backend previously returned.
    pub fn merge_update(&mut self, network: NetworkType, value: String) {
        self.network = network;
        self.value = value;
    }
}
