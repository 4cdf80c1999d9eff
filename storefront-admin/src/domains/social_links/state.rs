//! Social links state

use std::collections::BTreeMap;

use storefront_model::{NetworkType, SocialLink, SocialLinkId};

/// Country-code prefix prepended to WhatsApp numbers on the wire
pub const DEFAULT_WHATSAPP_PREFIX: &str = "+52";

/// Social links manager state
#[derive(Debug, Clone)]
pub struct SocialLinksState {
    /// Registered records keyed by network; absent networks have no entry
    pub links: BTreeMap<NetworkType, SocialLink>,
    pub form: SocialLinkForm,
    /// Network awaiting delete confirmation
    pub pending_delete: Option<NetworkType>,
    /// Network whose delete is in flight
    pub deleting: Option<NetworkType>,
    /// Create or update in flight
    pub saving: bool,
    /// Initial fetch in flight
    pub loading: bool,
    pub loaded: bool,
    pub whatsapp_prefix: String,
}

impl Default for SocialLinksState {
    fn default() -> Self {
        Self {
            links: BTreeMap::new(),
            form: SocialLinkForm::default(),
            pending_delete: None,
            deleting: None,
            saving: false,
            loading: false,
            loaded: false,
            whatsapp_prefix: DEFAULT_WHATSAPP_PREFIX.to_string(),
        }
    }
}

/// Shared add/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinkForm {
    pub network: Option<NetworkType>,
    pub value: String,
    /// Record being edited; `None` while adding
    pub editing: Option<SocialLinkId>,
}

impl SocialLinkForm {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl SocialLinksState {
    pub fn get(&self, network: NetworkType) -> Option<&SocialLink> {
        self.links.get(&network)
    }

    /// Networks without a record yet, in display order
    pub fn available_networks(&self) -> Vec<NetworkType> {
        NetworkType::ALL
            .into_iter()
            .filter(|n| !self.links.contains_key(n))
            .collect()
    }

    pub(crate) fn replace_all(&mut self, links: Vec<SocialLink>) {
        self.links.clear();
        for link in links {
            if let Some(previous) = self.links.insert(link.network, link) {
                log::warn!(
                    "Backend returned more than one {} record; keeping the last",
                    previous.network
                );
            }
        }
    }
}
