//! Root application state

use std::sync::Arc;

use crate::app::bootstrap::AppConfig;
use crate::common::notifications::Notifications;
use crate::domains::{ProfileState, SocialLinksState};
use crate::infra::theme::ThemeConfig;

/// Per-domain state
#[derive(Debug, Clone, Default)]
pub struct DomainStates {
    pub profile: ProfileState,
    pub social_links: SocialLinksState,
}

#[derive(Debug, Clone)]
pub struct State {
    pub domains: DomainStates,
    pub notifications: Notifications,
    /// Shared theme; read-only from the views' perspective
    pub theme: Arc<ThemeConfig>,
    /// Initial fetches have been issued
    pub mounted: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            domains: DomainStates::default(),
            notifications: Notifications::default(),
            theme: Arc::new(ThemeConfig::default()),
            mounted: false,
        }
    }
}

impl State {
    pub fn new(config: &AppConfig) -> Self {
        let mut domains = DomainStates::default();
        domains.social_links.whatsapp_prefix = config.whatsapp_prefix.clone();
        Self {
            domains,
            notifications: Notifications::new(config.notification_ttl),
            theme: Arc::clone(&config.theme),
            mounted: false,
        }
    }
}
