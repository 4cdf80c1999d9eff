use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::common::messages::Task;
use crate::domains::{profile, social_links};
use crate::infra::config::Config;
use crate::infra::theme::ThemeConfig;
use crate::state::State;

/// Runtime configuration resolved from the config file and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_url: String,
    pub api_token: Option<String>,
    pub whatsapp_prefix: String,
    pub request_timeout: Duration,
    pub notification_ttl: Duration,
    pub theme: Arc<ThemeConfig>,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        Config::load().into()
    }
}

impl From<Config> for AppConfig {
    fn from(config: Config) -> Self {
        Self {
            server_url: config.server_url,
            api_token: config.api_token,
            whatsapp_prefix: config.whatsapp_prefix,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            notification_ttl: Duration::from_secs(
                config.notification_ttl_secs,
            ),
            theme: Arc::new(ThemeConfig::new(config.theme)),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Config::default().into()
    }
}

/// Issue the initial fetches for both views. Only the first call does
/// anything.
pub fn mount(state: &mut State) -> Task {
    if state.mounted {
        debug!("Views already mounted");
        return Task::none();
    }
    state.mounted = true;

    let profile =
        profile::update(state, profile::ProfileMessage::Load).task;
    let links = social_links::update(
        state,
        social_links::SocialLinksMessage::Load,
    )
    .task;
    Task::batch([profile, links])
}
