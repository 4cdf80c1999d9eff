//! Backend service abstractions.
//!
//! Domains never hold an [`ApiClient`](crate::infra::api_client::ApiClient)
//! directly; the runtime performs requests through these traits so tests can
//! substitute in-memory implementations.

use std::sync::Arc;

pub mod profile;
pub mod social_links;

pub use profile::{CompanyProfileApiAdapter, CompanyProfileService};
pub use social_links::{SocialLinkApiAdapter, SocialLinkService};

use crate::infra::api_client::ApiClient;

/// Services the runtime performs requests against
#[derive(Clone, Debug)]
pub struct Services {
    pub profile: Arc<dyn CompanyProfileService>,
    pub social_links: Arc<dyn SocialLinkService>,
}

impl Services {
    pub fn new(
        profile: Arc<dyn CompanyProfileService>,
        social_links: Arc<dyn SocialLinkService>,
    ) -> Self {
        Self {
            profile,
            social_links,
        }
    }

    /// Wire both services to the HTTP backend
    pub fn from_client(client: Arc<ApiClient>) -> Self {
        Self {
            profile: Arc::new(CompanyProfileApiAdapter::new(client.clone())),
            social_links: Arc::new(SocialLinkApiAdapter::new(client)),
        }
    }
}
