//! Core data model definitions shared across storefront crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod logo;
pub mod network;
pub mod profile;
pub mod social;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ProfileId, RecordKey, SocialLinkId};
pub use logo::{LogoImage, LogoMime};
pub use network::NetworkType;
pub use profile::{CompanyProfile, ProfileField};
pub use social::SocialLink;
