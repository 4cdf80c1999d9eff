//! View domains
//!
//! Each domain has its own isolated state, messages, and update handlers.

pub mod profile;
pub mod social_links;

pub use profile::ProfileState;
pub use social_links::SocialLinksState;
