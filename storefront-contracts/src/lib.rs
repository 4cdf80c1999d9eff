//! Request/response contracts and route definitions for the storefront
//! backend API.
#![allow(missing_docs)]

pub mod requests;
pub mod responses;
pub mod routes;

pub use requests::{SocialLinkRequest, UpdateProfileRequest};
pub use responses::{ApiResponse, decode_social_links};
