//! Storefront admin library
//!
//! Headless implementation of the storefront back-office views: the company
//! profile editor and its nested social links manager. Each view is a domain
//! with its own state, messages and update handlers; handlers describe the
//! HTTP work they need as a [`common::messages::Task`] and the
//! [`app::runtime::Runtime`] performs it against the backend services.
//!
//! Notes
//! - Rendering is left to the consumer; [`view`] derives everything a
//!   renderer needs (enabled controls, busy indicators, field errors).
//! - The `storefront-admin` binary is a terminal front end over the same
//!   runtime.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod update;
pub mod view;
