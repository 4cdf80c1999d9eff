//! Application wiring: configuration, mount, and the request runtime.

pub mod bootstrap;
pub mod runtime;

pub use bootstrap::{AppConfig, mount};
pub use runtime::Runtime;
