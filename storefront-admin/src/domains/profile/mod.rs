//! Company profile editor
//!
//! Handles the single company profile record:
//! - Identity, address, contact and description fields, editable only after
//!   explicitly entering edit mode and validated on submit
//! - Logo replacement, saved through its own upload independent of the
//!   text fields
//!
//! Note: the backend seeds the profile record; this view only updates it.

pub mod messages;
pub mod state;
pub mod update;
pub mod validation;

pub use messages::ProfileMessage;
pub use state::ProfileState;

use crate::common::messages::DomainUpdateResult;
use crate::state::State;

/// Update company profile state
pub fn update(state: &mut State, message: ProfileMessage) -> DomainUpdateResult {
    update::handle_message(state, message)
}
