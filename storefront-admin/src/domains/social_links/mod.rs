//! Social links manager
//!
//! Keeps one record per social network and edits them through a single
//! shared form:
//! - Add: pick a network, enter a URL (or a WhatsApp number) and save
//! - Edit: load an existing record into the form and save in place
//! - Delete: remove a record after confirmation
//!
//! The collection is fetched once; afterwards it is kept in sync by
//! patching the local map with each acknowledged change.

pub mod messages;
pub mod state;
pub mod update;
pub mod validation;

pub use messages::SocialLinksMessage;
pub use state::SocialLinksState;

use crate::common::messages::DomainUpdateResult;
use crate::state::State;

/// Update social links state
pub fn update(
    state: &mut State,
    message: SocialLinksMessage,
) -> DomainUpdateResult {
    update::handle_message(state, message)
}
