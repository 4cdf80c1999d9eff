//! Social links messages

use storefront_contracts::SocialLinkRequest;
use storefront_model::{NetworkType, SocialLink, SocialLinkId};

/// Messages for the social links manager
#[derive(Debug, Clone)]
pub enum SocialLinksMessage {
    /// Fetch the collection from the backend
    Load,
    /// Fetch result
    Loaded(Result<Vec<SocialLink>, String>),

    // Form
    /// Choose the network for the pending entry; discards the typed value
    SelectNetwork(NetworkType),
    /// Raw input for the value field
    UpdateValue(String),
    /// Validate and create or update
    Save,
    /// Create result, carrying the record the backend stored
    Created(Result<SocialLink, String>),
    /// Update result, echoing what was sent
    Updated(Result<(SocialLinkId, SocialLinkRequest), String>),
    /// Load an existing record into the form
    Edit(NetworkType),
    /// Leave edit mode and clear the form
    CancelEdit,

    // Delete
    /// Ask to delete a record (opens the confirmation)
    RequestDelete(NetworkType),
    /// Confirm the pending deletion
    ConfirmDelete,
    /// Close the confirmation without deleting
    DismissDelete,
    /// Delete result
    Deleted(Result<NetworkType, String>),
}

impl SocialLinksMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "SocialLinks::Load",
            Self::Loaded(_) => "SocialLinks::Loaded",
            Self::SelectNetwork(_) => "SocialLinks::SelectNetwork",
            Self::UpdateValue(_) => "SocialLinks::UpdateValue",
            Self::Save => "SocialLinks::Save",
            Self::Created(_) => "SocialLinks::Created",
            Self::Updated(_) => "SocialLinks::Updated",
            Self::Edit(_) => "SocialLinks::Edit",
            Self::CancelEdit => "SocialLinks::CancelEdit",
            Self::RequestDelete(_) => "SocialLinks::RequestDelete",
            Self::ConfirmDelete => "SocialLinks::ConfirmDelete",
            Self::DismissDelete => "SocialLinks::DismissDelete",
            Self::Deleted(_) => "SocialLinks::Deleted",
        }
    }
}
