//! Company profile messages

use storefront_model::{CompanyProfile, ProfileField};

use super::state::LogoFile;

/// Messages for the company profile editor
#[derive(Debug, Clone)]
pub enum ProfileMessage {
    /// Fetch the profile record from the backend
    Load,
    /// Fetch result; `None` when the backend has no profile yet
    Loaded(Result<Option<CompanyProfile>, String>),

    // Field editing
    /// Enter edit mode
    StartEditing,
    /// Leave edit mode, restoring the last fetched values
    CancelEditing,
    /// Update a single form field
    UpdateField(ProfileField, String),
    /// Validate and save the field set
    SubmitForm,
    /// Save result
    SaveResult(Result<(), String>),

    // Logo
    /// A file was picked for the logo
    SelectLogo(LogoFile),
    /// Upload the pending logo
    SaveLogo,
    /// Upload result
    LogoSaveResult(Result<(), String>),
    /// Ask to discard the pending logo (opens the confirmation)
    RequestDiscardLogo,
    /// Confirm discarding the pending logo
    ConfirmDiscardLogo,
    /// Close the confirmation and keep the pending logo
    DismissDiscardLogo,
}

impl ProfileMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "Profile::Load",
            Self::Loaded(_) => "Profile::Loaded",
            Self::StartEditing => "Profile::StartEditing",
            Self::CancelEditing => "Profile::CancelEditing",
            Self::UpdateField(_, _) => "Profile::UpdateField",
            Self::SubmitForm => "Profile::SubmitForm",
            Self::SaveResult(_) => "Profile::SaveResult",
            Self::SelectLogo(_) => "Profile::SelectLogo",
            Self::SaveLogo => "Profile::SaveLogo",
            Self::LogoSaveResult(_) => "Profile::LogoSaveResult",
            Self::RequestDiscardLogo => "Profile::RequestDiscardLogo",
            Self::ConfirmDiscardLogo => "Profile::ConfirmDiscardLogo",
            Self::DismissDiscardLogo => "Profile::DismissDiscardLogo",
        }
    }
}
