//! Company profile state

use std::collections::BTreeMap;

use storefront_model::profile::ProfileFields;
use storefront_model::{CompanyProfile, LogoImage, ProfileField, ProfileId};

use super::validation::FieldError;

/// Company profile editor state
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    /// Last record acknowledged by the backend; baseline for cancel
    pub original: Option<CompanyProfile>,
    /// Values currently in the form
    pub draft: ProfileFields,
    pub mode: EditMode,
    /// Whether the draft differs from the baseline
    pub has_changes: bool,
    /// Per-field errors from the last submit
    pub field_errors: BTreeMap<ProfileField, FieldError>,
    /// Field save in flight
    pub saving: bool,
    /// Initial fetch in flight
    pub loading: bool,
    pub availability: Availability,
    pub logo: LogoState,
}

/// Field editing state machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// Whether there is a record to edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Availability {
    /// Not fetched yet
    #[default]
    Unknown,
    Loaded,
    /// The backend has no profile; editing is disabled
    Missing,
    /// The fetch failed
    Failed(String),
}

/// A file picked for upload as the new logo
#[derive(Clone, PartialEq, Eq)]
pub struct LogoFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for LogoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoFile")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Logo editing state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogoStatus {
    #[default]
    Idle,
    PendingUpload(LogoFile),
}

#[derive(Debug, Clone, Default)]
pub struct LogoState {
    /// Logo currently shown; a local preview while an upload is pending
    pub displayed: Option<LogoImage>,
    /// Last logo acknowledged by the backend
    pub baseline: Option<LogoImage>,
    pub status: LogoStatus,
    /// Discard confirmation is open
    pub confirm_discard: bool,
    /// Upload in flight
    pub uploading: bool,
}

impl LogoState {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, LogoStatus::PendingUpload(_))
    }
}

impl ProfileState {
    pub fn profile_id(&self) -> Option<&ProfileId> {
        self.original.as_ref().map(|p| &p.id)
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Replace the baseline with a freshly fetched record and reset the form
    pub fn apply_loaded(&mut self, profile: CompanyProfile) {
        let logo = profile.logo.as_deref().and_then(|payload| {
            LogoImage::from_payload(payload)
                .map_err(|err| {
                    log::warn!("Ignoring undecodable profile logo: {}", err)
                })
                .ok()
        });

        self.draft = profile.fields.clone();
        self.original = Some(profile);
        self.mode = EditMode::Viewing;
        self.has_changes = false;
        self.field_errors.clear();
        self.availability = Availability::Loaded;
        self.logo = LogoState {
            displayed: logo.clone(),
            baseline: logo,
            ..LogoState::default()
        };
    }

    /// Put the form back to the baseline values
    pub fn restore_original(&mut self) {
        if let Some(original) = &self.original {
            self.draft = original.fields.clone();
        }
        self.field_errors.clear();
        self.has_changes = false;
        self.mode = EditMode::Viewing;
    }

    pub(crate) fn recompute_changes(&mut self) {
        self.has_changes = match &self.original {
            Some(original) => original.fields != self.draft,
            None => false,
        };
    }
}
