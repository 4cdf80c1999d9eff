//! Company profile update handlers

use log::{debug, error, info, warn};
use storefront_model::{CompanyProfile, LogoImage, LogoMime, ProfileField};

use super::messages::ProfileMessage;
use super::state::{
    Availability, EditMode, LogoFile, LogoStatus, ProfileState,
};
use super::validation;
use crate::common::messages::{
    ApiRequest, CrossDomainEvent, DomainUpdateResult, Task,
};
use crate::state::State;

pub(crate) const NO_PROFILE_NOTICE: &str =
    "No company profile exists yet; create one before editing";

/// Why there is no record to edit
fn unavailable(profile: &ProfileState) -> DomainUpdateResult {
    let event = match &profile.availability {
        Availability::Failed(err) => CrossDomainEvent::error(format!(
            "The company profile could not be loaded ({err}); reload and try again"
        )),
        Availability::Unknown => {
            CrossDomainEvent::warning("The company profile is still loading")
        }
        Availability::Missing | Availability::Loaded => {
            CrossDomainEvent::warning(NO_PROFILE_NOTICE)
        }
    };
    DomainUpdateResult::event(event)
}

/// Main message handler for the profile editor
pub fn handle_message(
    state: &mut State,
    message: ProfileMessage,
) -> DomainUpdateResult {
    debug!("Profile update: {}", message.name());

    match message {
        ProfileMessage::Load => handle_load(state),
        ProfileMessage::Loaded(result) => handle_loaded(state, result),

        // Field editing
        ProfileMessage::StartEditing => handle_start_editing(state),
        ProfileMessage::CancelEditing => handle_cancel_editing(state),
        ProfileMessage::UpdateField(field, value) => {
            handle_update_field(state, field, value)
        }
        ProfileMessage::SubmitForm => handle_submit_form(state),
        ProfileMessage::SaveResult(result) => handle_save_result(state, result),

        // Logo
        ProfileMessage::SelectLogo(file) => handle_select_logo(state, file),
        ProfileMessage::SaveLogo => handle_save_logo(state),
        ProfileMessage::LogoSaveResult(result) => {
            handle_logo_save_result(state, result)
        }
        ProfileMessage::RequestDiscardLogo => handle_request_discard_logo(state),
        ProfileMessage::ConfirmDiscardLogo => handle_confirm_discard_logo(state),
        ProfileMessage::DismissDiscardLogo => {
            state.domains.profile.logo.confirm_discard = false;
            DomainUpdateResult::none()
        }
    }
}

fn handle_load(state: &mut State) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    if profile.loading {
        debug!("Profile fetch already in flight");
        return DomainUpdateResult::none();
    }
    profile.loading = true;
    DomainUpdateResult::task(Task::request(ApiRequest::FetchProfile))
}

fn handle_loaded(
    state: &mut State,
    result: Result<Option<CompanyProfile>, String>,
) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    profile.loading = false;

    match result {
        Ok(Some(record)) => {
            info!("Loaded company profile {}", record.id);
            profile.apply_loaded(record);
            DomainUpdateResult::none()
        }
        Ok(None) => {
            warn!("Backend returned no company profile");
            profile.original = None;
            profile.availability = Availability::Missing;
            profile.mode = EditMode::Viewing;
            DomainUpdateResult::event(CrossDomainEvent::warning(
                NO_PROFILE_NOTICE,
            ))
        }
        Err(err) => {
            error!("Failed to load company profile: {}", err);
            profile.availability = Availability::Failed(err.clone());
            DomainUpdateResult::event(CrossDomainEvent::error(format!(
                "Could not load the company profile: {err}"
            )))
        }
    }
}

fn handle_start_editing(state: &mut State) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    if profile.original.is_none() {
        return unavailable(profile);
    }
    profile.mode = EditMode::Editing;
    DomainUpdateResult::none()
}

fn handle_cancel_editing(state: &mut State) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    if profile.saving {
        debug!("Ignoring cancel while a save is in flight");
        return DomainUpdateResult::none();
    }
    profile.restore_original();
    DomainUpdateResult::none()
}

fn handle_update_field(
    state: &mut State,
    field: ProfileField,
    value: String,
) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    if !profile.is_editing() || profile.saving {
        debug!("Ignoring edit of {} outside edit mode", field);
        return DomainUpdateResult::none();
    }
    profile.draft.set(field, value);
    profile.field_errors.remove(&field);
    profile.recompute_changes();
    DomainUpdateResult::none()
}

fn handle_submit_form(state: &mut State) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    if !profile.is_editing() || profile.saving || !profile.has_changes {
        debug!(
            "Submit ignored (editing: {}, saving: {}, changes: {})",
            profile.is_editing(),
            profile.saving,
            profile.has_changes
        );
        return DomainUpdateResult::none();
    }
    let Some(id) = profile.profile_id().cloned() else {
        return unavailable(profile);
    };

    let report = validation::validate(&profile.draft);
    if !report.is_valid() {
        debug!("Profile form has {} invalid fields", report.errors().len());
        profile.field_errors = report.into_errors();
        return DomainUpdateResult::none();
    }

    profile.field_errors.clear();
    profile.saving = true;
    DomainUpdateResult::task(Task::request(ApiRequest::UpdateProfile {
        id,
        request: profile.draft.clone().into(),
    }))
}

fn handle_save_result(
    state: &mut State,
    result: Result<(), String>,
) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    profile.saving = false;

    match result {
        Ok(()) => {
            if let Some(original) = profile.original.as_mut() {
                original.fields = profile.draft.clone();
            }
            profile.has_changes = false;
            profile.mode = EditMode::Viewing;
            info!("Company profile saved");
            DomainUpdateResult::event(CrossDomainEvent::success(
                "Company profile saved",
            ))
        }
        Err(err) => {
            error!("Failed to save company profile: {}", err);
            DomainUpdateResult::event(CrossDomainEvent::error(format!(
                "Could not save the company profile: {err}"
            )))
        }
    }
}

fn handle_select_logo(state: &mut State, file: LogoFile) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    if profile.original.is_none() {
        return unavailable(profile);
    }
    if profile.logo.uploading {
        debug!("Ignoring logo selection while an upload is in flight");
        return DomainUpdateResult::none();
    }

    let mime = match LogoMime::parse(&file.mime) {
        Ok(mime) => mime,
        Err(err) => {
            warn!("Rejected logo {}: {}", file.file_name, err);
            return DomainUpdateResult::event(CrossDomainEvent::error(
                "Only PNG or JPEG images can be used as the logo",
            ));
        }
    };

    let preview = LogoImage::new(mime, file.bytes.clone());
    if preview.dimensions().is_none() {
        debug!("Logo preview for {} could not be decoded", file.file_name);
    }

    let logo = &mut profile.logo;
    logo.displayed = Some(preview);
    logo.status = LogoStatus::PendingUpload(file);
    logo.confirm_discard = false;
    DomainUpdateResult::none()
}

fn handle_save_logo(state: &mut State) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    let Some(id) = profile.profile_id().cloned() else {
        return unavailable(profile);
    };
    let logo = &mut profile.logo;
    if logo.uploading {
        debug!("Logo upload already in flight");
        return DomainUpdateResult::none();
    }
    let LogoStatus::PendingUpload(file) = &logo.status else {
        debug!("No pending logo to save");
        return DomainUpdateResult::none();
    };

    let file = file.clone();
    logo.uploading = true;
    logo.confirm_discard = false;
    DomainUpdateResult::task(Task::request(ApiRequest::UploadLogo { id, file }))
}

fn handle_logo_save_result(
    state: &mut State,
    result: Result<(), String>,
) -> DomainUpdateResult {
    let profile = &mut state.domains.profile;
    profile.logo.uploading = false;

    match result {
        Ok(()) => {
            let logo = &mut profile.logo;
            logo.baseline = logo.displayed.clone();
            logo.status = LogoStatus::Idle;
            if let Some(original) = profile.original.as_mut() {
                original.logo =
                    profile.logo.baseline.as_ref().map(LogoImage::to_data_uri);
            }
            info!("Company logo uploaded");
            DomainUpdateResult::event(CrossDomainEvent::success("Logo updated"))
        }
        Err(err) => {
            error!("Failed to upload company logo: {}", err);
            DomainUpdateResult::event(CrossDomainEvent::error(format!(
                "Could not upload the logo: {err}"
            )))
        }
    }
}

fn handle_request_discard_logo(state: &mut State) -> DomainUpdateResult {
    let logo = &mut state.domains.profile.logo;
    if logo.is_pending() && !logo.uploading {
        logo.confirm_discard = true;
    }
    DomainUpdateResult::none()
}

fn handle_confirm_discard_logo(state: &mut State) -> DomainUpdateResult {
    let logo = &mut state.domains.profile.logo;
    if !logo.confirm_discard {
        debug!("Discard not requested; keeping pending logo");
        return DomainUpdateResult::none();
    }
    logo.displayed = logo.baseline.clone();
    logo.status = LogoStatus::Idle;
    logo.confirm_discard = false;
    DomainUpdateResult::none()
}
