mod common;

use common::{Call, MockBackend, PIXEL_PNG, mounted_runtime, seeded_profile};
use storefront_admin::common::notifications::NotificationLevel;
use storefront_admin::domains::profile::ProfileMessage;
use storefront_admin::domains::profile::state::{
    Availability, EditMode, LogoFile,
};
use storefront_admin::view;
use storefront_model::{
    CompanyProfile, LogoImage, LogoMime, ProfileField, ProfileId,
};

fn png_file() -> LogoFile {
    LogoFile {
        file_name: "logo.png".into(),
        mime: "image/png".into(),
        bytes: PIXEL_PNG.to_vec(),
    }
}

#[tokio::test]
async fn mount_fetches_once() {
    let backend = MockBackend::new(Some(seeded_profile()), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;
    runtime.mount().await;

    assert_eq!(backend.calls().await, vec![Call::FetchProfile, Call::ListLinks]);
    let profile = &runtime.state().domains.profile;
    assert_eq!(profile.availability, Availability::Loaded);
    assert_eq!(profile.mode, EditMode::Viewing);
    assert_eq!(profile.draft, seeded_profile().fields);
}

#[tokio::test]
async fn invalid_fields_never_reach_the_backend() {
    let backend = MockBackend::new(Some(seeded_profile()), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;

    runtime.dispatch(ProfileMessage::StartEditing).await;
    runtime
        .dispatch(ProfileMessage::UpdateField(ProfileField::Phone, "55-1234".into()))
        .await;
    runtime
        .dispatch(ProfileMessage::UpdateField(ProfileField::Name, String::new()))
        .await;
    runtime.dispatch(ProfileMessage::SubmitForm).await;

    assert!(backend.writes().await.is_empty());
    let profile = &runtime.state().domains.profile;
    assert!(profile.is_editing());
    assert_eq!(profile.field_errors.len(), 2);

    let rendered = view::profile_view(runtime.state());
    let phone = rendered
        .fields
        .iter()
        .find(|f| f.field == ProfileField::Phone)
        .expect("phone field");
    assert!(phone.error.is_some());
}

#[tokio::test]
async fn save_sends_full_field_set_and_leaves_edit_mode() {
    let backend = MockBackend::new(Some(seeded_profile()), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;

    runtime.dispatch(ProfileMessage::StartEditing).await;
    runtime
        .dispatch(ProfileMessage::UpdateField(
            ProfileField::Slogan,
            "Construimos contigo".into(),
        ))
        .await;
    runtime.dispatch(ProfileMessage::SubmitForm).await;

    let mut expected = seeded_profile().fields;
    expected.slogan = "Construimos contigo".into();
    assert_eq!(
        backend.writes().await,
        vec![Call::UpdateProfile(ProfileId::new(1), expected.clone().into())]
    );

    let state = runtime.state();
    let profile = &state.domains.profile;
    assert_eq!(profile.mode, EditMode::Viewing);
    assert!(!profile.saving);
    assert!(!profile.has_changes);
    assert_eq!(
        profile.original.as_ref().map(|p| p.fields.clone()),
        Some(expected)
    );
    assert_eq!(
        state.notifications.latest().map(|n| n.level),
        Some(NotificationLevel::Success)
    );
    // Saving never refetches
    assert_eq!(
        backend.count(|c| matches!(c, Call::FetchProfile)).await,
        1
    );
}

#[tokio::test]
async fn failed_save_keeps_the_draft() {
    let backend = MockBackend::new(Some(seeded_profile()), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;
    backend.fail_writes(true);

    runtime.dispatch(ProfileMessage::StartEditing).await;
    runtime
        .dispatch(ProfileMessage::UpdateField(
            ProfileField::Email,
            "contacto@acme.mx".into(),
        ))
        .await;
    runtime.dispatch(ProfileMessage::SubmitForm).await;

    let state = runtime.state();
    let profile = &state.domains.profile;
    assert!(profile.is_editing());
    assert!(profile.has_changes);
    assert!(!profile.saving);
    assert_eq!(profile.draft.email, "contacto@acme.mx");
    assert_eq!(
        profile.original.as_ref().map(|p| p.fields.email.as_str()),
        Some("ventas@acme.mx")
    );
    let latest = state.notifications.latest().expect("error notification");
    assert_eq!(latest.level, NotificationLevel::Error);
    assert!(latest.message.contains("backend unavailable"));
}

#[tokio::test]
async fn cancel_restores_without_a_request() {
    let backend = MockBackend::new(Some(seeded_profile()), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;

    runtime.dispatch(ProfileMessage::StartEditing).await;
    runtime
        .dispatch(ProfileMessage::UpdateField(
            ProfileField::Description,
            "Borrador".into(),
        ))
        .await;
    runtime.dispatch(ProfileMessage::CancelEditing).await;

    assert_eq!(backend.calls().await.len(), 2);
    let profile = &runtime.state().domains.profile;
    assert_eq!(profile.draft, seeded_profile().fields);
    assert_eq!(profile.mode, EditMode::Viewing);
}

#[tokio::test]
async fn missing_profile_blocks_the_form() {
    let backend = MockBackend::new(None, Vec::new());
    let mut runtime = mounted_runtime(&backend).await;

    runtime.dispatch(ProfileMessage::StartEditing).await;
    runtime
        .dispatch(ProfileMessage::UpdateField(ProfileField::Name, "X".into()))
        .await;
    runtime.dispatch(ProfileMessage::SelectLogo(png_file())).await;

    let state = runtime.state();
    assert_eq!(state.domains.profile.availability, Availability::Missing);
    assert!(!state.domains.profile.is_editing());
    assert!(state.domains.profile.draft.name.is_empty());
    assert!(!state.domains.profile.logo.is_pending());
    assert!(
        common::notification_levels(state)
            .iter()
            .all(|level| *level == NotificationLevel::Warning)
    );
    assert!(view::profile_view(state).notice.is_some());
    assert!(backend.writes().await.is_empty());
}

#[tokio::test]
async fn logo_upload_is_separate_from_field_save() {
    let backend = MockBackend::new(Some(seeded_profile()), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;

    runtime.dispatch(ProfileMessage::SelectLogo(png_file())).await;
    let preview = view::profile_view(runtime.state()).logo;
    assert!(preview.pending);
    assert_eq!(preview.dimensions, Some((1, 1)));
    assert!(backend.writes().await.is_empty());

    runtime.dispatch(ProfileMessage::SaveLogo).await;

    assert_eq!(
        backend.writes().await,
        vec![Call::UploadLogo(ProfileId::new(1), png_file())]
    );
    let profile = &runtime.state().domains.profile;
    assert!(!profile.logo.is_pending());
    assert!(!profile.logo.uploading);
    assert_eq!(profile.logo.baseline, profile.logo.displayed);
    assert!(profile.original.as_ref().and_then(|p| p.logo.as_ref()).is_some());
}

#[tokio::test]
async fn discarding_a_logo_needs_confirmation() {
    let backend = MockBackend::new(Some(seeded_profile()), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;

    runtime.dispatch(ProfileMessage::SelectLogo(png_file())).await;
    runtime.dispatch(ProfileMessage::RequestDiscardLogo).await;
    runtime.dispatch(ProfileMessage::DismissDiscardLogo).await;
    runtime.dispatch(ProfileMessage::ConfirmDiscardLogo).await;
    assert!(runtime.state().domains.profile.logo.is_pending());

    runtime.dispatch(ProfileMessage::RequestDiscardLogo).await;
    assert!(view::profile_view(runtime.state()).logo.confirm_discard);
    runtime.dispatch(ProfileMessage::ConfirmDiscardLogo).await;

    let logo = &runtime.state().domains.profile.logo;
    assert!(!logo.is_pending());
    assert!(logo.displayed.is_none());
    assert!(backend.writes().await.is_empty());
}

#[tokio::test]
async fn unsupported_logo_type_is_rejected() {
    let baseline = LogoImage::new(LogoMime::Png, PIXEL_PNG.to_vec());
    let record = CompanyProfile {
        logo: Some(baseline.to_data_uri()),
        ..seeded_profile()
    };
    let backend = MockBackend::new(Some(record), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;

    runtime
        .dispatch(ProfileMessage::SelectLogo(LogoFile {
            file_name: "brochure.pdf".into(),
            mime: "application/pdf".into(),
            bytes: b"%PDF-1.7".to_vec(),
        }))
        .await;
    runtime.dispatch(ProfileMessage::SaveLogo).await;

    let logo = &runtime.state().domains.profile.logo;
    assert!(backend.writes().await.is_empty());
    assert!(!logo.is_pending());
    assert_eq!(logo.displayed.as_ref(), Some(&baseline));
    assert_eq!(
        runtime.state().notifications.latest().map(|n| n.level),
        Some(NotificationLevel::Error)
    );
}

#[tokio::test]
async fn failed_logo_upload_keeps_pending_preview() {
    let backend = MockBackend::new(Some(seeded_profile()), Vec::new());
    let mut runtime = mounted_runtime(&backend).await;
    backend.fail_writes(true);

    runtime.dispatch(ProfileMessage::SelectLogo(png_file())).await;
    runtime.dispatch(ProfileMessage::SaveLogo).await;

    let logo = &runtime.state().domains.profile.logo;
    assert_eq!(backend.count(|c| matches!(c, Call::UploadLogo(..))).await, 1);
    assert!(logo.is_pending());
    assert!(!logo.uploading);
    assert!(logo.baseline.is_none());
    assert!(logo.displayed.is_some());
}
