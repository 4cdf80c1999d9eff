//! View models.
//!
//! Pure projections of [`State`] describing what a renderer shows: field
//! values and errors, which controls are enabled, and busy indicators. The
//! social links section is nested inside the profile view.

use storefront_model::{NetworkType, ProfileField};

use crate::domains::profile::state::Availability;
use crate::domains::profile::update::NO_PROFILE_NOTICE;
use crate::domains::social_links::validation;
use crate::infra::theme::Palette;
use crate::state::State;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    /// Inputs are read-only outside edit mode
    pub read_only: bool,
    pub edit_enabled: bool,
    pub save_enabled: bool,
    pub cancel_enabled: bool,
    /// Show the busy indicator on the save control
    pub saving: bool,
    pub loading: bool,
    /// Blocking notice shown instead of the form
    pub notice: Option<String>,
    pub fields: Vec<FieldView>,
    pub logo: LogoView,
    pub social_links: SocialLinksView,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: ProfileField,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoView {
    /// Inline image source for the displayed logo
    pub source: Option<String>,
    pub dimensions: Option<(u32, u32)>,
    pub pending: bool,
    pub save_enabled: bool,
    pub cancel_enabled: bool,
    pub uploading: bool,
    pub confirm_discard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinksView {
    pub rows: Vec<SocialLinkRow>,
    pub form: SocialLinkFormView,
    pub pending_delete: Option<NetworkType>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkRow {
    pub network: NetworkType,
    /// Value as displayed (WhatsApp without its country prefix)
    pub display_value: String,
    pub deleting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkFormView {
    pub network: Option<NetworkType>,
    pub value: String,
    pub editing: bool,
    /// Networks offered in the selector
    pub networks: Vec<NetworkType>,
    pub placeholder: &'static str,
    pub save_enabled: bool,
    pub saving: bool,
}

pub fn profile_view(state: &State) -> ProfileView {
    let profile = &state.domains.profile;
    let has_record = profile.original.is_some();
    let busy = profile.saving || profile.loading;

    let notice = match &profile.availability {
        Availability::Missing => Some(NO_PROFILE_NOTICE.to_string()),
        Availability::Failed(err) => {
            Some(format!("The company profile could not be loaded: {err}"))
        }
        Availability::Unknown | Availability::Loaded => None,
    };

    let fields = ProfileField::ALL
        .into_iter()
        .map(|field| FieldView {
            field,
            label: field.to_string(),
            value: profile.draft.get(field).to_string(),
            required: field.is_required(),
            error: profile.field_errors.get(&field).map(|e| e.to_string()),
        })
        .collect();

    let logo = &profile.logo;
    let logo_view = LogoView {
        source: logo.displayed.as_ref().map(|l| l.to_data_uri()),
        dimensions: logo.displayed.as_ref().and_then(|l| l.dimensions()),
        pending: logo.is_pending(),
        save_enabled: has_record && logo.is_pending() && !logo.uploading,
        cancel_enabled: logo.is_pending() && !logo.uploading,
        uploading: logo.uploading,
        confirm_discard: logo.confirm_discard,
    };

    ProfileView {
        read_only: !profile.is_editing(),
        edit_enabled: has_record && !profile.is_editing() && !busy,
        save_enabled: profile.is_editing()
            && profile.has_changes
            && !profile.saving,
        cancel_enabled: profile.is_editing() && !profile.saving,
        saving: profile.saving,
        loading: profile.loading,
        notice,
        fields,
        logo: logo_view,
        social_links: social_links_view(state),
        palette: state.theme.palette(),
    }
}

pub fn social_links_view(state: &State) -> SocialLinksView {
    let social = &state.domains.social_links;

    let rows = social
        .links
        .values()
        .map(|link| SocialLinkRow {
            network: link.network,
            display_value: validation::from_wire_value(
                link.network,
                &link.value,
                &social.whatsapp_prefix,
            ),
            deleting: social.deleting == Some(link.network),
        })
        .collect();

    let form = &social.form;
    // Picking another network while editing starts a new entry
    let networks = match form.network {
        Some(current) if form.is_editing() => NetworkType::ALL
            .into_iter()
            .filter(|n| *n == current || social.get(*n).is_none())
            .collect(),
        _ => social.available_networks(),
    };
    let placeholder = match form.network {
        Some(NetworkType::Whatsapp) => "10-digit phone number",
        Some(_) => "https://",
        None => "Select a network",
    };

    SocialLinksView {
        rows,
        form: SocialLinkFormView {
            network: form.network,
            value: form.value.clone(),
            editing: form.is_editing(),
            networks,
            placeholder,
            save_enabled: form.network.is_some()
                && !form.value.trim().is_empty()
                && (social.loaded || form.is_editing())
                && !social.saving,
            saving: social.saving,
        },
        pending_delete: social.pending_delete,
        loading: social.loading,
    }
}
