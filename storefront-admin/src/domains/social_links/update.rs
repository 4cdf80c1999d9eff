//! Social links update handlers

use log::{debug, error, info, warn};
use storefront_contracts::SocialLinkRequest;
use storefront_model::{NetworkType, SocialLink, SocialLinkId};

use super::messages::SocialLinksMessage;
use super::validation::{self, SocialLinkError};
use crate::common::messages::{
    ApiRequest, CrossDomainEvent, DomainUpdateResult, Task,
};
use crate::state::State;

/// Main message handler for the social links manager
pub fn handle_message(
    state: &mut State,
    message: SocialLinksMessage,
) -> DomainUpdateResult {
    debug!("Social links update: {}", message.name());

    match message {
        SocialLinksMessage::Load => handle_load(state),
        SocialLinksMessage::Loaded(result) => handle_loaded(state, result),

        // Form
        SocialLinksMessage::SelectNetwork(network) => {
            handle_select_network(state, network)
        }
        SocialLinksMessage::UpdateValue(raw) => handle_update_value(state, raw),
        SocialLinksMessage::Save => handle_save(state),
        SocialLinksMessage::Created(result) => handle_created(state, result),
        SocialLinksMessage::Updated(result) => handle_updated(state, result),
        SocialLinksMessage::Edit(network) => handle_edit(state, network),
        SocialLinksMessage::CancelEdit => {
            state.domains.social_links.form.reset();
            DomainUpdateResult::none()
        }

        // Delete
        SocialLinksMessage::RequestDelete(network) => {
            handle_request_delete(state, network)
        }
        SocialLinksMessage::ConfirmDelete => handle_confirm_delete(state),
        SocialLinksMessage::DismissDelete => {
            state.domains.social_links.pending_delete = None;
            DomainUpdateResult::none()
        }
        SocialLinksMessage::Deleted(result) => handle_deleted(state, result),
    }
}

fn handle_load(state: &mut State) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    if social.loading {
        debug!("Social links fetch already in flight");
        return DomainUpdateResult::none();
    }
    social.loading = true;
    DomainUpdateResult::task(Task::request(ApiRequest::FetchSocialLinks))
}

fn handle_loaded(
    state: &mut State,
    result: Result<Vec<SocialLink>, String>,
) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    social.loading = false;

    match result {
        Ok(links) => {
            info!("Loaded {} social links", links.len());
            social.replace_all(links);
            social.loaded = true;
            DomainUpdateResult::none()
        }
        Err(err) => {
            error!("Failed to load social links: {}", err);
            DomainUpdateResult::event(CrossDomainEvent::error(format!(
                "Could not load social links: {err}"
            )))
        }
    }
}

fn handle_select_network(
    state: &mut State,
    network: NetworkType,
) -> DomainUpdateResult {
    let form = &mut state.domains.social_links.form;
    if let Some(id) = form.editing.take() {
        debug!("Leaving edit of link {}; {} starts a new entry", id, network);
    }
    form.network = Some(network);
    form.value.clear();
    DomainUpdateResult::none()
}

fn handle_update_value(state: &mut State, raw: String) -> DomainUpdateResult {
    let form = &mut state.domains.social_links.form;
    form.value = validation::constrain_input(form.network, raw);
    DomainUpdateResult::none()
}

fn handle_save(state: &mut State) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    if social.saving {
        debug!("Social link save already in flight");
        return DomainUpdateResult::none();
    }
    if !social.loaded && !social.form.is_editing() {
        warn!("Refusing to add a social link before the collection loaded");
        return DomainUpdateResult::event(CrossDomainEvent::warning(
            SocialLinkError::NotLoaded.to_string(),
        ));
    }

    let network =
        match validation::validate_before_save(&social.form, &social.links) {
            Ok(network) => network,
            Err(err) => {
                debug!("Social link rejected: {}", err);
                return DomainUpdateResult::event(CrossDomainEvent::warning(
                    err.to_string(),
                ));
            }
        };

    let request = SocialLinkRequest {
        network,
        value: validation::to_wire_value(
            network,
            &social.form.value,
            &social.whatsapp_prefix,
        ),
    };

    social.saving = true;
    let api_request = match social.form.editing.clone() {
        Some(id) => ApiRequest::UpdateSocialLink { id, request },
        None => ApiRequest::CreateSocialLink(request),
    };
    DomainUpdateResult::task(Task::request(api_request))
}

fn handle_created(
    state: &mut State,
    result: Result<SocialLink, String>,
) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    social.saving = false;

    match result {
        Ok(link) => {
            let network = link.network;
            info!("Created {} link {}", network, link.id);
            social.links.insert(network, link);
            social.form.reset();
            DomainUpdateResult::event(CrossDomainEvent::success(format!(
                "{network} added"
            )))
        }
        Err(err) => {
            error!("Failed to create social link: {}", err);
            DomainUpdateResult::event(CrossDomainEvent::error(format!(
                "Could not add the social link: {err}"
            )))
        }
    }
}

fn handle_updated(
    state: &mut State,
    result: Result<(SocialLinkId, SocialLinkRequest), String>,
) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    social.saving = false;

    let (id, request) = match result {
        Ok(acknowledged) => acknowledged,
        Err(err) => {
            error!("Failed to update social link: {}", err);
            return DomainUpdateResult::event(CrossDomainEvent::error(
                format!("Could not update the social link: {err}"),
            ));
        }
    };

    let network = request.network;
    match social.links.get_mut(&network) {
        Some(link) if link.id == id => {
            link.merge_update(network, request.value);
        }
        _ => {
            warn!("Updated social link {} is not in the local registry", id);
        }
    }

    social.form.reset();
    info!("Updated {} link {}", network, id);
    DomainUpdateResult::event(CrossDomainEvent::success(format!(
        "{network} updated"
    )))
}

fn handle_edit(state: &mut State, network: NetworkType) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    let Some(link) = social.links.get(&network) else {
        warn!("No {} link registered to edit", network);
        return DomainUpdateResult::none();
    };

    social.form.editing = Some(link.id.clone());
    social.form.network = Some(network);
    social.form.value = validation::from_wire_value(
        network,
        &link.value,
        &social.whatsapp_prefix,
    );
    DomainUpdateResult::none()
}

fn handle_request_delete(
    state: &mut State,
    network: NetworkType,
) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    if !social.links.contains_key(&network) {
        warn!("No {} link registered to delete", network);
        return DomainUpdateResult::none();
    }
    social.pending_delete = Some(network);
    DomainUpdateResult::none()
}

fn handle_confirm_delete(state: &mut State) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    if social.deleting.is_some() {
        debug!("Delete already in flight");
        return DomainUpdateResult::none();
    }
    let Some(network) = social.pending_delete.take() else {
        debug!("Delete confirmed without a pending request");
        return DomainUpdateResult::none();
    };
    let Some(link) = social.links.get(&network) else {
        return DomainUpdateResult::none();
    };

    let id = link.id.clone();
    social.deleting = Some(network);
    DomainUpdateResult::task(Task::request(ApiRequest::DeleteSocialLink {
        id,
        network,
    }))
}

fn handle_deleted(
    state: &mut State,
    result: Result<NetworkType, String>,
) -> DomainUpdateResult {
    let social = &mut state.domains.social_links;
    social.deleting = None;

    match result {
        Ok(network) => {
            if let Some(removed) = social.links.remove(&network) {
                if social.form.editing.as_ref() == Some(&removed.id) {
                    social.form.reset();
                }
                info!("Deleted {} link {}", network, removed.id);
            }
            DomainUpdateResult::event(CrossDomainEvent::success(format!(
                "{network} removed"
            )))
        }
        Err(err) => {
            error!("Failed to delete social link: {}", err);
            DomainUpdateResult::event(CrossDomainEvent::error(format!(
                "Could not delete the social link: {err}"
            )))
        }
    }
}
