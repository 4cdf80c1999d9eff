//! Performs the backend calls handlers ask for and feeds the outcomes back
//! through `update` until no work remains.

use std::collections::VecDeque;

use futures::future::join_all;
use log::debug;

use crate::app::bootstrap;
use crate::common::messages::{ApiRequest, DomainMessage, Task};
use crate::domains::profile::ProfileMessage;
use crate::domains::social_links::SocialLinksMessage;
use crate::infra::services::Services;
use crate::state::State;
use crate::update::update;

/// Perform a single request and map its outcome to the result message the
/// owning domain expects.
pub async fn perform(services: &Services, request: ApiRequest) -> DomainMessage {
    debug!("Performing {}", request.name());

    match request {
        ApiRequest::FetchProfile => ProfileMessage::Loaded(
            services
                .profile
                .fetch_profile()
                .await
                .map_err(|e| e.to_string()),
        )
        .into(),
        ApiRequest::UpdateProfile { id, request } => {
            ProfileMessage::SaveResult(
                services
                    .profile
                    .update_profile(&id, &request)
                    .await
                    .map_err(|e| e.to_string()),
            )
            .into()
        }
        ApiRequest::UploadLogo { id, file } => ProfileMessage::LogoSaveResult(
            services
                .profile
                .upload_logo(&id, file)
                .await
                .map_err(|e| e.to_string()),
        )
        .into(),
        ApiRequest::FetchSocialLinks => SocialLinksMessage::Loaded(
            services
                .social_links
                .list_links()
                .await
                .map_err(|e| e.to_string()),
        )
        .into(),
        ApiRequest::CreateSocialLink(request) => SocialLinksMessage::Created(
            services
                .social_links
                .create_link(&request)
                .await
                .map_err(|e| e.to_string()),
        )
        .into(),
        ApiRequest::UpdateSocialLink { id, request } => {
            let result = services
                .social_links
                .update_link(&id, &request)
                .await
                .map(|()| (id, request))
                .map_err(|e| e.to_string());
            SocialLinksMessage::Updated(result).into()
        }
        ApiRequest::DeleteSocialLink { id, network } => {
            SocialLinksMessage::Deleted(
                services
                    .social_links
                    .delete_link(&id)
                    .await
                    .map(|()| network)
                    .map_err(|e| e.to_string()),
            )
            .into()
        }
    }
}

/// Owns the state and drives messages to completion.
#[derive(Debug)]
pub struct Runtime {
    state: State,
    services: Services,
}

impl Runtime {
    pub fn new(state: State, services: Services) -> Self {
        Self { state, services }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn into_state(self) -> State {
        self.state
    }

    /// Fetch both views' data (once)
    pub async fn mount(&mut self) {
        let task = bootstrap::mount(&mut self.state);
        self.run(task).await;
    }

    /// Apply a message and everything it triggers
    pub async fn dispatch(&mut self, message: impl Into<DomainMessage>) {
        let task = update(&mut self.state, message.into());
        self.run(task).await;
    }

    async fn run(&mut self, task: Task) {
        let mut pending: VecDeque<Task> = VecDeque::from([task]);

        while let Some(task) = pending.pop_front() {
            if task.is_none() {
                continue;
            }
            // Requests of one task are independent; run them together.
            let results = join_all(
                task.into_requests()
                    .into_iter()
                    .map(|request| perform(&self.services, request)),
            )
            .await;

            for message in results {
                debug!("Result: {}", message.name());
                pending.push_back(update(&mut self.state, message));
            }
        }
    }
}
