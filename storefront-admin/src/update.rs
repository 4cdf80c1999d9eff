//! Root update: routes messages to their domain and applies the events
//! domains broadcast.

use std::time::Instant;

use log::{debug, error, info, warn};

use crate::common::messages::{CrossDomainEvent, DomainMessage, Task};
use crate::common::notifications::NotificationLevel;
use crate::domains::{profile, social_links};
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task {
    let result = match message {
        DomainMessage::Profile(msg) => profile::update(state, msg),
        DomainMessage::SocialLinks(msg) => social_links::update(state, msg),
        DomainMessage::DismissNotification(id) => {
            if !state.notifications.dismiss(id) {
                debug!("Notification {} already gone", id);
            }
            return Task::none();
        }
        DomainMessage::Event(event) => {
            apply_event(state, event);
            return Task::none();
        }
    };

    for event in result.events {
        apply_event(state, event);
    }
    result.task
}

fn apply_event(state: &mut State, event: CrossDomainEvent) {
    match event {
        CrossDomainEvent::Notify { level, message } => {
            match level {
                NotificationLevel::Error => error!("[notify] {}", message),
                NotificationLevel::Warning => warn!("[notify] {}", message),
                NotificationLevel::Success => info!("[notify] {}", message),
            }
            state.notifications.prune_expired(Instant::now());
            state.notifications.push(level, message);
        }
    }
}
