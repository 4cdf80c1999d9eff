use storefront_contracts::{SocialLinkRequest, UpdateProfileRequest};
use storefront_model::{NetworkType, ProfileId, SocialLinkId};

use crate::common::notifications::NotificationLevel;
use crate::domains::profile::{self, state::LogoFile};
use crate::domains::social_links;

/// A backend call requested by an update handler.
///
/// Handlers never talk to the network themselves; the runtime performs
/// these and routes the outcome back as the matching result message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchProfile,
    UpdateProfile {
        id: ProfileId,
        request: UpdateProfileRequest,
    },
    UploadLogo {
        id: ProfileId,
        file: LogoFile,
    },
    FetchSocialLinks,
    CreateSocialLink(SocialLinkRequest),
    UpdateSocialLink {
        id: SocialLinkId,
        request: SocialLinkRequest,
    },
    DeleteSocialLink {
        id: SocialLinkId,
        network: NetworkType,
    },
}

impl ApiRequest {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchProfile => "Api::FetchProfile",
            Self::UpdateProfile { .. } => "Api::UpdateProfile",
            Self::UploadLogo { .. } => "Api::UploadLogo",
            Self::FetchSocialLinks => "Api::FetchSocialLinks",
            Self::CreateSocialLink(_) => "Api::CreateSocialLink",
            Self::UpdateSocialLink { .. } => "Api::UpdateSocialLink",
            Self::DeleteSocialLink { .. } => "Api::DeleteSocialLink",
        }
    }
}

/// Follow-up work produced by an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    requests: Vec<ApiRequest>,
}

impl Task {
    /// No follow-up work
    pub fn none() -> Self {
        Self::default()
    }

    /// A single backend call
    pub fn request(request: ApiRequest) -> Self {
        Self {
            requests: vec![request],
        }
    }

    /// Combine several tasks; the requests are independent of each other
    pub fn batch(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            requests: tasks.into_iter().flat_map(|t| t.requests).collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn requests(&self) -> &[ApiRequest] {
        &self.requests
    }

    pub fn into_requests(self) -> Vec<ApiRequest> {
        self.requests
    }
}

/// Events broadcast by a domain and applied by the root update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossDomainEvent {
    /// Surface transient feedback to the user
    Notify {
        level: NotificationLevel,
        message: String,
    },
}

impl CrossDomainEvent {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Notify {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::Notify {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of a domain update that includes both a task and events to emit
#[derive(Debug, Default)]
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task,
    /// Events to broadcast immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    /// Nothing to do
    pub fn none() -> Self {
        Self::default()
    }

    /// Create a result with just a task
    pub fn task(task: Task) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result carrying a single event
    pub fn event(event: CrossDomainEvent) -> Self {
        Self {
            task: Task::none(),
            events: vec![event],
        }
    }
}

/// The main domain message router
#[derive(Debug, Clone)]
pub enum DomainMessage {
    /// Company profile editor
    Profile(profile::messages::ProfileMessage),

    /// Social links manager
    SocialLinks(social_links::messages::SocialLinksMessage),

    /// Remove a notification before it expires
    DismissNotification(u64),

    Event(CrossDomainEvent),
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Profile(msg) => msg.name(),
            Self::SocialLinks(msg) => msg.name(),
            Self::DismissNotification(_) => "DismissNotification",
            Self::Event(_) => "Event",
        }
    }
}

impl From<profile::messages::ProfileMessage> for DomainMessage {
    fn from(msg: profile::messages::ProfileMessage) -> Self {
        DomainMessage::Profile(msg)
    }
}

impl From<social_links::messages::SocialLinksMessage> for DomainMessage {
    fn from(msg: social_links::messages::SocialLinksMessage) -> Self {
        DomainMessage::SocialLinks(msg)
    }
}

impl From<CrossDomainEvent> for DomainMessage {
    fn from(event: CrossDomainEvent) -> Self {
        DomainMessage::Event(event)
    }
}
