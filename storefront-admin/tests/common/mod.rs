//! Test harness for storefront admin flows
//!
//! Provides an in-memory backend implementing both service traits. Every
//! call is recorded so tests can assert which requests reached the network.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use storefront_admin::app::Runtime;
use storefront_admin::common::notifications::NotificationLevel;
use storefront_admin::domains::profile::state::LogoFile;
use storefront_admin::infra::services::{
    CompanyProfileService, Services, SocialLinkService,
};
use storefront_admin::state::State;
use storefront_contracts::{SocialLinkRequest, UpdateProfileRequest};
use storefront_model::profile::ProfileFields;
use storefront_model::{
    CompanyProfile, NetworkType, ProfileId, SocialLink, SocialLinkId,
};
use tokio::sync::Mutex;

/// 1x1 transparent PNG
pub const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00,
    0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0x64, 0x60, 0xF8, 0x5F,
    0x0F, 0x00, 0x02, 0x87, 0x01, 0x80, 0xEB, 0x47, 0xBA, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchProfile,
    UpdateProfile(ProfileId, UpdateProfileRequest),
    UploadLogo(ProfileId, LogoFile),
    ListLinks,
    CreateLink(SocialLinkRequest),
    UpdateLink(SocialLinkId, SocialLinkRequest),
    DeleteLink(SocialLinkId),
}

impl Call {
    pub fn is_read(&self) -> bool {
        matches!(self, Call::FetchProfile | Call::ListLinks)
    }
}

#[derive(Debug)]
pub struct MockBackend {
    pub profile: Mutex<Option<CompanyProfile>>,
    pub links: Mutex<Vec<SocialLink>>,
    calls: Mutex<Vec<Call>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    next_id: AtomicI64,
}

impl MockBackend {
    pub fn new(
        profile: Option<CompanyProfile>,
        links: Vec<SocialLink>,
    ) -> Arc<Self> {
        Arc::new(Self {
            profile: Mutex::new(profile),
            links: Mutex::new(links),
            calls: Mutex::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            next_id: AtomicI64::new(100),
        })
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent fetch fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    /// Recorded calls other than fetches
    pub async fn writes(&self) -> Vec<Call> {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| !call.is_read())
            .cloned()
            .collect()
    }

    pub async fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().await.iter().filter(|c| pred(c)).count()
    }

    async fn record(&self, call: Call) -> anyhow::Result<()> {
        let is_read = call.is_read();
        self.calls.lock().await.push(call);
        let failing = if is_read {
            &self.fail_reads
        } else {
            &self.fail_writes
        };
        if failing.load(Ordering::SeqCst) {
            anyhow::bail!("backend unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyProfileService for MockBackend {
    async fn fetch_profile(&self) -> anyhow::Result<Option<CompanyProfile>> {
        self.record(Call::FetchProfile).await?;
        Ok(self.profile.lock().await.clone())
    }

    async fn update_profile(
        &self,
        id: &ProfileId,
        request: &UpdateProfileRequest,
    ) -> anyhow::Result<()> {
        self.record(Call::UpdateProfile(id.clone(), request.clone()))
            .await?;
        if let Some(profile) = self.profile.lock().await.as_mut() {
            profile.fields = request.fields.clone();
        }
        Ok(())
    }

    async fn upload_logo(
        &self,
        id: &ProfileId,
        file: LogoFile,
    ) -> anyhow::Result<()> {
        self.record(Call::UploadLogo(id.clone(), file)).await
    }
}

#[async_trait]
impl SocialLinkService for MockBackend {
    async fn list_links(&self) -> anyhow::Result<Vec<SocialLink>> {
        self.record(Call::ListLinks).await?;
        Ok(self.links.lock().await.clone())
    }

    async fn create_link(
        &self,
        request: &SocialLinkRequest,
    ) -> anyhow::Result<SocialLink> {
        self.record(Call::CreateLink(request.clone())).await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let link = SocialLink::new(
            SocialLinkId::new(id),
            request.network,
            request.value.clone(),
        );
        self.links.lock().await.push(link.clone());
        Ok(link)
    }

    async fn update_link(
        &self,
        id: &SocialLinkId,
        request: &SocialLinkRequest,
    ) -> anyhow::Result<()> {
        self.record(Call::UpdateLink(id.clone(), request.clone()))
            .await?;
        let mut links = self.links.lock().await;
        match links.iter_mut().find(|link| &link.id == id) {
            Some(link) => {
                link.merge_update(request.network, request.value.clone());
                Ok(())
            }
            None => anyhow::bail!("social link {id} not found"),
        }
    }

    async fn delete_link(&self, id: &SocialLinkId) -> anyhow::Result<()> {
        self.record(Call::DeleteLink(id.clone())).await?;
        self.links.lock().await.retain(|link| &link.id != id);
        Ok(())
    }
}

/// Runtime wired to the mock backend, already mounted
pub async fn mounted_runtime(backend: &Arc<MockBackend>) -> Runtime {
    let services = Services::new(backend.clone(), backend.clone());
    let mut runtime = Runtime::new(State::default(), services);
    runtime.mount().await;
    runtime
}

pub fn seeded_profile() -> CompanyProfile {
    CompanyProfile {
        id: ProfileId::new(1),
        fields: ProfileFields {
            name: "Ferretería Acme".into(),
            slogan: "Todo para tu obra".into(),
            street_and_number: "Av. Juárez 120".into(),
            locality: "Centro".into(),
            municipality: "Cuauhtémoc".into(),
            state: "CDMX".into(),
            postal_code: "06000".into(),
            country: "México".into(),
            phone: "5512345678".into(),
            email: "ventas@acme.mx".into(),
            website: "https://acme.mx".into(),
            description: "Materiales y herramientas".into(),
        },
        logo: None,
    }
}

pub fn link(id: i64, network: NetworkType, value: &str) -> SocialLink {
    SocialLink::new(SocialLinkId::new(id), network, value.to_string())
}

/// Levels of every queued notification, oldest first
pub fn notification_levels(state: &State) -> Vec<NotificationLevel> {
    state.notifications.iter().map(|n| n.level).collect()
}
