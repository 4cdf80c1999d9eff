//! Terminal front end over the admin runtime.
//!
//! Each invocation mounts the views, replays the user's intent as view
//! messages and prints the resulting view and notifications.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, console::Term};
use log::debug;
use storefront_admin::app::{AppConfig, Runtime};
use storefront_admin::common::messages::DomainMessage;
use storefront_admin::common::notifications::NotificationLevel;
use storefront_admin::domains::profile::ProfileMessage;
use storefront_admin::domains::profile::state::LogoFile;
use storefront_admin::domains::social_links::SocialLinksMessage;
use storefront_admin::infra::api_client::ApiClient;
use storefront_admin::infra::config::Config;
use storefront_admin::infra::services::Services;
use storefront_admin::state::State;
use storefront_admin::view::{self, ProfileView, SocialLinksView};
use storefront_model::{LogoMime, NetworkType, ProfileField};

#[derive(Parser, Debug)]
#[command(name = "storefront-admin")]
#[command(about = "Manage the storefront company profile and social links")]
pub struct Cli {
    /// Backend base URL (overrides config and STOREFRONT_SERVER_URL)
    #[arg(long)]
    server: Option<String>,

    /// Bearer token for the backend
    #[arg(long)]
    token: Option<String>,

    /// Answer yes to confirmation prompts
    #[arg(short, long, default_value_t = false)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Company profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Social network links
    #[command(subcommand)]
    Social(SocialCommand),
    /// Write --server and --token to the config file
    SaveConfig,
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// Print the profile and its social links
    Show,
    /// Change one or more fields, e.g. `--set phone=5512345678`
    Edit {
        #[arg(
            long = "set",
            value_name = "FIELD=VALUE",
            value_parser = parse_assignment,
            required = true
        )]
        assignments: Vec<(ProfileField, String)>,
    },
    /// Replace the logo with a PNG or JPEG file
    Logo { path: PathBuf },
}

#[derive(Debug, Subcommand)]
enum SocialCommand {
    /// List registered links
    List,
    /// Register a link for a network without one
    Add { network: NetworkType, value: String },
    /// Change the value of a registered link
    Edit { network: NetworkType, value: String },
    /// Remove a registered link
    Delete { network: NetworkType },
}

fn parse_assignment(raw: &str) -> Result<(ProfileField, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let field = ProfileField::from_key(key.trim()).ok_or_else(|| {
        let known: Vec<&str> =
            ProfileField::ALL.iter().map(|f| f.key()).collect();
        format!("unknown field '{}' (one of: {})", key, known.join(", "))
    })?;
    Ok((field, value.to_string()))
}

/// Prints notifications as they arrive and remembers which were shown.
#[derive(Debug)]
struct Session {
    runtime: Runtime,
    last_seen: u64,
    assume_yes: bool,
}

impl Session {
    async fn dispatch(
        &mut self,
        message: impl Into<DomainMessage>,
    ) {
        self.runtime.dispatch(message).await;
    }

    fn state(&self) -> &State {
        self.runtime.state()
    }

    /// Print unseen notifications; fails when any of them is an error.
    fn flush_feedback(&mut self) -> anyhow::Result<()> {
        let mut failure = None;
        for notification in self
            .runtime
            .state()
            .notifications
            .iter()
            .filter(|n| n.id > self.last_seen)
        {
            eprintln!("[{}] {}", notification.level, notification.message);
            if notification.level == NotificationLevel::Error {
                failure = Some(notification.message.clone());
            }
        }
        if let Some(latest) = self.runtime.state().notifications.latest() {
            self.last_seen = self.last_seen.max(latest.id);
        }
        match failure {
            Some(message) => bail!(message),
            None => Ok(()),
        }
    }

    fn confirm(&self, prompt: &str) -> anyhow::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_on(&Term::stderr())?)
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::SaveConfig => save_config(cli.server, cli.token),
        Command::Profile(command) => {
            let mut session = open_session(cli.server, cli.token, cli.yes).await?;
            run_profile(&mut session, command).await
        }
        Command::Social(command) => {
            let mut session = open_session(cli.server, cli.token, cli.yes).await?;
            run_social(&mut session, command).await
        }
    }
}

async fn open_session(
    server: Option<String>,
    token: Option<String>,
    assume_yes: bool,
) -> anyhow::Result<Session> {
    let mut config = AppConfig::from_environment();
    if let Some(server) = server {
        config.server_url = server;
    }
    if let Some(token) = token {
        config.api_token = Some(token);
    }

    let client = Arc::new(ApiClient::new(
        &config.server_url,
        config.request_timeout,
    )?);
    client.set_token(config.api_token.clone()).await;

    let mut session = Session {
        runtime: Runtime::new(
            State::new(&config),
            Services::from_client(client),
        ),
        last_seen: 0,
        assume_yes,
    };
    session.runtime.mount().await;
    session.flush_feedback()?;
    Ok(session)
}

/// Store connection overrides in the config file for later runs.
fn save_config(
    server: Option<String>,
    token: Option<String>,
) -> anyhow::Result<()> {
    let path = Config::default_path()
        .context("No configuration directory on this platform")?;
    let mut config = Config::load_file(&path);
    config.set_connection(server, token);
    config
        .save_to(&path)
        .with_context(|| format!("Could not write {}", path.display()))?;
    eprintln!("Saved configuration to {}", path.display());
    Ok(())
}

async fn run_profile(
    session: &mut Session,
    command: ProfileCommand,
) -> anyhow::Result<()> {
    match command {
        ProfileCommand::Show => {
            print_profile(&view::profile_view(session.state()));
            Ok(())
        }
        ProfileCommand::Edit { assignments } => {
            session.dispatch(ProfileMessage::StartEditing).await;
            session.flush_feedback()?;
            if !session.state().domains.profile.is_editing() {
                bail!("The company profile cannot be edited right now");
            }

            for (field, value) in assignments {
                session
                    .dispatch(ProfileMessage::UpdateField(field, value))
                    .await;
            }
            if !session.state().domains.profile.has_changes {
                session.dispatch(ProfileMessage::CancelEditing).await;
                println!("Nothing to save; values are unchanged");
                return Ok(());
            }

            session.dispatch(ProfileMessage::SubmitForm).await;
            let errors: Vec<String> = session
                .state()
                .domains
                .profile
                .field_errors
                .values()
                .map(ToString::to_string)
                .collect();
            if !errors.is_empty() {
                for error in &errors {
                    eprintln!("  - {error}");
                }
                session.dispatch(ProfileMessage::CancelEditing).await;
                bail!(
                    "{} field(s) are invalid; nothing was saved",
                    errors.len()
                );
            }
            session.flush_feedback()?;
            print_profile(&view::profile_view(session.state()));
            Ok(())
        }
        ProfileCommand::Logo { path } => {
            let file = read_logo_file(&path)?;
            let file_name = file.file_name.clone();
            session.dispatch(ProfileMessage::SelectLogo(file)).await;
            session.flush_feedback()?;
            let preview = view::profile_view(session.state()).logo;
            if !preview.pending {
                bail!("{file_name} was not accepted as the logo");
            }
            if let Some((width, height)) = preview.dimensions {
                println!("Selected {file_name} ({width}x{height})");
            }

            let prompt = format!("Upload {file_name} as the new logo?");
            if !session.confirm(&prompt)? {
                session.dispatch(ProfileMessage::RequestDiscardLogo).await;
                session.dispatch(ProfileMessage::ConfirmDiscardLogo).await;
                println!("Logo change discarded");
                return Ok(());
            }
            session.dispatch(ProfileMessage::SaveLogo).await;
            session.flush_feedback()
        }
    }
}

fn read_logo_file(path: &Path) -> anyhow::Result<LogoFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mime = LogoMime::sniff(&bytes)
        .map(|mime| mime.as_str().to_string())
        .or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| LogoMime::parse(&format!("image/{ext}")).ok())
                .map(|mime| mime.as_str().to_string())
        })
        .unwrap_or_else(|| "application/octet-stream".to_string());
    debug!("Detected {} for {}", mime, path.display());

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "logo".to_string());
    Ok(LogoFile {
        file_name,
        mime,
        bytes,
    })
}

async fn run_social(
    session: &mut Session,
    command: SocialCommand,
) -> anyhow::Result<()> {
    match command {
        SocialCommand::List => {}
        SocialCommand::Add { network, value } => {
            session
                .dispatch(SocialLinksMessage::SelectNetwork(network))
                .await;
            session.dispatch(SocialLinksMessage::UpdateValue(value)).await;
            session.dispatch(SocialLinksMessage::Save).await;
            session.flush_feedback()?;
            if session.state().domains.social_links.get(network).is_none() {
                bail!("{network} link was not added");
            }
        }
        SocialCommand::Edit { network, value } => {
            session.dispatch(SocialLinksMessage::Edit(network)).await;
            if !session.state().domains.social_links.form.is_editing() {
                bail!("No {network} link is registered");
            }
            session.dispatch(SocialLinksMessage::UpdateValue(value)).await;
            session.dispatch(SocialLinksMessage::Save).await;
            session.flush_feedback()?;
            if session.state().domains.social_links.form.is_editing() {
                bail!("{network} link was not updated");
            }
        }
        SocialCommand::Delete { network } => {
            session
                .dispatch(SocialLinksMessage::RequestDelete(network))
                .await;
            if session.state().domains.social_links.pending_delete.is_none() {
                bail!("No {network} link is registered");
            }
            if !session.confirm(&format!("Delete the {network} link?"))? {
                session.dispatch(SocialLinksMessage::DismissDelete).await;
                println!("Nothing deleted");
                return Ok(());
            }
            session.dispatch(SocialLinksMessage::ConfirmDelete).await;
            session.flush_feedback()?;
        }
    }
    print_social_links(&view::social_links_view(session.state()));
    Ok(())
}

fn print_profile(view: &ProfileView) {
    if let Some(notice) = &view.notice {
        println!("{notice}");
        return;
    }
    for field in &view.fields {
        let marker = if field.required { "*" } else { " " };
        println!("{marker} {:<18} {}", field.label, field.value);
    }
    match (&view.logo.source, view.logo.dimensions) {
        (Some(_), Some((width, height))) => {
            println!("  {:<18} {width}x{height}", "Logo")
        }
        (Some(_), None) => println!("  {:<18} (undecodable)", "Logo"),
        (None, _) => println!("  {:<18} (none)", "Logo"),
    }
    println!();
    print_social_links(&view.social_links);
}

fn print_social_links(view: &SocialLinksView) {
    if view.rows.is_empty() {
        println!("No social links registered");
        return;
    }
    for row in &view.rows {
        println!("  {:<10} {}", row.network.to_string(), row.display_value);
    }
}
