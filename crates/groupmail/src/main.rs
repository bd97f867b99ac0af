//! groupmail - partitions an address list into groups and submits one
//! email per group over a single SMTP session.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use groupmail_core::config::Config;
use groupmail_core::loader::{load_addresses, load_messages};
use groupmail_core::model::Email;
use groupmail_core::partition::Partitioner;
use groupmail_core::service::Mailer;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "config/config.txt";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groupmail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(Path::new(&config_path))?;

    let addresses = load_addresses(&config.victims_file)?;
    let messages = load_messages(&config.messages_file, &config.message_separator)?;
    info!(
        addresses = addresses.len(),
        messages = messages.len(),
        groups = config.group_count,
        "inputs loaded"
    );

    let groups = Partitioner::new()
        .shuffle(config.shuffle)
        .partition(&addresses, config.group_count)?;
    for group in &groups {
        debug!(
            id = group.id(),
            sender = %group.sender(),
            receivers = group.receivers().len(),
            "group formed"
        );
    }

    let mut mailer = Mailer::connect(
        &config.smtp_server_address,
        config.smtp_server_port,
        config.encoding,
    )
    .await?;

    // One message per group, rotating through the templates.
    let mut failure = None;
    for (i, group) in groups.iter().enumerate() {
        let message = messages[i % messages.len()].clone();
        let email = Email::for_group(group, message);
        if let Err(e) = mailer.send(&email).await {
            failure = Some(e);
            break;
        }
    }

    // Best-effort teardown even after a failed send.
    let quit_outcome = mailer.quit().await;
    if let Some(e) = failure {
        return Err(e.into());
    }
    quit_outcome?;

    info!(groups = groups.len(), "all emails submitted");
    Ok(())
}
