//! nomad-preview - render a registration burst through the real delivery path.
//!
//! Loads a server configuration, registers a local client, and writes the lines
//! it would receive on connect and on joining `#lobby` to stdout.

use nomad_ircd::config::Config;
use nomad_ircd::{Channel, Client, Mailboxes, Reply, Server, UserModes, Writer, mailbox};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const PREVIEW_CONN: &str = "preview";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries protocol lines only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load_validated(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        server = %config.server.name,
        version = %config.server.version,
        queue_capacity = config.delivery.queue_capacity,
        "Starting nomad-preview"
    );

    let server = Arc::new(Server::from_config(&config.server));
    let client = Client::new("preview", "preview", "localhost")
        .with_realname("nomad preview")
        .with_modes(UserModes {
            invisible: true,
            ..Default::default()
        })
        .into_shared();

    let mut lobby = Channel::new("#lobby", Arc::clone(&server));

    let mailboxes = Mailboxes::new();
    let (tx, rx) = mailbox(config.delivery.queue_capacity);
    mailboxes.register(PREVIEW_CONN, tx);
    let writer = Writer::new(PREVIEW_CONN, rx, Arc::clone(&client), tokio::io::stdout()).spawn();

    // Snapshot for construction; the writer reads the shared client itself
    let me = client.read().clone();

    let burst = [
        Reply::rpl_welcome(&*server, &me),
        Reply::rpl_your_host(&server),
        Reply::rpl_created(&server),
        Reply::rpl_my_info(&server),
        Reply::rpl_umode_is(&server, &me),
    ];
    for reply in burst {
        mailboxes.send_to(PREVIEW_CONN, reply).await?;
    }

    lobby.add_member(me.nick.clone());
    let members = [PREVIEW_CONN];
    let joined = mailboxes.broadcast(members, Reply::rpl_join(&lobby, &me));
    if !joined.full.is_empty() {
        warn!(full = ?joined.full, "Join not delivered to every member");
    }

    let topic = match lobby.topic {
        Some(_) => Reply::rpl_topic(&lobby),
        None => Reply::rpl_no_topic(&lobby),
    };
    mailboxes.send_to(PREVIEW_CONN, topic).await?;
    mailboxes
        .send_to(PREVIEW_CONN, Reply::rpl_nam_reply(&lobby))
        .await?;
    mailboxes
        .send_to(PREVIEW_CONN, Reply::rpl_end_of_names(&*server, &lobby.name))
        .await?;

    // Closing the last sender lets the writer drain and exit
    mailboxes.unregister(PREVIEW_CONN);

    let written = writer.await??;
    info!(written, "Preview complete");

    Ok(())
}
