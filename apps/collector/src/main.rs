//! Shop snapshot collector entry point.

mod config;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use shopsnap_protocol::messages::LoginRequest;
use shopsnap_session::ShopSession;
use shopsnap_snapshot::Orchestrator;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "shopsnap.toml".into());
    let config = config::Config::load(Path::new(&config_path))?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        archive = %config.archive_dir.display(),
        "starting shop snapshot"
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(config))?;

    tracing::info!("snapshot complete");
    Ok(())
}

async fn run(config: config::Config) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(config.archive_dir, config.rules);
    // Check the archive precondition before touching the network.
    orchestrator.ensure_archive_absent().await?;

    let login = LoginRequest {
        username: config.username,
        password_hash: config.password_hash,
        start_room: config.start_room,
    };
    let session = ShopSession::connect(&config.server_url, login).await?;

    orchestrator.run(session).await?;
    Ok(())
}
