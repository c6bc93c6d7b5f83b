use anyhow::Context;

use contact_relay::config::get_configuration;
use contact_relay::startup::AppServer;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber(
        "contact-relay".into(),
        "info".into(),
        std::io::stdout,
    ));

    let configuration = get_configuration().context("Failed to load configuration")?;
    let server = AppServer::build(configuration)
        .await
        .context("Failed to build the server")?;

    server.run_until_stopped().await?;

    Ok(())
}
