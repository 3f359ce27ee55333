use anyhow::{Context, Result};
use showcase_client::{resolve_data_dir, ApiClient, ClientConfig, CredentialStore};

use crate::args::{Cli, Commands};
use crate::handlers;
use crate::logging;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let config_path = ClientConfig::default_path(&data_dir);
    let config = ClientConfig::load_from(&config_path)?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());

    let credentials = CredentialStore::new(&data_dir);
    let client = ApiClient::new(api_url.clone(), credentials);

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;

    match cli.command {
        Some(Commands::Health) => runtime.block_on(handlers::health::handle(&client, &api_url)),
        None => {
            // Logging goes to a file only once we know the terminal is
            // about to be taken over by the TUI.
            logging::init(&data_dir, &cli.log_level)?;
            tracing::info!(%api_url, "starting session");
            handlers::session::handle(runtime, client)
        }
    }
}
