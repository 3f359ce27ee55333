use anyhow::Result;
use showcase_client::ApiClient;

/// `showcase health` — ping the backend and report the outcome.
pub async fn handle(client: &ApiClient, api_url: &str) -> Result<()> {
    match client.health().await {
        Ok(()) => {
            println!("ok: {}", api_url);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("backend at {} is unreachable: {}", api_url, e)),
    }
}
