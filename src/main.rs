//! newsdigest - Entry point for the daily digest run

use newsdigest::config::EnvFile;
use newsdigest::services::RunOutcome;
use newsdigest::telemetry::Telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Real environment values take precedence over .env
    let env_file = EnvFile::load();

    let _telemetry = Telemetry::init();
    env_file.log();

    tracing::info!("Starting newsdigest");

    match newsdigest::run().await {
        Ok(RunOutcome::Sent { articles, .. }) => {
            tracing::info!(articles, "Digest delivered");
            Ok(())
        }
        Ok(RunOutcome::NothingToSend) => Ok(()),
        Err(e) => {
            tracing::error!("Major failure: {}", e);
            Err(e.into())
        }
    }
}
