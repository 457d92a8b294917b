use alias_aggregator::{Aggregator, Config};

use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::default();
    let aggregator = match Aggregator::new(config) {
        Ok(aggregator) => aggregator,
        Err(err) => {
            error!(%err, "could not build aggregator");
            return;
        }
    };

    // Failures are terminal log messages, not exit codes; a scheduler rerun
    // is the only recovery path either way.
    if let Err(err) = aggregator.run().await {
        error!(%err, "aggregation aborted");
    }
}
