use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use tempcast_invocation::{read_event, InvocationContext};
use tempcast_messaging::KafkaEventProducer;
use tempcast_producer::config::ProducerConfig;
use tempcast_producer::handler::ProducerHandler;
use tempcast_telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let telemetry_cfg = TelemetryConfig::from_env("tempcast-producer");
    init_telemetry(&telemetry_cfg).expect("failed to init telemetry");

    let cfg = ProducerConfig::from_env()?;
    let producer = KafkaEventProducer::new(&cfg.messaging)?;
    let handler = ProducerHandler::new(
        Arc::new(producer),
        cfg.topic.clone(),
        Duration::from_secs(cfg.flush_timeout_secs),
    );

    let context = InvocationContext::new("tempcast-producer");
    let event = read_event(std::io::stdin().lock())?;
    info!(
        request_id = %context.request_id,
        topic = %cfg.topic,
        "invocation started"
    );

    handler.handle(&event, &context).await?;
    Ok(())
}
