use std::sync::Arc;

use tracing::info;

use tempcast_invocation::{read_event, InvocationContext};
use tempcast_sink::config::SinkConfig;
use tempcast_sink::handler::SinkHandler;
use tempcast_telemetry::{init_telemetry, TelemetryConfig};
use tempcast_weather::{OpenWeatherClient, WeatherClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let telemetry_cfg = TelemetryConfig::from_env("tempcast-sink");
    init_telemetry(&telemetry_cfg).expect("failed to init telemetry");

    let cfg = SinkConfig::from_env();
    let weather: Option<Arc<dyn WeatherClient>> = match cfg.weather {
        Some(weather_cfg) => Some(Arc::new(OpenWeatherClient::new(weather_cfg)?)),
        None => None,
    };
    let handler = SinkHandler::new(weather);

    let context = InvocationContext::new("tempcast-sink");
    let event = read_event(std::io::stdin().lock())?;
    info!(request_id = %context.request_id, "invocation started");

    handler.handle(&event, &context).await?;
    Ok(())
}
