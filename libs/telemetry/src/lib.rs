//! tempcast-telemetry: tracing-subscriber 初期化ライブラリ。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// TelemetryConfig は telemetry ライブラリの初期化設定を保持する。
pub struct TelemetryConfig {
    pub service_name: String,
    pub log_level: String,
    /// ログ出力フォーマット。"text" の場合はプレーンテキスト、それ以外は JSON。
    pub log_format: String,
}

impl TelemetryConfig {
    /// 環境変数 LOG_LEVEL / LOG_FORMAT を反映した設定を生成する。
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
        }
    }
}

/// init_telemetry は tracing-subscriber を初期化する。
pub fn init_telemetry(cfg: &TelemetryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::new(&cfg.log_level);
    let registry = tracing_subscriber::registry().with(filter);

    if cfg.log_format == "text" {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    } else {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()?;
    }

    tracing::info!(service = %cfg.service_name, "telemetry initialized");
    Ok(())
}
