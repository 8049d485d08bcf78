use tempcast_messaging::MessagingError;

use crate::config::ConfigError;

/// ProducerError はプロデューサーファンクション呼び出しの失敗を表す。
#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("event serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("messaging error: {0}")]
    Messaging(#[from] MessagingError),
}
