use secrecy::SecretString;

use tempcast_messaging::MessagingConfig;

const ENV_BOOTSTRAP_ENDPOINT: &str = "CLUSTER_BOOTSTRAP_ENDPOINT";
const ENV_KAFKA_API_KEY: &str = "PRODUCER_KAFKA_API_KEY";
const ENV_KAFKA_API_SECRET: &str = "PRODUCER_KAFKA_API_SECRET";
const ENV_TOPIC_NAME: &str = "TOPIC_NAME";

fn default_flush_timeout_secs() -> u64 {
    10
}

/// ConfigError は設定の読み込み失敗を表す。
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVariable(&'static str),
}

/// ProducerConfig はプロデューサーファンクションの設定を表す。
/// 呼び出しごとに 1 度だけ構築し、ハンドラへ注入する。
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    pub messaging: MessagingConfig,
    /// 発行先トピック名
    pub topic: String,
    /// 保留配信の払い出し上限（秒）
    pub flush_timeout_secs: u64,
}

impl ProducerConfig {
    /// プロセス環境変数から設定を構築する。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のルックアップ関数から設定を構築する（テスト注入用）。
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = require(&lookup, ENV_BOOTSTRAP_ENDPOINT)?;
        let api_key = require(&lookup, ENV_KAFKA_API_KEY)?;
        let api_secret = require(&lookup, ENV_KAFKA_API_SECRET)?;
        let topic = require(&lookup, ENV_TOPIC_NAME)?;

        let brokers = endpoint.split(',').map(str::to_string).collect();
        Ok(Self {
            messaging: MessagingConfig::sasl_plain(
                brokers,
                api_key,
                SecretString::new(api_secret),
            ),
            topic,
            flush_timeout_secs: default_flush_timeout_secs(),
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVariable(key))
}
