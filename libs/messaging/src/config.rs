use secrecy::SecretString;
use serde::Deserialize;

/// MessagingConfig は Kafka クラスタ接続設定を表す。
#[derive(Debug, Clone, Deserialize)]
pub struct MessagingConfig {
    /// Kafka ブローカーアドレスのリスト（例: ["pkc-xxxxx.eu-central-1.aws.confluent.cloud:9092"]）
    pub brokers: Vec<String>,
    /// セキュリティプロトコル（SASL_SSL / SASL_PLAINTEXT / PLAINTEXT）
    #[serde(default = "default_security_protocol")]
    pub security_protocol: String,
    /// SASL 認証メカニズム
    #[serde(default = "default_sasl_mechanism")]
    pub sasl_mechanism: String,
    /// SASL ユーザー名（クラスタ API キー）
    pub sasl_username: String,
    /// SASL パスワード（クラスタ API シークレット）
    pub sasl_password: SecretString,
    /// メッセージ配信タイムアウト（ミリ秒）
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

fn default_security_protocol() -> String {
    "SASL_SSL".to_string()
}

fn default_sasl_mechanism() -> String {
    "PLAIN".to_string()
}

fn default_message_timeout_ms() -> u64 {
    30000
}

impl MessagingConfig {
    /// SASL/PLAIN 認証付きの設定を既定値で生成する。
    pub fn sasl_plain(
        brokers: Vec<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            brokers,
            security_protocol: default_security_protocol(),
            sasl_mechanism: default_sasl_mechanism(),
            sasl_username: username.into(),
            sasl_password: password,
            message_timeout_ms: default_message_timeout_ms(),
        }
    }

    /// ブローカーアドレスをカンマ区切り文字列で返す（rdkafka 用）。
    pub fn brokers_string(&self) -> String {
        self.brokers.join(",")
    }
}
