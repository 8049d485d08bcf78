/// MessagingError はメッセージング操作に関するエラーを表す。
#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("producer error: {0}")]
    ProducerError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    /// 全ブローカー停止・認証拒否などのクライアント致命エラー。
    /// 個々のメッセージ配信失敗と異なり、呼び出し全体の失敗として伝播させる。
    #[error("broker fatal error: {0}")]
    BrokerFatal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_error_display() {
        let err = MessagingError::ProducerError("queue full".to_string());
        assert!(err.to_string().contains("queue full"));
    }

    #[test]
    fn test_broker_fatal_display() {
        let err = MessagingError::BrokerFatal("all brokers down".to_string());
        assert!(err.to_string().contains("broker fatal"));
        assert!(err.to_string().contains("all brokers down"));
    }
}
