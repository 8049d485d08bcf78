use serde::Serialize;

/// EventEnvelope はトピック・キー・ペイロードをラップするメッセージエンベロープ。
#[derive(Debug, Clone)]
pub struct EventEnvelope {
    /// 送信先トピック名
    pub topic: String,
    /// パーティションキー
    pub key: String,
    /// JSON シリアライズされたペイロード
    pub payload: Vec<u8>,
}

impl EventEnvelope {
    /// JSON ペイロードで EventEnvelope を生成する。
    pub fn json<T: Serialize>(
        topic: impl Into<String>,
        key: impl Into<String>,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            topic: topic.into(),
            key: key.into(),
            payload: serde_json::to_vec(payload)?,
        })
    }
}
