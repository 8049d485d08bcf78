use std::time::Duration;

use async_trait::async_trait;

use crate::delivery::{DeliveryHandle, DeliveryReport};
use crate::error::MessagingError;
use crate::event::EventEnvelope;

/// EventProducer は Kafka イベントの発行インターフェース。
///
/// publish はメッセージをエンキューして即座にハンドルを返す。
/// 配信レポートは flush で保留分を払い出した後、ハンドル経由で観測する。
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait EventProducer: Send + Sync {
    /// 単一のイベントをエンキューし、配信レポートのハンドルを返す。
    fn publish(&self, envelope: EventEnvelope) -> Result<DeliveryHandle, MessagingError>;

    /// 保留中の配信を上限付きで払い出す。
    /// 全ブローカー停止・認証拒否は BrokerFatal として返す。
    /// 払い出しのタイムアウト自体は致命エラーとしない。
    async fn flush(&self, timeout: Duration) -> Result<(), MessagingError>;
}

/// NoOpEventProducer はテスト・スタブ用の何もしないプロデューサー実装。
pub struct NoOpEventProducer;

#[async_trait]
impl EventProducer for NoOpEventProducer {
    fn publish(&self, envelope: EventEnvelope) -> Result<DeliveryHandle, MessagingError> {
        Ok(DeliveryHandle::ready(DeliveryReport::Delivered {
            topic: envelope.topic,
            partition: 0,
            offset: 0,
        }))
    }

    async fn flush(&self, _timeout: Duration) -> Result<(), MessagingError> {
        Ok(())
    }
}

/// InMemoryEventProducer はエンキューされたメッセージを記録するテスト用実装。
#[cfg(any(test, feature = "testing"))]
pub struct InMemoryEventProducer {
    messages: std::sync::Mutex<Vec<EventEnvelope>>,
    delivery_failure: Option<String>,
    broker_fatal: Option<String>,
}

#[cfg(any(test, feature = "testing"))]
impl InMemoryEventProducer {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Mutex::new(Vec::new()),
            delivery_failure: None,
            broker_fatal: None,
        }
    }

    /// 全メッセージの配信レポートを Failed にする。
    pub fn with_delivery_failure(reason: impl Into<String>) -> Self {
        Self {
            delivery_failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// flush をブローカー致命エラーで失敗させる。
    pub fn with_broker_fatal(reason: impl Into<String>) -> Self {
        Self {
            broker_fatal: Some(reason.into()),
            ..Self::new()
        }
    }

    /// エンキューされたメッセージのスナップショットを返す。
    pub fn messages(&self) -> Vec<EventEnvelope> {
        self.messages.lock().expect("messages lock poisoned").clone()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for InMemoryEventProducer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
#[async_trait]
impl EventProducer for InMemoryEventProducer {
    fn publish(&self, envelope: EventEnvelope) -> Result<DeliveryHandle, MessagingError> {
        let mut messages = self.messages.lock().expect("messages lock poisoned");
        let offset = messages.len() as i64;
        let topic = envelope.topic.clone();
        messages.push(envelope);

        let report = match &self.delivery_failure {
            Some(reason) => DeliveryReport::Failed {
                reason: reason.clone(),
            },
            None => DeliveryReport::Delivered {
                topic,
                partition: 0,
                offset,
            },
        };
        Ok(DeliveryHandle::ready(report))
    }

    async fn flush(&self, _timeout: Duration) -> Result<(), MessagingError> {
        match &self.broker_fatal {
            Some(reason) => Err(MessagingError::BrokerFatal(reason.clone())),
            None => Ok(()),
        }
    }
}
