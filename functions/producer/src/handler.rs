use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use tempcast_invocation::InvocationContext;
use tempcast_messaging::{DeliveryReport, EventEnvelope, EventProducer};

use crate::error::ProducerError;

/// 発行メッセージに付与する固定キー。
pub const MESSAGE_KEY: &str = "key";

/// ProducerHandler は 1 回の呼び出しで受信イベントを 1 件発行する。
pub struct ProducerHandler {
    producer: Arc<dyn EventProducer>,
    topic: String,
    flush_timeout: Duration,
}

impl ProducerHandler {
    /// 新しい ProducerHandler を生成する。
    pub fn new(
        producer: Arc<dyn EventProducer>,
        topic: impl Into<String>,
        flush_timeout: Duration,
    ) -> Self {
        Self {
            producer,
            topic: topic.into(),
            flush_timeout,
        }
    }

    /// イベントを JSON シリアライズして発行し、配信レポートを待つ。
    ///
    /// 個々の配信失敗はログに残すのみで呼び出しは成功扱いとする。
    /// ブローカー致命エラー（全ブローカー停止・認証拒否）のみ
    /// 呼び出し失敗として伝播する。
    pub async fn handle(
        &self,
        event: &serde_json::Value,
        context: &InvocationContext,
    ) -> Result<DeliveryReport, ProducerError> {
        let envelope = EventEnvelope::json(&self.topic, MESSAGE_KEY, event)?;
        let delivery = self.producer.publish(envelope)?;

        // 保留中の配信レポートを呼び出しの寿命内で回収する
        self.producer.flush(self.flush_timeout).await?;
        let report = delivery.wait_timeout(self.flush_timeout).await;

        match &report {
            DeliveryReport::Delivered {
                topic,
                partition,
                offset,
            } => {
                info!(
                    request_id = %context.request_id,
                    topic = %topic,
                    partition,
                    offset,
                    "produced message"
                );
            }
            DeliveryReport::Failed { reason } => {
                warn!(
                    request_id = %context.request_id,
                    reason = %reason,
                    "failed to deliver message"
                );
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempcast_messaging::{
        DeliveryHandle, InMemoryEventProducer, MessagingError, MockEventProducer,
    };

    fn test_context() -> InvocationContext {
        InvocationContext::new("tempcast-producer")
    }

    #[tokio::test]
    async fn test_publishes_once_with_fixed_key_and_json_value() {
        let producer = Arc::new(InMemoryEventProducer::new());
        let handler = ProducerHandler::new(
            producer.clone(),
            "orders.incoming.v1",
            Duration::from_secs(10),
        );
        let event = json!({"order_id": "ord-1", "amount": 42});

        let report = handler.handle(&event, &test_context()).await.unwrap();
        assert!(report.is_delivered());

        let messages = producer.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].topic, "orders.incoming.v1");
        assert_eq!(messages[0].key, "key");
        let value: serde_json::Value = serde_json::from_slice(&messages[0].payload).unwrap();
        assert_eq!(value, event);
    }

    #[tokio::test]
    async fn test_delivered_report_carries_partition_and_offset() {
        let producer = Arc::new(InMemoryEventProducer::new());
        let handler =
            ProducerHandler::new(producer, "orders.incoming.v1", Duration::from_secs(10));

        let report = handler
            .handle(&json!({"n": 1}), &test_context())
            .await
            .unwrap();
        match report {
            DeliveryReport::Delivered {
                topic,
                partition,
                offset,
            } => {
                assert_eq!(topic, "orders.incoming.v1");
                assert_eq!(partition, 0);
                assert_eq!(offset, 0);
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_per_message_failure_is_logged_not_escalated() {
        let producer = Arc::new(InMemoryEventProducer::with_delivery_failure(
            "partition leader unavailable",
        ));
        let handler =
            ProducerHandler::new(producer, "orders.incoming.v1", Duration::from_secs(10));

        let report = handler
            .handle(&json!({"n": 1}), &test_context())
            .await
            .unwrap();
        match report {
            DeliveryReport::Failed { reason } => {
                assert!(reason.contains("partition leader unavailable"));
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_broker_fatal_fails_the_invocation() {
        let producer = Arc::new(InMemoryEventProducer::with_broker_fatal(
            "all brokers down",
        ));
        let handler =
            ProducerHandler::new(producer, "orders.incoming.v1", Duration::from_secs(10));

        let err = handler
            .handle(&json!({"n": 1}), &test_context())
            .await
            .unwrap_err();
        match err {
            ProducerError::Messaging(MessagingError::BrokerFatal(reason)) => {
                assert!(reason.contains("all brokers down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bounded_wait_for_missing_delivery_report() {
        let mut mock = MockEventProducer::new();
        mock.expect_publish()
            .times(1)
            .returning(|_| Ok(DeliveryHandle::new(std::future::pending())));
        mock.expect_flush().times(1).returning(|_| Ok(()));

        let handler = ProducerHandler::new(
            Arc::new(mock),
            "orders.incoming.v1",
            Duration::from_millis(50),
        );

        let report = handler
            .handle(&json!({"n": 1}), &test_context())
            .await
            .unwrap();
        match report {
            DeliveryReport::Failed { reason } => {
                assert!(reason.contains("not received within"));
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }
}
