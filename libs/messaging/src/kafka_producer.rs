//! KafkaEventProducer: rdkafka を使用した EventProducer 実装。
//!
//! 配信レポートは ProducerContext のコールバックから oneshot チャネルへ、
//! クライアント致命エラーは watch チャネルへ転送し、
//! flush 側で同期的に観測できるようにしている。

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::client::ClientContext;
use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaError;
use rdkafka::message::Message;
use rdkafka::producer::{BaseRecord, DeliveryResult, Producer, ProducerContext, ThreadedProducer};
use rdkafka::types::RDKafkaErrorCode;
use secrecy::ExposeSecret;
use tokio::sync::{oneshot, watch};
use tracing::warn;

use crate::config::MessagingConfig;
use crate::delivery::{DeliveryHandle, DeliveryReport};
use crate::error::MessagingError;
use crate::event::EventEnvelope;
use crate::producer::EventProducer;

/// DeliveryChannelContext は librdkafka のコールバックを
/// チャネルへ付け替える ProducerContext。
struct DeliveryChannelContext {
    fatal_tx: watch::Sender<Option<String>>,
}

impl ClientContext for DeliveryChannelContext {
    fn error(&self, error: KafkaError, reason: &str) {
        warn!(error = %error, reason, "kafka client error");
        if let KafkaError::Global(code) = error {
            if matches!(
                code,
                RDKafkaErrorCode::AllBrokersDown | RDKafkaErrorCode::Authentication
            ) {
                self.fatal_tx.send_replace(Some(format!("{code}: {reason}")));
            }
        }
    }
}

impl ProducerContext for DeliveryChannelContext {
    type DeliveryOpaque = Box<oneshot::Sender<DeliveryReport>>;

    fn delivery(
        &self,
        delivery_result: &DeliveryResult<'_>,
        delivery_opaque: Self::DeliveryOpaque,
    ) {
        let report = match delivery_result {
            Ok(message) => DeliveryReport::Delivered {
                topic: message.topic().to_string(),
                partition: message.partition(),
                offset: message.offset(),
            },
            Err((err, _)) => DeliveryReport::Failed {
                reason: err.to_string(),
            },
        };
        if delivery_opaque.send(report).is_err() {
            warn!("delivery report receiver dropped before the report arrived");
        }
    }
}

/// KafkaEventProducer は rdkafka の ThreadedProducer を使った実装。
/// 呼び出しごとに生成し、flush 後に破棄する。
pub struct KafkaEventProducer {
    producer: ThreadedProducer<DeliveryChannelContext>,
    fatal_rx: watch::Receiver<Option<String>>,
}

impl KafkaEventProducer {
    /// MessagingConfig から KafkaEventProducer を生成する。
    pub fn new(config: &MessagingConfig) -> Result<Self, MessagingError> {
        let (fatal_tx, fatal_rx) = watch::channel(None);
        let context = DeliveryChannelContext { fatal_tx };

        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", config.brokers_string());
        client_config.set("security.protocol", &config.security_protocol);
        client_config.set("sasl.mechanism", &config.sasl_mechanism);
        client_config.set("sasl.username", &config.sasl_username);
        client_config.set("sasl.password", config.sasl_password.expose_secret());
        client_config.set("message.timeout.ms", config.message_timeout_ms.to_string());

        let producer: ThreadedProducer<DeliveryChannelContext> = client_config
            .create_with_context(context)
            .map_err(|e| MessagingError::ConnectionError(e.to_string()))?;

        Ok(Self { producer, fatal_rx })
    }

    fn fatal_reason(&self) -> Option<String> {
        self.fatal_rx.borrow().clone()
    }
}

#[async_trait]
impl EventProducer for KafkaEventProducer {
    fn publish(&self, envelope: EventEnvelope) -> Result<DeliveryHandle, MessagingError> {
        let (report_tx, report_rx) = oneshot::channel();
        let record = BaseRecord::with_opaque_to(&envelope.topic, Box::new(report_tx))
            .key(&envelope.key)
            .payload(&envelope.payload);

        self.producer
            .send(record)
            .map_err(|(err, _)| MessagingError::ProducerError(err.to_string()))?;

        Ok(DeliveryHandle::new(async move {
            match report_rx.await {
                Ok(report) => report,
                Err(_) => DeliveryReport::Failed {
                    reason: "delivery report channel closed".to_string(),
                },
            }
        }))
    }

    async fn flush(&self, timeout: Duration) -> Result<(), MessagingError> {
        match self.producer.flush(timeout) {
            Ok(()) => {}
            Err(KafkaError::Flush(RDKafkaErrorCode::OperationTimedOut)) => {
                warn!(
                    timeout_ms = timeout.as_millis() as u64,
                    "flush timed out with deliveries still pending"
                );
            }
            Err(e) => return Err(MessagingError::ProducerError(e.to_string())),
        }

        if let Some(reason) = self.fatal_reason() {
            return Err(MessagingError::BrokerFatal(reason));
        }
        Ok(())
    }
}
