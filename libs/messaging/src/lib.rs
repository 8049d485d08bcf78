//! tempcast-messaging: Kafka メッセージングの抽象化ライブラリ。
//!
//! このライブラリは tempcast の各ファンクションで使用する
//! Kafka プロデューサーの抽象化と配信レポートの型を提供する。

pub mod config;
pub mod delivery;
pub mod error;
pub mod event;
pub mod kafka_producer;
pub mod producer;

pub use config::MessagingConfig;
pub use delivery::{DeliveryHandle, DeliveryReport};
pub use error::MessagingError;
pub use event::EventEnvelope;
pub use kafka_producer::KafkaEventProducer;
pub use producer::{EventProducer, NoOpEventProducer};

#[cfg(feature = "mock")]
pub use producer::MockEventProducer;

#[cfg(any(test, feature = "testing"))]
pub use producer::InMemoryEventProducer;
