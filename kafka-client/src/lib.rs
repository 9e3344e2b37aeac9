pub mod config;
pub mod consumer;
pub mod error;
pub mod utils;

pub use config::BrokerArgs;
pub use error::ClientError;

use anyhow::Result;
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, Producer};
use std::future::Future;
use std::time::Duration;

/// Where a published message landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub partition: i32,
    pub offset: i64,
}

pub trait Publisher {
    /// Publishes `payload` and resolves once the broker has acknowledged it.
    fn publish(
        &self,
        topic: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> impl Future<Output = Result<Delivery>> + Send;
}

#[derive(Clone)]
pub struct KafkaPublisher {
    pub producer: FutureProducer,
}

impl KafkaPublisher {
    pub fn new(producer: FutureProducer) -> Self {
        KafkaPublisher { producer }
    }

    pub fn connect(args: &BrokerArgs) -> Result<Self, KafkaError> {
        let producer: FutureProducer = args.producer_config().create()?;
        Ok(KafkaPublisher::new(producer))
    }

    /// Waits for in-flight messages to be delivered before the producer goes away.
    pub fn close(&self, timeout: Duration) -> Result<(), KafkaError> {
        self.producer.flush(timeout)
    }
}

impl Publisher for KafkaPublisher {
    fn publish(
        &self,
        topic: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> impl Future<Output = Result<Delivery>> + Send {
        let producer = self.producer.clone();
        let topic = topic.to_string();
        let key = key.map(str::to_string);
        let payload = payload.to_vec();
        async move {
            let delivery =
                utils::publish_message(&producer, &topic, key.as_deref(), &payload).await?;
            Ok(delivery)
        }
    }
}
