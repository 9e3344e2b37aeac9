use crate::Delivery;
use log::{debug, error, info};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::KafkaError;
use rdkafka::error::RDKafkaErrorCode;
use rdkafka::producer::{FutureProducer, FutureRecord};
use std::time::Duration;

pub async fn publish_message(
    producer: &FutureProducer,
    topic: &str,
    key: Option<&str>,
    payload: &[u8],
) -> Result<Delivery, KafkaError> {
    let mut record = FutureRecord::<str, [u8]>::to(topic).payload(payload);
    if let Some(key) = key {
        record = record.key(key);
    }

    let produce_future = producer.send(record, Duration::from_secs(0));

    match produce_future.await {
        Ok((partition, offset)) => {
            debug!("Message delivered to {topic}/{partition}@{offset}");
            Ok(Delivery { partition, offset })
        }
        Err((e, _)) => {
            error!("Failed to deliver message to {topic}: {e}");
            Err(e)
        }
    }
}

/// Creates `topic` unless it already exists. Returns whether it was created.
pub async fn ensure_topic(
    admin: &AdminClient<DefaultClientContext>,
    topic: &str,
    partitions: i32,
    replication: i32,
    timeout: Duration,
) -> Result<bool, KafkaError> {
    let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(replication));
    let options = AdminOptions::new()
        .request_timeout(Some(timeout))
        .operation_timeout(Some(timeout));

    let results = admin.create_topics([&new_topic], &options).await?;
    match results.into_iter().find(|r| match r {
        Ok(t) | Err((t, _)) => t == topic,
    }) {
        Some(Ok(_)) => {
            info!("Created topic {topic} ({partitions} partitions, replication {replication})");
            Ok(true)
        }
        Some(Err((_, RDKafkaErrorCode::TopicAlreadyExists))) => {
            debug!("Topic {topic} already exists");
            Ok(false)
        }
        Some(Err((_, code))) => Err(KafkaError::AdminOp(code)),
        None => Err(KafkaError::AdminOpCreation(format!(
            "no result for topic {topic}"
        ))),
    }
}
