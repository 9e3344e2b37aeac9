use rdkafka::error::KafkaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] KafkaError),

    #[error("topic {topic} has no partition {partition}")]
    MissingPartition { topic: String, partition: i32 },
}
