use crate::{BrokerArgs, ClientError};
use log::{debug, info};
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use rdkafka::{Offset, TopicPartitionList};
use std::borrow::Cow;
use std::time::Duration;

/// Owned copy of a consumed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub key: Option<Vec<u8>>,
    pub payload: Option<Vec<u8>>,
}

impl ReceivedMessage {
    pub fn from_message<M: Message>(message: &M) -> Self {
        ReceivedMessage {
            topic: message.topic().to_string(),
            partition: message.partition(),
            offset: message.offset(),
            key: message.key().map(<[u8]>::to_vec),
            payload: message.payload().map(<[u8]>::to_vec),
        }
    }

    /// Payload as text; invalid UTF-8 is replaced rather than rejected.
    pub fn payload_lossy(&self) -> Cow<'_, str> {
        match &self.payload {
            Some(bytes) => String::from_utf8_lossy(bytes),
            None => Cow::Borrowed(""),
        }
    }
}

/// Creates a consumer and makes sure the cluster answers a metadata request.
pub fn connect(
    args: &BrokerArgs,
    group_id: &str,
    timeout: Duration,
) -> Result<StreamConsumer, ClientError> {
    let consumer: StreamConsumer = args.consumer_config(group_id).create()?;
    let metadata = consumer.fetch_metadata(None, timeout)?;
    info!(
        "Connected to {} (brokers in cluster: {})",
        args.bootstrap_servers(),
        metadata.brokers().len()
    );
    Ok(consumer)
}

/// Assigns a single partition of `topic`, reading from the oldest retained offset.
pub fn assign_partition(
    consumer: &StreamConsumer,
    topic: &str,
    partition: i32,
    timeout: Duration,
) -> Result<(), ClientError> {
    let metadata = consumer.fetch_metadata(Some(topic), timeout)?;
    let exists = metadata
        .topics()
        .iter()
        .filter(|t| t.name() == topic && t.error().is_none())
        .any(|t| t.partitions().iter().any(|p| p.id() == partition));
    if !exists {
        return Err(ClientError::MissingPartition {
            topic: topic.to_string(),
            partition,
        });
    }

    let mut assignment = TopicPartitionList::new();
    assignment.add_partition_offset(topic, partition, Offset::Beginning)?;
    consumer.assign(&assignment)?;
    debug!("Assigned {topic}/{partition} from the beginning");
    Ok(())
}

pub fn close(consumer: StreamConsumer) -> Result<(), ClientError> {
    consumer.unassign()?;
    drop(consumer);
    Ok(())
}
