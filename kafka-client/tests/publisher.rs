use kafka_client::{BrokerArgs, KafkaPublisher, Publisher};
use std::time::{Duration, Instant};

#[tokio::test]
async fn publish_to_unreachable_broker_fails_within_timeout() {
    let args = BrokerArgs {
        brokers: vec!["127.0.0.1:1".to_string()],
        retries: 1,
        message_timeout_ms: 500,
        ..BrokerArgs::default()
    };
    let publisher = KafkaPublisher::connect(&args).expect("producer");

    let started = Instant::now();
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        publisher.publish(&args.topic, None, b"{\"text\":\"hello\"}"),
    )
    .await
    .expect("publish must not hang");

    assert!(result.is_err());
    assert!(started.elapsed() < Duration::from_secs(10));
}
