use kafka_client::{BrokerArgs, ClientError, consumer, utils};
use rdkafka::admin::AdminClient;
use rdkafka::client::DefaultClientContext;
use std::time::{Duration, Instant};

fn unreachable() -> BrokerArgs {
    BrokerArgs {
        brokers: vec!["127.0.0.1:1".to_string()],
        ..BrokerArgs::default()
    }
}

#[tokio::test]
async fn connect_to_unreachable_broker_fails_within_timeout() {
    let args = unreachable();

    let started = Instant::now();
    let result = consumer::connect(&args, "comments-worker-test", Duration::from_millis(500));

    assert!(matches!(result, Err(ClientError::Kafka(_))));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn ensure_topic_on_unreachable_broker_is_an_error() {
    let args = unreachable();
    let admin: AdminClient<DefaultClientContext> = args.admin_config().create().expect("admin");

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        utils::ensure_topic(&admin, &args.topic, 1, 1, Duration::from_millis(500)),
    )
    .await
    .expect("topic creation must not hang");

    assert!(result.is_err());
}
