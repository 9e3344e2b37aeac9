use anyhow::Context;
use clap::Parser;
use comment_worker::{ConsoleObserver, ShutdownSignal, worker};
use dotenvy::dotenv;
use futures_util::StreamExt;
use kafka_client::BrokerArgs;
use kafka_client::consumer::{self, ReceivedMessage};
use log::{error, info};
use rdkafka::consumer::StreamConsumer;
use std::time::Duration;
use tokio::sync::oneshot;

#[derive(Parser, Debug)]
#[command(name = "comment-worker", about = "Prints comments consumed from Kafka")]
struct Args {
    #[command(flatten)]
    broker: BrokerArgs,

    /// Consumer group the worker identifies as (offsets are never committed)
    #[arg(long, env = "KAFKA_GROUP_ID", default_value = "comments-worker")]
    group_id: String,

    /// Partition to read
    #[arg(long, default_value_t = 0)]
    partition: i32,

    /// How long to wait for the cluster to answer metadata requests
    #[arg(long, default_value_t = 5000)]
    metadata_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let timeout = Duration::from_millis(args.metadata_timeout_ms);
    let topic = args.broker.topic.clone();

    // Neither step is retried: the worker can do nothing without its partition.
    let kafka: StreamConsumer = consumer::connect(&args.broker, &args.group_id, timeout)
        .unwrap_or_else(|e| panic!("failed to connect to Kafka: {e}"));
    consumer::assign_partition(&kafka, &topic, args.partition, timeout)
        .unwrap_or_else(|e| panic!("failed to open {topic}/{}: {e}", args.partition));

    println!("consumer started");
    info!("Consuming {topic}/{} from the oldest offset", args.partition);

    let signal = ShutdownSignal::install().context("failed to install signal handlers")?;
    let (done_tx, done_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        signal.recv().await;
        let _ = done_tx.send(());
    });
    let shutdown = async move {
        if done_rx.await.is_err() {
            error!("Shutdown notifier dropped");
        }
    };

    let mut observer = ConsoleObserver::stdout();
    let processed = {
        let messages = kafka
            .stream()
            .map(|r| r.map(|m| ReceivedMessage::from_message(&m)));
        worker::run(messages, shutdown, &mut observer).await
    };

    info!("Closing consumer after {processed} messages");
    consumer::close(kafka).context("failed to close Kafka consumer")?;
    info!("Consumer closed");
    Ok(())
}
