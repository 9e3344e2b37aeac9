use clap::Parser;
use comment_api::{AppState, routes};
use dotenvy::dotenv;
use kafka_client::{BrokerArgs, KafkaPublisher, utils};
use log::{error, info};
use ntex::web;
use rdkafka::admin::AdminClient;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "comment-api", about = "Publishes comments posted over HTTP to Kafka")]
struct Args {
    #[command(flatten)]
    broker: BrokerArgs,

    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
    bind: String,

    /// Partitions used when the topic has to be created
    #[arg(long, env = "KAFKA_TOPIC_PARTITIONS", default_value_t = 1)]
    topic_partitions: i32,

    /// Replication factor used when the topic has to be created
    #[arg(long, env = "KAFKA_TOPIC_REPLICATION", default_value_t = 1)]
    topic_replication: i32,
}

#[ntex::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let brokers = args.broker.bootstrap_servers();
    let topic = args.broker.topic.clone();

    info!("Starting comment API on {}, broker={brokers}, topic={topic}", args.bind);

    let admin: AdminClient<_> = args.broker.admin_config().create().expect("admin client");

    let publisher = KafkaPublisher::connect(&args.broker).expect("producer");

    let broker_timeout = Duration::from_millis(args.broker.message_timeout_ms);
    if let Err(e) = utils::ensure_topic(
        &admin,
        &topic,
        args.topic_partitions,
        args.topic_replication,
        broker_timeout,
    )
    .await
    {
        error!("Topic ensure failed: {e}");
    }

    let state = Arc::new(AppState {
        publisher: publisher.clone(),
        topic,
    });

    web::server(move || {
        let s = state.clone();
        web::App::new()
            .state(s)
            .configure(routes::<KafkaPublisher>)
    })
    .bind(&args.bind)?
    .run()
    .await?;

    info!("Server stopped, flushing producer");
    if let Err(e) = publisher.close(broker_timeout) {
        error!("Failed to flush producer: {e}");
    }
    Ok(())
}
