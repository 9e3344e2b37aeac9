use clap::Args;
use rdkafka::config::ClientConfig;

pub const DEFAULT_BROKER: &str = "localhost:29092";
pub const DEFAULT_TOPIC: &str = "comments";
pub const DEFAULT_RETRIES: u32 = 5;
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 5000;

/// Broker connection settings shared by the publisher service and the worker.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BrokerArgs {
    /// Kafka bootstrap broker list
    #[arg(
        long,
        env = "KAFKA_BROKERS",
        value_delimiter = ',',
        default_value = DEFAULT_BROKER
    )]
    pub brokers: Vec<String>,

    /// Topic comments are published to and consumed from
    #[arg(long, env = "KAFKA_TOPIC", default_value = DEFAULT_TOPIC)]
    pub topic: String,

    /// Producer retries on transient publish failures
    #[arg(long, env = "KAFKA_PRODUCER_RETRIES", default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Upper bound on the time a publish may take before it is reported as failed
    #[arg(
        long,
        env = "KAFKA_MESSAGE_TIMEOUT_MS",
        default_value_t = DEFAULT_MESSAGE_TIMEOUT_MS
    )]
    pub message_timeout_ms: u64,
}

impl Default for BrokerArgs {
    fn default() -> Self {
        BrokerArgs {
            brokers: vec![DEFAULT_BROKER.to_string()],
            topic: DEFAULT_TOPIC.to_string(),
            retries: DEFAULT_RETRIES,
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
        }
    }
}

impl BrokerArgs {
    pub fn bootstrap_servers(&self) -> String {
        self.brokers
            .iter()
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Producer settings: every publish waits for all in-sync replicas.
    pub fn producer_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", self.bootstrap_servers())
            .set("acks", "all")
            .set("message.send.max.retries", self.retries.to_string())
            .set("message.timeout.ms", self.message_timeout_ms.to_string());
        config
    }

    pub fn admin_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config.set("bootstrap.servers", self.bootstrap_servers());
        config
    }

    pub fn consumer_config(&self, group_id: &str) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", self.bootstrap_servers())
            .set("group.id", group_id)
            .set("enable.auto.commit", "false")
            .set("enable.partition.eof", "false");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        broker: BrokerArgs,
    }

    #[test]
    fn parses_comma_separated_brokers() {
        let cli = Cli::parse_from(["test", "--brokers", "a:9092,b:9092", "--topic", "other"]);
        assert_eq!(cli.broker.brokers, vec!["a:9092", "b:9092"]);
        assert_eq!(cli.broker.bootstrap_servers(), "a:9092,b:9092");
        assert_eq!(cli.broker.topic, "other");
    }

    #[test]
    fn default_matches_command_line_defaults() {
        for var in [
            "KAFKA_BROKERS",
            "KAFKA_TOPIC",
            "KAFKA_PRODUCER_RETRIES",
            "KAFKA_MESSAGE_TIMEOUT_MS",
        ] {
            if std::env::var_os(var).is_some() {
                return;
            }
        }
        let cli = Cli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.broker, BrokerArgs::default());
    }

    #[test]
    fn producer_waits_for_all_replicas() {
        let args = BrokerArgs {
            retries: 3,
            ..BrokerArgs::default()
        };
        let config = args.producer_config();
        assert_eq!(config.get("acks"), Some("all"));
        assert_eq!(config.get("message.send.max.retries"), Some("3"));
        assert_eq!(config.get("message.timeout.ms"), Some("5000"));
        assert_eq!(config.get("bootstrap.servers"), Some("localhost:29092"));
    }

    #[test]
    fn consumer_does_not_commit_offsets() {
        let config = BrokerArgs::default().consumer_config("group-a");
        assert_eq!(config.get("group.id"), Some("group-a"));
        assert_eq!(config.get("enable.auto.commit"), Some("false"));
    }
}
