use kafka_client::consumer::ReceivedMessage;
use std::fmt::Display;
use std::io::{self, Write};

/// Receives everything the consumption loop sees.
pub trait Observer {
    fn on_message(&mut self, count: u64, message: &ReceivedMessage) -> io::Result<()>;
    fn on_error(&mut self, error: &dyn Display) -> io::Result<()>;
    fn on_interrupt(&mut self) -> io::Result<()>;
    fn on_summary(&mut self, count: u64) -> io::Result<()>;
}

/// Writes one line per event, stdout in the worker binary.
pub struct ConsoleObserver<W> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        ConsoleObserver { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleObserver::new(io::stdout())
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_message(&mut self, count: u64, message: &ReceivedMessage) -> io::Result<()> {
        writeln!(
            self.out,
            "Received message Count: {}: | Topic ({}) | Message ({})",
            count,
            message.topic,
            message.payload_lossy()
        )?;
        self.out.flush()
    }

    fn on_error(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "{error}")?;
        self.out.flush()
    }

    fn on_interrupt(&mut self) -> io::Result<()> {
        writeln!(self.out, "Interruption detected")?;
        self.out.flush()
    }

    fn on_summary(&mut self, count: u64) -> io::Result<()> {
        writeln!(self.out, "Processed {count} messages")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_line_shows_count_topic_and_payload() {
        let mut observer = ConsoleObserver::new(Vec::new());
        let message = ReceivedMessage {
            topic: "comments".to_string(),
            partition: 0,
            offset: 0,
            key: None,
            payload: Some(b"{\"text\":\"hello\"}".to_vec()),
        };

        observer.on_message(1, &message).unwrap();
        observer.on_error(&"Broker: Unknown topic or partition").unwrap();

        assert_eq!(
            String::from_utf8(observer.into_inner()).unwrap(),
            "Received message Count: 1: | Topic (comments) | Message ({\"text\":\"hello\"})\n\
             Broker: Unknown topic or partition\n"
        );
    }
}
