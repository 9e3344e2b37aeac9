use crate::Observer;
use futures_util::{Stream, StreamExt};
use kafka_client::consumer::ReceivedMessage;
use log::{debug, error, warn};
use std::fmt::Display;
use std::future::Future;
use std::io;
use std::pin::pin;

/// Consumes `stream` until `shutdown` resolves or the stream ends, handing each
/// message and stream error to `observer`, then reports the total to the
/// observer. Returns the number of messages seen.
///
/// Stream errors are reported and consumption goes on. The shutdown future is
/// polled before the stream on every iteration, so a pending shutdown is acted
/// on before the next message is taken; a message already taken is always
/// counted. Observer failures are logged and never end the loop.
pub async fn run<S, E, F, O>(stream: S, shutdown: F, observer: &mut O) -> u64
where
    S: Stream<Item = Result<ReceivedMessage, E>>,
    E: Display,
    F: Future<Output = ()>,
    O: Observer,
{
    let mut stream = pin!(stream);
    let mut shutdown = pin!(shutdown);
    let mut count: u64 = 0;

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                report(observer.on_interrupt());
                break;
            }
            next = stream.next() => match next {
                Some(Ok(message)) => {
                    count += 1;
                    debug!(
                        "message {count} from {}/{}@{}",
                        message.topic, message.partition, message.offset
                    );
                    report(observer.on_message(count, &message));
                }
                Some(Err(e)) => report(observer.on_error(&e)),
                None => {
                    warn!("Message stream closed");
                    break;
                }
            }
        }
    }

    report(observer.on_summary(count));
    count
}

fn report(result: io::Result<()>) {
    if let Err(e) = result {
        error!("Failed to write to output: {e}");
    }
}
