use log::info;
use std::io;

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};

/// Interrupt or terminate, whichever arrives first.
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl ShutdownSignal {
    /// Registers both handlers, so a signal arriving before `recv` is polled
    /// is still delivered to it.
    pub fn install() -> io::Result<Self> {
        Ok(ShutdownSignal {
            #[cfg(unix)]
            interrupt: signal(SignalKind::interrupt())?,
            #[cfg(unix)]
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(unix)]
    pub async fn recv(mut self) {
        tokio::select! {
            _ = self.interrupt.recv() => info!("Received interrupt signal"),
            _ = self.terminate.recv() => info!("Received terminate signal"),
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(self) {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received interrupt signal"),
            Err(e) => {
                log::error!("Failed to listen for ctrl-c: {e}");
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn interrupt_raised_before_recv_is_delivered() {
        let signal = ShutdownSignal::install().unwrap();
        // SAFETY: the handler is registered above, so raising SIGINT does not
        // take the default action.
        let rc = unsafe { libc::raise(libc::SIGINT) };
        assert_eq!(rc, 0);

        tokio::time::timeout(Duration::from_secs(5), signal.recv())
            .await
            .expect("interrupt must reach the installed handler");
    }
}
