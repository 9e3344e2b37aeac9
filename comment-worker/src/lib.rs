pub mod observer;
pub mod shutdown;
pub mod worker;

pub use observer::{ConsoleObserver, Observer};
pub use shutdown::ShutdownSignal;
