//! Tokio.rs reexports to prevent tokio dependencies within external code
pub mod mpsc;
pub mod oneshot;
pub mod sync;

pub use tokio::{
    runtime::Runtime,
    signal::ctrl_c,
    task::{spawn, JoinError, JoinHandle},
    time::{sleep, timeout, Instant},
};
pub use tokio_util::sync::CancellationToken;
