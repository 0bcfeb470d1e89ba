//! Runtime wrapper to remove dependencies from code. The simulation only talks to
//! the primitives reexported here, so swapping the runtime means touching this
//! crate alone.
//!
//! Currently, only the tokio functionality the restaurant needs is reexported.

mod tokio;
mod tracing;

use std::future::Future;

pub use crate::tokio::mpsc;
pub use crate::tokio::oneshot;
pub use crate::tokio::sync;
pub use crate::tokio::{
    ctrl_c, sleep, spawn, timeout, CancellationToken, Instant, JoinError, JoinHandle, Runtime,
};
pub use crate::tracing::init_tracing;

/// Installs the tracing subscriber and drives `future` to completion on a
/// fresh multi-threaded runtime.
pub fn run<F: Future>(future: F) -> F::Output {
    init_tracing();

    let rt = Runtime::new().expect("failed to build the tokio runtime");
    rt.block_on(future)
}
