//! Counting completion barrier the coordinator waits on before closing the waiter queue.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use trattoria_rt::sync::Notify;

#[derive(Debug)]
struct Inner {
    remaining: AtomicUsize,
    notify: Notify,
}

#[derive(Debug, Clone)]
pub struct CompletionBarrier {
    inner: Arc<Inner>,
}

/// One party's share of a [`CompletionBarrier`]. Arrives when dropped, so a worker
/// that exits early (or panics) still releases the barrier.
#[derive(Debug)]
pub struct Arrival {
    inner: Arc<Inner>,
}

impl CompletionBarrier {
    /// Creates a barrier for `parties` workers and hands out exactly one arrival each.
    pub fn with_parties(parties: usize) -> (Self, Vec<Arrival>) {
        let inner = Arc::new(Inner {
            remaining: AtomicUsize::new(parties),
            notify: Notify::new(),
        });
        let arrivals = (0..parties)
            .map(|_| Arrival {
                inner: inner.clone(),
            })
            .collect();
        (Self { inner }, arrivals)
    }

    pub fn remaining(&self) -> usize {
        self.inner.remaining.load(Ordering::Acquire)
    }

    /// Resolves once every arrival has been dropped.
    pub async fn wait(&self) {
        loop {
            // Registered before the check so a concurrent last arrival cannot be missed.
            let notified = self.inner.notify.notified();
            if self.remaining() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Arrival {
    pub fn arrive(self) {}
}

impl Drop for Arrival {
    fn drop(&mut self) {
        if self.inner.remaining.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.inner.notify.notify_waiters();
        }
    }
}
