//! The waiter queue: a bounded FIFO between customers and cooks.
//!
//! Customers hold a [`Waiter`], cooks share a [`Pass`]. The queue closes once the
//! last `Waiter` is gone, after which cooks drain what is left and then see `None`.

use std::sync::Arc;
use std::time::Duration;

use trattoria_rt::{self as rt, mpsc, sync::Mutex};

use crate::error::KitchenError;
use crate::order::{Order, OrderId};

/// Creates a waiter queue holding up to `capacity` orders no cook has picked up yet.
///
/// # Panics
///
/// Panics if `capacity` is zero; [`RestaurantConfig::validate`](crate::RestaurantConfig::validate)
/// rejects that before a restaurant opens.
pub fn channel(capacity: usize) -> (Waiter, Pass) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        Waiter { tx },
        Pass {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

#[derive(Debug)]
pub enum Submission {
    Accepted(OrderId),
    /// Nobody took the order in time; it never entered the queue.
    Abandoned(Order),
}

/// Producer side of the queue.
#[derive(Debug, Clone)]
pub struct Waiter {
    tx: mpsc::Sender<Order>,
}

impl Waiter {
    /// Offers `order` to the queue, giving up after `patience`.
    ///
    /// A slot is reserved first and the order is only moved in through that
    /// reservation, so an abandoned order is handed back untouched.
    pub async fn submit(
        &self,
        order: Order,
        patience: Duration,
    ) -> Result<Submission, KitchenError> {
        match rt::timeout(patience, self.tx.reserve()).await {
            Ok(Ok(permit)) => {
                let id = order.id();
                permit.send(order);
                Ok(Submission::Accepted(id))
            }
            Ok(Err(_)) => Err(KitchenError::WaiterClosed {
                customer: order.customer().to_string(),
            }),
            Err(_) => Ok(Submission::Abandoned(order)),
        }
    }

    /// Free slots right now.
    pub fn available(&self) -> usize {
        self.tx.capacity()
    }

    /// Gives up this handle. The queue closes when the last one is gone.
    pub fn close(self) {
        tracing::debug!(free_slots = self.tx.capacity(), "waiter handle closed");
    }
}

/// Consumer side of the queue, shared by every cook.
#[derive(Debug, Clone)]
pub struct Pass {
    rx: Arc<Mutex<mpsc::Receiver<Order>>>,
}

impl Pass {
    /// Waits for the next order. `None` means the queue is closed and drained.
    pub async fn next(&self) -> Option<Order> {
        let mut rx = self.rx.lock().await;
        rx.recv().await
    }
}
