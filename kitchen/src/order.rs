//! The unit of work passed from a customer to a cook and back.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use trattoria_rt::oneshot;

static NEXT_ORDER_ID: AtomicU64 = AtomicU64::new(0);

/// Allocates the next order id. Ids start at 1 and are never reused within a process.
pub fn next_id() -> OrderId {
    OrderId(NEXT_ORDER_ID.fetch_add(1, Ordering::Relaxed) + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct Order {
    id: OrderId,
    customer: String,
    reply: Option<oneshot::Sender<Order>>,
    prepared_by: Option<String>,
}

impl Order {
    /// Creates an order for `customer` together with the receiving end of its
    /// private reply slot. Only the caller ever sees that receiver.
    pub fn new(customer: impl Into<String>) -> (Self, oneshot::Receiver<Order>) {
        let (reply, meal) = oneshot::channel();
        let order = Order {
            id: next_id(),
            customer: customer.into(),
            reply: Some(reply),
            prepared_by: None,
        };
        (order, meal)
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn prepared_by(&self) -> Option<&str> {
        self.prepared_by.as_deref()
    }

    /// Stamps the order as prepared by `cook` and hands it back to its customer.
    ///
    /// Fails with the prepared order when the customer is no longer listening.
    /// Delivery never blocks.
    pub fn fulfill(mut self, cook: &str) -> Result<(), Order> {
        self.prepared_by = Some(cook.to_string());
        match self.reply.take() {
            Some(reply) => reply.send(self),
            None => Err(self),
        }
    }
}
