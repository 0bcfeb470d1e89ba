//! A cook takes orders off the pass one at a time, prepares them and hands each
//! back to the customer who placed it.

use rand::rngs::StdRng;

use crate::delay::Jitter;
use crate::error::KitchenError;
use crate::order::{Order, OrderId};
use crate::waiter::Pass;
use crate::worker::Worker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookState {
    Idle,
    Working,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct CookSummary {
    pub name: String,
    /// Orders this cook prepared, in the order it picked them up.
    pub prepared: Vec<OrderId>,
}

pub struct Cook {
    name: String,
    pass: Pass,
    cooking: Jitter,
    rng: StdRng,
    state: CookState,
    prepared: Vec<OrderId>,
}

impl Cook {
    pub fn new(name: impl Into<String>, pass: Pass, cooking: Jitter, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            pass,
            cooking,
            rng,
            state: CookState::Idle,
            prepared: Vec::new(),
        }
    }

    pub fn state(&self) -> CookState {
        self.state
    }

    async fn prepare(&mut self, order: Order) {
        self.state = CookState::Working;
        tracing::info!(
            "{} cooking order {} for {}",
            self.name,
            order.id(),
            order.customer()
        );
        self.cooking.pass(&mut self.rng).await;
        tracing::info!(
            "{} finished order {} for {}",
            self.name,
            order.id(),
            order.customer()
        );

        let id = order.id();
        self.prepared.push(id);
        if let Err(order) = order.fulfill(&self.name) {
            // Delivery never blocks, so a customer who left only costs us the meal.
            tracing::warn!(
                cook = %self.name,
                order = %id,
                customer = order.customer(),
                "customer no longer waiting, meal discarded"
            );
        }
        self.state = CookState::Idle;
    }
}

impl Worker for Cook {
    type Summary = CookSummary;

    fn name(&self) -> &str {
        &self.name
    }

    async fn init(&mut self) {
        tracing::info!("{} starting work", self.name);
    }

    fn should_stop(&self) -> bool {
        self.state == CookState::Stopped
    }

    async fn step(&mut self) -> Result<(), KitchenError> {
        match self.pass.next().await {
            Some(order) => self.prepare(order).await,
            None => {
                tracing::info!("{} closing work", self.name);
                self.state = CookState::Stopped;
            }
        }
        Ok(())
    }

    fn finish(self) -> CookSummary {
        CookSummary {
            name: self.name,
            prepared: self.prepared,
        }
    }
}
