//! A customer keeps ordering until it has eaten its quota of meals.
//!
//! Each pass through [`Worker::step`] moves the customer one state forward:
//!
//! ```text
//! Ordering -> Waiting -> Eating ----> Ordering | Done
//!                    \-> Abandoning -> Ordering
//! ```
//!
//! Only `Waiting` races a deadline, and only until the waiter accepts the order.
//! Once accepted the customer waits for its meal for as long as it takes.

use core::pin::pin;
use std::mem;
use std::time::Duration;

use futures::future::{select, Either};
use rand::rngs::StdRng;
use trattoria_rt::{oneshot, CancellationToken};

use crate::config::RestaurantConfig;
use crate::delay::Jitter;
use crate::error::KitchenError;
use crate::order::{Order, OrderId};
use crate::waiter::{Submission, Waiter};
use crate::worker::Worker;

#[derive(Debug)]
pub enum CustomerState {
    Ordering,
    Waiting(Order, oneshot::Receiver<Order>),
    Eating(Order),
    Abandoning(Order),
    Done,
    /// Sent home by a shutdown before finishing the quota.
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub order: OrderId,
    pub prepared_by: String,
}

#[derive(Debug, Clone)]
pub struct CustomerSummary {
    pub name: String,
    pub meals: Vec<Meal>,
    pub abandoned: Vec<OrderId>,
    pub orders_placed: u32,
    /// False when a shutdown sent the customer home early.
    pub finished: bool,
}

pub struct Customer {
    name: String,
    waiter: Waiter,
    meal_quota: u32,
    order_timeout: Duration,
    eating: Jitter,
    abandoning: Jitter,
    retry_pause: Jitter,
    rng: StdRng,
    shutdown: CancellationToken,
    state: CustomerState,
    meals: Vec<Meal>,
    abandoned: Vec<OrderId>,
    orders_placed: u32,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        waiter: Waiter,
        config: &RestaurantConfig,
        rng: StdRng,
        shutdown: CancellationToken,
    ) -> Self {
        let state = if config.meal_quota == 0 {
            CustomerState::Done
        } else {
            CustomerState::Ordering
        };
        Self {
            name: name.into(),
            waiter,
            meal_quota: config.meal_quota,
            order_timeout: config.order_timeout,
            eating: config.eating,
            abandoning: config.abandoning,
            retry_pause: config.retry_pause,
            rng,
            shutdown,
            state,
            meals: Vec::new(),
            abandoned: Vec::new(),
            orders_placed: 0,
        }
    }

    pub fn state(&self) -> &CustomerState {
        &self.state
    }

    pub fn meals_eaten(&self) -> u32 {
        self.meals.len() as u32
    }

    async fn advance(&mut self) -> Result<(), KitchenError> {
        let next = match mem::replace(&mut self.state, CustomerState::Ordering) {
            CustomerState::Ordering => {
                let (order, meal) = Order::new(self.name.as_str());
                self.orders_placed += 1;
                tracing::info!("{} placed order {}", self.name, order.id());
                CustomerState::Waiting(order, meal)
            }
            CustomerState::Waiting(order, meal) => {
                match self.waiter.submit(order, self.order_timeout).await? {
                    Submission::Accepted(id) => match meal.await {
                        Ok(cooked) => CustomerState::Eating(cooked),
                        Err(_) => {
                            tracing::warn!(
                                customer = %self.name,
                                order = %id,
                                "order accepted but never served"
                            );
                            CustomerState::Ordering
                        }
                    },
                    Submission::Abandoned(order) => CustomerState::Abandoning(order),
                }
            }
            CustomerState::Eating(meal) => {
                let prepared_by = meal.prepared_by().unwrap_or_default().to_string();
                tracing::info!(
                    "{} eating cooked order {} prepared by {}",
                    self.name,
                    meal.id(),
                    prepared_by
                );
                self.eating.pass(&mut self.rng).await;
                self.meals.push(Meal {
                    order: meal.id(),
                    prepared_by,
                });
                if self.meals_eaten() < self.meal_quota {
                    CustomerState::Ordering
                } else {
                    CustomerState::Done
                }
            }
            CustomerState::Abandoning(order) => {
                tracing::info!(
                    "{} waiting too long, abandoning order {}",
                    self.name,
                    order.id()
                );
                self.abandoned.push(order.id());
                drop(order);
                self.abandoning.pass(&mut self.rng).await;
                self.retry_pause.pass(&mut self.rng).await;
                CustomerState::Ordering
            }
            terminal @ (CustomerState::Done | CustomerState::Left) => terminal,
        };
        self.state = next;
        Ok(())
    }
}

impl Worker for Customer {
    type Summary = CustomerSummary;

    fn name(&self) -> &str {
        &self.name
    }

    async fn init(&mut self) {
        tracing::info!("{} arrives, hungry for {} meals", self.name, self.meal_quota);
    }

    fn should_stop(&self) -> bool {
        matches!(self.state, CustomerState::Done | CustomerState::Left)
    }

    async fn step(&mut self) -> Result<(), KitchenError> {
        let shutdown = self.shutdown.clone();
        let outcome = {
            let cancelled = pin!(shutdown.cancelled());
            let advance = pin!(self.advance());
            match select(cancelled, advance).await {
                Either::Left(_) => None,
                Either::Right((result, _)) => Some(result),
            }
        };
        match outcome {
            Some(result) => result,
            None => {
                self.state = CustomerState::Left;
                Ok(())
            }
        }
    }

    fn finish(self) -> CustomerSummary {
        let finished = matches!(self.state, CustomerState::Done);
        if finished {
            tracing::info!("{} going home", self.name);
        } else {
            tracing::info!(
                "{} leaving after {} of {} meals",
                self.name,
                self.meals.len(),
                self.meal_quota
            );
        }
        CustomerSummary {
            name: self.name,
            meals: self.meals,
            abandoned: self.abandoned,
            orders_placed: self.orders_placed,
            finished,
        }
    }
}
