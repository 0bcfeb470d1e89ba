//! # trattoria-kitchen
//!
//! A restaurant simulated as concurrent producers and consumers:
//!
//! - **[`Customer`]s** place orders and wait a bounded time for the waiter to take them
//! - the **waiter** ([`waiter::channel`]) is a bounded FIFO between customers and cooks
//! - **[`Cook`]s** take one order at a time and hand the meal back on the order's
//!   private reply slot
//! - the **[`Restaurant`]** starts everyone, waits on a [`CompletionBarrier`] for all
//!   customers, then closes the queue so the cooks stop
//!
//! ```ignore
//! use trattoria_kitchen::{Restaurant, RestaurantConfig};
//! use trattoria_rt as rt;
//!
//! let report = rt::run(async {
//!     Restaurant::new(RestaurantConfig::default())?.serve().await
//! })?;
//! ```

pub mod barrier;
pub mod config;
pub mod cook;
pub mod customer;
pub mod delay;
pub mod error;
pub mod order;
pub mod restaurant;
pub mod waiter;
pub mod worker;

#[cfg(test)]
mod restaurant_tests;

pub use barrier::{Arrival, CompletionBarrier};
pub use config::RestaurantConfig;
pub use cook::{Cook, CookState, CookSummary};
pub use customer::{Customer, CustomerState, CustomerSummary, Meal};
pub use delay::Jitter;
pub use error::KitchenError;
pub use order::{Order, OrderId};
pub use restaurant::{Restaurant, ServiceReport};
pub use waiter::{Pass, Submission, Waiter};
pub use worker::Worker;
