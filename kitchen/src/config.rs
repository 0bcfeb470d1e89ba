//! Tunables for one restaurant run.
//!
//! Defaults reproduce the classic setup: three cooks, ten customers eating five
//! meals each, a waiter queue of three and a seven second patience window.

use std::collections::HashSet;
use std::time::Duration;

use crate::delay::Jitter;
use crate::error::KitchenError;

const COOKS: [&str; 3] = ["Remy", "Colette", "Linguini"];
const CUSTOMERS: [&str; 10] = [
    "Ani", "Bai", "Cat", "Dao", "Eve", "Fay", "Gus", "Hua", "Iza", "Jai",
];

#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    pub cooks: Vec<String>,
    pub customers: Vec<String>,
    /// Meals a customer must actually eat before going home.
    pub meal_quota: u32,
    /// Orders the waiter can hold before customers start waiting.
    pub queue_capacity: usize,
    /// How long a customer waits for the waiter to take an order.
    pub order_timeout: Duration,
    pub cooking: Jitter,
    pub eating: Jitter,
    pub abandoning: Jitter,
    /// Extra pause after abandoning, before the next order.
    pub retry_pause: Jitter,
    /// How long cooks get to notice the closed queue before the restaurant stops waiting.
    pub closing_grace: Duration,
    /// Seeds every worker's jitter when set; otherwise each run draws from entropy.
    pub seed: Option<u64>,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            cooks: COOKS.iter().map(|name| name.to_string()).collect(),
            customers: CUSTOMERS.iter().map(|name| name.to_string()).collect(),
            meal_quota: 5,
            queue_capacity: 3,
            order_timeout: Duration::from_secs(7),
            cooking: Jitter::work(10),
            eating: Jitter::work(2),
            abandoning: Jitter::work(5),
            retry_pause: Jitter::new(Duration::from_millis(2500), Duration::from_millis(2500)),
            closing_grace: Duration::from_secs(1),
            seed: None,
        }
    }
}

impl RestaurantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cooks<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cooks = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_customers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customers = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_meal_quota(mut self, meals: u32) -> Self {
        self.meal_quota = meals;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_order_timeout(mut self, timeout: Duration) -> Self {
        self.order_timeout = timeout;
        self
    }

    pub fn with_cooking(mut self, jitter: Jitter) -> Self {
        self.cooking = jitter;
        self
    }

    pub fn with_eating(mut self, jitter: Jitter) -> Self {
        self.eating = jitter;
        self
    }

    pub fn with_abandoning(mut self, jitter: Jitter) -> Self {
        self.abandoning = jitter;
        self
    }

    pub fn with_retry_pause(mut self, jitter: Jitter) -> Self {
        self.retry_pause = jitter;
        self
    }

    pub fn with_closing_grace(mut self, grace: Duration) -> Self {
        self.closing_grace = grace;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), KitchenError> {
        if self.queue_capacity == 0 {
            return Err(KitchenError::InvalidConfig(
                "queue capacity must be at least 1".to_string(),
            ));
        }
        let mut names = HashSet::new();
        for name in self.cooks.iter().chain(self.customers.iter()) {
            if !names.insert(name.as_str()) {
                return Err(KitchenError::InvalidConfig(format!(
                    "`{name}` appears more than once"
                )));
            }
        }
        Ok(())
    }
}
