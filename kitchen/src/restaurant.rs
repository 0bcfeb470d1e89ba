//! The coordinator: opens the restaurant, waits for every customer to go home,
//! then closes the waiter queue and lets the cooks finish.

use trattoria_rt::{self as rt, CancellationToken, Instant};

use crate::barrier::CompletionBarrier;
use crate::config::RestaurantConfig;
use crate::cook::{Cook, CookSummary};
use crate::customer::{Customer, CustomerSummary};
use crate::delay::worker_rng;
use crate::error::KitchenError;
use crate::waiter;
use crate::worker::Worker;

#[derive(Debug, Clone)]
pub struct ServiceReport {
    pub customers: Vec<CustomerSummary>,
    /// Cooks that stopped within the closing grace period.
    pub cooks: Vec<CookSummary>,
    pub cooks_still_working: usize,
}

impl ServiceReport {
    pub fn meals_served(&self) -> usize {
        self.customers.iter().map(|c| c.meals.len()).sum()
    }

    pub fn orders_abandoned(&self) -> usize {
        self.customers.iter().map(|c| c.abandoned.len()).sum()
    }
}

#[derive(Debug)]
pub struct Restaurant {
    config: RestaurantConfig,
}

impl Restaurant {
    pub fn new(config: RestaurantConfig) -> Result<Self, KitchenError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs until every customer has eaten its quota.
    pub async fn serve(self) -> Result<ServiceReport, KitchenError> {
        self.serve_until(CancellationToken::new()).await
    }

    /// Like [`serve`](Self::serve), but cancelling `shutdown` sends every
    /// customer home at its next wait. The queue is still only closed after all
    /// of them have left.
    pub async fn serve_until(
        self,
        shutdown: CancellationToken,
    ) -> Result<ServiceReport, KitchenError> {
        let config = self.config;
        tracing::info!("Welcome to the Restaurant!");

        let (waiter, pass) = waiter::channel(config.queue_capacity);

        let cooks: Vec<_> = config
            .cooks
            .iter()
            .enumerate()
            .map(|(index, name)| {
                Cook::new(
                    name.as_str(),
                    pass.clone(),
                    config.cooking,
                    worker_rng(config.seed, index as u64),
                )
                .spawn()
            })
            .collect();

        let (barrier, arrivals) = CompletionBarrier::with_parties(config.customers.len());
        let customers: Vec<_> = config
            .customers
            .iter()
            .zip(arrivals)
            .enumerate()
            .map(|(index, (name, arrival))| {
                let customer = Customer::new(
                    name.as_str(),
                    waiter.clone(),
                    &config,
                    worker_rng(config.seed, (config.cooks.len() + index) as u64),
                    shutdown.clone(),
                );
                rt::spawn(async move {
                    // The customer, and its waiter handle, is gone before it arrives.
                    let summary = customer.run().await;
                    arrival.arrive();
                    summary
                })
            })
            .collect();

        barrier.wait().await;
        tracing::debug!("every customer has left, closing the waiter queue");
        waiter.close();
        drop(pass);

        let mut customer_summaries = Vec::with_capacity(customers.len());
        for handle in customers {
            customer_summaries.push(handle.await??);
        }

        let deadline = Instant::now() + config.closing_grace;
        let mut cook_summaries = Vec::with_capacity(cooks.len());
        let mut cooks_still_working = 0;
        for mut handle in cooks {
            let left = deadline.saturating_duration_since(Instant::now());
            match rt::timeout(left, &mut handle).await {
                Ok(joined) => cook_summaries.push(joined??),
                Err(_) => {
                    handle.abort();
                    cooks_still_working += 1;
                }
            }
        }
        if cooks_still_working > 0 {
            tracing::warn!(cooks_still_working, "cooks still busy after the closing grace");
        }

        tracing::info!("Restaurant closing");
        Ok(ServiceReport {
            customers: customer_summaries,
            cooks: cook_summaries,
            cooks_still_working,
        })
    }
}
