//! The classic restaurant: three cooks, ten customers, five meals each.
//!
//! Run with `RUST_LOG=debug` to also see the waiter queue closing.
//! Ctrl+C sends the remaining customers home and closes up early.

use trattoria_kitchen::{KitchenError, Restaurant, RestaurantConfig};
use trattoria_rt::{self as rt, CancellationToken};

fn main() -> Result<(), KitchenError> {
    rt::run(async {
        let restaurant = Restaurant::new(RestaurantConfig::default())?;

        let shutdown = CancellationToken::new();
        rt::spawn({
            let shutdown = shutdown.clone();
            async move {
                if rt::ctrl_c().await.is_ok() {
                    tracing::info!("Interrupted, sending customers home");
                    shutdown.cancel();
                }
            }
        });

        let report = restaurant.serve_until(shutdown).await?;
        tracing::info!(
            meals = report.meals_served(),
            abandoned = report.orders_abandoned(),
            "Service report"
        );
        Ok::<(), KitchenError>(())
    })
}
