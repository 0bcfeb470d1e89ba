use std::collections::HashSet;
use std::time::Duration;

use trattoria_rt::CancellationToken;

use crate::delay::Jitter;
use crate::{KitchenError, Restaurant, RestaurantConfig};

fn quick() -> RestaurantConfig {
    RestaurantConfig::new()
        .with_order_timeout(Duration::from_millis(50))
        .with_eating(Jitter::fixed(Duration::from_millis(10)))
        .with_abandoning(Jitter::fixed(Duration::from_millis(10)))
        .with_retry_pause(Jitter::fixed(Duration::from_millis(10)))
        .with_seed(11)
}

#[tokio::test(start_paused = true)]
async fn default_service_feeds_every_customer() {
    let config = RestaurantConfig::default().with_seed(7);
    let cooks: HashSet<String> = config.cooks.iter().cloned().collect();

    let report = Restaurant::new(config).unwrap().serve().await.unwrap();

    assert_eq!(report.customers.len(), 10);
    assert_eq!(report.cooks.len(), 3);
    assert_eq!(report.cooks_still_working, 0);
    assert_eq!(report.meals_served(), 50);

    let mut issued = HashSet::new();
    for customer in &report.customers {
        assert!(customer.finished, "{} did not finish", customer.name);
        assert_eq!(customer.meals.len(), 5);
        assert_eq!(
            customer.orders_placed as usize,
            customer.meals.len() + customer.abandoned.len()
        );
        for meal in &customer.meals {
            assert!(cooks.contains(&meal.prepared_by));
            assert!(issued.insert(meal.order), "order {} reused", meal.order);
        }
        for id in &customer.abandoned {
            assert!(issued.insert(*id), "order {id} reused");
        }
    }

    let served: HashSet<_> = report
        .customers
        .iter()
        .flat_map(|c| c.meals.iter().map(|m| m.order))
        .collect();
    let mut prepared = HashSet::new();
    for cook in &report.cooks {
        for id in &cook.prepared {
            assert!(prepared.insert(*id), "order {id} cooked twice");
        }
    }
    assert_eq!(prepared, served);
}

#[tokio::test(start_paused = true)]
async fn single_slot_with_slow_cook_still_serves_everyone() {
    let config = quick()
        .with_cooks(["Remy"])
        .with_customers(["Ani", "Bai", "Cat"])
        .with_meal_quota(1)
        .with_queue_capacity(1)
        .with_cooking(Jitter::fixed(Duration::from_millis(200)));

    let report = Restaurant::new(config).unwrap().serve().await.unwrap();

    for customer in &report.customers {
        assert!(customer.finished);
        assert_eq!(customer.meals.len(), 1);
        assert_eq!(customer.meals[0].prepared_by, "Remy");
    }
    // One order in the cook's hands and one in the slot leave the third waiting too long.
    assert!(report.orders_abandoned() >= 1);
    assert_eq!(report.cooks[0].prepared.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn lone_customer_with_one_slot() {
    let config = quick()
        .with_cooks(["Remy"])
        .with_customers(["Ani"])
        .with_meal_quota(1)
        .with_queue_capacity(1)
        .with_cooking(Jitter::fixed(Duration::from_millis(200)));

    let report = Restaurant::new(config).unwrap().serve().await.unwrap();

    let ani = &report.customers[0];
    assert!(ani.finished);
    assert_eq!(ani.meals.len(), 1);
    assert!(ani.abandoned.is_empty());
}

#[tokio::test(start_paused = true)]
async fn no_cooks_means_nobody_goes_home() {
    // A single slot fills with the first order; everyone after that times out.
    let config = quick()
        .with_cooks(Vec::<String>::new())
        .with_customers(["Ani", "Bai"])
        .with_queue_capacity(1);

    let restaurant = Restaurant::new(config).unwrap();
    let outcome = tokio::time::timeout(Duration::from_secs(5), restaurant.serve()).await;

    assert!(outcome.is_err(), "customers finished without any cook");
}

#[tokio::test(start_paused = true)]
async fn shutdown_without_cooks_closes_cleanly() {
    let config = quick()
        .with_cooks(Vec::<String>::new())
        .with_customers(["Ani", "Bai", "Cat"])
        .with_queue_capacity(1);
    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            shutdown.cancel();
        }
    });

    let report = Restaurant::new(config)
        .unwrap()
        .serve_until(shutdown)
        .await
        .unwrap();

    assert!(report.cooks.is_empty());
    assert_eq!(report.meals_served(), 0);
    assert!(report.customers.iter().all(|c| !c.finished));

    // The first order takes the only slot and its customer waits on it for good.
    let (stuck, retrying): (Vec<_>, Vec<_>) = report
        .customers
        .iter()
        .partition(|c| c.abandoned.is_empty());
    assert_eq!(stuck.len(), 1);
    assert_eq!(stuck[0].orders_placed, 1);

    // Everyone else keeps timing out and ordering again.
    assert_eq!(retrying.len(), 2);
    for customer in retrying {
        assert!(
            customer.abandoned.len() >= 2,
            "{} gave up only {} times",
            customer.name,
            customer.abandoned.len()
        );
    }
}

#[tokio::test(start_paused = true)]
async fn cook_busy_past_the_grace_is_reported() {
    let config = quick()
        .with_cooks(["Linguini"])
        .with_customers(["Ani"])
        .with_cooking(Jitter::fixed(Duration::from_secs(10)))
        .with_closing_grace(Duration::from_secs(1));
    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            shutdown.cancel();
        }
    });

    let report = Restaurant::new(config)
        .unwrap()
        .serve_until(shutdown)
        .await
        .unwrap();

    assert!(report.cooks.is_empty());
    assert_eq!(report.cooks_still_working, 1);
    assert!(!report.customers[0].finished);
}

#[test]
fn invalid_config_never_opens() {
    let result = Restaurant::new(RestaurantConfig::new().with_queue_capacity(0));
    assert!(matches!(result, Err(KitchenError::InvalidConfig(_))));
}
