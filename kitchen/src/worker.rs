//! Worker trait: the shape of a long-lived restaurant task, similar to an Erlang process.
//! Cooks and customers implement it; see `cook.rs` for the smallest example.

use std::future::Future;

use trattoria_rt::{self as rt, JoinHandle};

use crate::error::KitchenError;

pub trait Worker
where
    Self: Send + Sized + 'static,
{
    /// What the worker reports once it has stopped.
    type Summary: Send + 'static;

    fn name(&self) -> &str;

    fn spawn(self) -> JoinHandle<Result<Self::Summary, KitchenError>> {
        rt::spawn(self.run())
    }

    fn run(mut self) -> impl Future<Output = Result<Self::Summary, KitchenError>> + Send {
        async move {
            self.init().await;
            self.main_loop().await?;
            Ok(self.finish())
        }
    }

    fn main_loop(&mut self) -> impl Future<Output = Result<(), KitchenError>> + Send {
        async {
            loop {
                if self.should_stop() {
                    break;
                }

                self.step().await?;
            }
            Ok(())
        }
    }

    fn init(&mut self) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn should_stop(&self) -> bool;

    /// Runs a single state transition.
    fn step(&mut self) -> impl Future<Output = Result<(), KitchenError>> + Send;

    fn finish(self) -> Self::Summary;
}
