use trattoria_rt::JoinError;

#[derive(Debug, thiserror::Error)]
pub enum KitchenError {
    #[error("invalid restaurant configuration: {0}")]
    InvalidConfig(String),
    /// A customer found the waiter queue closed while ordering. The coordinator
    /// only closes the queue once every customer has left, so this is a broken
    /// shutdown ordering rather than a runtime condition.
    #[error("waiter queue closed while {customer} was ordering")]
    WaiterClosed { customer: String },
    #[error("worker task failed: {0}")]
    Join(#[from] JoinError),
}
