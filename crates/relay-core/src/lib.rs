pub mod cache_policy;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use cache_policy::AssetCachePolicy;
pub use error::{CoreError, Result};
pub use models::linked_identity::LinkedIdentity;
pub use models::reminder::Reminder;
pub use store::identity_store::{IdentityStore, LinkOutcome};
pub use store::reminder_queue::ReminderQueue;
pub use store::seed_file::load_seed_file;
