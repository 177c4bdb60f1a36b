pub mod chat;
pub mod error;
pub mod identity;
pub mod reminders;
