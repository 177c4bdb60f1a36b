pub mod identity_store;
pub mod reminder_queue;
pub mod seed_file;
