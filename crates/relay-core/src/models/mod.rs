pub mod linked_identity;
pub mod reminder;
