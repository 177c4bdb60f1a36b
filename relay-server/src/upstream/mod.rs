pub mod error;
pub mod generative;
pub mod messaging;
