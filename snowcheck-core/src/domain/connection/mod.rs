// snowcheck-core/src/domain/connection/mod.rs

pub mod params;
pub mod secret;

pub use params::{ConnectionParams, RedactedParams};
pub use secret::Secret;
