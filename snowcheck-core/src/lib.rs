// snowcheck-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)]
// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Driver -> Connection -> Cursor contracts, independent of any vendor.
pub mod ports;

// 2. Domain
// Connection parameters, secrets, version report. Depends on nothing else.
pub mod domain;

// 3. Infrastructure (Adapters)
// Snowflake client library, profiles file, env layering.
pub mod infrastructure;

// 4. Application (Use Cases)
// The connectivity probe with scoped release of cursor and connection.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::SnowcheckError;
