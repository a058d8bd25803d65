// snowcheck-core/src/application/mod.rs

pub mod probe;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use snowcheck_core::application::check_connection;`

pub use probe::{PROBE_QUERY, check_connection};
