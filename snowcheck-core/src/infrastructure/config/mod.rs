pub mod connection;

pub use connection::{
    ConnectionOutput, ConnectionProfile, ParamOverrides, load_profiles, resolve_params,
    select_output,
};
