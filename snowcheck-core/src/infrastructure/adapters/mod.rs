pub mod snowflake;

pub use snowflake::SnowflakeDriver;
