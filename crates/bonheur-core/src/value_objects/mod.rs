//! Value objects - immutable types that represent domain concepts

mod snowflake;

pub use snowflake::{InvalidWorkerId, Snowflake, SnowflakeGenerator, SnowflakeParseError};
