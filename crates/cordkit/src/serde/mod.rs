//! Serde support.
//!
//! [`crate::Snowflake`] and [`crate::PermissionSet`] serialize as decimal
//! strings and deserialize from either a decimal string or a native integer.
//! [`crate::Color`] serializes as a decimal integer and deserializes from an
//! integer or a `#RRGGBB` string.
//! The helper modules cover fields that need a different representation.

mod color;
mod decimal;
mod permission;
mod snowflake;

pub use decimal::as_decimal_u64;
pub use snowflake::as_native_snowflake;
