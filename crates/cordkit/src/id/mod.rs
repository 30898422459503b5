mod layout;
#[cfg(feature = "serde")]
mod report;
mod snowflake;

pub use layout::FieldLayout;
#[cfg(feature = "serde")]
pub use report::*;
pub use snowflake::*;
