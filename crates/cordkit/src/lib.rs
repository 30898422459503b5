#![doc = include_str!("../README.md")]

mod cdn;
mod channel;
mod color;
mod decimal;
#[cfg(feature = "json")]
mod embed;
mod error;
mod id;
mod invite;
mod markdown;
mod permission;
#[cfg(feature = "serde")]
pub mod serde;
mod text;
mod time;
mod timestamp;

pub use crate::cdn::*;
pub use crate::channel::*;
pub use crate::color::*;
#[cfg(feature = "json")]
pub use crate::embed::*;
pub use crate::error::*;
pub use crate::id::*;
pub use crate::invite::*;
pub use crate::markdown::*;
pub use crate::permission::*;
pub use crate::text::*;
pub use crate::time::*;
pub use crate::timestamp::*;
