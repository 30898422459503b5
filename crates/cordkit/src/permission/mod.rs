mod catalog;
mod set;

pub use catalog::*;
pub use set::*;
