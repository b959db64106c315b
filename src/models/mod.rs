//! Core data models for the weapon catalog.

mod body_part;
mod category;
mod comparison;
mod objective;
mod polarity;
mod weapon;

pub use body_part::*;
pub use category::*;
pub use comparison::*;
pub use objective::*;
pub use polarity::*;
pub use weapon::*;
