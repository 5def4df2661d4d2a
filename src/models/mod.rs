//! Data models for the rental property listing backend.
//!
//! These models match the admin UI's property table and filter bar field for field.

mod filter;
mod page;
mod property;

pub use filter::*;
pub use page::*;
pub use property::*;
