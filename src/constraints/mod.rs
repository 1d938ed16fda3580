//! Constraint model
//!
//! Turns feedback into facts about the target, merges them across rounds and
//! filters candidate words against them.

mod filter;
mod set;

pub use filter::{Filtered, FilteredIter};
pub use set::ConstraintSet;
