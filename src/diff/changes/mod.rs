//! Change computer implementations.
//!
//! This module provides concrete implementations of the `ChangeComputer` trait
//! for each type of change: property membership, property fields, and groups.

mod fields;
mod groups;
mod membership;

pub use fields::FieldChangeComputer;
pub use groups::GroupChangeComputer;
pub use membership::MembershipChangeComputer;
