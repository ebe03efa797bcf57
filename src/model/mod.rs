//! Domain models and operation parameters.
//!
//! Entity models from the `entity` crate stay inside the data layer; repositories convert
//! them into the types defined here at the boundary.

pub mod account;
pub mod base;
pub mod driver;
pub mod fixture;
pub mod membership;
pub mod report;
pub mod workspace;
