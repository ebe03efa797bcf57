//! SeaORM entities for the e2e fixture tables.
//!
//! The four tables mirror the baseline dataset the end-to-end suite expects:
//! an account, the workspace it owns, the owner membership linking the two, and
//! a base (sub-workspace) nested under the workspace.

pub mod prelude;

pub mod account;
pub mod base;
pub mod membership;
pub mod workspace;
