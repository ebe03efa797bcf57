//! Provisions the baseline fixture an end-to-end test suite expects.
//!
//! A run optionally clones a file-based database so it never touches shared state, then
//! seeds a known account, workspace, owner membership and base inside one serializable
//! transaction. Seeding is idempotent: rows that already exist are left alone.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
