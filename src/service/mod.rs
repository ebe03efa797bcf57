//! Fixture provisioning services.
//!
//! - `isolation` clones a file-based database per run and repoints the connection target
//! - `password` wraps the password-hash collaborator
//! - `seed` creates the missing fixture rows inside one transaction
//! - `setup` runs the whole routine in order

pub mod isolation;
pub mod password;
pub mod seed;
pub mod setup;

#[cfg(test)]
mod test;
