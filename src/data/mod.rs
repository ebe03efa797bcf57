//! Database repository layer for the fixture tables.
//!
//! Repositories are generic over `sea_orm::ConnectionTrait` so the seeder can run every
//! lookup and insert inside one transaction. They use SeaORM entity models internally and
//! return domain models from `crate::model`. `store` exposes the operations the seeder
//! needs as the `FixtureStore` trait.

pub mod account;
pub mod base;
pub mod membership;
pub mod namespace;
pub mod store;
pub mod workspace;

#[cfg(test)]
mod test;
