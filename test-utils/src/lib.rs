//! E2E Fixture Test Utils
//!
//! Provides shared testing utilities for the e2e fixture workspace. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases holding the
//! fixture tables, plus factories for putting those tables into partially seeded states.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for accounts, workspaces, memberships and bases
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn seeds_empty_database() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_fixture_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
