//! Factory methods for creating fixture-table rows in tests.
//!
//! Factories insert rows with sensible defaults so tests can put the database into the
//! partially seeded states the seeder has to cope with: an account without a workspace,
//! a workspace without its membership, and so on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::account::create_account(&db).await?;
//! let workspace = factory::workspace::create_workspace(&db, &account.id).await?;
//!
//! // Or everything at once
//! let (account, workspace, membership) = factory::helpers::create_owned_workspace(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let account = factory::account::AccountFactory::new(&db)
//!     .id("usrTestUserId")
//!     .email("test@e2e.com")
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod base;
pub mod helpers;
pub mod membership;
pub mod workspace;

pub use account::create_account;
pub use base::create_base;
pub use membership::create_membership;
pub use workspace::create_workspace;
