pub use super::account::Entity as Account;
pub use super::base::Entity as Base;
pub use super::membership::Entity as Membership;
pub use super::workspace::Entity as Workspace;
