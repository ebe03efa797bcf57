//! Password-hash collaborator.

use bcrypt::Version;

use crate::{error::AppError, model::fixture::PasswordCredentials};

/// Default bcrypt cost used for the fixture account.
pub const DEFAULT_COST: u32 = 10;

/// One-way transform from a password to a salt/hash pair.
///
/// The only guarantee relied on is that the same password verifies against the hash.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<PasswordCredentials, AppError>;
}

/// bcrypt hasher producing `$2b$` hashes.
///
/// The salt is stored in the `$2b$<cost>$<22 chars>` form, which is also the prefix of the
/// hash.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<PasswordCredentials, AppError> {
        let parts = bcrypt::hash_with_result(password, self.cost)?;

        Ok(PasswordCredentials {
            salt: format!("$2b${:02}${}", parts.get_cost(), parts.get_salt()),
            hash: parts.format_for_version(Version::TwoB),
        })
    }
}
