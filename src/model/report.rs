use serde::Serialize;

/// What a seeding run created.
///
/// A run against an already seeded database reports nothing created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub account_created: bool,
    pub workspace_created: bool,
    pub membership_created: bool,
    pub namespace_provisioned: bool,
    pub base_created: bool,
}

impl SeedReport {
    /// Whether the run only read existing rows.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}
