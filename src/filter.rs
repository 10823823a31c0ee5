//! City prefix filter.

use crate::models::UserRecord;

/// Case-insensitive prefix test against a record's city.
///
/// Both sides are upper-cased with full Unicode case mapping before
/// comparison. An empty prefix matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityFilter {
    prefix: String,
    folded: String,
}

impl CityFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let folded = prefix.to_uppercase();
        Self { prefix, folded }
    }

    /// The prefix as configured, for display.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the record's city starts with the prefix.
    ///
    /// Records without a city are compared as `N/A`, matching what gets printed.
    pub fn matches(&self, user: &UserRecord) -> bool {
        user.city().to_uppercase().starts_with(&self.folded)
    }

    /// Matching records in input order.
    pub fn apply<'a>(&self, users: &'a [UserRecord]) -> impl Iterator<Item = &'a UserRecord> {
        users.iter().filter(move |u| self.matches(u))
    }
}
