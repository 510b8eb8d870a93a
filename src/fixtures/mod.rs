//! Test fixtures for resolver and command tests.
//!
//! Descriptor sets are loaded at compile time using `include_str!`.
//!
//! ## Available Fixtures
//!
//! - [`ACCOUNTS`] - Single module exercising every relation kind
//! - [`CROSS_MODULE`] - Has-many from one module into another

/// Single-module descriptor set.
///
/// Contains:
/// - 5 resolvable types: Account, Profile, Key, Group, Settings
/// - 1 plain message (Audit) used as a `references_type` target
/// - 1 map entry that must be ignored
/// - Account: has-one Profile, two has-many Key fields (ambiguous),
///   many-to-many Group, self many-to-many, embedded Settings, a dropped field
/// - Key: belongs-to Account
/// - Group: uuid identifier primary key and an explicit table name
/// - Settings: one recognised and one unrecognised extra field
pub const ACCOUNTS: &str = include_str!("accounts.json");

/// Two modules: `acme.billing.Invoice` has-many `acme.ledger.LineItem`.
/// LineItem does not declare the `InvoiceId` foreign key.
pub const CROSS_MODULE: &str = include_str!("cross_module.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_is_valid_json() {
        let _: serde_json::Value = serde_json::from_str(ACCOUNTS)
            .expect("ACCOUNTS should be valid JSON");
    }

    #[test]
    fn test_cross_module_is_valid_json() {
        let _: serde_json::Value = serde_json::from_str(CROSS_MODULE)
            .expect("CROSS_MODULE should be valid JSON");
    }
}
