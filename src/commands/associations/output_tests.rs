//! Output formatting tests for associations command.

#[cfg(test)]
mod tests {
    use super::super::execute::{AssociationEntry, AssociationsResult};
    use crate::output::TypeGroup;
    use crate::schema::RelationKind;
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const EMPTY_TABLE: &str = "\
Associations: empty.json

No associations found.";

    const SINGLE_TABLE: &str = "\
Associations: accounts.json

Found 2 association(s) in 1 type(s):

AccountORM (table: accounts, module: acme.accounts)
  Profile [has-one] -> ProfileORM
    key: AccountId -> Id
  Groups [many-to-many] -> GroupORM
    key: Id -> Id
    join: account_groups (account_id, group_id)";

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[fixture]
    fn empty_result() -> AssociationsResult {
        AssociationsResult {
            source: "empty.json".to_string(),
            total_items: 0,
            items: vec![],
            warnings: vec![],
        }
    }

    #[fixture]
    fn single_result() -> AssociationsResult {
        AssociationsResult {
            source: "accounts.json".to_string(),
            total_items: 2,
            items: vec![TypeGroup {
                name: "AccountORM".to_string(),
                table: "accounts".to_string(),
                module: "acme.accounts".to_string(),
                entries: vec![
                    AssociationEntry {
                        field: "Profile".to_string(),
                        kind: RelationKind::HasOne,
                        target: "ProfileORM".to_string(),
                        foreign_key: Some("AccountId".to_string()),
                        references: Some("Id".to_string()),
                        join_table: None,
                        join_foreign_key: None,
                        join_references: None,
                    },
                    AssociationEntry {
                        field: "Groups".to_string(),
                        kind: RelationKind::ManyToMany,
                        target: "GroupORM".to_string(),
                        foreign_key: Some("Id".to_string()),
                        references: Some("Id".to_string()),
                        join_table: Some("account_groups".to_string()),
                        join_foreign_key: Some("account_id".to_string()),
                        join_references: Some("group_id".to_string()),
                    },
                ],
            }],
            warnings: vec![],
        }
    }

    // =========================================================================
    // Table format tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: AssociationsResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_single,
        fixture: single_result,
        fixture_type: AssociationsResult,
        expected: SINGLE_TABLE,
    }

    // =========================================================================
    // JSON format tests
    // =========================================================================

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: single_result,
        fixture_type: AssociationsResult,
        assertions: {
            "source": "accounts.json",
            "total_items": 2,
        },
    }

    #[rstest]
    fn test_format_json_kind_is_snake_case(single_result: AssociationsResult) {
        use crate::output::{OutputFormat, Outputable};
        let output = single_result.format(OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Valid JSON");
        let entries = &parsed["items"][0]["entries"];
        assert_eq!(entries[0]["kind"], "has_one");
        assert_eq!(entries[1]["kind"], "many_to_many");
        assert!(entries[0].get("join_table").is_none());
    }

    // =========================================================================
    // Toon format tests
    // =========================================================================

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: single_result,
        fixture_type: AssociationsResult,
        contains: ["source: accounts.json", "account_groups"],
    }
}
