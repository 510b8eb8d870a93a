//! Execute tests for associations command.

#[cfg(test)]
mod tests {
    use super::super::AssociationsCmd;
    use crate::fixtures;
    use crate::schema::RelationKind;
    use rstest::{fixture, rstest};

    crate::descriptor_file_fixture! {
        fixture_name: accounts_file,
        json: fixtures::ACCOUNTS,
    }

    crate::descriptor_file_fixture! {
        fixture_name: cross_module_file,
        json: fixtures::CROSS_MODULE,
    }

    // =========================================================================
    // Core functionality tests
    // =========================================================================

    // Account: profile, owned_keys, shared_keys, groups, friends; Key: owner
    crate::execute_count_test! {
        test_name: test_all_associations,
        fixture: accounts_file,
        cmd: |path| AssociationsCmd { file: path, kind: None },
        expected: 6,
    }

    crate::execute_test! {
        test_name: test_types_without_associations_omitted,
        fixture: accounts_file,
        cmd: |path| AssociationsCmd { file: path, kind: None },
        assertions: |result| {
            let names: Vec<_> = result.items.iter().map(|group| group.name.as_str()).collect();
            assert_eq!(names, vec!["AccountORM", "KeyORM"]);
        },
    }

    crate::execute_test! {
        test_name: test_has_one_keys,
        fixture: accounts_file,
        cmd: |path| AssociationsCmd { file: path, kind: Some(RelationKind::HasOne) },
        assertions: |result| {
            assert_eq!(result.total_items, 1);
            let profile = &result.items[0].entries[0];
            assert_eq!(profile.field, "Profile");
            assert_eq!(profile.target, "ProfileORM");
            assert_eq!(profile.foreign_key.as_deref(), Some("AccountId"));
            assert_eq!(profile.references.as_deref(), Some("Id"));
            assert!(profile.join_table.is_none());
        },
    }

    crate::execute_test! {
        test_name: test_many_to_many_join_tables,
        fixture: accounts_file,
        cmd: |path| AssociationsCmd { file: path, kind: Some(RelationKind::ManyToMany) },
        assertions: |result| {
            let tables: Vec<_> = result.items[0]
                .entries
                .iter()
                .map(|entry| entry.join_table.as_deref().unwrap())
                .collect();
            assert_eq!(tables, vec!["account_groups", "account_friends"]);
            assert_eq!(result.items[0].entries[1].join_references.as_deref(), Some("friend_id"));
        },
    }

    crate::execute_test! {
        test_name: test_belongs_to_only,
        fixture: accounts_file,
        cmd: |path| AssociationsCmd { file: path, kind: Some(RelationKind::BelongsTo) },
        assertions: |result| {
            assert_eq!(result.items.len(), 1);
            assert_eq!(result.items[0].name, "KeyORM");
            assert_eq!(result.items[0].entries[0].foreign_key.as_deref(), Some("AccountId"));
        },
    }

    // =========================================================================
    // Error tests
    // =========================================================================

    #[rstest]
    fn test_cross_module_has_many_fails(cross_module_file: tempfile::NamedTempFile) {
        use crate::commands::Execute;
        use crate::config::ResolverConfig;

        let cmd = AssociationsCmd {
            file: cross_module_file.path().to_path_buf(),
            kind: None,
        };
        let err = cmd.execute(&ResolverConfig::default()).unwrap_err();
        assert!(err.to_string().contains("cannot be used for has-many"));
    }
}
