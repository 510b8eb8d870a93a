//! Execute tests for check command.

#[cfg(test)]
mod tests {
    use super::super::CheckCmd;
    use crate::commands::Execute;
    use crate::config::ResolverConfig;
    use crate::fixtures;
    use crate::test_utils::create_temp_json_file;
    use rstest::{fixture, rstest};

    crate::descriptor_file_fixture! {
        fixture_name: accounts_file,
        json: fixtures::ACCOUNTS,
    }

    #[rstest]
    fn test_check_accounts(accounts_file: tempfile::NamedTempFile) {
        let cmd = CheckCmd {
            file: accounts_file.path().to_path_buf(),
        };
        let result = cmd.execute(&ResolverConfig::default()).expect("Execute should succeed");
        assert_eq!(result.types, 5);
        assert_eq!(result.fields, 26);
        assert_eq!(result.stats.associations, 6);
        assert_eq!(result.stats.foreign_keys_created, 4);
        assert_eq!(result.stats.join_tables, 2);
        assert_eq!(result.warnings.len(), 1);
    }

    #[rstest]
    fn test_check_quiet_still_reports_warnings(accounts_file: tempfile::NamedTempFile) {
        let config = ResolverConfig {
            quiet: true,
            ..Default::default()
        };
        let cmd = CheckCmd {
            file: accounts_file.path().to_path_buf(),
        };
        let result = cmd.execute(&config).expect("Execute should succeed");
        assert_eq!(result.warnings.len(), 1);
    }

    #[rstest]
    fn test_check_without_ormable_types() {
        let file = create_temp_json_file(
            r#"{"modules": [{"name": "acme", "messages": [{"name": "Plain"}]}]}"#,
        );
        let cmd = CheckCmd {
            file: file.path().to_path_buf(),
        };
        let result = cmd.execute(&ResolverConfig::default()).expect("Execute should succeed");
        assert_eq!(result.types, 0);
        assert_eq!(result.fields, 0);
    }

    #[rstest]
    fn test_check_unreadable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CheckCmd {
            file: dir.path().to_path_buf(),
        };
        let err = cmd.execute(&ResolverConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read descriptor file"));
    }
}
