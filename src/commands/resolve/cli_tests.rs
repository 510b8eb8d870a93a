//! CLI parsing tests for resolve command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::output::OutputFormat;
    use clap::Parser;
    use rstest::rstest;

    // =========================================================================
    // Macro-generated tests (standard patterns)
    // =========================================================================

    crate::cli_required_arg_test! {
        command: "resolve",
        test_name: test_requires_file,
        required_arg: "--file",
    }

    crate::cli_error_test! {
        command: "resolve",
        test_name: test_missing_file_rejected,
        args: ["--file", "nonexistent_descriptors.json"],
    }

    crate::cli_defaults_test! {
        command: "resolve",
        variant: Resolve,
        required_args: ["--file", "Cargo.toml"],
        defaults: {
            type_name: None,
        },
    }

    crate::cli_option_test_with_required! {
        command: "resolve",
        variant: Resolve,
        required_args: ["--file", "Cargo.toml"],
        test_name: test_with_type,
        args: ["--type", "Account"],
        field: type_name,
        expected: Some("Account".to_string()),
    }

    crate::cli_option_test_with_required! {
        command: "resolve",
        variant: Resolve,
        required_args: ["--file", "Cargo.toml"],
        test_name: test_with_short_type,
        args: ["-t", "KeyORM"],
        field: type_name,
        expected: Some("KeyORM".to_string()),
    }

    crate::cli_global_option_test! {
        command: "resolve",
        required_args: ["--file", "Cargo.toml"],
        test_name: test_with_json_format,
        args: ["--format", "json"],
        field: format,
        expected: OutputFormat::Json,
    }

    // =========================================================================
    // Edge case tests
    // =========================================================================

    #[rstest]
    fn test_file_not_found_message() {
        let result = Args::try_parse_from(["ormgen", "resolve", "-f", "missing.json"]);
        assert!(result.unwrap_err().to_string().contains("File not found: missing.json"));
    }
}
