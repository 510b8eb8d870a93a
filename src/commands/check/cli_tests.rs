//! CLI parsing tests for check command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::{Engine, EnumMode};
    use clap::Parser;
    use rstest::{fixture, rstest};
    use std::fs::File;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    #[fixture]
    fn temp_file() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("descriptors.json");
        File::create(&path).unwrap();
        (dir, path)
    }

    // =========================================================================
    // Macro-generated tests (standard patterns)
    // =========================================================================

    crate::cli_required_arg_test! {
        command: "check",
        test_name: test_requires_file,
        required_arg: "--file",
    }

    crate::cli_global_option_test! {
        command: "check",
        required_args: ["--file", "Cargo.toml"],
        test_name: test_with_engine,
        args: ["--engine", "postgres"],
        field: engine,
        expected: Some(Engine::Postgres),
    }

    crate::cli_global_option_test! {
        command: "check",
        required_args: ["--file", "Cargo.toml"],
        test_name: test_with_enums,
        args: ["--enums", "string"],
        field: enums,
        expected: Some(EnumMode::String),
    }

    crate::cli_global_option_test! {
        command: "check",
        required_args: ["--file", "Cargo.toml"],
        test_name: test_with_quiet,
        args: ["-q"],
        field: quiet,
        expected: true,
    }

    crate::cli_global_option_test! {
        command: "check",
        required_args: ["--file", "Cargo.toml"],
        test_name: test_with_verbosity,
        args: ["-vv"],
        field: verbose,
        expected: 2,
    }

    crate::cli_error_test! {
        command: "check",
        test_name: test_invalid_engine_rejected,
        args: ["--file", "Cargo.toml", "--engine", "oracle"],
    }

    // =========================================================================
    // Edge case tests
    // =========================================================================

    #[rstest]
    fn test_with_existing_file(temp_file: (TempDir, PathBuf)) {
        let (_dir, path) = temp_file;
        let result = Args::try_parse_from(["ormgen", "check", "--file", path.to_str().unwrap()]);
        assert!(result.is_ok());
    }

    #[rstest]
    fn test_global_flags_before_subcommand() {
        let args = Args::try_parse_from(["ormgen", "--quiet", "check", "--file", "Cargo.toml"]).unwrap();
        assert!(args.quiet);
        assert!(args.config.is_none());
    }

    #[rstest]
    fn test_unknown_subcommand_parses() {
        let args = Args::try_parse_from(["ormgen", "emit"]).unwrap();
        assert!(matches!(args.command, crate::commands::Command::Unknown(_)));
    }
}
