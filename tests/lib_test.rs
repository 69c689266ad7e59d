//! Library integration tests.

use venv_shims::ShimsError;

#[test]
fn error_types_are_public() {
    let err = ShimsError::UnsupportedRuntime {
        runtime: "python3.12".into(),
        version: "3.12".into(),
    };
    assert!(err.to_string().contains("python3.12"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> venv_shims::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use venv_shims::cli::{Cli, Commands};

    let cli = Cli::parse_from(["venv-shims", "plan", "--json"]);

    if let Some(Commands::Plan(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Plan command");
    }
}

#[test]
fn builtin_catalog_covers_supported_runtimes() {
    use venv_shims::releases::ReleaseCatalog;
    use venv_shims::runtime::RuntimeVersion;

    let catalog = ReleaseCatalog::builtin();
    for (major, minor, release) in [
        (2, 7, "16.7.9"),
        (3, 4, "16.7.9"),
        (3, 5, "16.7.9"),
        (3, 6, "16.7.9"),
        (3, 7, "20.14.1"),
        (3, 8, "20.14.1"),
        (3, 9, "20.14.1"),
        (3, 10, "20.14.1"),
    ] {
        let resolved = catalog
            .resolve("python", RuntimeVersion::new(major, minor))
            .unwrap();
        assert_eq!(resolved.version, release);
    }
    assert!(catalog
        .resolve("python", RuntimeVersion::new(3, 11))
        .is_err());
}
