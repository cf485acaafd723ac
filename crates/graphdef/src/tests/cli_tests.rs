//! Tests for argument parsing, file filtering and logger configuration.

use crate::commands::CommandEnum;
use crate::commands::validate::has_matching_ext;
use crate::commands::validate::normalize_exts;
use crate::Cli;
use clap::Parser;
use std::path::Path;

// =============================================================================
// Arguments
// =============================================================================

/// Verifies that `validate` takes paths and defaults to the `gdef`
/// extension.
#[test]
fn validate_defaults() {
    let cli = Cli::try_parse_from(["graphdef", "validate", "api.gdef"]).unwrap();

    assert!(!cli.verbose);
    let Some(CommandEnum::Validate(cmd)) = cli.cmd else {
        panic!("expected the validate command");
    };
    let rendered = format!("{cmd:?}");
    assert!(rendered.contains("\"gdef\""));
    assert!(rendered.contains("json: false"));
}

/// Verifies that at least one path is required.
#[test]
fn validate_requires_paths() {
    assert!(Cli::try_parse_from(["graphdef", "validate"]).is_err());
}

/// Verifies the global verbose flag and comma-separated extensions.
#[test]
fn verbose_and_extensions() {
    let cli = Cli::try_parse_from([
        "graphdef",
        "-v",
        "validate",
        "--file-exts",
        "gdef,schema",
        "--json",
        "schemas/",
    ])
    .unwrap();

    assert!(cli.verbose);
    let rendered = format!("{:?}", cli.cmd);
    assert!(rendered.contains("\"schema\""));
    assert!(rendered.contains("json: true"));
}

// =============================================================================
// File filtering
// =============================================================================

/// Verifies that extensions are accepted with or without a leading dot.
#[test]
fn extensions_are_normalized() {
    let exts = normalize_exts(&[".gdef".to_string(), "schema".to_string(), " ".to_string()]);

    assert_eq!(exts.len(), 2);
    assert!(exts.contains("gdef"));
    assert!(exts.contains("schema"));
}

/// Verifies extension matching on file paths.
#[test]
fn extension_matching() {
    let exts = normalize_exts(&["gdef".to_string()]);

    assert!(has_matching_ext(Path::new("dir/api.gdef"), &exts));
    assert!(!has_matching_ext(Path::new("dir/api.graphql"), &exts));
    assert!(!has_matching_ext(Path::new("dir/gdef"), &exts));
}

// =============================================================================
// Logging
// =============================================================================

/// Verifies the accepted `LOG_LEVEL` spellings.
#[test]
fn log_levels() {
    assert_eq!(crate::parse_log_level("trace"), Some(tracing::Level::TRACE));
    assert_eq!(crate::parse_log_level(" DEBUG "), Some(tracing::Level::DEBUG));
    assert_eq!(crate::parse_log_level("verbose"), Some(tracing::Level::DEBUG));
    assert_eq!(crate::parse_log_level("info"), Some(tracing::Level::INFO));
    assert_eq!(crate::parse_log_level("loud"), None);
}
