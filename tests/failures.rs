use std::fs;
use std::time::SystemTime;

use flaggen::assets::errors::AssetError;
use flaggen::assets::{AssetTree, EmbedOptions};
use flaggen::commands::generate_all;
use flaggen::error::FlagGenError;
use flaggen::records::errors::RecordError;
use flaggen::render::errors::RenderError;

#[path = "common/mod.rs"]
mod common;

fn seed_previous_outputs(out: &std::path::Path) {
    fs::create_dir_all(out.join("altsrc")).unwrap();
    fs::write(common::cli_output(out), "previous cli").unwrap();
    fs::write(common::altsrc_output(out), "previous altsrc").unwrap();
}

#[test]
fn malformed_source_leaves_outputs_untouched() {
    let out = tempfile::tempdir().unwrap();
    seed_previous_outputs(out.path());

    let tree = common::scenario_tree(r#"[{"name": 123}]"#);
    let err = generate_all(&tree, &common::build_args(out.path())).unwrap_err();

    assert!(matches!(
        err,
        FlagGenError::Record(RecordError::DecodeFailed { .. })
    ));
    assert_eq!(
        common::read_outputs(out.path()),
        (b"previous cli".to_vec(), b"previous altsrc".to_vec())
    );
}

#[test]
fn missing_source_is_fatal() {
    let out = tempfile::tempdir().unwrap();
    let tree = AssetTree::new(EmbedOptions::default());

    let err = generate_all(&tree, &common::build_args(out.path())).unwrap_err();

    assert!(matches!(err, FlagGenError::Asset(AssetError::NotFound(_))));
    assert!(!common::cli_output(out.path()).exists());
}

#[test]
fn missing_template_stops_before_that_package_is_written() {
    let out = tempfile::tempdir().unwrap();
    let mut tree = AssetTree::new(EmbedOptions::default());
    tree.insert(
        "/source/flag-types.json",
        common::INT_RECORD.as_bytes().to_vec(),
        SystemTime::now(),
    );
    tree.insert(
        "/templates/cli_flags_generated.gotpl",
        common::FUNC_PER_RECORD.as_bytes().to_vec(),
        SystemTime::now(),
    );

    let err = generate_all(&tree, &common::build_args(out.path())).unwrap_err();

    match err {
        FlagGenError::InPackage { package, source } => {
            assert_eq!(package, "altsrc");
            assert!(matches!(*source, FlagGenError::Asset(AssetError::NotFound(_))));
        }
        other => panic!("unexpected error: {other}"),
    }
    // Earlier packages keep their output; there is no rollback.
    assert!(common::cli_output(out.path()).exists());
    assert!(!common::altsrc_output(out.path()).exists());
}

#[test]
fn template_syntax_errors_do_not_truncate_existing_output() {
    let out = tempfile::tempdir().unwrap();
    seed_previous_outputs(out.path());

    let mut tree = common::scenario_tree(common::INT_RECORD);
    tree.insert(
        "/templates/cli_flags_generated.gotpl",
        b"{% for flag in %}".to_vec(),
        SystemTime::now(),
    );

    let err = generate_all(&tree, &common::build_args(out.path())).unwrap_err();

    match err {
        FlagGenError::InPackage { package, source } => {
            assert_eq!(package, "cli");
            assert!(matches!(
                *source,
                FlagGenError::Render(RenderError::ParseFailed { .. })
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs::read(common::cli_output(out.path())).unwrap(), b"previous cli");
}

#[test]
fn error_messages_name_the_failing_package() {
    let out = tempfile::tempdir().unwrap();
    let mut tree = AssetTree::new(EmbedOptions::default());
    tree.insert(
        "/source/flag-types.json",
        b"[]".to_vec(),
        SystemTime::now(),
    );

    let err = generate_all(&tree, &common::build_args(out.path())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "While generating package 'cli': Asset not found: /templates/cli_flags_generated.gotpl."
    );
}
