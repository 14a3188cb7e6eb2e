use azcred_config::{parse_upstream_bundle, ConfigError};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn load_valid_fixture() {
    let bundle = parse_upstream_bundle(&fixture("prow_creds.toml")).expect("should parse");
    assert_eq!(bundle.client_id, "00000000-0000-0000-0000-00000000c11e");
    assert_eq!(bundle.client_secret, "fixture-secret");
    assert_eq!(bundle.tenant_id, "00000000-0000-0000-0000-0000000000aa");
    assert_eq!(bundle.subscription_id, "00000000-0000-0000-0000-0000000000bb");
    assert_eq!(bundle.storage_account_name, "fixturestorage");
    assert!(bundle.secrets().is_complete());
}

#[test]
fn unknown_fields_are_tolerated() {
    let bundle = parse_upstream_bundle(&fixture("extra_fields.toml")).expect("should parse");
    assert_eq!(bundle.tenant_id, "t");
    assert_eq!(bundle.storage_account_key, "key");
}

#[test]
fn malformed_bundle_returns_parse_error() {
    let path = fixture("malformed.toml");
    let err = parse_upstream_bundle(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("malformed.toml"));
}

#[test]
fn missing_file_returns_read_error() {
    let path = Path::new("/nonexistent/path/creds.toml");
    let err = parse_upstream_bundle(path).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
    assert!(err.to_string().contains("/nonexistent/path/creds.toml"));
}

#[test]
fn bundle_written_at_runtime() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("creds.toml");
    std::fs::write(
        &path,
        "[Creds]\nClientID = \"c\"\nClientSecret = \"x\"\nTenantID = \"t\"\nSubscriptionID = \"s\"\n",
    )
    .unwrap();
    let bundle = parse_upstream_bundle(&path).unwrap();
    assert_eq!(bundle.subscription_id, "s");
    assert!(bundle.storage_account_name.is_empty());
}
