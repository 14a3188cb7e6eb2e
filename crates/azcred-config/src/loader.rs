use std::path::Path;

use azcred_domain::UpstreamCredentialBundle;
use tracing::debug;

use crate::error::ConfigError;
use crate::raw::RawBundle;

/// Read the CI credential bundle at `path`.
///
/// Keys the bundle carries beyond the `[Creds]` table (or inside it, beyond
/// the six known ones) are ignored. Known keys that are absent come back empty.
pub fn parse_upstream_bundle(path: &Path) -> Result<UpstreamCredentialBundle, ConfigError> {
    debug!("Reading credentials file {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_upstream_bundle_str(&content, path)
}

/// Parse bundle text already in memory. `origin` is only used in errors.
pub fn parse_upstream_bundle_str(
    content: &str,
    origin: &Path,
) -> Result<UpstreamCredentialBundle, ConfigError> {
    let raw: RawBundle = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: origin.display().to_string(),
        source: e,
    })?;
    Ok(convert_bundle(raw))
}

fn convert_bundle(raw: RawBundle) -> UpstreamCredentialBundle {
    let creds = raw.creds;
    UpstreamCredentialBundle {
        client_id: creds.client_id,
        client_secret: creds.client_secret,
        tenant_id: creds.tenant_id,
        subscription_id: creds.subscription_id,
        storage_account_name: creds.storage_account_name,
        storage_account_key: creds.storage_account_key,
    }
}
