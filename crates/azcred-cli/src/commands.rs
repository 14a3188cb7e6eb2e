use std::path::PathBuf;

use anyhow::{Context, Result};
use azcred_config::CredentialInputs;
use azcred_domain::AzureCloud;
use azcred_materializer::Materializer;

use crate::output;

// ── Create ────────────────────────────────────────────────────────────────────

pub fn create(path: PathBuf, china: bool) -> Result<()> {
    let cloud = AzureCloud::from_china_flag(china);
    let inputs = CredentialInputs::from_env(cloud);
    let materializer = Materializer::with_output_path(path);

    let creds = materializer
        .materialize(cloud, &inputs)
        .with_context(|| format!("Failed to create {} credential file", cloud))?;

    println!("{}", output::render_summary(&creds, materializer.output_path()));
    Ok(())
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub fn delete(path: PathBuf) -> Result<()> {
    let materializer = Materializer::with_output_path(path);
    materializer
        .cleanup()
        .context("Failed to delete credential file")?;
    println!("Removed {}", materializer.output_path().display());
    Ok(())
}

// ── Show ──────────────────────────────────────────────────────────────────────

pub fn show(path: PathBuf, china: bool) -> Result<()> {
    let cloud = AzureCloud::from_china_flag(china);
    let inputs = CredentialInputs::from_env(cloud);
    let materializer = Materializer::with_output_path(path);

    let creds = materializer
        .resolve(cloud, &inputs)
        .with_context(|| format!("Failed to resolve {} credentials", cloud))?;

    println!("# would write {}", materializer.output_path().display());
    println!("{}", output::render_redacted(&creds)?);
    Ok(())
}
