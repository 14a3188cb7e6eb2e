use std::path::{Path, PathBuf};

use azcred_config::{parse_upstream_bundle, CredentialInputs};
use azcred_domain::{
    AzureCloud, CredentialSet, Secrets, AZURE_CREDENTIALS_ENV_VAR, DEFAULT_CREDENTIAL_FILE_PATH,
    RESOURCE_GROUP_PREFIX,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::MaterializeError;
use crate::render::render_credential_file;

/// Writes and removes the Azure credential file consumed by the CSI driver
/// test suites.
#[derive(Debug, Clone)]
pub struct Materializer {
    output_path: PathBuf,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Materializer {
    pub fn new() -> Self {
        Self::with_output_path(DEFAULT_CREDENTIAL_FILE_PATH)
    }

    pub fn with_output_path(path: impl Into<PathBuf>) -> Self {
        Materializer { output_path: path.into() }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Resolve credentials and write them to the output path.
    pub fn materialize(
        &self,
        cloud: AzureCloud,
        inputs: &CredentialInputs,
    ) -> Result<CredentialSet, MaterializeError> {
        let creds = self.resolve(cloud, inputs)?;
        self.write(&creds)?;
        Ok(creds)
    }

    /// Resolve credentials without touching the filesystem beyond reading the
    /// CI bundle.
    ///
    /// Secrets given directly in `inputs` win when all four are present. Only
    /// otherwise, and only inside CI, is the credentials bundle consulted.
    pub fn resolve(
        &self,
        cloud: AzureCloud,
        inputs: &CredentialInputs,
    ) -> Result<CredentialSet, MaterializeError> {
        let direct = inputs.secrets();
        let secrets = if direct.is_complete() {
            debug!("Using credentials from environment for {}", cloud);
            direct
        } else if inputs.running_in_ci {
            info!("Running in CI, converting {} to a credential file", AZURE_CREDENTIALS_ENV_VAR);
            secrets_from_bundle(inputs)?
        } else {
            return Err(MaterializeError::MissingCredentials {
                vars: cloud.env_vars().all().to_vec(),
            });
        };

        let resource_group = inputs
            .resource_group
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(generate_resource_group);
        let location = inputs
            .location
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| cloud.default_location().to_string());

        Ok(CredentialSet::new(cloud, secrets, resource_group, location))
    }

    /// Render `creds` and overwrite the output file with it.
    pub fn write(&self, creds: &CredentialSet) -> Result<(), MaterializeError> {
        let content = render_credential_file(creds)?;
        std::fs::write(&self.output_path, content).map_err(|e| MaterializeError::FileWrite {
            path: self.output_path.display().to_string(),
            source: e,
        })?;
        info!(
            "Wrote {} credential file {} (resource group {}, location {})",
            creds.cloud,
            self.output_path.display(),
            creds.resource_group,
            creds.location
        );
        Ok(())
    }

    /// Remove the output file. A file that is already gone is not an error.
    pub fn cleanup(&self) -> Result<(), MaterializeError> {
        match std::fs::remove_file(&self.output_path) {
            Ok(()) => {
                info!("Removed credential file {}", self.output_path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Credential file {} already absent", self.output_path.display());
                Ok(())
            }
            Err(e) => Err(MaterializeError::FileDelete {
                path: self.output_path.display().to_string(),
                source: e,
            }),
        }
    }
}

fn secrets_from_bundle(inputs: &CredentialInputs) -> Result<Secrets, MaterializeError> {
    let path = inputs
        .bundle_path
        .as_deref()
        .ok_or(MaterializeError::MissingBundlePath { var: AZURE_CREDENTIALS_ENV_VAR })?;
    let secrets = parse_upstream_bundle(path)?.secrets();
    let missing = secrets.missing_fields();
    if !missing.is_empty() {
        return Err(MaterializeError::IncompleteBundle {
            path: path.display().to_string(),
            missing,
        });
    }
    Ok(secrets)
}

fn generate_resource_group() -> String {
    format!("{}{}", RESOURCE_GROUP_PREFIX, Uuid::new_v4())
}
