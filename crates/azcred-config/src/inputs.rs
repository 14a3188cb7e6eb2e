use std::path::PathBuf;

use azcred_domain::{AzureCloud, Secrets, AZURE_CREDENTIALS_ENV_VAR};

/// Everything the materializer needs from the outside world.
///
/// Built from the process environment with [`CredentialInputs::from_env`], or
/// from any key lookup (a secret manager, a test map) with
/// [`CredentialInputs::from_lookup`]. Empty values are stored as `None`;
/// callers building the struct by hand may pass `Some("")`, which is
/// treated the same way.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialInputs {
    pub tenant_id: Option<String>,
    pub subscription_id: Option<String>,
    pub aad_client_id: Option<String>,
    pub aad_client_secret: Option<String>,
    pub resource_group: Option<String>,
    pub location: Option<String>,
    /// Set when the process runs inside the CI harness.
    pub running_in_ci: bool,
    /// Path of the CI credential bundle.
    pub bundle_path: Option<PathBuf>,
}

impl CredentialInputs {
    pub fn from_env(cloud: AzureCloud) -> Self {
        Self::from_lookup(cloud, |key| std::env::var(key).ok())
    }

    /// Read the region's variables through `lookup`.
    ///
    /// The CI harness exports `AZURE_CREDENTIALS` only inside its jobs, so its
    /// presence doubles as the running-in-CI marker.
    pub fn from_lookup<F>(cloud: AzureCloud, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = cloud.env_vars();
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let bundle_var = lookup(AZURE_CREDENTIALS_ENV_VAR);

        CredentialInputs {
            tenant_id: get(vars.tenant_id),
            subscription_id: get(vars.subscription_id),
            aad_client_id: get(vars.aad_client_id),
            aad_client_secret: get(vars.aad_client_secret),
            resource_group: get(vars.resource_group),
            location: get(vars.location),
            running_in_ci: bundle_var.is_some(),
            bundle_path: bundle_var.filter(|v| !v.is_empty()).map(PathBuf::from),
        }
    }

    /// The four identity values, with absent ones left empty.
    pub fn secrets(&self) -> Secrets {
        Secrets {
            tenant_id: self.tenant_id.clone().unwrap_or_default(),
            subscription_id: self.subscription_id.clone().unwrap_or_default(),
            aad_client_id: self.aad_client_id.clone().unwrap_or_default(),
            aad_client_secret: self.aad_client_secret.clone().unwrap_or_default(),
        }
    }
}

impl std::fmt::Debug for CredentialInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialInputs")
            .field("tenant_id", &self.tenant_id)
            .field("subscription_id", &self.subscription_id)
            .field("aad_client_id", &self.aad_client_id)
            .field("aad_client_secret", &self.aad_client_secret.as_ref().map(|_| "<redacted>"))
            .field("resource_group", &self.resource_group)
            .field("location", &self.location)
            .field("running_in_ci", &self.running_in_ci)
            .field("bundle_path", &self.bundle_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn public_cloud_reads_unsuffixed_vars() {
        let inputs = CredentialInputs::from_lookup(
            AzureCloud::Public,
            lookup(&[("TENANT_ID", "t1"), ("TENANT_ID_CHINA", "tc"), ("LOCATION", "eastus")]),
        );
        assert_eq!(inputs.tenant_id.as_deref(), Some("t1"));
        assert_eq!(inputs.location.as_deref(), Some("eastus"));
        assert!(inputs.subscription_id.is_none());
    }

    #[test]
    fn china_cloud_reads_suffixed_vars() {
        let inputs = CredentialInputs::from_lookup(
            AzureCloud::China,
            lookup(&[("TENANT_ID", "t1"), ("TENANT_ID_CHINA", "tc")]),
        );
        assert_eq!(inputs.tenant_id.as_deref(), Some("tc"));
    }

    #[test]
    fn empty_values_are_absent() {
        let inputs = CredentialInputs::from_lookup(
            AzureCloud::Public,
            lookup(&[("TENANT_ID", ""), ("RESOURCE_GROUP", "")]),
        );
        assert!(inputs.tenant_id.is_none());
        assert!(inputs.resource_group.is_none());
    }

    #[test]
    fn azure_credentials_marks_ci() {
        let inputs = CredentialInputs::from_lookup(
            AzureCloud::Public,
            lookup(&[("AZURE_CREDENTIALS", "/etc/creds.toml")]),
        );
        assert!(inputs.running_in_ci);
        assert_eq!(inputs.bundle_path, Some(PathBuf::from("/etc/creds.toml")));

        let local = CredentialInputs::from_lookup(AzureCloud::Public, lookup(&[]));
        assert!(!local.running_in_ci);
        assert!(local.bundle_path.is_none());
    }

    #[test]
    fn caller_built_empty_secret_is_missing() {
        let inputs = CredentialInputs {
            tenant_id: Some("t".into()),
            subscription_id: Some(String::new()),
            aad_client_id: Some("c".into()),
            aad_client_secret: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(inputs.secrets().missing_fields(), vec!["subscription_id"]);
    }

    #[test]
    fn debug_redacts_secret() {
        let inputs = CredentialInputs::from_lookup(
            AzureCloud::Public,
            lookup(&[("AAD_CLIENT_SECRET", "hunter2")]),
        );
        assert!(!format!("{:?}", inputs).contains("hunter2"));
    }
}
