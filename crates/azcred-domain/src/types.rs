use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

/// Prefix of generated resource group names.
pub const RESOURCE_GROUP_PREFIX: &str = "azurefile-csi-driver-test-";

/// Where the credential file lands unless the caller overrides it.
pub const DEFAULT_CREDENTIAL_FILE_PATH: &str = "/tmp/azure.json";

/// Environment variable holding the path of the CI credential bundle.
pub const AZURE_CREDENTIALS_ENV_VAR: &str = "AZURE_CREDENTIALS";

pub const DEFAULT_CLOUD_PROVIDER_BACKOFF: bool = true;
pub const DEFAULT_CLOUD_PROVIDER_BACKOFF_RETRIES: u32 = 6;
pub const DEFAULT_CLOUD_PROVIDER_BACKOFF_DURATION: u32 = 5;

// ── Cloud ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AzureCloud {
    #[serde(rename = "AzurePublicCloud")]
    Public,
    #[serde(rename = "AzureChinaCloud")]
    China,
}

impl AzureCloud {
    pub fn from_china_flag(is_china: bool) -> Self {
        if is_china {
            AzureCloud::China
        } else {
            AzureCloud::Public
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AzureCloud::Public => "AzurePublicCloud",
            AzureCloud::China => "AzureChinaCloud",
        }
    }

    /// Location used when the caller does not supply one.
    pub fn default_location(&self) -> &'static str {
        match self {
            AzureCloud::Public => "eastus2",
            AzureCloud::China => "chinaeast2",
        }
    }

    /// Environment variable names carrying this cloud's credentials.
    pub fn env_vars(&self) -> &'static RegionVars {
        match self {
            AzureCloud::Public => &PUBLIC_VARS,
            AzureCloud::China => &CHINA_VARS,
        }
    }
}

impl std::fmt::Display for AzureCloud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Region variable table ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionVars {
    pub tenant_id: &'static str,
    pub subscription_id: &'static str,
    pub aad_client_id: &'static str,
    pub aad_client_secret: &'static str,
    pub resource_group: &'static str,
    pub location: &'static str,
}

impl RegionVars {
    pub fn all(&self) -> [&'static str; 6] {
        [
            self.tenant_id,
            self.subscription_id,
            self.aad_client_id,
            self.aad_client_secret,
            self.resource_group,
            self.location,
        ]
    }
}

static PUBLIC_VARS: RegionVars = RegionVars {
    tenant_id: "TENANT_ID",
    subscription_id: "SUBSCRIPTION_ID",
    aad_client_id: "AAD_CLIENT_ID",
    aad_client_secret: "AAD_CLIENT_SECRET",
    resource_group: "RESOURCE_GROUP",
    location: "LOCATION",
};

static CHINA_VARS: RegionVars = RegionVars {
    tenant_id: "TENANT_ID_CHINA",
    subscription_id: "SUBSCRIPTION_ID_CHINA",
    aad_client_id: "AAD_CLIENT_ID_CHINA",
    aad_client_secret: "AAD_CLIENT_SECRET_CHINA",
    resource_group: "RESOURCE_GROUP_CHINA",
    location: "LOCATION_CHINA",
};

// ── Secrets ───────────────────────────────────────────────────────────────────

/// The four identity values a credential file cannot be written without.
#[derive(Clone, PartialEq, Eq)]
pub struct Secrets {
    pub tenant_id: String,
    pub subscription_id: String,
    pub aad_client_id: String,
    pub aad_client_secret: String,
}

impl Secrets {
    /// Names of the fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.tenant_id.is_empty() {
            missing.push("tenant_id");
        }
        if self.subscription_id.is_empty() {
            missing.push("subscription_id");
        }
        if self.aad_client_id.is_empty() {
            missing.push("aad_client_id");
        }
        if self.aad_client_secret.is_empty() {
            missing.push("aad_client_secret");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("tenant_id", &self.tenant_id)
            .field("subscription_id", &self.subscription_id)
            .field("aad_client_id", &self.aad_client_id)
            .field("aad_client_secret", &"<redacted>")
            .finish()
    }
}

// ── Credential file ───────────────────────────────────────────────────────────

/// Contents of the rendered credential file.
///
/// Field order is the key order of the written JSON document.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSet {
    pub cloud: AzureCloud,
    pub tenant_id: String,
    pub subscription_id: String,
    pub aad_client_id: String,
    pub aad_client_secret: String,
    pub resource_group: String,
    pub location: String,
    pub cloud_provider_backoff: bool,
    pub cloud_provider_backoff_retries: u32,
    pub cloud_provider_backoff_duration: u32,
}

impl CredentialSet {
    /// Build a set with the fixed backoff defaults.
    pub fn new(cloud: AzureCloud, secrets: Secrets, resource_group: String, location: String) -> Self {
        CredentialSet {
            cloud,
            tenant_id: secrets.tenant_id,
            subscription_id: secrets.subscription_id,
            aad_client_id: secrets.aad_client_id,
            aad_client_secret: secrets.aad_client_secret,
            resource_group,
            location,
            cloud_provider_backoff: DEFAULT_CLOUD_PROVIDER_BACKOFF,
            cloud_provider_backoff_retries: DEFAULT_CLOUD_PROVIDER_BACKOFF_RETRIES,
            cloud_provider_backoff_duration: DEFAULT_CLOUD_PROVIDER_BACKOFF_DURATION,
        }
    }

    /// Names of string fields that are empty. Rendering requires this to be empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = self.secrets().missing_fields();
        if self.resource_group.is_empty() {
            missing.push("resource_group");
        }
        if self.location.is_empty() {
            missing.push("location");
        }
        missing
    }

    pub fn secrets(&self) -> Secrets {
        Secrets {
            tenant_id: self.tenant_id.clone(),
            subscription_id: self.subscription_id.clone(),
            aad_client_id: self.aad_client_id.clone(),
            aad_client_secret: self.aad_client_secret.clone(),
        }
    }

    /// Copy with the client secret masked, for display.
    pub fn redacted(&self) -> Self {
        CredentialSet {
            aad_client_secret: "<redacted>".to_string(),
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSet")
            .field("cloud", &self.cloud)
            .field("tenant_id", &self.tenant_id)
            .field("subscription_id", &self.subscription_id)
            .field("aad_client_id", &self.aad_client_id)
            .field("aad_client_secret", &"<redacted>")
            .field("resource_group", &self.resource_group)
            .field("location", &self.location)
            .field("cloud_provider_backoff", &self.cloud_provider_backoff)
            .field("cloud_provider_backoff_retries", &self.cloud_provider_backoff_retries)
            .field("cloud_provider_backoff_duration", &self.cloud_provider_backoff_duration)
            .finish()
    }
}

// ── CI bundle ─────────────────────────────────────────────────────────────────

/// Credentials as the CI harness stores them. Only the identity fields are
/// used; the storage account pair rides along.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UpstreamCredentialBundle {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub subscription_id: String,
    pub storage_account_name: String,
    pub storage_account_key: String,
}

impl UpstreamCredentialBundle {
    pub fn secrets(&self) -> Secrets {
        Secrets {
            tenant_id: self.tenant_id.clone(),
            subscription_id: self.subscription_id.clone(),
            aad_client_id: self.client_id.clone(),
            aad_client_secret: self.client_secret.clone(),
        }
    }
}

impl std::fmt::Debug for UpstreamCredentialBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamCredentialBundle")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("subscription_id", &self.subscription_id)
            .field("storage_account_name", &self.storage_account_name)
            .field("storage_account_key", &"<redacted>")
            .finish()
    }
}
