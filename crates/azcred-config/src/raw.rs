use serde::Deserialize;

/// Raw TOML representation of the CI credential bundle.
///
/// ```toml
/// [Creds]
/// ClientID = "..."
/// ClientSecret = "..."
/// TenantID = "..."
/// SubscriptionID = "..."
/// StorageAccountName = "..."
/// StorageAccountKey = "..."
/// ```
#[derive(Debug, Deserialize)]
pub struct RawBundle {
    #[serde(rename = "Creds")]
    pub creds: RawCreds,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCreds {
    #[serde(rename = "ClientID")]
    pub client_id: String,
    #[serde(rename = "ClientSecret")]
    pub client_secret: String,
    #[serde(rename = "TenantID")]
    pub tenant_id: String,
    #[serde(rename = "SubscriptionID")]
    pub subscription_id: String,
    #[serde(rename = "StorageAccountName")]
    pub storage_account_name: String,
    #[serde(rename = "StorageAccountKey")]
    pub storage_account_key: String,
}
