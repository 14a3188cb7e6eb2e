use std::path::Path;

use azcred_domain::CredentialSet;

/// One-line-per-field summary of a written file. Never includes secrets.
pub fn render_summary(creds: &CredentialSet, path: &Path) -> String {
    format!(
        "Wrote {}\n  cloud:          {}\n  resource group: {}\n  location:       {}",
        path.display(),
        creds.cloud,
        creds.resource_group,
        creds.location
    )
}

/// The credential file as JSON with the client secret masked.
pub fn render_redacted(creds: &CredentialSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&creds.redacted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use azcred_domain::{AzureCloud, Secrets};

    fn creds() -> CredentialSet {
        CredentialSet::new(
            AzureCloud::China,
            Secrets {
                tenant_id: "t".into(),
                subscription_id: "s".into(),
                aad_client_id: "c".into(),
                aad_client_secret: "very-secret".into(),
            },
            "rg".into(),
            "chinaeast2".into(),
        )
    }

    #[test]
    fn summary_omits_secrets() {
        let out = render_summary(&creds(), Path::new("/tmp/azure.json"));
        assert!(out.contains("/tmp/azure.json"));
        assert!(out.contains("AzureChinaCloud"));
        assert!(out.contains("chinaeast2"));
        assert!(!out.contains("very-secret"));
    }

    #[test]
    fn redacted_json_masks_client_secret() {
        let out = render_redacted(&creds()).unwrap();
        assert!(!out.contains("very-secret"));
        assert!(out.contains("\"aadClientSecret\": \"<redacted>\""));
        assert!(out.contains("\"tenantId\": \"t\""));
    }
}
