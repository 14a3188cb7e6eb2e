use azcred_domain::CredentialSet;

use crate::error::MaterializeError;

/// Render `creds` as the JSON credential file.
///
/// Keys appear in `CredentialSet` field order; the backoff flag and counts are
/// written as bare JSON scalars. A set with any empty string field is rejected.
pub fn render_credential_file(creds: &CredentialSet) -> Result<String, MaterializeError> {
    let missing = creds.missing_fields();
    if !missing.is_empty() {
        return Err(MaterializeError::Incomplete(missing));
    }
    let mut out = serde_json::to_string_pretty(creds)?;
    out.push('\n');
    Ok(out)
}
