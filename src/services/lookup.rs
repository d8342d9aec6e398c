use tracing::error;

use crate::clients::CountryDirectory;
use crate::types::external::CountryRecord;
use crate::utils::error::ApiError;
use crate::utils::input::{is_valid_alpha2, normalize_country_code};

/// Normalizes a path parameter and rejects anything that is not two ASCII letters.
pub fn validated_code(raw: &str) -> Result<String, ApiError> {
    if !is_valid_alpha2(raw) {
        return Err(ApiError::InvalidInput(format!(
            "expected a two-letter country code, got {:?}",
            raw.trim()
        )));
    }
    Ok(normalize_country_code(raw))
}

/// Fetches the subject country. The first record in provider order wins.
pub async fn resolve_country(
    directory: &dyn CountryDirectory,
    code: &str,
) -> Result<CountryRecord, ApiError> {
    match directory.lookup(code).await {
        Ok(records) => records
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(format!("country not found: {}", code))),
        Err(e) if e.is_not_found() => {
            Err(ApiError::NotFound(format!("country not found: {}", code)))
        }
        Err(e) => {
            error!(country_code = %code, error = %e, "upstream countries request failed");
            Err(e.into())
        }
    }
}
