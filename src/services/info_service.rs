use tracing::{info, instrument};

use crate::clients::CountryDirectory;
use crate::models::info::InfoResponse;
use crate::services::lookup::{resolve_country, validated_code};
use crate::utils::error::ApiError;

#[instrument(skip(directory))]
pub async fn country_info(
    directory: &dyn CountryDirectory,
    raw_code: &str,
) -> Result<InfoResponse, ApiError> {
    let code = validated_code(raw_code)?;
    let record = resolve_country(directory, &code).await?;
    info!(country_code = %code, "country info request completed");
    Ok(InfoResponse::from(record))
}
