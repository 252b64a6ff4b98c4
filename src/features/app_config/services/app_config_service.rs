use crate::core::config::ReleaseConfig;
use crate::core::error::{AppError, Result};
use crate::features::app_config::dtos::ConfigResponseDto;
use crate::features::app_config::models::AppVersion;

#[derive(Debug)]
pub struct AppConfigService {
    release: ReleaseConfig,
    latest: AppVersion,
    min_required: AppVersion,
}

impl AppConfigService {
    /// Fails when the configured versions are not dotted numbers
    pub fn new(release: ReleaseConfig) -> std::result::Result<Self, String> {
        let latest: AppVersion = release
            .latest_version
            .parse()
            .map_err(|e| format!("APP_LATEST_VERSION: {}", e))?;
        let min_required: AppVersion = release
            .min_required_version
            .parse()
            .map_err(|e| format!("APP_MIN_REQUIRED_VERSION: {}", e))?;

        if min_required > latest {
            tracing::warn!(
                "Minimum required version {} is newer than latest version {}",
                min_required,
                latest
            );
        }

        Ok(Self {
            release,
            latest,
            min_required,
        })
    }

    /// Release info, with update flags when the installed version is known
    pub fn get_config(&self, current: Option<&str>) -> Result<ConfigResponseDto> {
        let mut dto = ConfigResponseDto {
            latest_version: self.release.latest_version.clone(),
            min_required_version: self.release.min_required_version.clone(),
            update_url: self.release.update_url.clone(),
            message: self.release.message.clone(),
            force_update: self.release.force_update,
            update_available: None,
            update_required: None,
        };

        let Some(current) = current.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(dto);
        };

        let current: AppVersion = current.parse().map_err(AppError::BadRequest)?;
        let outdated = current < self.latest;

        dto.update_available = Some(outdated);
        dto.update_required =
            Some((self.release.force_update && outdated) || current < self.min_required);

        Ok(dto)
    }
}
