use crate::{
    ALLOWED_UPDATE_NOT_FOUND_STATUSES, ConfigError, ConfigErrorResult,
    DEFAULT_UPDATE_NOT_FOUND_STATUS,
};

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Status returned when an update targets a missing project.
    ///
    /// Reads and deletes always answer 404. Updates answer 400 unless this
    /// is set to 404.
    pub update_not_found_status: u16,
    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            update_not_found_status: DEFAULT_UPDATE_NOT_FOUND_STATUS,
            cors_allow_any: true,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !ALLOWED_UPDATE_NOT_FOUND_STATUSES.contains(&self.update_not_found_status) {
            return Err(ConfigError::api(format!(
                "api.update_not_found_status must be one of {:?}, got {}",
                ALLOWED_UPDATE_NOT_FOUND_STATUSES, self.update_not_found_status
            )));
        }

        Ok(())
    }
}
