pub mod json;

use crate::adapters::outbound::localization::json::JsonLocalization;
use crate::config::Settings;
use crate::ports::outbound::localization::LocalizationError;

pub async fn init_localization(settings: &Settings) -> Result<JsonLocalization, LocalizationError> {
    match &settings.localization_path {
        Some(path) => JsonLocalization::open(path).await,
        None => {
            log::info!("No localization file configured, location keys will be shown as is");
            Ok(JsonLocalization::default())
        }
    }
}
