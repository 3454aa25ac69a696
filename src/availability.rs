//! Backend availability detection.
//!
//! Every public registry and recorder operation consults a [`ServiceMode`]
//! handed to it at construction time. Demo mode keeps reads working with
//! synthetic data and refuses writes to fridges.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::AppConfig;

/// Whether a live database backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceMode {
    /// A database is configured and is the source of truth
    Live,
    /// No database is configured; reads return placeholder data
    Demo,
}

impl ServiceMode {
    /// Derives the mode from configuration: a non-blank database URL means live.
    pub fn from_config(config: &AppConfig) -> Self {
        match config.database_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => ServiceMode::Live,
            _ => ServiceMode::Demo,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceMode::Live => "live",
            ServiceMode::Demo => "demo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_database_url() {
        let mut config = AppConfig::default();

        config.database_url = None;
        assert_eq!(ServiceMode::from_config(&config), ServiceMode::Demo);

        config.database_url = Some("   ".to_string());
        assert_eq!(ServiceMode::from_config(&config), ServiceMode::Demo);

        config.database_url = Some("sqlite::memory:".to_string());
        assert_eq!(ServiceMode::from_config(&config), ServiceMode::Live);
        assert_eq!(ServiceMode::Live.as_str(), "live");
        assert_eq!(ServiceMode::Demo.as_str(), "demo");
    }
}
