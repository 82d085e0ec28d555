//! Frontend Configuration

use fitscore_domain::locale::LOCALE_STORAGE_KEY;
use fitscore_domain::Locale;
use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// localStorage key holding the chosen language tag
    pub storage_key: String,
    /// Language used when nothing valid is stored
    pub default_locale: Locale,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: LOCALE_STORAGE_KEY.to_string(),
            default_locale: Locale::DEFAULT,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "language");
        assert_eq!(config.default_locale, Locale::PtBr);
    }
}
