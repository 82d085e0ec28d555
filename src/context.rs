//! Locale Context
//!
//! Active language plus the translation catalog, provided via Leptos Context API.

use fitscore_domain::locale::{load_locale, save_locale};
use fitscore_domain::{Catalog, Locale};
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::storage::LocalStorage;

#[derive(Clone, Copy)]
pub struct LocaleContext {
    /// Active locale - read
    pub locale: ReadSignal<Locale>,
    /// Active locale - write
    set_locale: WriteSignal<Locale>,
    catalog: StoredValue<Catalog>,
    storage_key: StoredValue<String>,
}

impl LocaleContext {
    /// Restore the stored language, or the configured default
    pub fn new(config: &AppConfig, catalog: Catalog) -> Self {
        let locale = match LocalStorage::open() {
            Ok(storage) => load_locale(&storage, &config.storage_key, config.default_locale),
            Err(e) => {
                log::warn!("Preference storage unavailable: {}", e);
                config.default_locale
            }
        };
        set_document_lang(locale);

        let (locale, set_locale) = signal(locale);
        Self {
            locale,
            set_locale,
            catalog: StoredValue::new(catalog),
            storage_key: StoredValue::new(config.storage_key.clone()),
        }
    }

    /// Translate `key` in the active locale; tracks the locale signal
    pub fn t(&self, key: &str) -> String {
        let locale = self.locale.get();
        self.catalog
            .with_value(|catalog| catalog.translator(locale).t(key).to_string())
    }

    /// Translate `key` and fill its `{name}` placeholders
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let locale = self.locale.get();
        self.catalog
            .with_value(|catalog| catalog.translator(locale).t_with(key, args))
    }

    /// Switch to the other language and remember the choice
    pub fn toggle(&self) {
        let next = self.locale.get_untracked().toggle();
        self.set_locale.set(next);
        set_document_lang(next);

        let saved = LocalStorage::open().and_then(|storage| {
            self.storage_key
                .with_value(|key| save_locale(&storage, key, next))
                .map_err(|e| e.to_string())
        });
        if let Err(e) = saved {
            log::warn!("Could not save locale preference: {}", e);
        }
    }
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext should be provided")
}

fn set_document_lang(locale: Locale) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("lang", locale.tag()) {
                log::warn!("Could not set document lang: {:?}", e);
            }
        }
        None => log::warn!("No document element to tag with {}", locale),
    }
}
