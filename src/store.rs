//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use fitscore_domain::{DomainResult, Onboarding};
use leptos::prelude::*;
use reactive_stores::Store;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Onboarding,
    Dashboard,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Screen currently shown
    pub page: Page,
    /// Wizard position and every step's record
    pub onboarding: Onboarding,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show `page`. Entering the onboarding flow starts a fresh wizard.
pub fn store_navigate(store: &AppStore, page: Page) {
    if page == Page::Onboarding {
        *store.onboarding().write() = Onboarding::new();
    }
    log::info!("Navigate to {:?}", page);
    *store.page().write() = page;
}

/// Replace the onboarding record with the result of `transition`.
/// A rejected transition leaves the record untouched.
pub fn store_apply<F>(store: &AppStore, action: &str, transition: F)
where
    F: FnOnce(&Onboarding) -> DomainResult<Onboarding>,
{
    let result = {
        let current = store.onboarding().read_untracked();
        transition(&current)
    };
    match result {
        Ok(next) => *store.onboarding().write() = next,
        Err(e) => log::debug!("{} ignored: {}", action, e),
    }
}

/// Replace the onboarding record with an infallible transition
pub fn store_update<F>(store: &AppStore, transition: F)
where
    F: FnOnce(&Onboarding) -> Onboarding,
{
    let next = {
        let current = store.onboarding().read_untracked();
        transition(&current)
    };
    *store.onboarding().write() = next;
}
