//! FitScore Frontend App
//!
//! Root component: provides context and switches between the three screens.

use std::collections::HashMap;

use fitscore_domain::{Catalog, Locale};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::context::LocaleContext;
use crate::pages::{DashboardPage, LandingPage, OnboardingPage};
use crate::store::{AppState, AppStateStoreFields, Page};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        log::error!("Translation catalog failed to load: {}", e);
        Catalog::from_tables(HashMap::new(), Locale::FALLBACK)
    });

    // Provide context to all children
    provide_context(LocaleContext::new(&config, catalog));
    let store = Store::new(AppState::new());
    provide_context(store);

    let page = Memo::new(move |_| store.page().get());

    view! {
        {move || match page.get() {
            Page::Landing => view! { <LandingPage /> }.into_any(),
            Page::Onboarding => view! { <OnboardingPage /> }.into_any(),
            Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        }}
    }
}
