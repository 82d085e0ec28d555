//! Landing Page
//!
//! Product intro with entry points into the wizard and the demo dashboard.

use leptos::prelude::*;

use crate::components::{LanguageSwitcher, Logo};
use crate::context::use_locale;
use crate::store::{store_navigate, use_app_store, Page};

#[component]
pub fn LandingPage() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();

    let start = move |_| store_navigate(&store, Page::Onboarding);
    let demo = move |_| store_navigate(&store, Page::Dashboard);

    view! {
        <div class="landing">
            <header class="page-header">
                <Logo />
                <div class="header-actions">
                    <LanguageSwitcher />
                    <button class="btn btn-outline" on:click=demo>
                        {move || i18n.t("nav.dashboard")}
                    </button>
                    <button class="btn btn-primary" on:click=start>
                        {move || i18n.t("nav.getStarted")}
                    </button>
                </div>
            </header>

            <main class="hero">
                <span class="badge">{move || i18n.t("app.badge")}</span>
                <h1>{move || i18n.t("app.tagline")}</h1>
                <p>{move || i18n.t("app.description")}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" on:click=start>
                        {move || i18n.t("nav.startCustomization")}
                    </button>
                    <button class="btn btn-outline btn-lg" on:click=demo>
                        {move || i18n.t("nav.viewDemoDashboard")}
                    </button>
                </div>
                <ul class="hero-features">
                    <li>{move || i18n.t("app.hero.cultureMatch")}</li>
                    <li>{move || i18n.t("app.hero.skillsAlignment")}</li>
                    <li>{move || i18n.t("app.hero.growthPotential")}</li>
                </ul>
            </main>

            <footer class="page-footer">{move || i18n.t("app.copyright")}</footer>
        </div>
    }
}
