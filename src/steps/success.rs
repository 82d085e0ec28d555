use leptos::prelude::*;

use crate::components::ProgressBar;
use crate::context::use_locale;
use crate::store::{store_navigate, use_app_store, Page};

/// Terminal step; its only action leaves for the dashboard
#[component]
pub fn SuccessStep() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();

    view! {
        <div class="step-layout">
            <ProgressBar />
            <div class="step-card success-card">
                <div class="success-icon">"✓"</div>
                <h2 class="step-title">{move || i18n.t("onboarding.success.title")}</h2>
                <p class="step-description">{move || i18n.t("onboarding.success.message")}</p>
                <div class="info-box">
                    <h3>{move || i18n.t("onboarding.success.whatNext")}</h3>
                    <ol>
                        <li>{move || i18n.t("onboarding.success.step1")}</li>
                        <li>{move || i18n.t("onboarding.success.step2")}</li>
                        <li>{move || i18n.t("onboarding.success.step3")}</li>
                    </ol>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| store_navigate(&store, Page::Dashboard)
                >
                    {move || i18n.t("nav.goToDashboard")}
                </button>
            </div>
        </div>
    }
}
