use leptos::prelude::*;

use crate::components::StepLayout;
use crate::context::use_locale;

#[component]
pub fn WelcomeStep() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <StepLayout
            title="onboarding.welcome.title"
            description="onboarding.welcome.description"
            next_label="onboarding.welcome.getStarted"
        >
            <div class="welcome-hero">
                <div class="welcome-icon">"✦"</div>
            </div>
            <div class="info-box">
                <h3>{move || i18n.t("onboarding.welcome.howItWorks")}</h3>
                <p>{move || i18n.t("onboarding.welcome.howItWorksDescription")}</p>
            </div>
        </StepLayout>
    }
}
