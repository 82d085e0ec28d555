//! Finalize Step
//!
//! Summary counts computed from the onboarding record.

use leptos::prelude::*;

use crate::components::StepLayout;
use crate::context::use_locale;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FinalizeStep() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();
    let summary = Memo::new(move |_| store.onboarding().read().summary());

    let rows = move || {
        let s = summary.get();
        [
            ("onboarding.finalize.companyValues", "onboarding.finalize.valuesCount", s.values),
            ("onboarding.finalize.teamData", "onboarding.finalize.employeesProcessed", s.employees),
            ("onboarding.finalize.rolesMapped", "onboarding.finalize.rolesConfigured", s.roles),
            ("onboarding.finalize.keyTraits", "onboarding.finalize.traitsWeighted", s.traits),
            ("onboarding.finalize.calibration", "onboarding.finalize.profilesEvaluated", s.profiles_evaluated),
        ]
        .into_iter()
        .map(|(label, detail, count)| {
            view! {
                <li class="summary-row">
                    <span class="summary-check">"✓"</span>
                    <div>
                        <h4>{move || i18n.t(label)}</h4>
                        <p>{move || i18n.t_with(detail, &[("count", &count.to_string())])}</p>
                    </div>
                </li>
            }
        })
        .collect_view()
    };

    view! {
        <StepLayout
            title="onboarding.finalize.title"
            description="onboarding.finalize.description"
            next_label="onboarding.finalize.activateButton"
        >
            <div class="info-box success">
                <h3>{move || i18n.t("onboarding.finalize.configComplete")}</h3>
                <p>{move || i18n.t("onboarding.finalize.configDescription")}</p>
            </div>
            <h3>{move || i18n.t("onboarding.finalize.summary")}</h3>
            <ul class="summary-list">{rows}</ul>
            <p class="field-hint">{move || i18n.t("onboarding.finalize.activationNote")}</p>
        </StepLayout>
    }
}
