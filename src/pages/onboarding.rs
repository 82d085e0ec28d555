//! Onboarding Page
//!
//! Header plus the component for the current wizard step.

use fitscore_domain::Step;
use leptos::prelude::*;

use crate::components::{LanguageSwitcher, Logo};
use crate::steps::{
    CalibrationStep, CompanyValuesStep, FinalizeStep, HiringDnaStep, ProcessStructureStep,
    RolesMappingStep, SuccessStep, TeamDataStep, WelcomeStep,
};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let store = use_app_store();
    let step = Memo::new(move |_| store.onboarding().read().step());

    view! {
        <div class="onboarding">
            <header class="page-header">
                <Logo />
                <LanguageSwitcher />
            </header>
            <main class="onboarding-main">
                {move || match step.get() {
                    Step::Welcome => view! { <WelcomeStep /> }.into_any(),
                    Step::CompanyValues => view! { <CompanyValuesStep /> }.into_any(),
                    Step::TeamData => view! { <TeamDataStep /> }.into_any(),
                    Step::RolesMapping => view! { <RolesMappingStep /> }.into_any(),
                    Step::HiringDna => view! { <HiringDnaStep /> }.into_any(),
                    Step::Calibration => view! { <CalibrationStep /> }.into_any(),
                    Step::ProcessStructure => view! { <ProcessStructureStep /> }.into_any(),
                    Step::Finalize => view! { <FinalizeStep /> }.into_any(),
                    Step::Success => view! { <SuccessStep /> }.into_any(),
                }}
            </main>
        </div>
    }
}
