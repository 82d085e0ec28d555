//! Progress Bar Component
//!
//! One numbered circle per wizard step, joined by connector lines.

use fitscore_domain::{StepStatus, TOTAL_STEPS};
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_app_store();
    let progress = Memo::new(move |_| store.onboarding().read().wizard.progress());

    view! {
        <div class="progress-bar">
            {move || {
                progress
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, status)| {
                        let (circle_class, line_class) = match status {
                            StepStatus::Completed => ("progress-step completed", "progress-line completed"),
                            StepStatus::Active => ("progress-step active", "progress-line"),
                            StepStatus::Upcoming => ("progress-step", "progress-line"),
                        };
                        let label = if status == StepStatus::Completed {
                            "✓".to_string()
                        } else {
                            (i + 1).to_string()
                        };
                        view! {
                            <div class=circle_class>{label}</div>
                            {(i + 1 < TOTAL_STEPS).then(|| view! { <div class=line_class></div> })}
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
