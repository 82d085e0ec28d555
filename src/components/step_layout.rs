//! Step Layout Component
//!
//! Shared frame for wizard steps: progress bar, title, body and the
//! Back / Next controls. Next is disabled while the step's gate is closed.

use leptos::prelude::*;

use crate::components::ProgressBar;
use crate::context::use_locale;
use crate::store::{store_apply, store_update, use_app_store, AppStateStoreFields};

/// # Arguments
/// * `title` - catalog key of the heading
/// * `description` - catalog key of the text under the heading
/// * `next_label` - catalog key of the Next button, `common.continue` when omitted
#[component]
pub fn StepLayout(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] next_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();
    let next_label = next_label.unwrap_or("common.continue");

    let can_advance = Memo::new(move |_| store.onboarding().read().can_advance());
    let has_back = Memo::new(move |_| store.onboarding().read().wizard.has_back());

    let go_next = move |_| store_apply(&store, "next step", |o| o.next());
    let go_back = move |_| store_update(&store, |o| o.back());

    view! {
        <div class="step-layout">
            <ProgressBar />
            <div class="step-card">
                <h2 class="step-title">{move || i18n.t(title)}</h2>
                <p class="step-description">{move || i18n.t(description)}</p>
                <div class="step-body">{children()}</div>
                <div class="step-actions">
                    <Show when=move || has_back.get()>
                        <button class="btn btn-outline" on:click=go_back>
                            {move || i18n.t("common.back")}
                        </button>
                    </Show>
                    <button
                        class="btn btn-primary"
                        disabled=move || !can_advance.get()
                        on:click=go_next
                    >
                        {move || i18n.t(next_label)}
                    </button>
                </div>
            </div>
        </div>
    }
}
