//! Company Values Step
//!
//! Chips for chosen values, a free-text input and the remaining suggestions.
//! Suggested values are stored as catalog keys and shown translated.

use fitscore_domain::Onboarding;
use leptos::prelude::*;

use crate::components::{StepLayout, TagChips, TagInput};
use crate::context::use_locale;
use crate::store::{store_apply, store_update, use_app_store, AppStateStoreFields};

#[component]
pub fn CompanyValuesStep() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();
    let values = Memo::new(move |_| store.onboarding().read().company_values.clone());

    let add_value = move |value: String| {
        store_apply(&store, "add value", |o| {
            Ok(Onboarding {
                company_values: o.company_values.add_value(&value)?,
                ..o.clone()
            })
        })
    };

    let remove_value = move |value: String| {
        store_update(&store, |o| Onboarding {
            company_values: o.company_values.remove_value(&value),
            ..o.clone()
        })
    };

    view! {
        <StepLayout
            title="onboarding.companyValues.title"
            description="onboarding.companyValues.description"
        >
            <label class="field-label">{move || i18n.t("onboarding.companyValues.selectCore")}</label>
            <TagChips
                items=Signal::derive(move || values.get().selected)
                translate=true
                on_remove=remove_value
            />
            <TagInput placeholder="onboarding.companyValues.typeValue" on_submit=add_value />

            <label class="field-label">{move || i18n.t("onboarding.companyValues.suggested")}</label>
            <div class="suggestions">
                {move || {
                    values
                        .get()
                        .suggestions()
                        .into_iter()
                        .map(|key| {
                            view! {
                                <button
                                    class="suggestion-chip"
                                    on:click=move |_| add_value(key.to_string())
                                >
                                    "+ "{move || i18n.t(key)}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <label class="field-label">{move || i18n.t("onboarding.companyValues.description.label")}</label>
            <textarea
                class="textarea"
                rows="4"
                placeholder=move || i18n.t("onboarding.companyValues.description.placeholder")
                prop:value=move || values.get().description
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store_update(&store, |o| Onboarding {
                        company_values: o.company_values.set_description(&text),
                        ..o.clone()
                    });
                }
            ></textarea>
        </StepLayout>
    }
}
