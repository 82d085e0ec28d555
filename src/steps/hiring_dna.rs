//! Hiring DNA Step
//!
//! Trait cards; clicking a card toggles it, selected cards carry an
//! importance slider.

use fitscore_domain::hiring_dna::{TRAIT_WEIGHT_MAX, TRAIT_WEIGHT_MIN, TRAIT_WEIGHT_STEP};
use fitscore_domain::{Onboarding, REQUIRED_TRAITS};
use leptos::prelude::*;

use crate::components::StepLayout;
use crate::context::use_locale;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn HiringDnaStep() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();
    let dna = Memo::new(move |_| store.onboarding().read().hiring_dna.clone());

    let toggle = move |id: u32| {
        store_apply(&store, "toggle trait", |o| {
            Ok(Onboarding {
                hiring_dna: o.hiring_dna.toggle(id)?,
                ..o.clone()
            })
        })
    };

    let set_weight = move |id: u32, raw: String| {
        let Ok(weight) = raw.parse::<u8>() else {
            log::debug!("Ignoring trait weight {:?}", raw);
            return;
        };
        store_apply(&store, "set trait weight", |o| {
            Ok(Onboarding {
                hiring_dna: o.hiring_dna.set_weight(id, weight)?,
                ..o.clone()
            })
        })
    };

    view! {
        <StepLayout
            title="onboarding.hiringDna.title"
            description="onboarding.hiringDna.description"
        >
            <p class="selection-count">
                {move || i18n.t_with(
                    "onboarding.hiringDna.traitsSelected",
                    &[
                        ("count", &dna.get().selected_count().to_string()),
                        ("required", &REQUIRED_TRAITS.to_string()),
                    ],
                )}
            </p>
            <div class="trait-grid">
                {move || {
                    dna.get()
                        .traits
                        .into_iter()
                        .map(|t| {
                            let id = t.id;
                            let weight = t.weight;
                            let class = if t.selected { "trait-card selected" } else { "trait-card" };
                            let name = t.name;
                            let description = t.description;
                            view! {
                                <div class=class on:click=move |_| toggle(id)>
                                    <div class="trait-header">
                                        <h4>{move || i18n.t(&name)}</h4>
                                        {t.selected.then(|| view! { <span class="trait-check">"✓"</span> })}
                                    </div>
                                    <p class="trait-description">{move || i18n.t(&description)}</p>
                                    {t.selected.then(|| view! {
                                        <div class="trait-weight" on:click=|ev| ev.stop_propagation()>
                                            <label>
                                                {move || i18n.t("onboarding.hiringDna.importance")}
                                                ": "{weight}"%"
                                            </label>
                                            <input
                                                type="range"
                                                min=TRAIT_WEIGHT_MIN.to_string()
                                                max=TRAIT_WEIGHT_MAX.to_string()
                                                step=TRAIT_WEIGHT_STEP.to_string()
                                                prop:value=weight.to_string()
                                                on:change=move |ev| set_weight(id, event_target_value(&ev))
                                            />
                                        </div>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </StepLayout>
    }
}
