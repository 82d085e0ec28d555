//! Process Structure Step
//!
//! Process name, vacancy type, active stages with their weights, and
//! interview options. A rejected stage edit restores the control to the
//! stored value.

use fitscore_domain::stages::{STAGE_WEIGHT_MAX, STAGE_WEIGHT_MIN, STAGE_WEIGHT_STEP};
use fitscore_domain::{Onboarding, Stage, VacancyType};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::components::StepLayout;
use crate::context::use_locale;
use crate::store::{store_apply, store_update, use_app_store, AppStateStoreFields, AppStore};

fn target_input(ev: &web_sys::Event) -> Option<HtmlInputElement> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()
}

fn toggle_stage(store: &AppStore, stage: Stage, ev: &web_sys::Event) {
    let Some(input) = target_input(ev) else { return };
    let active = input.checked();
    store_apply(store, "toggle stage", |o| {
        Ok(Onboarding {
            process: o.process.set_stage_active(stage, active)?,
            ..o.clone()
        })
    });
    input.set_checked(store.onboarding().read_untracked().process.stages.is_active(stage));
}

fn edit_stage_weight(store: &AppStore, stage: Stage, ev: &web_sys::Event) {
    let Some(input) = target_input(ev) else { return };
    match input.value().parse::<f64>() {
        Ok(weight) => store_apply(store, "edit stage weight", |o| {
            Ok(Onboarding {
                process: o.process.set_stage_weight(stage, weight)?,
                ..o.clone()
            })
        }),
        Err(e) => log::debug!("Ignoring stage weight {:?}: {}", input.value(), e),
    }
    let stored = store.onboarding().read_untracked().process.stages.weight(stage);
    input.set_value(&stored.to_string());
}

#[component]
pub fn ProcessStructureStep() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();
    let process = Memo::new(move |_| store.onboarding().read().process.clone());
    let stages = Memo::new(move |_| process.get().stages);

    let set_name = move |ev: web_sys::Event| {
        let name = event_target_value(&ev);
        store_update(&store, |o| Onboarding {
            process: o.process.set_process_name(&name),
            ..o.clone()
        });
    };

    let set_vacancy = move |ev: web_sys::Event| match VacancyType::parse(&event_target_value(&ev)) {
        Ok(vacancy) => store_update(&store, |o| Onboarding {
            process: o.process.set_vacancy_type(vacancy),
            ..o.clone()
        }),
        Err(e) => log::debug!("Vacancy type ignored: {}", e),
    };

    let set_link = move |ev: web_sys::Event| {
        let link = event_target_value(&ev);
        store_update(&store, |o| Onboarding {
            process: o.process.set_recording_link(&link),
            ..o.clone()
        });
    };

    let set_generate = move |ev: web_sys::Event| {
        let Some(input) = target_input(&ev) else { return };
        let on = input.checked();
        store_update(&store, |o| Onboarding {
            process: o.process.set_generate_questions(on),
            ..o.clone()
        });
    };

    view! {
        <StepLayout
            title="onboarding.processStructure.title"
            description="onboarding.processStructure.description"
        >
            <label class="field-label">{move || i18n.t("onboarding.processStructure.processName")}</label>
            <input
                type="text"
                class="text-input"
                placeholder=move || i18n.t("onboarding.processStructure.processNamePlaceholder")
                prop:value=move || process.get().process_name
                on:input=set_name
            />

            <label class="field-label">{move || i18n.t("onboarding.processStructure.vacancyType")}</label>
            <select class="select" on:change=set_vacancy>
                <option
                    value=""
                    disabled=true
                    prop:selected=move || process.get().vacancy_type.is_none()
                >
                    {move || i18n.t("onboarding.processStructure.selectVacancyType")}
                </option>
                {VacancyType::ALL
                    .into_iter()
                    .map(|v| {
                        view! {
                            <option
                                value=v.value()
                                prop:selected=move || process.get().vacancy_type == Some(v)
                            >
                                {move || i18n.t(v.label_key())}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <label class="field-label">{move || i18n.t("onboarding.processStructure.activeStages")}</label>
            <div class="stage-toggles">
                {Stage::ALL
                    .into_iter()
                    .map(|stage| {
                        view! {
                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || stages.get().is_active(stage)
                                    on:change=move |ev| toggle_stage(&store, stage, &ev)
                                />
                                {move || i18n.t(stage.toggle_label_key())}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <label class="field-label">{move || i18n.t("onboarding.processStructure.stageWeights")}</label>
            <div class="stage-weights">
                {Stage::ALL
                    .into_iter()
                    .map(|stage| {
                        view! {
                            <Show when=move || stages.get().is_active(stage)>
                                <div class="stage-weight">
                                    <div class="stage-weight-header">
                                        <span>{move || i18n.t(stage.weight_label_key())}</span>
                                        <span>{move || format!("{}%", stages.get().display_weight(stage))}</span>
                                    </div>
                                    <input
                                        type="range"
                                        min=STAGE_WEIGHT_MIN.to_string()
                                        max=STAGE_WEIGHT_MAX.to_string()
                                        step=STAGE_WEIGHT_STEP.to_string()
                                        prop:value=move || stages.get().weight(stage).to_string()
                                        on:change=move |ev| edit_stage_weight(&store, stage, &ev)
                                    />
                                </div>
                            </Show>
                        }
                    })
                    .collect_view()}
            </div>

            <label class="field-label">{move || i18n.t("onboarding.processStructure.recordingLink")}</label>
            <input
                type="url"
                class="text-input"
                placeholder=move || i18n.t("onboarding.processStructure.recordingLinkPlaceholder")
                prop:value=move || process.get().recording_link
                on:input=set_link
            />
            <p class="field-hint">{move || i18n.t("onboarding.processStructure.recordingLinkHint")}</p>

            <label class="switch-label">
                <input
                    type="checkbox"
                    class="switch"
                    prop:checked=move || process.get().generate_questions
                    on:change=set_generate
                />
                {move || i18n.t("onboarding.processStructure.generateQuestions")}
            </label>
            <Show when=move || process.get().generate_questions>
                <div class="info-box">
                    <p>{move || i18n.t("onboarding.processStructure.questionsGenerationInfo")}</p>
                </div>
            </Show>
        </StepLayout>
    }
}
