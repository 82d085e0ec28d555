//! Calibration Step
//!
//! One sample candidate at a time; each takes a single agree/disagree verdict.

use fitscore_domain::{DotState, Feedback, Onboarding};
use leptos::prelude::*;

use crate::components::StepLayout;
use crate::context::use_locale;
use crate::store::{store_apply, store_update, use_app_store, AppStateStoreFields};

#[component]
pub fn CalibrationStep() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();
    let calibration = Memo::new(move |_| store.onboarding().read().calibration.clone());

    let give_feedback = move |feedback: Feedback| {
        store_apply(&store, "calibration feedback", |o| {
            Ok(Onboarding {
                calibration: o.calibration.give_feedback(feedback)?,
                ..o.clone()
            })
        })
    };

    let next_candidate = move |_| {
        store_update(&store, |o| Onboarding {
            calibration: o.calibration.next_candidate(),
            ..o.clone()
        })
    };

    view! {
        <StepLayout
            title="onboarding.calibration.title"
            description="onboarding.calibration.description"
        >
            {move || {
                let state = calibration.get();
                let is_last = state.is_last();
                let Some(candidate) = state.current_candidate().cloned() else {
                    return view! { <div class="candidate-card empty"></div> }.into_any();
                };
                let feedback = candidate.feedback;
                view! {
                    <div class="candidate-card">
                        <div class="candidate-header">
                            <div>
                                <h3>{candidate.name}</h3>
                                <p class="candidate-position">{candidate.position}</p>
                            </div>
                            <div class="fit-score">{candidate.fit_score}</div>
                        </div>
                        <dl class="candidate-details">
                            <dt>{move || i18n.t("onboarding.calibration.education")}</dt>
                            <dd>{candidate.education}</dd>
                            <dt>{move || i18n.t("onboarding.calibration.experience")}</dt>
                            <dd>{candidate.experience}</dd>
                            <dt>{move || i18n.t("onboarding.calibration.skills")}</dt>
                            <dd class="tag-chips">
                                {candidate
                                    .skills
                                    .into_iter()
                                    .map(|skill| view! { <span class="tag-chip">{skill}</span> })
                                    .collect_view()}
                            </dd>
                        </dl>

                        {match feedback {
                            None => view! {
                                <p class="calibration-question">{move || i18n.t("onboarding.calibration.agree")}</p>
                                <div class="calibration-actions">
                                    <button class="btn btn-success" on:click=move |_| give_feedback(Feedback::Agree)>
                                        {move || i18n.t("onboarding.calibration.agreeButton")}
                                    </button>
                                    <button class="btn btn-danger" on:click=move |_| give_feedback(Feedback::Disagree)>
                                        {move || i18n.t("onboarding.calibration.disagreeButton")}
                                    </button>
                                </div>
                            }.into_any(),
                            Some(verdict) => {
                                let message = match verdict {
                                    Feedback::Agree => "onboarding.calibration.agreedMessage",
                                    Feedback::Disagree => "onboarding.calibration.disagreedMessage",
                                };
                                view! {
                                    <p class="calibration-verdict">{move || i18n.t(message)}</p>
                                    {(!is_last).then(|| view! {
                                        <button class="btn btn-outline" on:click=next_candidate>
                                            {move || i18n.t("onboarding.calibration.nextCandidate")}
                                        </button>
                                    })}
                                }.into_any()
                            }
                        }}
                    </div>
                }
                .into_any()
            }}

            <div class="calibration-progress">
                <div class="dots">
                    {move || {
                        calibration
                            .get()
                            .dots()
                            .into_iter()
                            .map(|dot| {
                                let class = match dot {
                                    DotState::Current => "dot current",
                                    DotState::Rated => "dot rated",
                                    DotState::Pending => "dot",
                                };
                                view! { <span class=class></span> }
                            })
                            .collect_view()
                    }}
                </div>
                <p>
                    {move || {
                        let state = calibration.get();
                        i18n.t_with(
                            "onboarding.calibration.progress",
                            &[
                                ("current", &(state.current + 1).to_string()),
                                ("total", &state.candidates.len().to_string()),
                            ],
                        )
                    }}
                </p>
            </div>
        </StepLayout>
    }
}
