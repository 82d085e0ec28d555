//! Team Data Step
//!
//! File picker, then a preview table of the parsed employee rows.

use fitscore_domain::{MockTeamDataSource, Onboarding, UploadedFile};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::components::StepLayout;
use crate::context::use_locale;
use crate::store::{store_apply, store_update, use_app_store, AppStateStoreFields};

/// First file chosen in a file input, if any
fn chosen_file(ev: &web_sys::Event) -> Option<UploadedFile> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    Some(UploadedFile {
        name: file.name(),
        size: file.size() as u64,
    })
}

#[component]
pub fn TeamDataStep() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();
    let team = Memo::new(move |_| store.onboarding().read().team_data.clone());

    let on_file = move |ev: web_sys::Event| {
        let Some(file) = chosen_file(&ev) else {
            log::debug!("File input changed without a file");
            return;
        };
        log::info!("Team data file selected: {} ({} bytes)", file.name, file.size);
        store_apply(&store, "load team data", |o| {
            Ok(Onboarding {
                team_data: o.team_data.load(&MockTeamDataSource, file)?,
                ..o.clone()
            })
        });
    };

    let change_file = move |_| {
        store_update(&store, |o| Onboarding {
            team_data: o.team_data.reset(),
            ..o.clone()
        })
    };

    let toggle_row = move |row: usize| {
        store_apply(&store, "toggle high performer", |o| {
            Ok(Onboarding {
                team_data: o.team_data.toggle_high_performer(row)?,
                ..o.clone()
            })
        })
    };

    view! {
        <StepLayout
            title="onboarding.teamData.title"
            description="onboarding.teamData.description"
        >
            <div class="info-box security">
                <h3>{move || i18n.t("onboarding.teamData.securityTitle")}</h3>
                <p>{move || i18n.t("onboarding.teamData.securityNote")}</p>
            </div>

            <Show
                when=move || team.get().file.is_some()
                fallback=move || view! {
                    <div class="upload-box">
                        <h3>{move || i18n.t("onboarding.teamData.uploadTitle")}</h3>
                        <p>{move || i18n.t("onboarding.teamData.uploadDescription")}</p>
                        <label class="btn btn-primary file-label">
                            {move || i18n.t("onboarding.teamData.chooseFile")}
                            <input type="file" accept=".csv" class="file-input" on:change=on_file />
                        </label>
                    </div>
                }
            >
                <div class="file-header">
                    <div>
                        <span class="file-name">
                            {move || team.get().file.map(|f| f.name).unwrap_or_default()}
                        </span>
                        <span class="file-records">
                            {move || i18n.t_with(
                                "onboarding.teamData.records",
                                &[("count", &team.get().record_count().to_string())],
                            )}
                        </span>
                    </div>
                    <button class="btn btn-link" on:click=change_file>
                        {move || i18n.t("onboarding.teamData.changeFile")}
                    </button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{move || i18n.t("onboarding.teamData.column.name")}</th>
                            <th>{move || i18n.t("onboarding.teamData.column.position")}</th>
                            <th>{move || i18n.t("onboarding.teamData.column.performance")}</th>
                            <th>{move || i18n.t("onboarding.teamData.column.tenure")}</th>
                            <th title=move || i18n.t("onboarding.teamData.highPerformerHint")>
                                {move || i18n.t("onboarding.teamData.column.highPerformer")}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            team.get()
                                .preview
                                .into_iter()
                                .enumerate()
                                .map(|(row, record)| {
                                    let performance = record.performance.label_key();
                                    view! {
                                        <tr>
                                            <td>{record.name}</td>
                                            <td>{record.position}</td>
                                            <td>{move || i18n.t(performance)}</td>
                                            <td>{record.tenure}</td>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=record.high_performer
                                                    on:change=move |_| toggle_row(row)
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>

            <p class="template-hint">
                {move || i18n.t("onboarding.teamData.noTemplate")}" "
                <a class="link" href="#" on:click=|ev| ev.prevent_default()>
                    {move || i18n.t("onboarding.teamData.downloadTemplate")}
                </a>
            </p>
        </StepLayout>
    }
}
