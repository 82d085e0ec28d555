//! Brand mark

use leptos::prelude::*;

use crate::context::use_locale;

#[component]
pub fn Logo() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <div class="logo">
            <span class="logo-mark">"F"</span>
            <span class="logo-text">{move || i18n.t("app.name")}</span>
        </div>
    }
}
