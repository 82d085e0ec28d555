//! Language Switcher Component
//!
//! Toggles between the two supported languages.

use leptos::prelude::*;

use crate::context::use_locale;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <button
            class="language-switcher"
            title=move || i18n.locale.get().toggle().native_name()
            on:click=move |_| i18n.toggle()
        >
            // Label names the language a click switches to
            {move || i18n.locale.get().toggle().short_label()}
        </button>
    }
}
