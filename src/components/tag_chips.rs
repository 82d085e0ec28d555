//! Tag Chips Component
//!
//! Row of removable chips plus the text input that adds to it.

use leptos::prelude::*;

use crate::context::use_locale;

/// Removable chips
///
/// # Arguments
/// * `items` - chip texts, in display order
/// * `translate` - treat chip texts as catalog keys
/// * `on_remove` - receives the text of the chip whose × was clicked
#[component]
pub fn TagChips(
    #[prop(into)] items: Signal<Vec<String>>,
    #[prop(optional)] translate: bool,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <div class="tag-chips">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|item| {
                        let text = item.clone();
                        view! {
                            <span class="tag-chip">
                                {move || if translate { i18n.t(&text) } else { text.clone() }}
                                <button
                                    class="tag-chip-remove"
                                    title=move || i18n.t("common.remove")
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        on_remove.run(item.clone());
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Text input that submits on Enter and clears itself
///
/// # Arguments
/// * `placeholder` - catalog key of the placeholder text
/// * `with_button` - also render a + button that submits
/// * `on_submit` - receives the typed text
#[component]
pub fn TagInput(
    placeholder: &'static str,
    #[prop(optional)] with_button: bool,
    #[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
    let i18n = use_locale();
    let (text, set_text) = signal(String::new());

    let submit = move || {
        let value = text.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        on_submit.run(value);
        set_text.set(String::new());
    };

    view! {
        <div class="tag-input">
            <input
                type="text"
                placeholder=move || i18n.t(placeholder)
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <Show when=move || with_button>
                <button
                    class="btn btn-icon"
                    disabled=move || text.get().trim().is_empty()
                    on:click=move |_| submit()
                >
                    "+"
                </button>
            </Show>
        </div>
    }
}
