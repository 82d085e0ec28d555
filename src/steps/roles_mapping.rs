//! Roles Mapping Step
//!
//! Role list on the left, skills and traits of the active role on the right.

use fitscore_domain::Onboarding;
use leptos::prelude::*;

use crate::components::{StepLayout, TagChips, TagInput};
use crate::context::use_locale;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn RolesMappingStep() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();
    let roles = Memo::new(move |_| store.onboarding().read().roles.clone());
    let active_role = Memo::new(move |_| roles.get().active_role().cloned());

    let add_role = move |title: String| {
        store_apply(&store, "add role", |o| {
            Ok(Onboarding {
                roles: o.roles.add_role(&title)?,
                ..o.clone()
            })
        })
    };

    let select_role = move |id: u32| {
        store_apply(&store, "select role", |o| {
            Ok(Onboarding {
                roles: o.roles.select_role(id)?,
                ..o.clone()
            })
        })
    };

    let add_skill = move |skill: String| {
        store_apply(&store, "add skill", |o| {
            Ok(Onboarding {
                roles: o.roles.add_skill(&skill)?,
                ..o.clone()
            })
        })
    };

    let remove_skill = move |skill: String| {
        store_apply(&store, "remove skill", |o| {
            Ok(Onboarding {
                roles: o.roles.remove_skill(&skill)?,
                ..o.clone()
            })
        })
    };

    let add_trait = move |name: String| {
        store_apply(&store, "add role trait", |o| {
            Ok(Onboarding {
                roles: o.roles.add_trait(&name)?,
                ..o.clone()
            })
        })
    };

    let remove_trait = move |name: String| {
        store_apply(&store, "remove role trait", |o| {
            Ok(Onboarding {
                roles: o.roles.remove_trait(&name)?,
                ..o.clone()
            })
        })
    };

    view! {
        <StepLayout
            title="onboarding.rolesMapping.title"
            description="onboarding.rolesMapping.description"
        >
            <div class="roles-grid">
                <div class="roles-list">
                    <For
                        each=move || roles.get().roles
                        key=|role| role.id
                        children=move |role| {
                            let id = role.id;
                            view! {
                                <button
                                    class=move || {
                                        if roles.get().active_role_id == id {
                                            "role-item active"
                                        } else {
                                            "role-item"
                                        }
                                    }
                                    on:click=move |_| select_role(id)
                                >
                                    {role.title}
                                </button>
                            }
                        }
                    />
                    <TagInput
                        placeholder="onboarding.rolesMapping.addRolePlaceholder"
                        with_button=true
                        on_submit=add_role
                    />
                </div>

                <Show when=move || active_role.get().is_some()>
                    <div class="role-details">
                        <h3>
                            {move || {
                                let title = active_role.get().map(|r| r.title).unwrap_or_default();
                                i18n.t_with("onboarding.rolesMapping.define", &[("title", &title)])
                            }}
                        </h3>

                        <label class="field-label">{move || i18n.t("onboarding.rolesMapping.requiredSkills")}</label>
                        <TagChips
                            items=Signal::derive(move || active_role.get().map(|r| r.skills).unwrap_or_default())
                            on_remove=remove_skill
                        />
                        <TagInput placeholder="onboarding.rolesMapping.addSkill" on_submit=add_skill />

                        <label class="field-label">{move || i18n.t("onboarding.rolesMapping.behavioralTraits")}</label>
                        <TagChips
                            items=Signal::derive(move || active_role.get().map(|r| r.traits).unwrap_or_default())
                            on_remove=remove_trait
                        />
                        <TagInput placeholder="onboarding.rolesMapping.addTrait" on_submit=add_trait />
                    </div>
                </Show>
            </div>
        </StepLayout>
    }
}
