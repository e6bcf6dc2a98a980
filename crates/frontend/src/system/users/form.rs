use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use contracts::system::users::{User, UserBody};

use crate::domain::split_csv;
use crate::shared::api;
use crate::shared::components::forms::{
    FIELD_CHECKBOX_ROW, FIELD_INPUT, FIELD_LABEL, FIELD_ROW, FORM_ACTIONS,
};
use crate::shared::components::{confirm_discard, use_unsaved_guard, RevisionList};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

const ENTITY: &str = "users";
const LIST_ROUTE: &str = "/admin/users";

#[component]
pub fn UserForm() -> impl IntoView {
    let notifier = use_notifier();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let is_new = id == "new" || id.is_empty();
    let record_id = StoredValue::new(id);
    let navigate = StoredValue::new_local(use_navigate());

    let username = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let roles = RwSignal::new(String::new());
    let groups = RwSignal::new(String::new());
    let active = RwSignal::new(true);

    let snapshot = move || {
        vec![
            username.get(),
            display_name.get(),
            email.get(),
            roles.get(),
            groups.get(),
            active.get().to_string(),
        ]
    };
    let baseline = RwSignal::new(snapshot());
    let dirty = Memo::new(move |_| snapshot() != baseline.get());
    use_unsaved_guard(dirty.into());

    let loading = RwSignal::new(!is_new);
    if !is_new {
        spawn_local(async move {
            match api::fetch_one::<User>(ENTITY, &record_id.get_value()).await {
                Ok(user) => {
                    username.set(user.username);
                    display_name.set(user.display_name);
                    email.set(user.email.unwrap_or_default());
                    roles.set(user.roles.join(", "));
                    groups.set(user.groups.join(", "));
                    active.set(user.active);
                    baseline.set(snapshot());
                }
                Err(e) => notifier.error(e),
            }
            loading.set(false);
        });
    }

    let build_body = move || -> Result<UserBody, String> {
        let username_v = username.get_untracked().trim().to_string();
        if username_v.is_empty() {
            return Err("Username is required".into());
        }
        let email_v = email.get_untracked().trim().to_string();
        if !email_v.is_empty() && !email_v.contains('@') {
            return Err("Email address is not valid".into());
        }
        let display_v = display_name.get_untracked().trim().to_string();
        Ok(UserBody {
            username: username_v,
            display_name: (!display_v.is_empty()).then_some(display_v),
            email: (!email_v.is_empty()).then_some(email_v),
            roles: split_csv(&roles.get_untracked()),
            groups: split_csv(&groups.get_untracked()),
            active: active.get_untracked(),
        })
    };

    let saving = RwSignal::new(false);
    let on_save = move |_| {
        let body = match build_body() {
            Ok(body) => body,
            Err(e) => {
                notifier.error(e);
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            let result = if is_new {
                api::create_entity(ENTITY, &body).await
            } else {
                api::update_entity(ENTITY, &record_id.get_value(), &body).await
            };
            saving.set(false);
            match result {
                Ok(message) => {
                    baseline.set(snapshot());
                    notifier.success(if message.is_empty() {
                        "User saved".to_string()
                    } else {
                        message
                    });
                    TimeoutFuture::new(400).await;
                    navigate.with_value(|nav| nav(LIST_ROUTE, Default::default()));
                }
                Err(e) => notifier.error(e),
            }
        });
    };

    let on_back = move |_| {
        if confirm_discard(dirty.get_untracked()) {
            navigate.with_value(|nav| nav(LIST_ROUTE, Default::default()));
        }
    };

    view! {
        <div style="max-width: 560px; margin: 0 auto; padding: 16px;">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 16px;">
                <button class="button button--secondary" on:click=on_back>
                    {icon("chevron-left")}
                    " Back"
                </button>
                <h2 style="margin: 0;">{if is_new { "New user" } else { "Edit user" }}</h2>
            </div>
            {move || if loading.get() {
                view! { <div style="padding: 30px; text-align: center; color: #888;">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Username"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Display name"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || display_name.get()
                                on:input=move |ev| display_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Email"</label>
                            <input
                                type="email"
                                style=FIELD_INPUT
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Roles (comma-separated)"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || roles.get()
                                on:input=move |ev| roles.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Groups (comma-separated)"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || groups.get()
                                on:input=move |ev| groups.set(event_target_value(&ev))
                            />
                        </div>
                        <label style=FIELD_CHECKBOX_ROW>
                            <input
                                type="checkbox"
                                prop:checked=move || active.get()
                                on:change=move |ev| active.set(event_target_checked(&ev))
                            />
                            "Account is active"
                        </label>
                        <div style=FORM_ACTIONS>
                            <button
                                class="button button--primary"
                                disabled=move || saving.get()
                                on:click=on_save
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button class="button button--secondary" on:click=on_back>
                                "Cancel"
                            </button>
                        </div>
                        {(!is_new).then(|| view! {
                            <RevisionList entity=ENTITY id=record_id.get_value() />
                        })}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
