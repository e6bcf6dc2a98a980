use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use contracts::domain::forum::{ForumCategory, ForumCategoryBody};

use crate::shared::api;
use crate::shared::components::forms::{FIELD_INPUT, FIELD_LABEL, FIELD_ROW, FORM_ACTIONS};
use crate::shared::components::{confirm_discard, use_unsaved_guard, RevisionList};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

const ENTITY: &str = "forum-categories";
const LIST_ROUTE: &str = "/admin/forum-categories";

#[component]
pub fn ForumCategoryForm() -> impl IntoView {
    let notifier = use_notifier();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let is_new = id == "new" || id.is_empty();
    let record_id = StoredValue::new(id);
    let navigate = StoredValue::new_local(use_navigate());

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let position = RwSignal::new(String::from("0"));

    let snapshot = move || vec![name.get(), description.get(), position.get()];
    let baseline = RwSignal::new(snapshot());
    let dirty = Memo::new(move |_| snapshot() != baseline.get());
    use_unsaved_guard(dirty.into());

    let loading = RwSignal::new(!is_new);
    if !is_new {
        spawn_local(async move {
            match api::fetch_one::<ForumCategory>(ENTITY, &record_id.get_value()).await {
                Ok(category) => {
                    name.set(category.name);
                    description.set(category.description);
                    position.set(category.position.to_string());
                    baseline.set(snapshot());
                }
                Err(e) => notifier.error(e),
            }
            loading.set(false);
        });
    }

    let build_body = move || -> Result<ForumCategoryBody, String> {
        let name_v = name.get_untracked().trim().to_string();
        if name_v.is_empty() {
            return Err("Name is required".into());
        }
        let position_v = position
            .get_untracked()
            .trim()
            .parse::<u32>()
            .map_err(|_| "Position must be a non-negative number".to_string())?;
        let description_v = description.get_untracked().trim().to_string();
        Ok(ForumCategoryBody {
            name: name_v,
            description: (!description_v.is_empty()).then_some(description_v),
            position: position_v,
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
                        "Category saved".to_string()
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
                <h2 style="margin: 0;">{if is_new { "New category" } else { "Edit category" }}</h2>
            </div>
            {move || if loading.get() {
                view! { <div style="padding: 30px; text-align: center; color: #888;">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Name"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Description"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Position (lower comes first)"</label>
                            <input
                                type="number"
                                min="0"
                                style=FIELD_INPUT
                                prop:value=move || position.get()
                                on:input=move |ev| position.set(event_target_value(&ev))
                            />
                        </div>
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
