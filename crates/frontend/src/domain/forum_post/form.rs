use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use contracts::domain::forum::{ForumCategory, ForumPost, ForumPostBody};

use crate::shared::api;
use crate::shared::components::forms::{
    FIELD_CHECKBOX_ROW, FIELD_INPUT, FIELD_LABEL, FIELD_ROW, FIELD_TEXTAREA, FORM_ACTIONS,
};
use crate::shared::components::{confirm_discard, use_unsaved_guard, RevisionList};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

const ENTITY: &str = "forum";
const LIST_ROUTE: &str = "/admin/forum";

#[component]
pub fn ForumPostForm() -> impl IntoView {
    let notifier = use_notifier();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let is_new = id == "new" || id.is_empty();
    let record_id = StoredValue::new(id);
    let navigate = StoredValue::new_local(use_navigate());

    let title = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let pinned = RwSignal::new(false);
    let locked = RwSignal::new(false);
    let content = RwSignal::new(String::new());
    let categories = RwSignal::new(Vec::<ForumCategory>::new());

    let snapshot = move || {
        vec![
            title.get(),
            category_id.get(),
            pinned.get().to_string(),
            locked.get().to_string(),
            content.get(),
        ]
    };
    let baseline = RwSignal::new(snapshot());
    let dirty = Memo::new(move |_| snapshot() != baseline.get());
    use_unsaved_guard(dirty.into());

    // The category select needs the full category collection.
    spawn_local(async move {
        match api::fetch_index::<ForumCategory>("forum-categories").await {
            Ok(mut items) => {
                items.sort_by_key(|c| c.position);
                categories.set(items);
            }
            Err(e) => notifier.error(e),
        }
    });

    let loading = RwSignal::new(!is_new);
    if !is_new {
        spawn_local(async move {
            match api::fetch_one::<ForumPost>(ENTITY, &record_id.get_value()).await {
                Ok(post) => {
                    title.set(post.title);
                    category_id.set(post.category_id);
                    pinned.set(post.pinned);
                    locked.set(post.locked);
                    content.set(post.content);
                    baseline.set(snapshot());
                }
                Err(e) => notifier.error(e),
            }
            loading.set(false);
        });
    }

    let build_body = move || -> Result<ForumPostBody, String> {
        let title_v = title.get_untracked().trim().to_string();
        if title_v.is_empty() {
            return Err("Title is required".into());
        }
        let category_v = category_id.get_untracked();
        if category_v.is_empty() {
            return Err("A category must be selected".into());
        }
        Ok(ForumPostBody {
            title: title_v,
            category_id: category_v,
            pinned: pinned.get_untracked(),
            locked: locked.get_untracked(),
            content: content.get_untracked(),
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
                        "Thread saved".to_string()
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
        <div style="max-width: 760px; margin: 0 auto; padding: 16px;">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 16px;">
                <button class="button button--secondary" on:click=on_back>
                    {icon("chevron-left")}
                    " Back"
                </button>
                <h2 style="margin: 0;">{if is_new { "New thread" } else { "Edit thread" }}</h2>
            </div>
            {move || if loading.get() {
                view! { <div style="padding: 30px; text-align: center; color: #888;">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Title"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Category"</label>
                            <select
                                style=FIELD_INPUT
                                prop:value=move || category_id.get()
                                on:change=move |ev| category_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select a category..."</option>
                                {move || categories.get().into_iter().map(|category| view! {
                                    <option
                                        value=category.id.clone()
                                        selected=category_id.get_untracked() == category.id
                                    >
                                        {category.name}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <label style=FIELD_CHECKBOX_ROW>
                            <input
                                type="checkbox"
                                prop:checked=move || pinned.get()
                                on:change=move |ev| pinned.set(event_target_checked(&ev))
                            />
                            "Pin to top of the category"
                        </label>
                        <label style=FIELD_CHECKBOX_ROW>
                            <input
                                type="checkbox"
                                prop:checked=move || locked.get()
                                on:change=move |ev| locked.set(event_target_checked(&ev))
                            />
                            "Lock (no new replies)"
                        </label>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Content"</label>
                            <textarea
                                style=FIELD_TEXTAREA
                                prop:value=move || content.get()
                                on:input=move |ev| content.set(event_target_value(&ev))
                            ></textarea>
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
