use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use contracts::domain::common::Visibility;
use contracts::domain::note::{Note, NoteBody};

use crate::domain::{split_csv, VISIBILITY_OPTIONS};
use crate::shared::api;
use crate::shared::components::forms::{
    FIELD_INPUT, FIELD_LABEL, FIELD_ROW, FIELD_TEXTAREA, FORM_ACTIONS,
};
use crate::shared::components::{confirm_discard, use_unsaved_guard, RevisionList};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

const ENTITY: &str = "notes";
const LIST_ROUTE: &str = "/admin/notes";

#[component]
pub fn NoteForm() -> impl IntoView {
    let notifier = use_notifier();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let is_new = id == "new" || id.is_empty();
    let record_id = StoredValue::new(id);
    let navigate = StoredValue::new_local(use_navigate());

    let title = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let visibility = RwSignal::new(Visibility::default().as_str().to_string());

    let snapshot = move || vec![title.get(), tags.get(), content.get(), visibility.get()];
    let baseline = RwSignal::new(snapshot());
    let dirty = Memo::new(move |_| snapshot() != baseline.get());
    use_unsaved_guard(dirty.into());

    let loading = RwSignal::new(!is_new);
    if !is_new {
        spawn_local(async move {
            match api::fetch_one::<Note>(ENTITY, &record_id.get_value()).await {
                Ok(note) => {
                    title.set(note.title);
                    tags.set(note.tags.join(", "));
                    content.set(note.content);
                    visibility.set(note.visibility.as_str().to_string());
                    baseline.set(snapshot());
                }
                Err(e) => notifier.error(e),
            }
            loading.set(false);
        });
    }

    let build_body = move || -> Result<NoteBody, String> {
        let title_v = title.get_untracked().trim().to_string();
        if title_v.is_empty() {
            return Err("Title is required".into());
        }
        Ok(NoteBody {
            title: title_v,
            tags: split_csv(&tags.get_untracked()),
            content: content.get_untracked(),
            visibility: Visibility::from_str(&visibility.get_untracked()).unwrap_or_default(),
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
                        "Note saved".to_string()
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
                <h2 style="margin: 0;">{if is_new { "New note" } else { "Edit note" }}</h2>
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
                            <label style=FIELD_LABEL>"Tags (comma-separated)"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || tags.get()
                                on:input=move |ev| tags.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Visibility"</label>
                            <select
                                style=FIELD_INPUT
                                prop:value=move || visibility.get()
                                on:change=move |ev| visibility.set(event_target_value(&ev))
                            >
                                {VISIBILITY_OPTIONS.iter().map(|(value, label)| view! {
                                    <option value=*value>{*label}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Content (Markdown)"</label>
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
