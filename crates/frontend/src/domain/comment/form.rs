use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use contracts::domain::comment::{Comment, CommentBody};

use crate::shared::api;
use crate::shared::components::forms::{
    FIELD_CHECKBOX_ROW, FIELD_LABEL, FIELD_ROW, FIELD_TEXTAREA, FORM_ACTIONS,
};
use crate::shared::components::{confirm_discard, use_unsaved_guard};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

const ENTITY: &str = "comments";
const LIST_ROUTE: &str = "/admin/comments";

/// Moderation form. Author and target are backend-owned and shown
/// read-only; only the text and the visibility flag can change.
#[component]
pub fn CommentForm() -> impl IntoView {
    let notifier = use_notifier();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let record_id = StoredValue::new(id);
    let navigate = StoredValue::new_local(use_navigate());

    let content = RwSignal::new(String::new());
    let visible = RwSignal::new(true);
    let header = RwSignal::new(String::new());

    let snapshot = move || vec![content.get(), visible.get().to_string()];
    let baseline = RwSignal::new(snapshot());
    let dirty = Memo::new(move |_| snapshot() != baseline.get());
    use_unsaved_guard(dirty.into());

    let loading = RwSignal::new(true);
    spawn_local(async move {
        match api::fetch_one::<Comment>(ENTITY, &record_id.get_value()).await {
            Ok(comment) => {
                header.set(format!(
                    "By {} on {} ({}), {}",
                    comment.author,
                    comment.target_kind.as_str(),
                    comment.target_id,
                    format_datetime(&comment.created_at),
                ));
                content.set(comment.content);
                visible.set(comment.visible);
                baseline.set(snapshot());
            }
            Err(e) => notifier.error(e),
        }
        loading.set(false);
    });

    let build_body = move || -> Result<CommentBody, String> {
        let content_v = content.get_untracked().trim().to_string();
        if content_v.is_empty() {
            return Err("Content must not be empty; delete the comment instead".into());
        }
        Ok(CommentBody {
            content: content_v,
            visible: visible.get_untracked(),
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
            let result = api::update_entity(ENTITY, &record_id.get_value(), &body).await;
            saving.set(false);
            match result {
                Ok(message) => {
                    baseline.set(snapshot());
                    notifier.success(if message.is_empty() {
                        "Comment saved".to_string()
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
        <div style="max-width: 660px; margin: 0 auto; padding: 16px;">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 16px;">
                <button class="button button--secondary" on:click=on_back>
                    {icon("chevron-left")}
                    " Back"
                </button>
                <h2 style="margin: 0;">"Moderate comment"</h2>
            </div>
            {move || if loading.get() {
                view! { <div style="padding: 30px; text-align: center; color: #888;">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div>
                        <div style="margin-bottom: 14px; font-size: 13px; color: #777;">
                            {header.get()}
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Content"</label>
                            <textarea
                                style=FIELD_TEXTAREA
                                prop:value=move || content.get()
                                on:input=move |ev| content.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <label style=FIELD_CHECKBOX_ROW>
                            <input
                                type="checkbox"
                                prop:checked=move || visible.get()
                                on:change=move |ev| visible.set(event_target_checked(&ev))
                            />
                            "Visible on the public site"
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
                    </div>
                }.into_any()
            }}
        </div>
    }
}
