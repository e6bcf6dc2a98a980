use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use contracts::domain::shortlink::{Shortlink, ShortlinkBody};

use crate::shared::api;
use crate::shared::components::forms::{FIELD_INPUT, FIELD_LABEL, FIELD_ROW, FORM_ACTIONS};
use crate::shared::components::{confirm_discard, use_unsaved_guard, RevisionList};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

use super::{valid_slug, valid_target};

const ENTITY: &str = "shortlinks";
const LIST_ROUTE: &str = "/admin/shortlinks";

#[component]
pub fn ShortlinkForm() -> impl IntoView {
    let notifier = use_notifier();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let is_new = id == "new" || id.is_empty();
    let record_id = StoredValue::new(id);
    let navigate = StoredValue::new_local(use_navigate());

    let slug = RwSignal::new(String::new());
    let target_url = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let clicks = RwSignal::new(0u64);

    let snapshot = move || vec![slug.get(), target_url.get(), description.get()];
    let baseline = RwSignal::new(snapshot());
    let dirty = Memo::new(move |_| snapshot() != baseline.get());
    use_unsaved_guard(dirty.into());

    let loading = RwSignal::new(!is_new);
    if !is_new {
        spawn_local(async move {
            match api::fetch_one::<Shortlink>(ENTITY, &record_id.get_value()).await {
                Ok(link) => {
                    slug.set(link.slug);
                    target_url.set(link.target_url);
                    description.set(link.description);
                    clicks.set(link.clicks);
                    baseline.set(snapshot());
                }
                Err(e) => notifier.error(e),
            }
            loading.set(false);
        });
    }

    let build_body = move || -> Result<ShortlinkBody, String> {
        let slug_v = slug.get_untracked().trim().to_string();
        if !valid_slug(&slug_v) {
            return Err("Slug must use lowercase letters, digits and dashes".into());
        }
        let target_v = target_url.get_untracked().trim().to_string();
        if !valid_target(&target_v) {
            return Err("Target must be an absolute http(s) URL".into());
        }
        let description_v = description.get_untracked().trim().to_string();
        Ok(ShortlinkBody {
            slug: slug_v,
            target_url: target_v,
            description: (!description_v.is_empty()).then_some(description_v),
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
                        "Shortlink saved".to_string()
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
                <h2 style="margin: 0;">{if is_new { "New shortlink" } else { "Edit shortlink" }}</h2>
            </div>
            {move || if loading.get() {
                view! { <div style="padding: 30px; text-align: center; color: #888;">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Slug (lowercase, digits, dashes)"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || slug.get()
                                on:input=move |ev| slug.set(event_target_value(&ev))
                            />
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Target URL"</label>
                            <input
                                type="url"
                                style=FIELD_INPUT
                                placeholder="https://"
                                prop:value=move || target_url.get()
                                on:input=move |ev| target_url.set(event_target_value(&ev))
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
                        {(!is_new).then(|| view! {
                            <div style="margin-bottom: 14px; font-size: 13px; color: #777;">
                                "Clicks so far: " {clicks.get_untracked().to_string()}
                            </div>
                        })}
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
