use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use contracts::domain::common::Visibility;
use contracts::domain::event::{Event, EventBody};

use crate::domain::{split_csv, VISIBILITY_OPTIONS};
use crate::shared::api;
use crate::shared::components::forms::{
    FIELD_INPUT, FIELD_LABEL, FIELD_ROW, FIELD_TEXTAREA, FORM_ACTIONS,
};
use crate::shared::components::{confirm_discard, use_unsaved_guard, RevisionList};
use crate::shared::date_utils::{parse_datetime_local, to_datetime_local};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

const ENTITY: &str = "events";
const LIST_ROUTE: &str = "/admin/events";
const MIN_DESCRIPTION: usize = 10;

#[component]
pub fn EventForm() -> impl IntoView {
    let notifier = use_notifier();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let is_new = id == "new" || id.is_empty();
    let record_id = StoredValue::new(id);
    let navigate = StoredValue::new_local(use_navigate());

    let title = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let organizers = RwSignal::new(String::new());
    let starts_at = RwSignal::new(String::new());
    let ends_at = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let visibility = RwSignal::new(Visibility::default().as_str().to_string());

    let snapshot = move || {
        vec![
            title.get(),
            location.get(),
            organizers.get(),
            starts_at.get(),
            ends_at.get(),
            description.get(),
            visibility.get(),
        ]
    };
    let baseline = RwSignal::new(snapshot());
    let dirty = Memo::new(move |_| snapshot() != baseline.get());
    use_unsaved_guard(dirty.into());

    let loading = RwSignal::new(!is_new);
    if !is_new {
        spawn_local(async move {
            match api::fetch_one::<Event>(ENTITY, &record_id.get_value()).await {
                Ok(event) => {
                    title.set(event.title);
                    location.set(event.location);
                    organizers.set(event.organizers.join(", "));
                    starts_at.set(to_datetime_local(&event.starts_at));
                    ends_at.set(
                        event
                            .ends_at
                            .map(|ts| to_datetime_local(&ts))
                            .unwrap_or_default(),
                    );
                    description.set(event.description);
                    visibility.set(event.visibility.as_str().to_string());
                    baseline.set(snapshot());
                }
                Err(e) => notifier.error(e),
            }
            loading.set(false);
        });
    }

    let build_body = move || -> Result<EventBody, String> {
        let title_v = title.get_untracked().trim().to_string();
        if title_v.is_empty() {
            return Err("Title is required".into());
        }
        let starts_v = parse_datetime_local(&starts_at.get_untracked())
            .ok_or_else(|| "A valid start time is required".to_string())?;
        let ends_raw = ends_at.get_untracked();
        let ends_v = if ends_raw.trim().is_empty() {
            None
        } else {
            let parsed = parse_datetime_local(&ends_raw)
                .ok_or_else(|| "End time is not a valid date".to_string())?;
            if parsed < starts_v {
                return Err("End time must not be before the start".into());
            }
            Some(parsed)
        };
        let description_v = description.get_untracked().trim().to_string();
        if description_v.len() < MIN_DESCRIPTION {
            return Err(format!(
                "Description must be at least {} characters",
                MIN_DESCRIPTION
            ));
        }
        let location_v = location.get_untracked().trim().to_string();
        Ok(EventBody {
            title: title_v,
            organizers: split_csv(&organizers.get_untracked()),
            location: (!location_v.is_empty()).then_some(location_v),
            starts_at: Some(starts_v),
            ends_at: ends_v,
            description: description_v,
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
                        "Event saved".to_string()
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
                <h2 style="margin: 0;">{if is_new { "New event" } else { "Edit event" }}</h2>
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
                            <label style=FIELD_LABEL>"Location"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || location.get()
                                on:input=move |ev| location.set(event_target_value(&ev))
                            />
                        </div>
                        <div style="display: flex; gap: 14px;">
                            <div style=format!("{} flex: 1;", FIELD_ROW)>
                                <label style=FIELD_LABEL>"Starts"</label>
                                <input
                                    type="datetime-local"
                                    style=FIELD_INPUT
                                    prop:value=move || starts_at.get()
                                    on:input=move |ev| starts_at.set(event_target_value(&ev))
                                />
                            </div>
                            <div style=format!("{} flex: 1;", FIELD_ROW)>
                                <label style=FIELD_LABEL>"Ends (optional)"</label>
                                <input
                                    type="datetime-local"
                                    style=FIELD_INPUT
                                    prop:value=move || ends_at.get()
                                    on:input=move |ev| ends_at.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div style=FIELD_ROW>
                            <label style=FIELD_LABEL>"Organizers (comma-separated)"</label>
                            <input
                                type="text"
                                style=FIELD_INPUT
                                prop:value=move || organizers.get()
                                on:input=move |ev| organizers.set(event_target_value(&ev))
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
                            <label style=FIELD_LABEL>"Description"</label>
                            <textarea
                                style=FIELD_TEXTAREA
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
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
