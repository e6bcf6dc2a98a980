//! The generic admin list view: toolbar, search tabs, sortable table,
//! pagination, delete confirmation. Entities plug in via [`ListConfig`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api;
use crate::shared::components::{ConfirmDialog, PaginationControls, SearchInput};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

use super::entity::{FieldKind, FieldSpec, ListEntity, SortKeyCode};
use super::pagination::{clamp_page, PER_PAGE_DEFAULT, PER_PAGE_OPTIONS};
use super::query::{
    add_query_param, fetch_url_params, remove_query_param, BrowserUrl, ListQuery,
};
use super::search::{SearchState, SearchTab};
use super::sort::SortState;
use super::state::{ListData, LoadPhase};
use super::storage::{load_per_page, save_per_page, BrowserStorage};

/// One table column. `render` yields the cell text; `sort` makes the
/// header clickable.
#[derive(Clone)]
pub struct ColumnSpec<T: ListEntity> {
    pub title: &'static str,
    pub sort: Option<T::SortKey>,
    pub render: fn(&T) -> String,
}

/// Everything entity-specific the generic list needs.
#[derive(Clone)]
pub struct ListConfig<T: ListEntity> {
    pub title: &'static str,
    pub columns: Vec<ColumnSpec<T>>,
    /// Advanced-search fields, in render order. Their keys double as URL
    /// query keys.
    pub fields: Vec<FieldSpec>,
    /// Options for a Multi field, derived from the full index (facets).
    pub facet_options: Option<fn(&[T], &str) -> Vec<String>>,
    /// Short human label of a row, used in confirmations and notices.
    pub row_label: fn(&T) -> String,
    pub edit_route: fn(&T) -> String,
    /// `None` for collections whose records are only created elsewhere
    /// (e.g. comments authored on the public site).
    pub create_route: Option<&'static str>,
}

/// Collect the distinct values of one array-valued field, sorted. The
/// usual `facet_options` building block.
pub fn distinct_values<T>(items: &[T], extract: fn(&T) -> Vec<String>) -> Vec<String> {
    let mut values: Vec<String> = items.iter().flat_map(extract).collect();
    values.sort();
    values.dedup();
    values
}

fn sort_indicator<K: PartialEq + Copy>(current: SortState<K>, key: K) -> &'static str {
    if current.key == Some(key) {
        if current.reversed {
            " ▼"
        } else {
            " ▲"
        }
    } else {
        " ⇅"
    }
}

#[component]
pub fn EntityList<T>(config: ListConfig<T>) -> impl IntoView
where
    T: ListEntity + DeserializeOwned,
{
    let notifier = use_notifier();

    let field_keys: Vec<&'static str> = config.fields.iter().map(|f| f.key).collect();
    let initial = ListQuery::from_params(&fetch_url_params(&BrowserUrl), &field_keys);
    let initial_has_criteria = !initial.q_all.trim().is_empty() || !initial.fields.is_empty();

    let config = StoredValue::new(config);
    let data = RwSignal::new(ListData::<T>::new());
    let page = RwSignal::new(initial.page.max(1));
    let per_page = RwSignal::new(load_per_page(&BrowserStorage, T::ENTITY));
    let tab = RwSignal::new(SearchTab::from_index(initial.tab));
    let q_all = RwSignal::new(initial.q_all.clone());
    let field_values = RwSignal::new(initial.fields.clone());
    let sort = RwSignal::new(SortState::<T::SortKey> {
        key: initial.sort.as_deref().and_then(T::SortKey::from_code),
        reversed: initial.desc,
    });
    let pending_delete = RwSignal::new(Option::<(String, String)>::None);

    let load_page = move || {
        let token = data
            .try_update(|d| d.begin_page_load())
            .unwrap_or_default();
        let p = page.get_untracked();
        let pp = per_page.get_untracked();
        spawn_local(async move {
            match api::fetch_page::<T>(T::ENTITY, pp, p).await {
                Ok(slice) => {
                    data.update(|d| {
                        d.apply_page(token, slice);
                    });
                }
                Err(e) => {
                    data.update(|d| d.fail_page(token));
                    notifier.error(e);
                }
            }
        });
    };

    let load_index = move || {
        let token = data
            .try_update(|d| d.begin_index_load())
            .unwrap_or_default();
        spawn_local(async move {
            match api::fetch_index::<T>(T::ENTITY).await {
                Ok(items) => {
                    data.update(|d| {
                        d.apply_index(token, items);
                    });
                }
                Err(e) => {
                    data.update(|d| d.fail_index(token));
                    notifier.error(e);
                }
            }
        });
    };

    // Lazily fetch the full collection the first time a filter is typed.
    let ensure_index = move || {
        if data.with_untracked(|d| d.index_phase == LoadPhase::Idle) {
            load_index();
        }
    };

    let search_state = Memo::new(move |_| {
        let specs = config.with_value(|c| c.fields.clone());
        SearchState::with_fields(tab.get(), q_all.get(), &specs, &field_values.get())
    });

    let has_criteria = move || search_state.get_untracked().has_criteria();

    // Initial fetches: the page always, the index only when a deep link
    // carries an active search.
    load_page();
    if initial_has_criteria {
        load_index();
    }

    let rows = Memo::new(move |_| data.get().visible_rows(&search_state.get(), sort.get()));
    let searching = Memo::new(move |_| data.get().is_searching(&search_state.get()));

    let on_quick_change = Callback::new(move |value: String| {
        q_all.set(value.clone());
        if value.is_empty() {
            remove_query_param(&BrowserUrl, "qAll");
        } else {
            add_query_param(&BrowserUrl, "qAll", &value);
        }
        ensure_index();
    });

    let set_field = move |key: &'static str, value: String| {
        field_values.update(|map| {
            if value.is_empty() {
                map.remove(key);
            } else {
                map.insert(key.to_string(), value.clone());
            }
        });
        if value.is_empty() {
            remove_query_param(&BrowserUrl, key);
        } else {
            add_query_param(&BrowserUrl, key, &value);
        }
        ensure_index();
    };

    let toggle_multi = move |key: &'static str, option: String| {
        let current = field_values
            .get_untracked()
            .get(key)
            .cloned()
            .unwrap_or_default();
        let mut selected: Vec<String> = current
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if let Some(pos) = selected.iter().position(|v| *v == option) {
            selected.remove(pos);
        } else {
            selected.push(option);
        }
        set_field(key, selected.join(","));
    };

    let on_tab = move |next: SearchTab| {
        tab.set(next);
        if next.index() == 0 {
            remove_query_param(&BrowserUrl, "tab");
        } else {
            add_query_param(&BrowserUrl, "tab", &next.index().to_string());
        }
        // switching tabs only changes which fields count as active;
        // it never refetches
    };

    let on_sort = move |key: T::SortKey| {
        sort.update(|s| s.toggle(key));
        let s = sort.get_untracked();
        match s.key {
            Some(k) => {
                add_query_param(&BrowserUrl, "sort", k.as_code());
                if s.reversed {
                    add_query_param(&BrowserUrl, "desc", "true");
                } else {
                    remove_query_param(&BrowserUrl, "desc");
                }
            }
            None => {
                remove_query_param(&BrowserUrl, "sort");
                remove_query_param(&BrowserUrl, "desc");
            }
        }
    };

    let on_page_change = Callback::new(move |new_page: usize| {
        let total = data.with_untracked(|d| d.total_pages);
        let p = clamp_page(new_page, total);
        page.set(p);
        if p <= 1 {
            remove_query_param(&BrowserUrl, "page");
        } else {
            add_query_param(&BrowserUrl, "page", &p.to_string());
        }
        load_page();
    });

    let reload = move || {
        load_page();
        if has_criteria() {
            load_index();
        }
    };

    let on_per_page_change = move |value: usize| {
        let clamped = save_per_page(&BrowserStorage, T::ENTITY, value);
        per_page.set(clamped);
        page.set(1);
        remove_query_param(&BrowserUrl, "page");
        // page-size change is an implicit reload
        reload();
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some((id, label)) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api::delete_entity(T::ENTITY, &id).await {
                Ok(message) => {
                    data.update(|d| {
                        d.remove_by_id(&id);
                    });
                    if message.is_empty() {
                        notifier.success(format!("{} deleted", label));
                    } else {
                        notifier.success(message);
                    }
                }
                Err(e) => notifier.error(e),
            }
        });
    });

    let cancel_delete = Callback::new(move |_: ()| pending_delete.set(None));
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|(_, label)| format!("Delete \"{}\"? This cannot be undone.", label))
            .unwrap_or_default()
    });

    let tab_button = move |this: SearchTab, label: &'static str| {
        view! {
            <button
                class="tab-button"
                style=move || format!(
                    "padding: 6px 14px; border: none; border-bottom: 2px solid {}; background: none; cursor: pointer; font-size: 14px; color: {};",
                    if tab.get() == this { "#2196F3" } else { "transparent" },
                    if tab.get() == this { "#2196F3" } else { "#555" },
                )
                on:click=move |_| on_tab(this)
            >
                {label}
            </button>
        }
    };

    let column_count = config.with_value(|c| c.columns.len()) + 1;

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 120px); overflow: hidden;">
            // Toolbar
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center; flex-wrap: wrap;">
                <h2 style="margin: 0; font-size: 20px;">{config.with_value(|c| c.title)}</h2>
                {config.with_value(|c| c.create_route).map(|href| view! {
                    <a class="button button--primary" href=href>
                        {icon("plus")}
                        " New"
                    </a>
                })}
                <button class="button button--secondary" on:click=move |_| reload()>
                    {icon("refresh")}
                    " Reload"
                </button>
                <div style="margin-left: auto; font-size: 14px; color: #666;">
                    "Total: "
                    <strong style="color: #333;">{move || rows.get().len()}</strong>
                </div>
            </div>

            // Search tabs
            <div style="display: flex; gap: 4px; padding: 4px 10px 0; border-bottom: 1px solid #eee; flex-shrink: 0;">
                {tab_button(SearchTab::Quick, "Search")}
                {tab_button(SearchTab::Advanced, "Advanced")}
                {tab_button(SearchTab::Settings, "Settings")}
            </div>

            <div style="padding: 10px; flex-shrink: 0;">
                {move || match tab.get() {
                    SearchTab::Quick => view! {
                        <SearchInput
                            value=Signal::derive(move || q_all.get())
                            on_change=on_quick_change
                            placeholder="Search all fields..."
                        />
                    }.into_any(),
                    SearchTab::Advanced => {
                        let specs = config.with_value(|c| c.fields.clone());
                        let values = field_values.get();
                        let index = data.get().index;
                        view! {
                            <div style="display: flex; gap: 16px; flex-wrap: wrap; align-items: flex-start;">
                                {specs.into_iter().map(|spec: FieldSpec| {
                                    let raw = values.get(spec.key).cloned().unwrap_or_default();
                                    let control = match spec.kind {
                                        FieldKind::Text => view! {
                                            <input
                                                type="text"
                                                style="padding: 5px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                                                prop:value=raw
                                                on:input=move |ev| set_field(spec.key, event_target_value(&ev))
                                            />
                                        }.into_any(),
                                        FieldKind::Flag => view! {
                                            <select
                                                style="padding: 5px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                                                prop:value=raw
                                                on:change=move |ev| set_field(spec.key, event_target_value(&ev))
                                            >
                                                <option value="">"Any"</option>
                                                <option value="true">"Yes"</option>
                                                <option value="false">"No"</option>
                                            </select>
                                        }.into_any(),
                                        FieldKind::Choice(options) => view! {
                                            <select
                                                style="padding: 5px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                                                prop:value=raw.clone()
                                                on:change=move |ev| set_field(spec.key, event_target_value(&ev))
                                            >
                                                <option value="">"Any"</option>
                                                {options.iter().map(|(value, label)| view! {
                                                    <option value=*value selected=raw == *value>{*label}</option>
                                                }).collect_view()}
                                            </select>
                                        }.into_any(),
                                        FieldKind::Multi => {
                                            let options = config
                                                .with_value(|c| c.facet_options)
                                                .map(|f| f(&index, spec.key))
                                                .unwrap_or_default();
                                            if options.is_empty() {
                                                // facets come from the full index; fall back
                                                // to free text until it is loaded
                                                view! {
                                                    <input
                                                        type="text"
                                                        placeholder="comma-separated"
                                                        style="padding: 5px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                                                        prop:value=raw
                                                        on:input=move |ev| set_field(spec.key, event_target_value(&ev))
                                                    />
                                                }.into_any()
                                            } else {
                                                let selected: Vec<String> = raw
                                                    .split(',')
                                                    .map(str::trim)
                                                    .filter(|s| !s.is_empty())
                                                    .map(str::to_string)
                                                    .collect();
                                                view! {
                                                    <div style="display: flex; gap: 8px; flex-wrap: wrap; max-width: 420px;">
                                                        {options.into_iter().map(|option| {
                                                            let checked = selected.iter().any(|s| *s == option);
                                                            let option_for_toggle = option.clone();
                                                            view! {
                                                                <label style="display: inline-flex; align-items: center; gap: 4px; font-size: 13px; cursor: pointer;">
                                                                    <input
                                                                        type="checkbox"
                                                                        prop:checked=checked
                                                                        on:change=move |_| toggle_multi(spec.key, option_for_toggle.clone())
                                                                    />
                                                                    {option}
                                                                </label>
                                                            }
                                                        }).collect_view()}
                                                    </div>
                                                }.into_any()
                                            }
                                        }
                                    };
                                    view! {
                                        <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: #555;">
                                            {spec.label}
                                            {control}
                                        </label>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                    SearchTab::Settings => view! {
                        <div style="display: flex; gap: 16px; align-items: center;">
                            <label style="display: inline-flex; align-items: center; gap: 6px; font-size: 14px;">
                                "Rows per page:"
                                <select
                                    style="padding: 5px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                                    on:change=move |ev| {
                                        let value =
                                            event_target_value(&ev).parse().unwrap_or(PER_PAGE_DEFAULT);
                                        on_per_page_change(value);
                                    }
                                    prop:value=move || per_page.get().to_string()
                                >
                                    {PER_PAGE_OPTIONS.iter().map(|&size| view! {
                                        <option value=size.to_string() selected=move || per_page.get() == size>
                                            {size.to_string()}
                                        </option>
                                    }).collect_view()}
                                </select>
                            </label>
                            <button class="button button--secondary" on:click=move |_| reload()>
                                {icon("refresh")}
                                " Reload"
                            </button>
                        </div>
                    }.into_any(),
                }}
            </div>

            // Table
            <div style="flex: 1; overflow-y: auto; overflow-x: hidden; position: relative;">
                {move || data.get().loading().then(|| view! {
                    <div style="position: absolute; inset: 0; background: rgba(255,255,255,0.6); display: flex; align-items: center; justify-content: center; z-index: 5; font-size: 15px; color: #666;">
                        "Loading..."
                    </div>
                })}
                <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                    <thead style="position: sticky; top: 0; background: #f9f9f9; z-index: 1;">
                        <tr style="border-bottom: 2px solid #ddd;">
                            {config.with_value(|c| c.columns.clone()).into_iter().map(|col| {
                                match col.sort {
                                    Some(key) => view! {
                                        <th
                                            style="padding: 10px 8px; text-align: left; cursor: pointer; user-select: none;"
                                            on:click=move |_| on_sort(key)
                                        >
                                            {col.title}
                                            {move || sort_indicator(sort.get(), key)}
                                        </th>
                                    }.into_any(),
                                    None => view! {
                                        <th style="padding: 10px 8px; text-align: left;">{col.title}</th>
                                    }.into_any(),
                                }
                            }).collect_view()}
                            <th style="padding: 10px 8px; text-align: center; width: 90px;">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = rows.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan=column_count style="text-align: center; padding: 20px; color: #888;">
                                            {if searching.get() {
                                                "Nothing matches the current filter"
                                            } else {
                                                "No records"
                                            }}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().enumerate().map(|(idx, item)| {
                                    let bg = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                    let id = item.id().to_string();
                                    let label = config.with_value(|c| (c.row_label)(&item));
                                    let edit_href = config.with_value(|c| (c.edit_route)(&item));
                                    let cells: Vec<String> = config.with_value(|c| {
                                        c.columns.iter().map(|col| (col.render)(&item)).collect()
                                    });
                                    view! {
                                        <tr style=format!("background: {}; border-bottom: 1px solid #eee;", bg)>
                                            {cells.into_iter().map(|text| {
                                                let title = text.clone();
                                                view! {
                                                    <td style="padding: 8px;" title=title>{text}</td>
                                                }
                                            }).collect_view()}
                                            <td style="padding: 8px; text-align: center; white-space: nowrap;">
                                                <a class="button button--icon" href=edit_href title="Edit">
                                                    {icon("edit")}
                                                </a>
                                                <button
                                                    class="button button--icon"
                                                    title="Delete"
                                                    on:click=move |_| pending_delete.set(Some((id.clone(), label.clone())))
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            // Pagination is meaningless while a search scans the full index
            {move || (!searching.get()).then(|| view! {
                <div style="padding: 8px 10px; border-top: 1px solid #ddd; flex-shrink: 0;">
                    <PaginationControls
                        current_page=Signal::derive(move || data.get().current_page)
                        total_pages=Signal::derive(move || data.get().total_pages)
                        on_page_change=on_page_change
                    />
                </div>
            })}

            {move || pending_delete.get().is_some().then(|| view! {
                <ConfirmDialog
                    message=delete_message
                    action_label="Delete"
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_engine::testing::post;

    #[test]
    fn distinct_values_dedupes_and_sorts() {
        let mut a = post("1", "a", "x", 1);
        a.tags = vec!["news".into(), "intro".into()];
        let mut b = post("2", "b", "x", 2);
        b.tags = vec!["news".into(), "events".into()];
        let values = distinct_values(&[a, b], |p| p.tags.clone());
        assert_eq!(values, vec!["events", "intro", "news"]);
    }
}
