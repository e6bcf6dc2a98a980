use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::forum::{ForumCategory, ForumPost};

use crate::shared::api;
use crate::shared::date_utils::format_date;
use crate::shared::notify::use_notifier;

/// Public forum overview: categories in their configured order, each with
/// its threads (pinned first, then newest).
#[component]
pub fn PublicForum() -> impl IntoView {
    let notifier = use_notifier();
    let categories = RwSignal::new(Vec::<ForumCategory>::new());
    let threads = RwSignal::new(Vec::<ForumPost>::new());

    spawn_local(async move {
        match api::fetch_index::<ForumCategory>("forum-categories").await {
            Ok(mut items) => {
                items.sort_by_key(|c| c.position);
                categories.set(items);
            }
            Err(e) => notifier.error(e),
        }
    });
    spawn_local(async move {
        match api::fetch_index::<ForumPost>("forum").await {
            Ok(mut items) => {
                items.sort_by(|a, b| {
                    b.pinned
                        .cmp(&a.pinned)
                        .then(b.created_at.cmp(&a.created_at))
                });
                threads.set(items);
            }
            Err(e) => notifier.error(e),
        }
    });

    view! {
        <div style="max-width: 820px; margin: 0 auto; padding: 24px 20px;">
            <h2 style="margin-top: 0;">"Forum"</h2>
            {move || {
                let all_threads = threads.get();
                categories.get().into_iter().map(|category| {
                    let in_category: Vec<ForumPost> = all_threads
                        .iter()
                        .filter(|t| t.category_id == category.id)
                        .cloned()
                        .collect();
                    view! {
                        <section style="margin-bottom: 26px;">
                            <h3 style="margin: 0 0 2px;">{category.name}</h3>
                            <div style="font-size: 13px; color: #999; margin-bottom: 8px;">
                                {category.description}
                            </div>
                            {if in_category.is_empty() {
                                view! { <div style="color: #aaa; font-size: 14px;">"No threads yet."</div> }.into_any()
                            } else {
                                in_category.into_iter().map(|thread| view! {
                                    <div style="display: flex; gap: 8px; align-items: baseline; padding: 5px 0; border-bottom: 1px solid #f2f2f2; font-size: 15px;">
                                        {thread.pinned.then(|| view! { <span title="Pinned">"📌"</span> })}
                                        {thread.locked.then(|| view! { <span title="Locked">"🔒"</span> })}
                                        <span style="color: #1a1a1a;">{thread.title}</span>
                                        <span style="margin-left: auto; font-size: 13px; color: #999; white-space: nowrap;">
                                            {thread.author} " · " {format_date(&thread.created_at)}
                                        </span>
                                    </div>
                                }).collect_view().into_any()
                            }}
                        </section>
                    }
                }).collect_view()
            }}
        </div>
    }
}
