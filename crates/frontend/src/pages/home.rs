use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::blog::BlogPost;
use contracts::domain::event::Event;

use crate::shared::api;
use crate::shared::date_utils::{format_date, format_datetime};

/// Start page: blog posts flagged for the home page plus upcoming events.
#[component]
pub fn HomePage() -> impl IntoView {
    let posts = RwSignal::new(Vec::<BlogPost>::new());
    let events = RwSignal::new(Vec::<Event>::new());

    spawn_local(async move {
        if let Ok(slice) = api::fetch_page::<BlogPost>("blog", 25, 1).await {
            let mut featured: Vec<BlogPost> = slice
                .items
                .into_iter()
                .filter(|post| post.show_at_home)
                .collect();
            featured.sort_by(|a, b| b.pinned.cmp(&a.pinned));
            posts.set(featured);
        }
    });
    spawn_local(async move {
        if let Ok(slice) = api::fetch_page::<Event>("events", 25, 1).await {
            let now = Utc::now();
            let mut upcoming: Vec<Event> = slice
                .items
                .into_iter()
                .filter(|event| event.starts_at >= now)
                .collect();
            upcoming.sort_by_key(|event| event.starts_at);
            upcoming.truncate(5);
            events.set(upcoming);
        }
    });

    view! {
        <div style="max-width: 920px; margin: 0 auto; padding: 24px 20px; display: flex; gap: 32px; flex-wrap: wrap;">
            <section style="flex: 2; min-width: 320px;">
                <h2 style="margin-top: 0;">"News"</h2>
                {move || {
                    let items = posts.get();
                    if items.is_empty() {
                        view! { <p style="color: #888;">"Nothing posted yet."</p> }.into_any()
                    } else {
                        items.into_iter().map(|post| view! {
                            <article style="margin-bottom: 20px; padding-bottom: 16px; border-bottom: 1px solid #eee;">
                                <a href=format!("/blog/{}", post.id) style="font-size: 18px; font-weight: 600; color: #1a1a1a; text-decoration: none;">
                                    {post.title}
                                </a>
                                <div style="font-size: 13px; color: #999; margin: 4px 0;">
                                    {post.author} " · " {format_date(&post.created_at)}
                                </div>
                                <p style="margin: 6px 0 0; color: #555;">{post.summary}</p>
                            </article>
                        }).collect_view().into_any()
                    }
                }}
            </section>
            <section style="flex: 1; min-width: 240px;">
                <h2 style="margin-top: 0;">"Upcoming events"</h2>
                {move || {
                    let items = events.get();
                    if items.is_empty() {
                        view! { <p style="color: #888;">"No upcoming events."</p> }.into_any()
                    } else {
                        items.into_iter().map(|event| view! {
                            <div style="margin-bottom: 14px;">
                                <div style="font-weight: 600;">{event.title}</div>
                                <div style="font-size: 13px; color: #777;">
                                    {format_datetime(&event.starts_at)}
                                    {(!event.location.is_empty()).then(|| format!(" · {}", event.location))}
                                </div>
                            </div>
                        }).collect_view().into_any()
                    }
                }}
            </section>
        </div>
    }
}
