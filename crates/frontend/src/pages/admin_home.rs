use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::guard::use_auth;

const CARDS: &[(&str, &str, &str)] = &[
    ("/admin/blog", "blog", "Blog posts"),
    ("/admin/events", "event", "Events"),
    ("/admin/forum", "forum", "Forum threads"),
    ("/admin/forum-categories", "forum", "Forum categories"),
    ("/admin/comments", "comment", "Comments"),
    ("/admin/notes", "note", "Notes"),
    ("/admin/shortlinks", "link", "Shortlinks"),
    ("/admin/users", "users", "Users"),
    ("/admin/groups", "group", "Groups"),
];

/// Admin landing page: one card per section.
#[component]
pub fn AdminHome() -> impl IntoView {
    let greeting = use_auth()
        .map(|auth| {
            if auth.display_name.is_empty() {
                auth.username
            } else {
                auth.display_name
            }
        })
        .unwrap_or_default();

    view! {
        <div style="padding: 24px;">
            <h2 style="margin-top: 0;">"Administration"</h2>
            {(!greeting.is_empty()).then(|| view! {
                <p style="color: #777; margin-top: -8px;">"Signed in as " {greeting.clone()}</p>
            })}
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(190px, 1fr)); gap: 14px; margin-top: 16px;">
                {CARDS.iter().map(|&(href, icon_name, label)| view! {
                    <a
                        href=href
                        style="display: flex; align-items: center; gap: 10px; padding: 16px; border: 1px solid #e0e0e0; border-radius: 8px; text-decoration: none; color: #333; background: #fff; font-size: 15px;"
                    >
                        {icon(icon_name)}
                        {label}
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
