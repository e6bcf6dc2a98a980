use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

const SECTIONS: &[(&str, &str, &str)] = &[
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

/// Admin chrome: fixed sidebar over the entity sections, content on the
/// right. Rendered only behind the auth gate.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let location = use_location();
    let current = move || location.pathname.get();

    view! {
        <div style="display: flex; min-height: calc(100vh - 110px);">
            <aside style="width: 210px; flex-shrink: 0; background: #2c3440; padding: 12px 0;">
                {SECTIONS.iter().map(|&(href, icon_name, label)| {
                    let active = move || {
                        let path = current();
                        // exact section match; /admin/forum must not light up
                        // for /admin/forum-categories
                        path == href || path.starts_with(&format!("{}/", href))
                    };
                    view! {
                        <a
                            href=href
                            style=move || format!(
                                "display: flex; align-items: center; gap: 10px; padding: 9px 16px; font-size: 14px; text-decoration: none; color: {}; background: {};",
                                if active() { "#fff" } else { "#aab4c0" },
                                if active() { "#3d4755" } else { "transparent" },
                            )
                        >
                            {icon(icon_name)}
                            {label}
                        </a>
                    }
                }).collect_view()}
            </aside>
            <section style="flex: 1; min-width: 0; background: #fff;">
                <Outlet />
            </section>
        </div>
    }
}
