use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::shared::icons::icon;

const NAV_LINK: &str =
    "color: #444; text-decoration: none; padding: 6px 10px; border-radius: 4px; font-size: 15px;";

/// Site chrome around every page: top navigation, content area, footer.
#[component]
pub fn SiteShell() -> impl IntoView {
    view! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; font-family: system-ui, -apple-system, sans-serif; color: #333; background: #fafafa;">
            <header style="display: flex; align-items: center; gap: 14px; padding: 10px 20px; background: #fff; border-bottom: 1px solid #e0e0e0;">
                <a href="/" style="display: inline-flex; align-items: center; gap: 8px; font-weight: 600; font-size: 17px; color: #1a1a1a; text-decoration: none;">
                    {icon("home")}
                    "Student Union"
                </a>
                <nav style="display: flex; gap: 4px; margin-left: 14px;">
                    <a href="/blog" style=NAV_LINK>"Blog"</a>
                    <a href="/forum" style=NAV_LINK>"Forum"</a>
                    <a href="/information" style=NAV_LINK>"Information"</a>
                </nav>
                <div style="margin-left: auto; display: flex; gap: 4px;">
                    <a href="/profile" style=NAV_LINK>"Profile"</a>
                    <a href="/admin" style=NAV_LINK>"Admin"</a>
                </div>
            </header>
            <main style="flex: 1;">
                <Outlet />
            </main>
            <footer style="padding: 14px 20px; border-top: 1px solid #e0e0e0; background: #fff; font-size: 13px; color: #999; text-align: center;">
                "Student Union — run by members, for members"
            </footer>
        </div>
    }
}
