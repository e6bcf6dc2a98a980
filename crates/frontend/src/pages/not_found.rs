use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div style="padding: 60px 20px; text-align: center;">
            <h2 style="font-size: 42px; margin: 0; color: #bbb;">"404"</h2>
            <p style="color: #777;">"This page does not exist."</p>
            <a href="/" style="color: #2196F3;">"Back to the start page"</a>
        </div>
    }
}
