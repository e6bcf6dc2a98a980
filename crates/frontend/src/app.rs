use leptos::prelude::*;

use crate::routes::AppRouter;
use crate::shared::notify::{NoticeStack, Notifier};

#[component]
pub fn App() -> impl IntoView {
    provide_context(Notifier::new());

    view! {
        <AppRouter />
        <NoticeStack />
    }
}
