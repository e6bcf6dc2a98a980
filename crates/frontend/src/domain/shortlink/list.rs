use leptos::prelude::*;

use crate::shared::list_engine::EntityList;

#[component]
pub fn ShortlinkList() -> impl IntoView {
    view! { <EntityList config=super::list_config() /> }
}
