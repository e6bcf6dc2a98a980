use leptos::prelude::*;

use crate::shared::list_engine::EntityList;

#[component]
pub fn ForumPostList() -> impl IntoView {
    view! { <EntityList config=super::list_config() /> }
}
