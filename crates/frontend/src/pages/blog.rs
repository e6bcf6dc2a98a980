use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use contracts::domain::blog::BlogPost;

use crate::shared::api;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::notify::use_notifier;

/// Public blog listing, backend-paginated.
#[component]
pub fn PublicBlogList() -> impl IntoView {
    let notifier = use_notifier();
    let posts = RwSignal::new(Vec::<BlogPost>::new());
    let page = RwSignal::new(1usize);
    let total_pages = RwSignal::new(0usize);

    let load = move || {
        let p = page.get_untracked();
        spawn_local(async move {
            match api::fetch_page::<BlogPost>("blog", 10, p).await {
                Ok(slice) => {
                    posts.set(slice.items);
                    total_pages.set(slice.total_pages);
                }
                Err(e) => notifier.error(e),
            }
        });
    };
    load();

    let on_page_change = Callback::new(move |new_page: usize| {
        page.set(new_page);
        load();
    });

    view! {
        <div style="max-width: 720px; margin: 0 auto; padding: 24px 20px;">
            <h2 style="margin-top: 0;">"Blog"</h2>
            {move || posts.get().into_iter().map(|post| view! {
                <article style="margin-bottom: 22px; padding-bottom: 18px; border-bottom: 1px solid #eee;">
                    <a href=format!("/blog/{}", post.id) style="font-size: 19px; font-weight: 600; color: #1a1a1a; text-decoration: none;">
                        {post.title}
                    </a>
                    <div style="font-size: 13px; color: #999; margin: 4px 0;">
                        {post.author}
                        " · "
                        {format_date(&post.created_at)}
                        {(!post.tags.is_empty()).then(|| format!(" · {}", post.tags.join(", ")))}
                    </div>
                    <p style="margin: 6px 0 0; color: #555;">{post.summary}</p>
                </article>
            }).collect_view()}
            <PaginationControls
                current_page=Signal::derive(move || page.get())
                total_pages=Signal::derive(move || total_pages.get())
                on_page_change=on_page_change
            />
        </div>
    }
}

/// One blog post. Markdown is rendered as plain text; rich rendering is
/// not a concern of this application.
#[component]
pub fn PublicBlogPost() -> impl IntoView {
    let notifier = use_notifier();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let post = RwSignal::new(Option::<BlogPost>::None);
    let loaded = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_one::<BlogPost>("blog", &id).await {
            Ok(found) => post.set(Some(found)),
            Err(e) => notifier.error(e),
        }
        loaded.set(true);
    });

    view! {
        <div style="max-width: 720px; margin: 0 auto; padding: 24px 20px;">
            {move || match post.get() {
                Some(post) => view! {
                    <article>
                        <h2 style="margin: 0 0 6px;">{post.title}</h2>
                        <div style="font-size: 13px; color: #999; margin-bottom: 18px;">
                            {post.author} " · " {format_date(&post.created_at)}
                        </div>
                        <div style="white-space: pre-wrap; line-height: 1.6; color: #333;">
                            {post.content}
                        </div>
                    </article>
                    <a href="/blog" style="display: inline-block; margin-top: 24px; color: #2196F3;">
                        "← All posts"
                    </a>
                }.into_any(),
                None if loaded.get() => view! {
                    <p style="color: #888;">"This post does not exist or is not public."</p>
                }.into_any(),
                None => view! {
                    <p style="color: #888;">"Loading..."</p>
                }.into_any(),
            }}
        </div>
    }
}
