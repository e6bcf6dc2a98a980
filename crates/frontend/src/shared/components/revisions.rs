use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::Revision;

use crate::shared::api;
use crate::shared::date_utils::format_datetime;

/// Edit-history footer of a detail form. Loads once per (entity, id);
/// a missing history endpoint is shown as an empty list, not an error.
#[component]
pub fn RevisionList(entity: &'static str, #[prop(into)] id: String) -> impl IntoView {
    let revisions = RwSignal::new(Vec::<Revision>::new());
    let loaded = RwSignal::new(false);

    spawn_local(async move {
        if let Ok(items) = api::fetch_revisions(entity, &id).await {
            revisions.set(items);
        }
        loaded.set(true);
    });

    view! {
        <div style="margin-top: 24px; border-top: 1px solid #eee; padding-top: 12px;">
            <h3 style="margin: 0 0 8px; font-size: 15px; color: #555;">"History"</h3>
            {move || {
                let items = revisions.get();
                if !loaded.get() {
                    view! { <div style="color: #888; font-size: 13px;">"Loading..."</div> }.into_any()
                } else if items.is_empty() {
                    view! { <div style="color: #888; font-size: 13px;">"No recorded edits"</div> }.into_any()
                } else {
                    view! {
                        <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                            <thead>
                                <tr style="border-bottom: 1px solid #ddd; color: #666; text-align: left;">
                                    <th style="padding: 4px 8px;">"When"</th>
                                    <th style="padding: 4px 8px;">"Editor"</th>
                                    <th style="padding: 4px 8px;">"Note"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.into_iter().map(|rev| view! {
                                    <tr style="border-bottom: 1px solid #f0f0f0;">
                                        <td style="padding: 4px 8px; white-space: nowrap;">
                                            {format_datetime(&rev.created_at)}
                                        </td>
                                        <td style="padding: 4px 8px;">{rev.editor}</td>
                                        <td style="padding: 4px 8px; color: #777;">{rev.note}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </div>
    }
}
