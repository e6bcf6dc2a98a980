use leptos::ev;
use leptos::prelude::*;

/// Confirmation step gating every destructive or irreversible action.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: Signal<String>,
    /// Label of the confirming button, e.g. "Delete".
    #[prop(optional, into)] action_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let action_label = if action_label.is_empty() {
        "Confirm".to_string()
    } else {
        action_label
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal modal--confirm" on:click=stop_propagation>
                <div class="modal-body" style="padding: 20px; font-size: 15px;">
                    {move || message.get()}
                </div>
                <div style="display: flex; justify-content: flex-end; gap: 10px; padding: 0 20px 16px;">
                    <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                        {action_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
