//! Dismissable toast notifications, provided app-wide via context.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|list| list.push(Notice { id, kind, text }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier context not found")
}

/// Toast stack rendered once by the shell.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notifier = use_notifier();
    let notices = notifier.notices;

    view! {
        <div style="position: fixed; top: 16px; right: 16px; z-index: 1000; display: flex; flex-direction: column; gap: 8px; max-width: 360px;">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let (bg, border, fg) = match notice.kind {
                        NoticeKind::Success => ("#e8f5e9", "#a5d6a7", "#2e7d32"),
                        NoticeKind::Error => ("#fee", "#f5b5b5", "#c33"),
                    };
                    let id = notice.id;
                    view! {
                        <div style=format!(
                            "background: {}; border: 1px solid {}; color: {}; padding: 10px 12px; border-radius: 6px; font-size: 14px; display: flex; justify-content: space-between; gap: 10px; box-shadow: 0 2px 8px rgba(0,0,0,0.1);",
                            bg, border, fg
                        )>
                            <span>{notice.text.clone()}</span>
                            <button
                                style="background: none; border: none; cursor: pointer; color: inherit; font-weight: bold; line-height: 1;"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
