use leptos::context::Provider;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::system::auth::AuthStatus;

use super::api::check_auth;
use crate::pages::not_found::NotFound;

/// Wraps the admin routes. Until the auth check answers, nothing but a
/// placeholder renders; an unauthorized session gets the regular 404 page
/// instead of a redirect, so the admin area's existence is not revealed.
#[component]
pub fn AdminGate(children: ChildrenFn) -> impl IntoView {
    let status = RwSignal::new(Option::<Result<AuthStatus, ()>>::None);

    spawn_local(async move {
        match check_auth().await {
            Ok(auth) => status.set(Some(Ok(auth))),
            Err(e) => {
                log::debug!("auth check refused: {}", e);
                status.set(Some(Err(())));
            }
        }
    });

    view! {
        {move || match status.get() {
            None => view! {
                <div style="padding: 40px; text-align: center; color: #888;">
                    "Checking access..."
                </div>
            }.into_any(),
            Some(Err(())) => view! { <NotFound /> }.into_any(),
            Some(Ok(auth)) => {
                let children = children.clone();
                view! {
                    <Provider value=auth>
                        {children()}
                    </Provider>
                }.into_any()
            }
        }}
    }
}

/// Current admin identity, available anywhere below [`AdminGate`].
pub fn use_auth() -> Option<AuthStatus> {
    use_context::<AuthStatus>()
}
