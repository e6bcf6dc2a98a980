use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::system::auth::AuthStatus;

use crate::system::auth::api::check_auth;

/// Shows the signed-in identity, or a hint when the session is anonymous.
/// Sign-in itself is handled outside this application.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let status = RwSignal::new(Option::<Result<AuthStatus, ()>>::None);

    spawn_local(async move {
        match check_auth().await {
            Ok(auth) => status.set(Some(Ok(auth))),
            Err(_) => status.set(Some(Err(()))),
        }
    });

    view! {
        <div style="max-width: 560px; margin: 0 auto; padding: 24px 20px;">
            <h2 style="margin-top: 0;">"Profile"</h2>
            {move || match status.get() {
                None => view! { <p style="color: #888;">"Loading..."</p> }.into_any(),
                Some(Ok(auth)) => view! {
                    <div>
                        <p>
                            "Signed in as "
                            <strong>
                                {if auth.display_name.is_empty() {
                                    auth.username.clone()
                                } else {
                                    auth.display_name.clone()
                                }}
                            </strong>
                            " (" {auth.username.clone()} ")"
                        </p>
                        {(!auth.roles.is_empty()).then(|| view! {
                            <p style="color: #777;">"Roles: " {auth.roles.join(", ")}</p>
                        })}
                    </div>
                }.into_any(),
                Some(Err(())) => view! {
                    <p style="color: #777;">
                        "You are not signed in. Use the campus single sign-on to "
                        "access member content."
                    </p>
                }.into_any(),
            }}
        </div>
    }
}
