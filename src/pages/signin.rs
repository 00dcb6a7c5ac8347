//! Sign-in handoff page linked from the report panel.

use leptos::prelude::*;

/// Sign-in landing: explains why an account is needed and hands off to the
/// platform auth entrypoint. The credential flow itself lives outside this
/// crate.
#[component]
pub fn SignInPage() -> impl IntoView {
    let on_continue = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/auth/signin");
            }
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"CrimeWatch"</h1>
                <p class="signin-card__subtitle">
                    "Sign in to report crimes and manage your agency."
                </p>
                <a href="/auth/signin" class="btn btn--primary" on:click=on_continue>
                    "Continue to sign in"
                </a>
                <a class="signin-card__back" href="/">"Back to home"</a>
            </div>
        </div>
    }
}
