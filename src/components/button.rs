//! Shared button primitive used by panels and cards.

use leptos::prelude::*;

/// A platform button. With no `on_press` the click is a no-op; `muted`
/// switches to the visually disabled treatment without unwiring the click.
#[component]
pub fn Button(
    #[prop(optional)] on_press: Option<Callback<()>>,
    #[prop(optional)] muted: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class="btn"
            class:btn--muted=muted
            on:click=move |_| {
                if let Some(on_press) = on_press.as_ref() {
                    on_press.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
