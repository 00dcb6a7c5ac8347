//! Home page: map banner, call-to-action panels, and the shared post feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It reads `AuthState` and `FeedState` from
//! context, renders them without mutating either, and forwards every
//! interaction to caller-supplied callbacks. A missing callback turns the
//! matching click into a no-op while the control stays mounted.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::post_card::PostCard;
use crate::net::types::{CrimeRecord, FeedItem, User};
use crate::state::auth::AuthState;
use crate::state::feed::FeedState;

/// Location token sent with the show-nearby action.
pub(crate) const CURRENT_LOCATION: &str = "current";

/// What the report panel renders for a given session user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ReportPanel {
    /// Whether the report control gets the enabled treatment.
    pub enabled: bool,
    /// Whether the sign-in prompt accompanies the control.
    pub show_signin: bool,
}

/// Report-panel gate: signed-in users may report, signed-out visitors get
/// the sign-in prompt and a muted control.
pub(crate) fn report_panel(user: Option<&User>) -> ReportPanel {
    let signed_in = user.is_some();
    ReportPanel {
        enabled: signed_in,
        show_signin: !signed_in,
    }
}

/// Home view: map placeholder, three call-to-action panels, and the feed.
#[component]
pub fn HomeView(
    #[prop(optional)] on_show_crimes: Option<Callback<String>>,
    #[prop(optional)] on_create_crime: Option<Callback<()>>,
    #[prop(optional)] on_create_agency: Option<Callback<()>>,
    #[prop(optional)] on_update_post: Option<Callback<FeedItem>>,
    #[prop(optional)] on_delete_post: Option<Callback<FeedItem>>,
    #[prop(optional)] on_check_on_map: Option<Callback<Option<CrimeRecord>>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed = expect_context::<RwSignal<FeedState>>();

    let clicked_show_current = Callback::new(move |()| {
        if let Some(on_show_crimes) = on_show_crimes.as_ref() {
            on_show_crimes.run(CURRENT_LOCATION.to_owned());
        }
    });
    let clicked_report = Callback::new(move |()| {
        if let Some(on_create_crime) = on_create_crime.as_ref() {
            on_create_crime.run(());
        }
    });
    let clicked_agency = Callback::new(move |()| {
        if let Some(on_create_agency) = on_create_agency.as_ref() {
            on_create_agency.run(());
        }
    });
    let clicked_update = Callback::new(move |item: FeedItem| {
        if let Some(on_update_post) = on_update_post.as_ref() {
            on_update_post.run(item);
        }
    });
    let clicked_delete = Callback::new(move |item: FeedItem| {
        if let Some(on_delete_post) = on_delete_post.as_ref() {
            on_delete_post.run(item);
        }
    });
    let clicked_check_on_map = Callback::new(move |crime: Option<CrimeRecord>| {
        if let Some(on_check_on_map) = on_check_on_map.as_ref() {
            on_check_on_map.run(crime);
        }
    });

    view! {
        <div class="home-page">
            // Reserved for the externally mounted map widget.
            <div class="home-page__map" id="homemap"></div>

            <div class="home-page__panels">
                <div class="cta-card">
                    <p class="cta-card__blurb">
                        "Witnessing or witnessed a crime? Share it by clicking the report button."
                    </p>
                    <Show when=move || report_panel(auth.get().user.as_ref()).show_signin>
                        <p class="cta-card__signin">
                            <a class="cta-card__signin-link" href="/signin">"sign in"</a>
                            " to be able to report a crime."
                        </p>
                    </Show>
                    <div class="cta-card__actions">
                        {move || {
                            let panel = report_panel(auth.get().user.as_ref());
                            view! {
                                <Button muted={!panel.enabled} on_press=clicked_report>
                                    "report"
                                </Button>
                            }
                        }}
                    </div>
                </div>

                <div class="cta-card">
                    <p class="cta-card__blurb">
                        "Want to view reported crimes in and around your current location? Just click the show button."
                    </p>
                    <div class="cta-card__actions">
                        <Button on_press=clicked_show_current>"show"</Button>
                    </div>
                </div>

                <div class="cta-card">
                    <p class="cta-card__blurb">
                        "Want to have your agency on this platform? It could be a government, for-profit, or non-profit agency."
                    </p>
                    <div class="cta-card__actions">
                        <Button on_press=clicked_agency>"create agency"</Button>
                    </div>
                </div>
            </div>

            <div class="home-page__feed">
                <Show when=move || feed.get().error.is_some()>
                    <p class="home-page__feed-error">
                        {move || feed.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !feed.get().loading
                    fallback=move || view! { <p class="home-page__feed-status">"Loading posts..."</p> }
                >
                    {move || {
                        feed.get()
                            .items
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <PostCard
                                        item=item
                                        on_update=clicked_update
                                        on_delete=clicked_delete
                                        on_check_on_map=clicked_check_on_map
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </div>
        </div>
    }
}
