//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomeView, signin::SignInPage};
use crate::state::{auth::AuthState, feed::FeedState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, seeds them from the API on the
/// browser build, and sets up client-side routing. The home route mounts
/// the view bare; embedding hosts supply the collaborator callbacks.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let feed = RwSignal::new(FeedState::default());

    provide_context(auth);
    provide_context(feed);

    #[cfg(feature = "hydrate")]
    {
        auth.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|state| {
                state.user = user;
                state.loading = false;
            });
        });

        feed.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_feed().await {
                Ok(items) => feed.update(|state| state.replace(items)),
                Err(message) => {
                    log::error!("feed fetch failed: {message}");
                    feed.update(|state| {
                        state.loading = false;
                        state.error = Some(message);
                    });
                }
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/crimewatch.css"/>
        <Title text="CrimeWatch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <HomeView/> }/>
                <Route path=StaticSegment("signin") view=SignInPage/>
            </Routes>
        </Router>
    }
}
