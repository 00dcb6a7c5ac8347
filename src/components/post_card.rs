//! Feed card for a single crime, agency, or post entry.
//!
//! DESIGN
//! ======
//! Presentation is uniform across record kinds; every mutation is delegated
//! upward through optional callbacks, so the card never touches shared state.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::net::types::{CrimeRecord, FeedItem};

/// Payload for the show-on-map action: the wrapped crime when it has a
/// location to focus, `None` for everything else.
pub(crate) fn map_target(item: &FeedItem) -> Option<CrimeRecord> {
    item.as_crime().filter(|crime| crime.location.is_some()).cloned()
}

/// A feed card with edit, delete, and show-on-map actions.
#[component]
pub fn PostCard(
    item: FeedItem,
    #[prop(optional)] on_update: Option<Callback<FeedItem>>,
    #[prop(optional)] on_delete: Option<Callback<FeedItem>>,
    #[prop(optional)] on_check_on_map: Option<Callback<Option<CrimeRecord>>>,
) -> impl IntoView {
    let kind_label = item.kind().as_str();
    let title = item.title().to_owned();
    let summary = item.summary().to_owned();
    let target = map_target(&item);
    let has_map_target = target.is_some();

    let on_update_click = Callback::new({
        let item = item.clone();
        move |()| {
            if let Some(on_update) = on_update.as_ref() {
                on_update.run(item.clone());
            }
        }
    });
    let on_delete_click = Callback::new({
        let item = item.clone();
        move |()| {
            if let Some(on_delete) = on_delete.as_ref() {
                on_delete.run(item.clone());
            }
        }
    });
    let on_map_click = Callback::new(move |()| {
        if let Some(on_check_on_map) = on_check_on_map.as_ref() {
            on_check_on_map.run(target.clone());
        }
    });

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <span class="post-card__kind">{kind_label}</span>
                <span class="post-card__title">{title}</span>
            </header>
            <p class="post-card__summary">{summary}</p>
            <div class="post-card__actions">
                <Show when=move || has_map_target>
                    <Button on_press=on_map_click>"show on map"</Button>
                </Show>
                <Button on_press=on_update_click>"edit"</Button>
                <Button on_press=on_delete_click>"delete"</Button>
            </div>
        </article>
    }
}
