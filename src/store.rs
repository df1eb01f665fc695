//! Restaurant Listing Store
//!
//! Uses Leptos reactive_stores for the shared display state every listing,
//! search, and filter action writes into. Concurrent actions race freely;
//! the last response to land wins the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::Restaurant;

/// What the listing region should show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListPhase {
    /// Initial load (or reload) in flight
    #[default]
    Loading,
    /// Listing fetched; `restaurants` holds the records to render
    Ready,
    /// The full-listing fetch failed
    Failed,
}

/// Shared listing state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Records currently on display, in backend order
    pub restaurants: Vec<Restaurant>,
    pub phase: ListPhase,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the listing with a fresh result set
pub fn store_set_restaurants(store: &AppStore, restaurants: Vec<Restaurant>) {
    store.restaurants().set(restaurants);
    store.phase().set(ListPhase::Ready);
}

/// Fetch the full listing into the store. Shared by the initial load and by
/// every empty-selection filter fallback.
pub async fn reload_restaurants(store: AppStore) {
    store.phase().set(ListPhase::Loading);
    match api::restaurants::list().await {
        Ok(restaurants) => store_set_restaurants(&store, restaurants),
        Err(err) => {
            web_sys::console::error_1(&format!("Error loading restaurants: {err}").into());
            store.phase().set(ListPhase::Failed);
        }
    }
}
