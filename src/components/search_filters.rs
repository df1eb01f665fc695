//! Search & Filter Component
//!
//! Name search plus cuisine, minimum-rating, and price-range filters. Every
//! control fires one request and writes the result into the shared listing;
//! an empty term or selection falls back to the full listing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::store::{reload_restaurants, store_set_restaurants, use_app_store};

/// Cuisine filter options
const CUISINE_TYPES: &[&str] = &[
    "French",
    "French Canadian",
    "Quebecois",
    "Jewish Deli",
    "Fine Dining",
    "Bakery",
];

/// Minimum-rating filter options: (select value, label)
const MIN_RATINGS: &[(&str, &str)] = &[
    ("3.0", "3.0+"),
    ("3.5", "3.5+"),
    ("4.0", "4.0+"),
    ("4.5", "4.5+"),
];

/// Price-range filter options
const PRICE_RANGES: &[&str] = &["$", "$$", "$$$", "$$$$"];

#[component]
pub fn SearchFilters() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (search_term, set_search_term) = signal(String::new());

    // Triggered by the button and by Enter in the search box
    let run_search = move || {
        let term = search_term.get();
        spawn_local(async move {
            let term = term.trim().to_string();
            if term.is_empty() {
                reload_restaurants(store).await;
                return;
            }
            match api::restaurants::search(&term).await {
                Ok(results) => store_set_restaurants(&store, results),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error searching restaurants: {err}").into(),
                    );
                    ctx.notify_error("Search failed. Please try again.");
                }
            }
        });
    };

    let on_cuisine_change = move |ev: web_sys::Event| {
        let cuisine = event_target_value(&ev);
        spawn_local(async move {
            if cuisine.is_empty() {
                reload_restaurants(store).await;
                return;
            }
            match api::restaurants::by_cuisine(&cuisine).await {
                Ok(results) => store_set_restaurants(&store, results),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error filtering by cuisine: {err}").into(),
                    );
                    ctx.notify_error("Filter failed. Please try again.");
                }
            }
        });
    };

    let on_rating_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        spawn_local(async move {
            let Ok(min_rating) = value.parse::<f64>() else {
                reload_restaurants(store).await;
                return;
            };
            match api::restaurants::by_min_rating(min_rating).await {
                Ok(results) => store_set_restaurants(&store, results),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error filtering by rating: {err}").into(),
                    );
                    ctx.notify_error("Filter failed. Please try again.");
                }
            }
        });
    };

    let on_price_change = move |ev: web_sys::Event| {
        let price_range = event_target_value(&ev);
        spawn_local(async move {
            if price_range.is_empty() {
                reload_restaurants(store).await;
                return;
            }
            match api::restaurants::by_price(&price_range).await {
                Ok(results) => store_set_restaurants(&store, results),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error filtering by price: {err}").into(),
                    );
                    ctx.notify_error("Filter failed. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="search-filters">
            <div class="search-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search restaurants by name..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            run_search();
                        }
                    }
                />
                <button class="search-btn" on:click=move |_| run_search()>
                    "Search"
                </button>
            </div>

            <div class="filter-row">
                <select class="cuisine-filter" on:change=on_cuisine_change>
                    <option value="">"All cuisines"</option>
                    {CUISINE_TYPES
                        .iter()
                        .map(|cuisine| view! { <option value=*cuisine>{*cuisine}</option> })
                        .collect_view()}
                </select>

                <select class="rating-filter" on:change=on_rating_change>
                    <option value="">"Any rating"</option>
                    {MIN_RATINGS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>

                <select class="price-filter" on:change=on_price_change>
                    <option value="">"Any price"</option>
                    {PRICE_RANGES
                        .iter()
                        .map(|price| view! { <option value=*price>{*price}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
