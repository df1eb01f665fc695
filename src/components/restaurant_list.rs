//! Restaurant List Component
//!
//! Projects the shared listing state into cards, one per record in backend
//! order. Loading, failure, and empty states each render a single placeholder.

use leptos::prelude::*;

use crate::models::Restaurant;
use crate::stars::stars;
use crate::store::{use_app_store, AppStateStoreFields, ListPhase};

#[component]
pub fn RestaurantList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="restaurants-list">
            {move || match store.phase().get() {
                ListPhase::Loading => {
                    view! { <div class="loading">"Loading restaurants..."</div> }.into_any()
                }
                ListPhase::Failed => {
                    view! {
                        <div class="message error">
                            "Failed to load restaurants. Please try again."
                        </div>
                    }
                        .into_any()
                }
                ListPhase::Ready => {
                    let restaurants = store.restaurants().get();
                    if restaurants.is_empty() {
                        view! { <div class="message">"No restaurants found."</div> }.into_any()
                    } else {
                        restaurants
                            .into_iter()
                            .map(|restaurant| view! { <RestaurantCard restaurant /> })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

fn cuisine_label(cuisine_type: Option<String>) -> String {
    cuisine_type.unwrap_or_else(|| "Cuisine not specified".to_string())
}

fn description_label(description: Option<String>) -> String {
    description.unwrap_or_else(|| "No description available.".to_string())
}

fn price_label(price_range: Option<String>) -> String {
    price_range.unwrap_or_else(|| "Price not specified".to_string())
}

fn rating_text(average_rating: f64, total_reviews: i64) -> String {
    format!("{average_rating} ({total_reviews} reviews)")
}

/// One restaurant card
#[component]
fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let rating_text = rating_text(restaurant.average_rating, restaurant.total_reviews);
    let cuisine = cuisine_label(restaurant.cuisine_type);
    let description = description_label(restaurant.description);
    let price_range = price_label(restaurant.price_range);

    view! {
        <div class="restaurant-card">
            <div class="restaurant-header">
                <div class="restaurant-name">{restaurant.name}</div>
                <div class="restaurant-cuisine">{cuisine}</div>
                <div class="restaurant-rating">
                    <div class="stars">{stars(restaurant.average_rating)}</div>
                    <span class="rating-text">{rating_text}</span>
                </div>
            </div>
            <div class="restaurant-body">
                <div class="restaurant-description">{description}</div>
                <div class="restaurant-details">
                    <div class="address">{restaurant.address}</div>
                    {restaurant
                        .phone
                        .map(|phone| view! { <div class="phone">{phone}</div> })}
                    {restaurant
                        .website
                        .map(|website| {
                            view! {
                                <div class="website">
                                    <a href=website target="_blank">"Website"</a>
                                </div>
                            }
                        })}
                    <div class="price-range">{price_range}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cuisine_falls_back() {
        assert_eq!(cuisine_label(None), "Cuisine not specified");
        assert_eq!(cuisine_label(Some("French".to_string())), "French");
    }

    #[test]
    fn missing_description_falls_back() {
        assert_eq!(description_label(None), "No description available.");
    }

    #[test]
    fn missing_price_falls_back() {
        assert_eq!(price_label(None), "Price not specified");
        assert_eq!(price_label(Some("$$".to_string())), "$$");
    }

    #[test]
    fn rating_text_prints_like_the_backend_numbers() {
        assert_eq!(rating_text(4.5, 12), "4.5 (12 reviews)");
        assert_eq!(rating_text(0.0, 0), "0 (0 reviews)");
    }
}
