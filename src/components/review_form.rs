//! Review Form Component
//!
//! Review submission plus the existing reviews of the selected restaurant.
//! The restaurant selector is populated from the full listing on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{NewReview, Restaurant, Review};
use crate::stars::stars;
use crate::store::{reload_restaurants, use_app_store};

async fn load_reviews(restaurant_id: i64, set_reviews: WriteSignal<Vec<Review>>) {
    match api::reviews::for_restaurant(restaurant_id).await {
        Ok(reviews) => set_reviews.set(reviews),
        Err(err) => {
            web_sys::console::error_1(&format!("Error loading reviews: {err}").into());
            set_reviews.set(Vec::new());
        }
    }
}

#[component]
pub fn ReviewForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (options, set_options) = signal(Vec::<Restaurant>::new());
    let (restaurant_id, set_restaurant_id) = signal(String::new());
    let (rating, set_rating) = signal(String::new());
    let (comment, set_comment) = signal(String::new());
    let (user_id, set_user_id) = signal(String::new());
    let (reviews, set_reviews) = signal(Vec::<Review>::new());

    // Populate the restaurant selector on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::restaurants::list().await {
                Ok(restaurants) => set_options.set(restaurants),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error loading restaurant options: {err}").into(),
                    );
                }
            }
        });
    });

    let on_restaurant_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_restaurant_id.set(value.clone());
        spawn_local(async move {
            match value.parse::<i64>() {
                Ok(id) => load_reviews(id, set_reviews).await,
                Err(_) => set_reviews.set(Vec::new()),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let selected = restaurant_id.get();
        let rating_value = rating.get();
        let comment_value = comment.get();
        let reviewer = user_id.get();

        if selected.is_empty() || rating_value.is_empty() || reviewer.is_empty() {
            ctx.notify_error("Please fill in all required fields.");
            return;
        }
        let Ok(selected_id) = selected.parse::<i64>() else {
            ctx.notify_error("Please fill in all required fields.");
            return;
        };
        let Ok(rating_stars) = rating_value.parse::<i32>() else {
            ctx.notify_error("Please fill in all required fields.");
            return;
        };

        let review = NewReview {
            restaurant_id: selected_id,
            rating: rating_stars,
            comment: comment_value,
        };
        spawn_local(async move {
            match api::reviews::submit(&reviewer, &review).await {
                Ok(_) => {
                    ctx.notify_success("Review added successfully!");
                    set_restaurant_id.set(String::new());
                    set_rating.set(String::new());
                    set_comment.set(String::new());
                    set_reviews.set(Vec::new());
                    // Average ratings have moved
                    reload_restaurants(store).await;
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error adding review: {err}").into());
                    ctx.notify_error("Failed to add review. Please try again.");
                }
            }
        });
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <select
                class="restaurant-select"
                prop:value=move || restaurant_id.get()
                on:change=on_restaurant_change
            >
                <option value="">"Select a restaurant..."</option>
                <For
                    each=move || options.get()
                    key=|restaurant| restaurant.id
                    children=move |restaurant| {
                        view! {
                            <option value=restaurant.id.to_string()>{restaurant.name}</option>
                        }
                    }
                />
            </select>

            <select class="rating-select" prop:value=move || rating.get() on:change=move |ev| {
                set_rating.set(event_target_value(&ev))
            }>
                <option value="">"Select a rating..."</option>
                {(1..=5)
                    .map(|value| {
                        view! { <option value=value.to_string()>{value.to_string()}</option> }
                    })
                    .collect_view()}
            </select>

            <textarea
                class="comment-input"
                placeholder="Your comments (optional)"
                prop:value=move || comment.get()
                on:input=move |ev| set_comment.set(event_target_value(&ev))
            />

            <input
                type="text"
                class="user-id-input"
                placeholder="Your user ID"
                prop:value=move || user_id.get()
                on:input=move |ev| set_user_id.set(event_target_value(&ev))
            />

            <button type="submit">"Add Review"</button>
        </form>

        <div class="review-list">
            <For
                each=move || reviews.get()
                key=|review| review.id
                children=move |review| {
                    let date = review
                        .created_at
                        .as_deref()
                        .and_then(|stamp| stamp.split('T').next())
                        .unwrap_or_default()
                        .to_string();
                    let comment = review.comment.clone().unwrap_or_default();
                    view! {
                        <div class="review-card">
                            <div class="review-header">
                                <span class="review-author">{review.user.username.clone()}</span>
                                <span class="stars">{stars(f64::from(review.rating))}</span>
                                <span class="review-date">{date}</span>
                            </div>
                            <div class="review-comment">{comment}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
