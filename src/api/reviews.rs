//! Review Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{get_json, post_json, ApiError, API_BASE};
use crate::models::{NewReview, Review};

pub(crate) fn for_restaurant_path(restaurant_id: i64) -> String {
    format!("{API_BASE}/reviews/restaurant/{restaurant_id}")
}

// The backend takes the submitting user as a `userId` query parameter while
// the rest of the review travels in the JSON body. The id is forwarded as the
// raw form value; the backend validates it.
pub(crate) fn submit_path(user_id: &str) -> String {
    let encoded = utf8_percent_encode(user_id.trim(), NON_ALPHANUMERIC);
    format!("{API_BASE}/reviews?userId={encoded}")
}

/// GET the reviews written for one restaurant
pub async fn for_restaurant(restaurant_id: i64) -> Result<Vec<Review>, ApiError> {
    get_json(&for_restaurant_path(restaurant_id)).await
}

/// POST a new review on behalf of `user_id`
pub async fn submit(user_id: &str, review: &NewReview) -> Result<Review, ApiError> {
    post_json(&submit_path(user_id), review).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_path_carries_the_restaurant_id() {
        assert_eq!(for_restaurant_path(7), "/api/reviews/restaurant/7");
    }

    #[test]
    fn user_id_travels_as_a_query_parameter() {
        assert_eq!(submit_path("42"), "/api/reviews?userId=42");
    }

    #[test]
    fn user_id_is_encoded_not_validated() {
        assert_eq!(submit_path(" 4 2 "), "/api/reviews?userId=4%202");
    }
}
