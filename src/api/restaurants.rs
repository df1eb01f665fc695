//! Restaurant Endpoints
//!
//! Listing plus the name/cuisine/rating/price lookups. Path builders are kept
//! separate from the fetch calls so the URL shapes are testable off-wasm.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{get_json, ApiError, API_BASE};
use crate::models::Restaurant;

pub(crate) fn list_path() -> String {
    format!("{API_BASE}/restaurants")
}

/// Search by name substring. An empty or whitespace-only term is the same
/// request as the full listing.
pub(crate) fn search_path(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return list_path();
    }
    let encoded = utf8_percent_encode(term, NON_ALPHANUMERIC);
    format!("{API_BASE}/restaurants/search?name={encoded}")
}

pub(crate) fn cuisine_path(cuisine_type: &str) -> String {
    let encoded = utf8_percent_encode(cuisine_type, NON_ALPHANUMERIC);
    format!("{API_BASE}/restaurants/cuisine/{encoded}")
}

pub(crate) fn rating_path(min_rating: f64) -> String {
    format!("{API_BASE}/restaurants/rating/{min_rating}")
}

pub(crate) fn price_path(price_range: &str) -> String {
    let encoded = utf8_percent_encode(price_range, NON_ALPHANUMERIC);
    format!("{API_BASE}/restaurants/price/{encoded}")
}

/// GET all restaurants
pub async fn list() -> Result<Vec<Restaurant>, ApiError> {
    get_json(&list_path()).await
}

/// GET restaurants whose name contains `term`
pub async fn search(term: &str) -> Result<Vec<Restaurant>, ApiError> {
    get_json(&search_path(term)).await
}

/// GET restaurants of an exact cuisine type
pub async fn by_cuisine(cuisine_type: &str) -> Result<Vec<Restaurant>, ApiError> {
    get_json(&cuisine_path(cuisine_type)).await
}

/// GET restaurants rated at least `min_rating`
pub async fn by_min_rating(min_rating: f64) -> Result<Vec<Restaurant>, ApiError> {
    get_json(&rating_path(min_rating)).await
}

/// GET restaurants in an exact price range
pub async fn by_price(price_range: &str) -> Result<Vec<Restaurant>, ApiError> {
    get_json(&price_path(price_range)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_is_the_full_listing() {
        assert_eq!(search_path(""), list_path());
        assert_eq!(search_path("   "), list_path());
    }

    #[test]
    fn search_term_is_percent_encoded() {
        assert_eq!(
            search_path("Joe Beef"),
            "/api/restaurants/search?name=Joe%20Beef"
        );
    }

    #[test]
    fn cuisine_segment_is_percent_encoded() {
        assert_eq!(
            cuisine_path("Jewish Deli"),
            "/api/restaurants/cuisine/Jewish%20Deli"
        );
        assert_eq!(
            cuisine_path("French Canadian"),
            "/api/restaurants/cuisine/French%20Canadian"
        );
    }

    #[test]
    fn rating_path_prints_like_the_select_values() {
        assert_eq!(rating_path(4.5), "/api/restaurants/rating/4.5");
        assert_eq!(rating_path(4.0), "/api/restaurants/rating/4");
    }

    #[test]
    fn price_segment_is_percent_encoded() {
        assert_eq!(price_path("$$"), "/api/restaurants/price/%24%24");
    }
}
