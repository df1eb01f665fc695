//! Frontend Models
//!
//! Data structures matching the backend's JSON. The backend serializes with
//! camelCase field names; unknown fields (coordinates, password hashes) are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Restaurant snapshot as served by the backend. Never mutated client-side;
/// each listing fetch replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: i64,
}

/// Review submission body. The submitting user's id is NOT part of this
/// payload; the backend takes it as a `userId` query parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub restaurant_id: i64,
    pub rating: i32,
    pub comment: String,
}

/// Review as returned by the backend, with the authoring user inlined.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
    pub user: Reviewer,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The slice of the user record a review card displays
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reviewer {
    pub id: i64,
    pub username: String,
}

/// Registration body; the password is submitted and never kept around
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_deserializes_camel_case() {
        let json = r#"{
            "id": 1,
            "name": "Joe Beef",
            "cuisineType": "French",
            "description": "Steaks and creative dishes.",
            "address": "2491 Rue Notre-Dame O, Montreal",
            "phone": "(514) 935-6504",
            "website": "http://joebeef.ca",
            "priceRange": "$$$$",
            "latitude": 45.4761,
            "longitude": -73.5737,
            "averageRating": 4.5,
            "totalReviews": 12
        }"#;
        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(restaurant.name, "Joe Beef");
        assert_eq!(restaurant.cuisine_type.as_deref(), Some("French"));
        assert_eq!(restaurant.price_range.as_deref(), Some("$$$$"));
        assert_eq!(restaurant.average_rating, 4.5);
        assert_eq!(restaurant.total_reviews, 12);
    }

    #[test]
    fn restaurant_optional_fields_default() {
        let json = r#"{"id": 2, "name": "Corner Spot", "address": "123 Main St"}"#;
        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        assert!(restaurant.cuisine_type.is_none());
        assert!(restaurant.website.is_none());
        assert_eq!(restaurant.average_rating, 0.0);
        assert_eq!(restaurant.total_reviews, 0);
    }

    #[test]
    fn new_review_serializes_camel_case() {
        let body = NewReview {
            restaurant_id: 7,
            rating: 4,
            comment: "Great poutine".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"restaurantId": 7, "rating": 4, "comment": "Great poutine"})
        );
    }

    #[test]
    fn review_deserializes_with_nested_user() {
        let json = r#"{
            "id": 9,
            "rating": 5,
            "comment": "Worth the line",
            "user": {"id": 3, "username": "alice", "email": "a@example.com"},
            "restaurant": {"id": 1, "name": "Schwartz's Deli", "address": "3895 St Laurent"},
            "createdAt": "2026-08-01T18:30:00"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.user.username, "alice");
        assert_eq!(review.created_at.as_deref(), Some("2026-08-01T18:30:00"));
    }
}
