//! User Endpoints

use super::{post_json, ApiError, API_BASE};
use crate::models::{NewUser, User};

pub(crate) fn register_path() -> String {
    format!("{API_BASE}/users/register")
}

/// POST a registration; the response carries the backend-assigned id
pub async fn register(user: &NewUser) -> Result<User, ApiError> {
    post_json(&register_path(), user).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_path() {
        assert_eq!(register_path(), "/api/users/register");
    }
}
