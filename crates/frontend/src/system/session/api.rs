use crate::shared::api_utils::api_url;
use crate::shared::http::{post_json, ApiError};
use contracts::system::users::{UsernameRequest, UsernameResponse};

const USERNAME_PATH: &str = "get-username/";

/// Display name of the user registered under `email`
pub async fn fetch_username(email: &str) -> Result<String, ApiError> {
    let request = UsernameRequest {
        email: email.to_string(),
    };
    let response: UsernameResponse = post_json(&api_url(USERNAME_PATH), &request).await?;
    Ok(response.username)
}
