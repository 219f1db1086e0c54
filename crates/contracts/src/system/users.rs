use serde::{Deserialize, Serialize};

/// Body of `POST get-username/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameResponse {
    pub username: String,
}
