//! HTTP client for the user profile API. The base URL is injected at
//! construction so the client never reads ambient state at call time.

use crate::app_lib::{AppError, api, config::AppConfig};
use crate::features::users::types::{RegisterRequest, UpdateRequest, UserProfile, UserSummary};

/// Remote collaborator for all user endpoints.
#[derive(Clone, Debug)]
pub struct UserApi {
    base_url: String,
}

impl UserApi {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Builds a client against the configured backend.
    pub fn from_config() -> Self {
        Self::new(AppConfig::load().api_base_url)
    }

    /// Fetches the user list.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        api::get_json(&self.base_url, "/user").await
    }

    /// Fetches a full profile by id after basic input validation.
    pub async fn fetch_user(&self, id: &str) -> Result<UserProfile, AppError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(AppError::Config("User id is required.".to_string()));
        }

        api::get_json(&self.base_url, &format!("/user/{trimmed}")).await
    }

    /// Registers a new user. Failure messages from the backend are surfaced
    /// through `AppError::Http`.
    pub async fn register_user(&self, request: &RegisterRequest) -> Result<(), AppError> {
        api::post_json(&self.base_url, "/user/register", request).await
    }

    /// Sends the full pre-validated draft for an existing record.
    pub async fn update_user(&self, request: &UpdateRequest) -> Result<(), AppError> {
        api::patch_json(&self.base_url, "/user/update", request).await
    }

    /// Deletes a record by id.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        api::delete_empty(&self.base_url, &format!("/user/delete/{id}")).await
    }
}
