//! User management service.
//!
//! Creating a user mints a fresh API key, persists the row and hands back the
//! validated domain value converted from what the store returned.

use chrono::Utc;
use notely_types::error::UserError;
use notely_types::user::{CreateUserRequest, User};
use uuid::Uuid;

use crate::convert::{format_timestamp, to_domain_user};
use crate::repository::user::{UserRepository, UserRow};
use crate::service::token::TokenGenerator;

/// Service orchestrating user creation and lookup.
pub struct UserService<R: UserRepository, G: TokenGenerator> {
    user_repo: R,
    tokens: G,
}

impl<R: UserRepository, G: TokenGenerator> UserService<R, G> {
    pub fn new(user_repo: R, tokens: G) -> Self {
        Self { user_repo, tokens }
    }

    /// Create a user with a newly minted API key.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserError> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(UserError::InvalidName("name cannot be empty".to_string()));
        }

        let api_key = self.tokens.generate()?;
        let now = format_timestamp(&Utc::now());

        let row = UserRow {
            id: Uuid::now_v7().to_string(),
            created_at: now.clone(),
            updated_at: now,
            name,
            api_key,
        };

        let stored = self.user_repo.create(&row).await?;
        tracing::debug!(user_id = %stored.id, "user created");

        Ok(to_domain_user(stored)?)
    }

    /// Resolve the user owning `api_key`.
    pub async fn get_user_by_api_key(&self, api_key: &str) -> Result<User, UserError> {
        let row = self
            .user_repo
            .get_by_api_key(api_key)
            .await?
            .ok_or(UserError::NotFound)?;

        Ok(to_domain_user(row)?)
    }
}
