//! Resolved user data carried with the request context.

use crate::orm::users;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde::Serialize;

/// A struct to hold the information routes need about the acting user.
/// Never carries the credential columns.
#[derive(Clone, Debug, Serialize)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub avatar_url: Option<String>,
    pub is_moderator: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl From<users::Model> for Profile {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            avatar_url: user.avatar_url,
            is_moderator: user.is_moderator,
            created_at: user.created_at,
        }
    }
}

impl Profile {
    /// Returns the profile for a user id, or None if the user is gone.
    pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        Ok(users::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(Profile::from))
    }
}
