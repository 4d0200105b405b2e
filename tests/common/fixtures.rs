//! Test fixtures for creating test data
#![allow(dead_code)]

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use chrono::Utc;
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};
use uuid::Uuid;
use waypost::orm::moderation_queue::ModerationStatus;
use waypost::orm::{collections, events, spots, users};

/// Create a test user with known credentials
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    is_moderator: bool,
) -> Result<users::Model, DbErr> {
    // Hash the password with the same Argon2 instance the login route uses
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = waypost::session::get_argon2()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbErr::Custom(format!("Password hashing failed: {}", e)))?
        .to_string();

    users::ActiveModel {
        name: Set(username.to_string()),
        email: Set(Some(format!("{}@test.com", username))),
        password: Set(password_hash),
        is_moderator: Set(is_moderator),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create a moderator with a default password
pub async fn create_test_moderator(
    db: &DatabaseConnection,
    username: &str,
) -> Result<users::Model, DbErr> {
    create_test_user(db, username, "password123", true).await
}

/// Create a spot awaiting review
pub async fn create_test_spot(
    db: &DatabaseConnection,
    name: &str,
    created_by: Option<i32>,
) -> Result<spots::Model, DbErr> {
    let now = Utc::now().naive_utc();
    spots::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        description: Set(Some("A test spot".to_string())),
        address: Set(None),
        latitude: Set(Some(44.9778)),
        longitude: Set(Some(-93.2650)),
        status: Set(ModerationStatus::Pending),
        created_by: Set(created_by),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
}

/// Create an event awaiting review
pub async fn create_test_event(
    db: &DatabaseConnection,
    title: &str,
    created_by: Option<i32>,
) -> Result<events::Model, DbErr> {
    let now = Utc::now().naive_utc();
    events::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        description: Set(None),
        venue: Set(Some("Community Hall".to_string())),
        starts_at: Set(now + chrono::Duration::days(7)),
        ends_at: Set(None),
        status: Set(ModerationStatus::Pending),
        created_by: Set(created_by),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
}

/// Create a collection awaiting review
pub async fn create_test_collection(
    db: &DatabaseConnection,
    title: &str,
    created_by: Option<i32>,
) -> Result<collections::Model, DbErr> {
    let now = Utc::now().naive_utc();
    collections::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        description: Set(None),
        status: Set(ModerationStatus::Pending),
        created_by: Set(created_by),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
}
