//! Cookie-session authentication

use crate::db::get_db_pool;
use crate::user::Profile;
use actix_session::Session;
use argon2::Argon2;
use once_cell::sync::Lazy;

/// Session key holding the authenticated user id.
pub const SESSION_USER_KEY: &str = "uid";

static ARGON2: Lazy<Argon2<'static>> = Lazy::new(Argon2::default);

/// Shared Argon2 instance used for hashing and verifying passwords.
pub fn get_argon2() -> &'static Argon2<'static> {
    &ARGON2
}

/// Resolve the acting user from the request's cookie session.
/// Returns None for guests, missing users, and unreadable sessions.
pub async fn authenticate_client_by_session(session: &Session) -> Option<Profile> {
    let user_id = match session.get::<i32>(SESSION_USER_KEY) {
        Ok(Some(id)) => id,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("Unable to read session data: {}", err);
            return None;
        }
    };

    match Profile::get_by_id(get_db_pool(), user_id).await {
        Ok(profile) => profile,
        Err(err) => {
            log::error!("Failed to load user {} for session: {}", user_id, err);
            None
        }
    }
}
