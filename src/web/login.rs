//! Session login and logout endpoints

use crate::db::get_db_pool;
use crate::orm::users;
use crate::session::{get_argon2, SESSION_USER_KEY};
use crate::user::Profile;
use actix_session::Session;
use actix_web::{error, post, web, Error, HttpResponse};
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use sea_orm::{entity::*, query::*};
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(post_login).service(post_logout);
}

#[derive(Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[post("/login")]
async fn post_login(
    session: Session,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, Error> {
    let db = get_db_pool();

    // One generic rejection for both unknown name and wrong password.
    let user = users::Entity::find()
        .filter(users::Column::Name.eq(payload.username.as_str()))
        .one(db)
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorUnauthorized("Invalid username or password."))?;

    let hash = PasswordHash::new(&user.password)
        .map_err(|_| error::ErrorInternalServerError("Stored credential is unreadable."))?;
    get_argon2()
        .verify_password(payload.password.as_bytes(), &hash)
        .map_err(|_| error::ErrorUnauthorized("Invalid username or password."))?;

    session.renew();
    session
        .insert(SESSION_USER_KEY, user.id)
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(Profile::from(user)))
}

#[post("/logout")]
async fn post_logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}
