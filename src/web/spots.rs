//! Spot submission and browsing endpoints
//!
//! New spots start hidden; the public listing only serves approved records.

use crate::db::get_db_pool;
use crate::middleware::ClientCtx;
use crate::orm::moderation_queue::ModerationStatus;
use crate::orm::spots;
use actix_web::{error, get, post, web, Error, HttpResponse};
use chrono::Utc;
use sea_orm::{entity::*, query::*, ActiveValue::Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(create_spot)
        .service(list_spots)
        .service(view_spot);
}

#[derive(Deserialize, Validate)]
struct CreateSpotRequest {
    #[validate(length(min = 1, max = 200))]
    name: String,
    #[validate(length(max = 5000))]
    description: Option<String>,
    #[validate(length(max = 500))]
    address: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    longitude: Option<f64>,
}

/// Submit a new spot
#[post("/spots")]
async fn create_spot(
    client: ClientCtx,
    payload: web::Json<CreateSpotRequest>,
) -> Result<HttpResponse, Error> {
    let user_id = client.require_login()?;
    payload.validate().map_err(error::ErrorBadRequest)?;

    let now = Utc::now().naive_utc();
    let spot = spots::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.clone()),
        description: Set(payload.description.clone()),
        address: Set(payload.address.clone()),
        latitude: Set(payload.latitude),
        longitude: Set(payload.longitude),
        status: Set(ModerationStatus::Pending),
        created_by: Set(Some(user_id)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(get_db_pool())
    .await
    .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Created().json(spot))
}

/// Browse approved spots
#[get("/spots")]
async fn list_spots() -> Result<HttpResponse, Error> {
    let records = spots::Entity::find()
        .filter(spots::Column::Status.eq(ModerationStatus::Approved))
        .order_by_desc(spots::Column::CreatedAt)
        .limit(100)
        .all(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(records))
}

/// View a single spot
///
/// Unreviewed and rejected spots are visible to their author and to
/// moderators only; everyone else sees a 404.
#[get("/spots/{id}")]
async fn view_spot(client: ClientCtx, path: web::Path<Uuid>) -> Result<HttpResponse, Error> {
    let spot = spots::Entity::find_by_id(path.into_inner())
        .one(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Spot not found"))?;

    let visible = spot.status == ModerationStatus::Approved
        || client.is_moderator()
        || (client.get_id().is_some() && client.get_id() == spot.created_by);
    if !visible {
        return Err(error::ErrorNotFound("Spot not found"));
    }

    Ok(HttpResponse::Ok().json(spot))
}
