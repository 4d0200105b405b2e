//! Event submission and browsing endpoints

use crate::db::get_db_pool;
use crate::middleware::ClientCtx;
use crate::orm::events;
use crate::orm::moderation_queue::ModerationStatus;
use actix_web::{error, get, post, web, Error, HttpResponse};
use chrono::{NaiveDateTime, Utc};
use sea_orm::{entity::*, query::*, ActiveValue::Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(create_event)
        .service(list_events)
        .service(view_event);
}

#[derive(Deserialize, Validate)]
struct CreateEventRequest {
    #[validate(length(min = 1, max = 200))]
    title: String,
    #[validate(length(max = 5000))]
    description: Option<String>,
    #[validate(length(max = 500))]
    venue: Option<String>,
    starts_at: NaiveDateTime,
    ends_at: Option<NaiveDateTime>,
}

/// Submit a new event
#[post("/events")]
async fn create_event(
    client: ClientCtx,
    payload: web::Json<CreateEventRequest>,
) -> Result<HttpResponse, Error> {
    let user_id = client.require_login()?;
    payload.validate().map_err(error::ErrorBadRequest)?;

    if let Some(ends_at) = payload.ends_at {
        if ends_at <= payload.starts_at {
            return Err(error::ErrorBadRequest("Event must end after it starts"));
        }
    }

    let now = Utc::now().naive_utc();
    let event = events::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title.clone()),
        description: Set(payload.description.clone()),
        venue: Set(payload.venue.clone()),
        starts_at: Set(payload.starts_at),
        ends_at: Set(payload.ends_at),
        status: Set(ModerationStatus::Pending),
        created_by: Set(Some(user_id)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(get_db_pool())
    .await
    .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Created().json(event))
}

/// Browse approved events, soonest first
#[get("/events")]
async fn list_events() -> Result<HttpResponse, Error> {
    let records = events::Entity::find()
        .filter(events::Column::Status.eq(ModerationStatus::Approved))
        .order_by_asc(events::Column::StartsAt)
        .limit(100)
        .all(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(records))
}

/// View a single event
#[get("/events/{id}")]
async fn view_event(client: ClientCtx, path: web::Path<Uuid>) -> Result<HttpResponse, Error> {
    let event = events::Entity::find_by_id(path.into_inner())
        .one(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Event not found"))?;

    let visible = event.status == ModerationStatus::Approved
        || client.is_moderator()
        || (client.get_id().is_some() && client.get_id() == event.created_by);
    if !visible {
        return Err(error::ErrorNotFound("Event not found"));
    }

    Ok(HttpResponse::Ok().json(event))
}
