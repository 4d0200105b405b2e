//! Collection submission and browsing endpoints

use crate::db::get_db_pool;
use crate::middleware::ClientCtx;
use crate::orm::collections;
use crate::orm::moderation_queue::ModerationStatus;
use actix_web::{error, get, post, web, Error, HttpResponse};
use chrono::Utc;
use sea_orm::{entity::*, query::*, ActiveValue::Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(create_collection)
        .service(list_collections)
        .service(view_collection);
}

#[derive(Deserialize, Validate)]
struct CreateCollectionRequest {
    #[validate(length(min = 1, max = 200))]
    title: String,
    #[validate(length(max = 5000))]
    description: Option<String>,
}

/// Submit a new collection
#[post("/collections")]
async fn create_collection(
    client: ClientCtx,
    payload: web::Json<CreateCollectionRequest>,
) -> Result<HttpResponse, Error> {
    let user_id = client.require_login()?;
    payload.validate().map_err(error::ErrorBadRequest)?;

    let now = Utc::now().naive_utc();
    let collection = collections::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title.clone()),
        description: Set(payload.description.clone()),
        status: Set(ModerationStatus::Pending),
        created_by: Set(Some(user_id)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(get_db_pool())
    .await
    .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Created().json(collection))
}

/// Browse approved collections
#[get("/collections")]
async fn list_collections() -> Result<HttpResponse, Error> {
    let records = collections::Entity::find()
        .filter(collections::Column::Status.eq(ModerationStatus::Approved))
        .order_by_desc(collections::Column::CreatedAt)
        .limit(100)
        .all(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(records))
}

/// View a single collection
#[get("/collections/{id}")]
async fn view_collection(client: ClientCtx, path: web::Path<Uuid>) -> Result<HttpResponse, Error> {
    let collection = collections::Entity::find_by_id(path.into_inner())
        .one(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Collection not found"))?;

    let visible = collection.status == ModerationStatus::Approved
        || client.is_moderator()
        || (client.get_id().is_some() && client.get_id() == collection.created_by);
    if !visible {
        return Err(error::ErrorNotFound("Collection not found"));
    }

    Ok(HttpResponse::Ok().json(collection))
}
