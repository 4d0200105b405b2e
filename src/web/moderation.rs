//! Moderation queue endpoints
//!
//! The queue view and the decision endpoint are moderator-only; submitting
//! content into the queue only requires a login.

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::db::get_db_pool;
use crate::middleware::ClientCtx;
use crate::moderation::{self, Decision, ModerationError, QueueFilters, SortOrder};
use crate::orm::moderation_queue::{ContentType, ModerationStatus};
use crate::orm::{moderation_queue, users};
use actix_web::{get, post, put, web, Error, HttpResponse};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(enqueue_entry)
        .service(list_queue)
        .service(view_entry)
        .service(resolve_entry);
}

/// Summary of the resolving moderator embedded in queue responses.
#[derive(Serialize)]
struct ModeratorView {
    id: i32,
    name: String,
    avatar_url: Option<String>,
}

impl From<users::Model> for ModeratorView {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            avatar_url: user.avatar_url,
        }
    }
}

#[derive(Serialize)]
struct QueueEntryView {
    id: i32,
    content_type: ContentType,
    content_id: Uuid,
    status: ModerationStatus,
    feedback: Option<String>,
    reviewed_at: Option<chrono::NaiveDateTime>,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
    moderator: Option<ModeratorView>,
}

impl QueueEntryView {
    fn from_parts(entry: moderation_queue::Model, moderator: Option<users::Model>) -> Self {
        Self {
            id: entry.id,
            content_type: entry.content_type,
            content_id: entry.content_id,
            status: entry.status,
            feedback: entry.feedback,
            reviewed_at: entry.reviewed_at,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            moderator: moderator.map(ModeratorView::from),
        }
    }
}

#[derive(Serialize)]
struct PaginationView {
    limit: u64,
    offset: u64,
    total: u64,
}

#[derive(Serialize)]
struct QueueListView {
    entries: Vec<QueueEntryView>,
    pagination: PaginationView,
}

#[derive(Deserialize)]
struct EnqueueRequest {
    content_type: ContentType,
    content_id: Uuid,
}

/// Submit a content record for review
#[post("/moderation/queue")]
async fn enqueue_entry(
    client: ClientCtx,
    payload: web::Json<EnqueueRequest>,
) -> Result<HttpResponse, Error> {
    client.require_login()?;

    let entry =
        moderation::enqueue_submission(get_db_pool(), payload.content_type, payload.content_id)
            .await?;

    Ok(HttpResponse::Created().json(QueueEntryView::from_parts(entry, None)))
}

#[derive(Deserialize)]
struct QueueListQuery {
    status: Option<ModerationStatus>,
    content_type: Option<ContentType>,
    limit: Option<u64>,
    offset: Option<u64>,
    sort: Option<SortOrder>,
}

impl QueueListQuery {
    fn into_filters(self) -> Result<QueueFilters, ModerationError> {
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if limit < 1 || limit > MAX_PAGE_SIZE {
            return Err(ModerationError::Validation {
                field: "limit",
                message: format!("must be between 1 and {}", MAX_PAGE_SIZE),
            });
        }
        Ok(QueueFilters {
            status: self.status,
            content_type: self.content_type,
            sort: self.sort.unwrap_or_default(),
            limit,
            offset: self.offset.unwrap_or(0),
        })
    }
}

/// View the moderation queue (moderators only)
#[get("/moderation/queue")]
async fn list_queue(
    client: ClientCtx,
    query: web::Query<QueueListQuery>,
) -> Result<HttpResponse, Error> {
    client.require_moderator()?;

    let filters = query.into_inner().into_filters()?;
    let (rows, total) = moderation::list_queue(get_db_pool(), &filters).await?;

    Ok(HttpResponse::Ok().json(QueueListView {
        entries: rows
            .into_iter()
            .map(|(entry, moderator)| QueueEntryView::from_parts(entry, moderator))
            .collect(),
        pagination: PaginationView {
            limit: filters.limit,
            offset: filters.offset,
            total,
        },
    }))
}

/// View a single queue entry (moderators only)
#[get("/moderation/queue/{id}")]
async fn view_entry(client: ClientCtx, path: web::Path<i32>) -> Result<HttpResponse, Error> {
    client.require_moderator()?;

    let (entry, moderator) = moderation::get_entry(get_db_pool(), path.into_inner())
        .await?
        .ok_or(ModerationError::NotFound)?;

    Ok(HttpResponse::Ok().json(QueueEntryView::from_parts(entry, moderator)))
}

#[derive(Deserialize)]
struct ResolveRequest {
    decision: Decision,
    feedback: Option<String>,
}

/// Decide a pending queue entry (moderators only)
#[put("/moderation/queue/{id}")]
async fn resolve_entry(
    client: ClientCtx,
    path: web::Path<i32>,
    payload: web::Json<ResolveRequest>,
) -> Result<HttpResponse, Error> {
    let moderator_id = client.require_moderator()?;
    let ResolveRequest { decision, feedback } = payload.into_inner();

    let entry = moderation::resolve_entry(
        get_db_pool(),
        path.into_inner(),
        moderator_id,
        decision,
        feedback,
    )
    .await?;

    let moderator = users::Entity::find_by_id(moderator_id)
        .one(get_db_pool())
        .await
        .map_err(ModerationError::from)?;

    Ok(HttpResponse::Ok().json(QueueEntryView::from_parts(entry, moderator)))
}
