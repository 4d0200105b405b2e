//! Content review workflow
//!
//! User-submitted spots, events and collections stay hidden until a
//! moderator clears them. This module owns the queue of outstanding review
//! tasks: intake of new submissions, the decision transition, and the
//! filterable queue view moderators work from.
//!
//! All mutation goes through [`enqueue_submission`] and [`resolve_entry`];
//! nothing else writes to the queue. Identity arrives as an explicit
//! `moderator_id` argument resolved by the web layer, never from ambient
//! state.

pub mod error;
pub mod resolver;

pub use error::ModerationError;

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_FEEDBACK_LENGTH};
use crate::orm::moderation_queue::{self, ContentType, ModerationStatus};
use crate::orm::users;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr};
use sea_orm::{
    entity::*, query::*, ActiveValue::Set, DatabaseConnection, SqlErr, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A moderator's verdict on a queue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// The status a decision writes, identically, onto the queue entry and
    /// the referenced content record.
    pub fn target_status(self) -> ModerationStatus {
        match self {
            Decision::Approve => ModerationStatus::Approved,
            Decision::Reject => ModerationStatus::Rejected,
        }
    }
}

/// Queue ordering by submission time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// Independent, conjunctive restrictions on the queue view.
/// `None` means no restriction on that field.
#[derive(Clone, Debug)]
pub struct QueueFilters {
    pub status: Option<ModerationStatus>,
    pub content_type: Option<ContentType>,
    pub sort: SortOrder,
    pub limit: u64,
    pub offset: u64,
}

impl Default for QueueFilters {
    fn default() -> Self {
        Self {
            status: None,
            content_type: None,
            sort: SortOrder::default(),
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// Queue a content record for review.
///
/// A record may be queued at most once for its entire lifetime — the check
/// is on `content_id` alone, with no regard to entry status or content
/// type. The pre-read gives submitters a precise error; the unique index on
/// `content_id` closes the race two concurrent submissions would otherwise
/// win together.
pub async fn enqueue_submission(
    db: &DatabaseConnection,
    content_type: ContentType,
    content_id: Uuid,
) -> Result<moderation_queue::Model, ModerationError> {
    let existing = moderation_queue::Entity::find()
        .filter(moderation_queue::Column::ContentId.eq(content_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ModerationError::DuplicateSubmission { content_id });
    }

    let now = Utc::now().naive_utc();
    moderation_queue::ActiveModel {
        content_type: Set(content_type),
        content_id: Set(content_id),
        status: Set(ModerationStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ModerationError::DuplicateSubmission { content_id }
        }
        _ => ModerationError::Store(err),
    })
}

/// Apply a moderator's decision to a pending entry and to the record it
/// references, as one transaction.
///
/// The transition is guarded in the store: only a row still in `pending`
/// takes the write, so of any number of concurrent resolutions exactly one
/// succeeds and the rest observe [`ModerationError::AlreadyReviewed`]. A
/// resolver failure rolls the entry update back with it; the two writes are
/// never observable half-applied.
pub async fn resolve_entry(
    db: &DatabaseConnection,
    entry_id: i32,
    moderator_id: i32,
    decision: Decision,
    feedback: Option<String>,
) -> Result<moderation_queue::Model, ModerationError> {
    if let Some(note) = &feedback {
        if note.chars().count() > MAX_FEEDBACK_LENGTH {
            return Err(ModerationError::Validation {
                field: "feedback",
                message: format!("must be at most {} characters", MAX_FEEDBACK_LENGTH),
            });
        }
    }

    let txn = db.begin().await?;

    let entry = moderation_queue::Entity::find_by_id(entry_id)
        .one(&txn)
        .await?
        .ok_or(ModerationError::NotFound)?;

    let outcome = decision.target_status();
    let now = Utc::now().naive_utc();

    let updated = moderation_queue::Entity::update_many()
        .col_expr(
            moderation_queue::Column::Status,
            Expr::val(outcome).as_enum(Alias::new("moderation_status")),
        )
        .col_expr(
            moderation_queue::Column::ModeratorId,
            Expr::value(Some(moderator_id)),
        )
        .col_expr(moderation_queue::Column::Feedback, Expr::value(feedback))
        .col_expr(moderation_queue::Column::ReviewedAt, Expr::value(Some(now)))
        .col_expr(moderation_queue::Column::UpdatedAt, Expr::value(now))
        .filter(moderation_queue::Column::Id.eq(entry_id))
        .filter(moderation_queue::Column::Status.eq(ModerationStatus::Pending))
        .exec(&txn)
        .await?;

    if updated.rows_affected == 0 {
        // Entry exists but left `pending` under us; the dropped transaction
        // rolls back nothing of consequence.
        return Err(ModerationError::AlreadyReviewed);
    }

    resolver::apply_review_outcome(&txn, entry.content_type, entry.content_id, outcome).await?;

    let entry = moderation_queue::Entity::find_by_id(entry_id)
        .one(&txn)
        .await?
        .ok_or(ModerationError::NotFound)?;

    txn.commit().await?;
    Ok(entry)
}

/// Point lookup of a queue entry with its resolving moderator, if any.
pub async fn get_entry(
    db: &DatabaseConnection,
    entry_id: i32,
) -> Result<Option<(moderation_queue::Model, Option<users::Model>)>, ModerationError> {
    Ok(moderation_queue::Entity::find_by_id(entry_id)
        .find_also_related(users::Entity)
        .one(db)
        .await?)
}

/// One page of the queue plus the total matching the same predicate.
///
/// The count re-applies the identical filters without sort or window. The
/// two reads run back to back on the pool; under concurrent writes the
/// total can drift from the page by the rows that changed in between,
/// which read-committed Postgres cannot avoid without a shared snapshot.
pub async fn list_queue(
    db: &DatabaseConnection,
    filters: &QueueFilters,
) -> Result<(Vec<(moderation_queue::Model, Option<users::Model>)>, u64), ModerationError> {
    let total = filtered(filters).count(db).await?;

    let mut query = filtered(filters).find_also_related(users::Entity);
    query = match filters.sort {
        SortOrder::Newest => query
            .order_by_desc(moderation_queue::Column::CreatedAt)
            .order_by_desc(moderation_queue::Column::Id),
        SortOrder::Oldest => query
            .order_by_asc(moderation_queue::Column::CreatedAt)
            .order_by_asc(moderation_queue::Column::Id),
    };

    let entries = query
        .limit(filters.limit)
        .offset(filters.offset)
        .all(db)
        .await?;

    Ok((entries, total))
}

fn filtered(filters: &QueueFilters) -> Select<moderation_queue::Entity> {
    let mut query = moderation_queue::Entity::find();
    if let Some(status) = filters.status {
        query = query.filter(moderation_queue::Column::Status.eq(status));
    }
    if let Some(content_type) = filters.content_type {
        query = query.filter(moderation_queue::Column::ContentType.eq(content_type));
    }
    query
}
