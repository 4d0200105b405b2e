//! Content reference resolver
//!
//! Applies a review outcome to the record a queue entry points at. Dispatch
//! is an exhaustive match on the content type so a new kind of record cannot
//! fall through unnoticed.

use super::error::ModerationError;
use crate::orm::moderation_queue::{ContentType, ModerationStatus};
use crate::orm::spots;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr};
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Write `outcome` onto the referenced content record's own status column.
///
/// Runs on the caller's transaction; a failure here must roll back the queue
/// entry update it travels with. A missing record is a failure: approving a
/// submission whose content has vanished would retain a decision about
/// nothing.
///
/// Only spots carry a published status today. Event and collection entries
/// resolve in the queue while their records are left untouched.
// TODO: wire event and collection status once their publish flows land.
pub async fn apply_review_outcome(
    txn: &DatabaseTransaction,
    content_type: ContentType,
    content_id: Uuid,
    outcome: ModerationStatus,
) -> Result<(), ModerationError> {
    match content_type {
        ContentType::Spot => {
            let result = spots::Entity::update_many()
                .col_expr(
                    spots::Column::Status,
                    Expr::val(outcome).as_enum(Alias::new("moderation_status")),
                )
                .col_expr(
                    spots::Column::UpdatedAt,
                    Expr::value(Utc::now().naive_utc()),
                )
                .filter(spots::Column::Id.eq(content_id))
                .exec(txn)
                .await?;

            if result.rows_affected == 0 {
                return Err(ModerationError::NotFound);
            }
            Ok(())
        }
        ContentType::Event | ContentType::Collection => Ok(()),
    }
}
