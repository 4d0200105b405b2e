//! SeaORM Entity for the moderation_queue table
//!
//! One row per review task. A content record may appear at most once for its
//! entire lifetime; uniqueness is enforced by the database on `content_id`
//! alone, with no regard to status or content type.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review state enum matching PostgreSQL moderation_status
///
/// Shared by the queue and the content tables: a decision lands with the same
/// value on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "moderation_status")]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ModerationStatus {
    /// Awaiting a moderator decision
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    /// Cleared for public visibility
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Refused; record stays hidden
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Kind of content record a queue entry refers to, matching PostgreSQL
/// content_type
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "content_type")]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[sea_orm(string_value = "spot")]
    Spot,
    #[sea_orm(string_value = "event")]
    Event,
    #[sea_orm(string_value = "collection")]
    Collection,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "moderation_queue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub content_type: ContentType,
    #[sea_orm(unique)]
    pub content_id: Uuid,
    pub status: ModerationStatus,
    /// Reviewing moderator; null until resolved.
    pub moderator_id: Option<i32>,
    /// Free-text note from the moderator; null until resolved.
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    /// Resolution time; null while pending.
    pub reviewed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ModeratorId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Moderator,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Moderator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
