//! SeaORM Entity for users table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub email: Option<String>,
    /// Argon2 PHC string.
    pub password: String,
    pub avatar_url: Option<String>,
    pub is_moderator: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::moderation_queue::Entity")]
    ModerationQueue,
}

impl Related<super::moderation_queue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModerationQueue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
