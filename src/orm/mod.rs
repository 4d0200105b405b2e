//! SeaORM entities, one module per table.

pub mod collections;
pub mod events;
pub mod moderation_queue;
pub mod spots;
pub mod users;
