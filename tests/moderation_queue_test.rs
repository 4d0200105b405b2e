//! Integration tests for submission intake into the moderation queue

mod common;
use serial_test::serial;

use common::{database::*, fixtures::*};
use sea_orm::{entity::*, query::*};
use uuid::Uuid;
use waypost::moderation::{self, ModerationError};
use waypost::orm::moderation_queue;
use waypost::orm::moderation_queue::{ContentType, ModerationStatus};

#[actix_rt::test]
#[serial]
async fn test_enqueue_creates_pending_entry() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");
    cleanup_test_data(&db).await.expect("Failed to cleanup");

    let author = create_test_user(&db, "submitter", "password123", false)
        .await
        .expect("Failed to create user");
    let spot = create_test_spot(&db, "Hidden Falls", Some(author.id))
        .await
        .expect("Failed to create spot");

    let entry = moderation::enqueue_submission(&db, ContentType::Spot, spot.id)
        .await
        .expect("Enqueue should succeed for a fresh content id");

    assert_eq!(entry.content_type, ContentType::Spot);
    assert_eq!(entry.content_id, spot.id);
    assert_eq!(entry.status, ModerationStatus::Pending);
    assert!(entry.moderator_id.is_none());
    assert!(entry.feedback.is_none());
    assert!(entry.reviewed_at.is_none());

    // The entry is persisted, not just returned.
    let fetched = moderation_queue::Entity::find_by_id(entry.id)
        .one(&db)
        .await
        .expect("Failed to fetch entry")
        .expect("Entry not found");
    assert_eq!(fetched.status, ModerationStatus::Pending);
}

#[actix_rt::test]
#[serial]
async fn test_duplicate_enqueue_rejected_without_write() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");
    cleanup_test_data(&db).await.expect("Failed to cleanup");

    let spot = create_test_spot(&db, "Hidden Falls", None)
        .await
        .expect("Failed to create spot");

    moderation::enqueue_submission(&db, ContentType::Spot, spot.id)
        .await
        .expect("First enqueue should succeed");

    let before = moderation_queue::Entity::find()
        .count(&db)
        .await
        .expect("Failed to count queue");

    let err = moderation::enqueue_submission(&db, ContentType::Spot, spot.id)
        .await
        .expect_err("Second enqueue should fail");
    assert!(matches!(err, ModerationError::DuplicateSubmission { .. }));

    let after = moderation_queue::Entity::find()
        .count(&db)
        .await
        .expect("Failed to count queue");
    assert_eq!(before, after, "Failed enqueue must not write");
}

#[actix_rt::test]
#[serial]
async fn test_uniqueness_ignores_content_type() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");
    cleanup_test_data(&db).await.expect("Failed to cleanup");

    let content_id = Uuid::new_v4();
    moderation::enqueue_submission(&db, ContentType::Event, content_id)
        .await
        .expect("First enqueue should succeed");

    // The uniqueness check is on content_id alone.
    let err = moderation::enqueue_submission(&db, ContentType::Collection, content_id)
        .await
        .expect_err("Same id under another content type must still collide");
    assert!(matches!(err, ModerationError::DuplicateSubmission { .. }));
}

#[actix_rt::test]
#[serial]
async fn test_resolved_content_cannot_be_requeued() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");
    cleanup_test_data(&db).await.expect("Failed to cleanup");

    let moderator = create_test_moderator(&db, "mod")
        .await
        .expect("Failed to create moderator");
    let spot = create_test_spot(&db, "Hidden Falls", None)
        .await
        .expect("Failed to create spot");

    let entry = moderation::enqueue_submission(&db, ContentType::Spot, spot.id)
        .await
        .expect("Enqueue should succeed");
    moderation::resolve_entry(
        &db,
        entry.id,
        moderator.id,
        moderation::Decision::Reject,
        None,
    )
    .await
    .expect("Resolve should succeed");

    // A full pending -> rejected cycle does not free the content id.
    let err = moderation::enqueue_submission(&db, ContentType::Spot, spot.id)
        .await
        .expect_err("Resolved content must not be requeueable");
    assert!(matches!(err, ModerationError::DuplicateSubmission { .. }));
}

#[actix_rt::test]
#[serial]
async fn test_duplicate_enqueue_scenario_total_increases_once() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");
    cleanup_test_data(&db).await.expect("Failed to cleanup");

    let spot = create_test_spot(&db, "Quarry Overlook", None)
        .await
        .expect("Failed to create spot");

    let filters = moderation::QueueFilters {
        content_type: Some(ContentType::Spot),
        ..Default::default()
    };
    let (_, total_before) = moderation::list_queue(&db, &filters)
        .await
        .expect("Failed to list queue");

    moderation::enqueue_submission(&db, ContentType::Spot, spot.id)
        .await
        .expect("First enqueue should succeed");
    let err = moderation::enqueue_submission(&db, ContentType::Spot, spot.id)
        .await
        .expect_err("Second enqueue should fail");
    assert!(matches!(err, ModerationError::DuplicateSubmission { .. }));

    let (_, total_after) = moderation::list_queue(&db, &filters)
        .await
        .expect("Failed to list queue");
    assert_eq!(total_after, total_before + 1, "Total must grow by exactly 1");
}
