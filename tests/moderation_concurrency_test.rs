//! Concurrency tests for the single-flight guarantees
//!
//! Both guarantees live in the store: the unique index on content_id for
//! intake, the guarded conditional update for resolution. These tests race
//! real connections from the pool against each other.

mod common;
use serial_test::serial;

use common::{database::*, fixtures::*};
use futures::future::join_all;
use waypost::moderation::{self, Decision, ModerationError};
use waypost::orm::moderation_queue::{ContentType, ModerationStatus};

const RACERS: usize = 8;

#[actix_rt::test]
#[serial]
async fn test_concurrent_resolves_yield_exactly_one_success() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");
    cleanup_test_data(&db).await.expect("Failed to cleanup");

    let moderator = create_test_moderator(&db, "mod")
        .await
        .expect("Failed to create moderator");
    let spot = create_test_spot(&db, "Contested Spot", None)
        .await
        .expect("Failed to create spot");
    let entry = moderation::enqueue_submission(&db, ContentType::Spot, spot.id)
        .await
        .expect("Enqueue should succeed");

    let entry_id = entry.id;
    let moderator_id = moderator.id;
    let results = join_all((0..RACERS).map(|i| {
        let db = db.clone();
        let decision = if i % 2 == 0 {
            Decision::Approve
        } else {
            Decision::Reject
        };
        async move { moderation::resolve_entry(&db, entry_id, moderator_id, decision, None).await }
    }))
    .await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "Exactly one resolution may win");
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, ModerationError::AlreadyReviewed)),
        "Every loser must observe AlreadyReviewed"
    );

    // The surviving state matches the single winner's decision.
    let (entry, _) = moderation::get_entry(&db, entry_id)
        .await
        .expect("Failed to fetch entry")
        .expect("Entry should exist");
    let winner = results
        .iter()
        .find_map(|r| r.as_ref().ok())
        .expect("One winner exists");
    assert_eq!(entry.status, winner.status);
    assert_ne!(entry.status, ModerationStatus::Pending);
}

#[actix_rt::test]
#[serial]
async fn test_concurrent_enqueues_yield_exactly_one_entry() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");
    cleanup_test_data(&db).await.expect("Failed to cleanup");

    let spot = create_test_spot(&db, "Contested Spot", None)
        .await
        .expect("Failed to create spot");

    let spot_id = spot.id;
    let results = join_all((0..RACERS).map(|_| {
        let db = db.clone();
        async move { moderation::enqueue_submission(&db, ContentType::Spot, spot_id).await }
    }))
    .await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "Exactly one submission may win");
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, ModerationError::DuplicateSubmission { .. })),
        "Every loser must observe DuplicateSubmission"
    );

    let filters = moderation::QueueFilters::default();
    let (_, total) = moderation::list_queue(&db, &filters)
        .await
        .expect("Failed to list queue");
    assert_eq!(total, 1, "The race must leave a single entry behind");
}
