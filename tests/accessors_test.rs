mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use pulse_admin::config::ReadPolicy;
use pulse_admin::models::NewExercise;
use pulse_admin::services::Accessors;

use common::{MemoryBackend, MockDataGenerator};

fn failing(policy: ReadPolicy) -> Accessors {
    Accessors::new(
        Arc::new(MemoryBackend::default().failing_reads().failing_writes()),
        policy,
    )
}

#[tokio::test]
async fn test_degrade_policy_defaults_every_read() {
    let accessors = failing(ReadPolicy::Degrade);

    assert!(accessors.users().await.unwrap().is_empty());
    assert!(accessors.trainings().await.unwrap().is_empty());
    assert!(accessors.exercises().await.unwrap().is_empty());
    assert!(accessors.challenges().await.unwrap().is_empty());
    assert!(accessors.reports().await.unwrap().is_empty());
    assert_eq!(accessors.users_count().await.unwrap(), 0);
    assert_eq!(accessors.trainings_count().await.unwrap(), 0);
    assert_matches!(accessors.user_by_id(1).await, Ok(None));
    assert_matches!(accessors.comment_by_id(1).await, Ok(None));
}

#[tokio::test]
async fn test_writes_propagate_under_degrade_policy() {
    let accessors = failing(ReadPolicy::Degrade);

    let result = accessors
        .add_exercise(NewExercise {
            title: "Lunges".to_string(),
            difficulty: None,
            exercise_type: None,
            pod_count: None,
        })
        .await;
    assert!(result.is_err());

    assert!(accessors.remove_comment(1).await.is_err());
    assert!(accessors.dismiss_reports(1).await.is_err());
}

#[tokio::test]
async fn test_strict_policy_propagates_reads() {
    let accessors = failing(ReadPolicy::Strict);

    let error = accessors.users().await.unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to read users"));
    assert!(accessors.users_count().await.is_err());
    assert!(accessors.user_by_id(1).await.is_err());
}

#[tokio::test]
async fn test_healthy_backend_is_relayed_unchanged() {
    let backend = MemoryBackend::default();
    backend.users.lock().unwrap().push(MockDataGenerator::user(3, "chloe"));
    let accessors = Accessors::new(Arc::new(backend), ReadPolicy::Strict);

    let users = accessors.users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "chloe");
    assert_eq!(accessors.users_count().await.unwrap(), 1);
}
