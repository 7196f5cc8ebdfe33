use std::{collections::HashSet, sync::Arc};

use chrono::Utc;

use vibe_lab_server::{
    models::domain::{Level, MatchRating, NewSubmission},
    repositories::{InMemorySubmissionRepository, SubmissionRepository},
};

fn new_submission(prompt: &str, error_flag: bool) -> NewSubmission {
    NewSubmission {
        level: Level::B,
        question_id: "Q1".to_string(),
        prompt_text: prompt.to_string(),
        html_generated: if error_flag {
            String::new()
        } else {
            "<!DOCTYPE html><html></html>".to_string()
        },
        error_flag,
    }
}

fn repository() -> Arc<dyn SubmissionRepository> {
    Arc::new(InMemorySubmissionRepository::new())
}

#[actix_web::test]
async fn create_assigns_unique_ids_and_timestamp() {
    let repo = repository();
    let before = Utc::now();

    let mut ids = HashSet::new();
    for i in 0..25 {
        let created = repo
            .create(new_submission(&format!("prompt {i}"), false))
            .await
            .unwrap();
        assert!(created.created_at >= before);
        assert!(ids.insert(created.id));
    }
}

#[actix_web::test]
async fn create_then_find_returns_same_record() {
    let repo = repository();

    let created = repo.create(new_submission("lista", true)).await.unwrap();
    let found = repo.find_by_id(&created.id).await.unwrap().unwrap();

    assert_eq!(found, created);
    assert!(found.error_flag);
    assert_eq!(found.html_generated, "");
}

#[actix_web::test]
async fn find_unknown_id_is_none() {
    let repo = repository();
    assert!(repo.find_by_id("nope").await.unwrap().is_none());
}

#[actix_web::test]
async fn update_feedback_sets_all_fields_together() {
    let repo = repository();
    let created = repo.create(new_submission("lista", false)).await.unwrap();

    let updated = repo
        .update_feedback(&created.id, MatchRating::Partial, Some("quase".to_string()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.feedback_match, Some(MatchRating::Partial));
    assert_eq!(updated.feedback_comment.as_deref(), Some("quase"));
    assert!(updated.feedback_created_at.unwrap() >= created.created_at);

    // Everything outside the feedback fields is untouched.
    assert_eq!(updated.prompt_text, created.prompt_text);
    assert_eq!(updated.html_generated, created.html_generated);
    assert_eq!(updated.created_at, created.created_at);
}

#[actix_web::test]
async fn update_feedback_unknown_id_changes_nothing() {
    let repo = repository();
    let created = repo.create(new_submission("lista", false)).await.unwrap();

    let result = repo
        .update_feedback("missing", MatchRating::Yes, None)
        .await
        .unwrap();
    assert!(result.is_none());

    let untouched = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(untouched, created);
}

#[actix_web::test]
async fn concurrent_feedback_resolves_to_one_of_the_writes() {
    let repo = repository();
    let created = repo.create(new_submission("lista", false)).await.unwrap();

    let a = {
        let repo = repo.clone();
        let id = created.id.clone();
        tokio::spawn(async move { repo.update_feedback(&id, MatchRating::Yes, None).await })
    };
    let b = {
        let repo = repo.clone();
        let id = created.id.clone();
        tokio::spawn(async move { repo.update_feedback(&id, MatchRating::No, None).await })
    };
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert!(matches!(
        stored.feedback_match,
        Some(MatchRating::Yes) | Some(MatchRating::No)
    ));
}

#[actix_web::test]
async fn list_recent_pages_newest_first() {
    let repo = repository();
    for i in 0..5 {
        repo.create(new_submission(&format!("prompt {i}"), false))
            .await
            .unwrap();
    }

    let (page, total) = repo.list_recent(0, 3).await.unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 3);
    assert!(page.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let (rest, _) = repo.list_recent(3, 3).await.unwrap();
    assert_eq!(rest.len(), 2);

    let (empty, total) = repo.list_recent(10, 3).await.unwrap();
    assert!(empty.is_empty());
    assert_eq!(total, 5);
}

#[actix_web::test]
async fn health_check_is_ok() {
    assert!(repository().health_check().await.is_ok());
}
