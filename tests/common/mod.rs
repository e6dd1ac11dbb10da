#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use pulse_admin::api::{create_routes, AppState};
use pulse_admin::config::ReadPolicy;
use pulse_admin::models::*;
use pulse_admin::services::{Accessors, AdminBackend};

/// In-memory store standing in for the hosted database
#[derive(Default)]
pub struct MemoryBackend {
    pub users: Mutex<Vec<User>>,
    pub trainings: Mutex<Vec<Training>>,
    pub exercises: Mutex<Vec<Exercise>>,
    pub challenges: Mutex<Vec<Challenge>>,
    pub comments: Mutex<Vec<Comment>>,
    pub reports: Mutex<Vec<Report>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            bail!("connection to backend refused: secret-host:5432");
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("insert violates row-level security policy");
        }
        Ok(())
    }
}

#[async_trait]
impl AdminBackend for MemoryBackend {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.check_read()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        self.check_read()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }

    async fn count_users(&self) -> Result<i64> {
        self.check_read()?;
        Ok(self.users.lock().unwrap().len() as i64)
    }

    async fn list_trainings(&self) -> Result<Vec<Training>> {
        self.check_read()?;
        Ok(self.trainings.lock().unwrap().clone())
    }

    async fn list_trainings_by_author(&self, uid: Uuid) -> Result<Vec<Training>> {
        self.check_read()?;
        Ok(self
            .trainings
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.author_id == Some(uid))
            .cloned()
            .collect())
    }

    async fn count_trainings(&self) -> Result<i64> {
        self.check_read()?;
        Ok(self.trainings.lock().unwrap().len() as i64)
    }

    async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        self.check_read()?;
        Ok(self.exercises.lock().unwrap().clone())
    }

    async fn insert_exercise(&self, exercise: NewExercise) -> Result<Exercise> {
        self.check_write()?;
        let mut exercises = self.exercises.lock().unwrap();
        let created = Exercise {
            id: exercises.len() as i64 + 1,
            title: exercise.title,
            difficulty: exercise.difficulty,
            exercise_type: exercise.exercise_type,
            pod_count: exercise.pod_count,
        };
        exercises.push(created.clone());
        Ok(created)
    }

    async fn list_challenges(&self) -> Result<Vec<Challenge>> {
        self.check_read()?;
        Ok(self.challenges.lock().unwrap().clone())
    }

    async fn list_challenges_by_author(&self, uid: Uuid) -> Result<Vec<Challenge>> {
        self.check_read()?;
        Ok(self
            .challenges
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.author_id == Some(uid))
            .cloned()
            .collect())
    }

    async fn list_challenges_joined(&self, uid: Uuid) -> Result<Vec<Challenge>> {
        self.check_read()?;
        Ok(self
            .challenges
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.has_participant(&uid))
            .cloned()
            .collect())
    }

    async fn insert_challenge(&self, challenge: NewChallenge) -> Result<Challenge> {
        self.check_write()?;
        let mut challenges = self.challenges.lock().unwrap();
        let created = Challenge {
            id: challenges.len() as i64 + 1,
            name: challenge.name,
            description: challenge.description,
            photo: None,
            points: challenge.points,
            exercice_id: challenge.exercice_id,
            challenge_type: challenge.challenge_type,
            created_at: Some(Utc::now()),
            start_at: challenge.start_at,
            end_at: challenge.end_at,
            author_id: challenge.author_id,
            participants: Some(json!([])),
            achievers: Some(json!([])),
        };
        challenges.push(created.clone());
        Ok(created)
    }

    async fn list_reports(&self) -> Result<Vec<Report>> {
        self.check_read()?;
        Ok(self.reports.lock().unwrap().clone())
    }

    async fn get_comment(&self, comment_id: i64) -> Result<Option<Comment>> {
        self.check_read()?;
        Ok(self.comments.lock().unwrap().iter().find(|c| c.id == comment_id).cloned())
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<bool> {
        self.check_write()?;
        self.reports.lock().unwrap().retain(|r| r.comment_id != comment_id);
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != comment_id);
        Ok(comments.len() < before)
    }

    async fn delete_reports_for_comment(&self, comment_id: i64) -> Result<u64> {
        self.check_write()?;
        let mut reports = self.reports.lock().unwrap();
        let before = reports.len();
        reports.retain(|r| r.comment_id != comment_id);
        Ok((before - reports.len()) as u64)
    }
}

pub struct MockDataGenerator;

impl MockDataGenerator {
    pub fn user(id: i64, username: &str) -> User {
        User {
            id,
            uid: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@pulse.test", username),
            first_name: None,
            last_name: None,
            profile_photo: None,
            coins: 10 * id,
            birth_date: None,
            created_at: Utc::now(),
        }
    }

    pub fn training(id: i64, title: &str, author_id: Option<Uuid>) -> Training {
        Training {
            id,
            title: title.to_string(),
            description: Some("Morning session".to_string()),
            start_at: Some(Utc::now()),
            end_at: None,
            creation_at: Some(Utc::now()),
            status: Some("done".to_string()),
            activities_list: None,
            author_id,
            photos: None,
            exercise_id: Some(1),
        }
    }

    pub fn challenge(id: i64, name: &str, author_id: Option<Uuid>, participants: Value) -> Challenge {
        Challenge {
            id,
            name: name.to_string(),
            description: None,
            photo: None,
            points: Some(100),
            exercice_id: Some(1),
            challenge_type: Some("group".to_string()),
            created_at: Some(Utc::now()),
            start_at: None,
            end_at: None,
            author_id,
            participants: Some(participants),
            achievers: None,
        }
    }

    pub fn comment(id: i64, content: &str) -> Comment {
        Comment {
            id,
            content: content.to_string(),
            created_at: Utc::now(),
            user_id: Uuid::new_v4(),
        }
    }

    pub fn report(id: i64, comment_id: i64, reason: &str) -> Report {
        Report {
            id,
            comment_id,
            user_id: Uuid::new_v4(),
            reason: reason.to_string(),
            created_at: Utc::now(),
        }
    }
}

pub fn create_test_app(backend: Arc<MemoryBackend>, policy: ReadPolicy) -> Router {
    create_routes(AppState::new(Accessors::new(backend, policy)))
}

/// Send one request through the router and decode the JSON body, if any
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
