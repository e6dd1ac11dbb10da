use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

use super::envelope::unwrap_detail;
use super::task::{TaskPoll, ViewTask};
use super::ViewError;
use crate::api::{ApiClient, ApiError};

/// A record served inside a detail envelope such as `{ comment: {...} }`
pub trait DetailItem: DeserializeOwned + Clone + Send + 'static {
    const FIELD: &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Idle,
    Loading,
    /// `None` when the record does not exist or was removed
    Loaded(Option<T>),
    Failed(String),
}

/// One record shown on its own page (a comment under moderation, a user profile)
pub struct DetailView<T: DetailItem> {
    endpoint: String,
    failure_message: &'static str,
    state: DetailState<T>,
    error: Option<String>,
    pending: Option<ViewTask<Result<Value, ApiError>>>,
}

impl<T: DetailItem> DetailView<T> {
    pub fn new(endpoint: impl Into<String>, failure_message: &'static str) -> Self {
        Self {
            endpoint: endpoint.into(),
            failure_message,
            state: DetailState::Idle,
            error: None,
            pending: None,
        }
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }

    pub fn item(&self) -> Option<&T> {
        match &self.state {
            DetailState::Loaded(item) => item.as_ref(),
            _ => None,
        }
    }

    /// Last failed mutation, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ApiError>>,
    {
        if !self.begin_load() {
            return;
        }
        let response = fetch().await;
        self.finish_load(response);
    }

    pub async fn fetch(&mut self, client: &ApiClient) {
        let endpoint = self.endpoint.clone();
        self.load(|| client.get_json(&endpoint)).await
    }

    pub fn mount(&mut self, client: &ApiClient) {
        if !self.begin_load() {
            return;
        }
        let client = client.clone();
        let endpoint = self.endpoint.clone();
        self.pending = Some(ViewTask::spawn(async move { client.get_json(&endpoint).await }));
    }

    pub fn poll(&mut self) -> bool {
        let Some(task) = self.pending.as_mut() else {
            return false;
        };

        match task.try_take() {
            TaskPoll::Pending => false,
            TaskPoll::Ready(response) => {
                self.pending = None;
                self.finish_load(response);
                true
            }
            TaskPoll::Lost => {
                self.pending = None;
                self.state = DetailState::Failed(self.failure_message.to_string());
                true
            }
        }
    }

    fn begin_load(&mut self) -> bool {
        if !matches!(self.state, DetailState::Idle) {
            return false;
        }
        self.state = DetailState::Loading;
        true
    }

    fn finish_load(&mut self, response: Result<Value, ApiError>) {
        if !matches!(self.state, DetailState::Loading) {
            return;
        }

        self.state = match response {
            Ok(payload) => match unwrap_detail::<T>(&payload, T::FIELD) {
                Ok(item) => DetailState::Loaded(item),
                Err(err) => DetailState::Failed(err.user_message(self.failure_message)),
            },
            Err(ApiError::NotFound(_)) => DetailState::Loaded(None),
            Err(err) => {
                tracing::error!("Failed to load {}: {}", self.endpoint, err);
                DetailState::Failed(ViewError::from(err).user_message(self.failure_message))
            }
        };
    }

    /// Run `delete` against the loaded record. On success the record is
    /// cleared; on failure it is kept and `failure_message` recorded.
    pub async fn submit_delete<F, Fut>(&mut self, delete: F, failure_message: &str) -> Result<(), ViewError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ApiError>>,
    {
        if self.item().is_none() {
            return Err(ViewError::NotReady);
        }
        let response = delete().await;
        self.apply_delete(response, failure_message)
    }

    /// Settle a delete that ran elsewhere
    pub fn apply_delete(&mut self, response: Result<Value, ApiError>, failure_message: &str) -> Result<(), ViewError> {
        match response {
            Ok(_) => {
                self.state = DetailState::Loaded(None);
                self.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("Delete on {} failed: {}", self.endpoint, err);
                let err = ViewError::from(err);
                self.error = Some(err.user_message(failure_message));
                Err(err)
            }
        }
    }
}
