use serde_json::Value;
use std::future::Future;

use super::envelope::unwrap_count;
use super::task::{TaskPoll, ViewTask};
use crate::api::{ApiClient, ApiError};

/// A `{ count: n }` figure on the dashboard summary. Failures leave the
/// count absent and are only logged.
pub struct CountView {
    endpoint: String,
    count: Option<i64>,
    started: bool,
    pending: Option<ViewTask<Result<Value, ApiError>>>,
}

impl CountView {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            count: None,
            started: false,
            pending: None,
        }
    }

    pub fn count(&self) -> Option<i64> {
        self.count
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub async fn load<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ApiError>>,
    {
        if std::mem::replace(&mut self.started, true) {
            return;
        }
        let response = fetch().await;
        self.settle(response);
    }

    pub async fn fetch(&mut self, client: &ApiClient) {
        let endpoint = self.endpoint.clone();
        self.load(|| client.get_json(&endpoint)).await
    }

    pub fn mount(&mut self, client: &ApiClient) {
        if std::mem::replace(&mut self.started, true) {
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
                self.settle(response);
                true
            }
            TaskPoll::Lost => {
                self.pending = None;
                true
            }
        }
    }

    fn settle(&mut self, response: Result<Value, ApiError>) {
        match response {
            Ok(payload) => self.count = unwrap_count(&payload).ok(),
            Err(err) => tracing::error!("Failed to fetch {}: {}", self.endpoint, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_count_loads() {
        let mut view = CountView::new("/api/users_count");
        view.load(|| async { Ok(json!({ "count": 12 })) }).await;
        assert_eq!(view.count(), Some(12));
    }

    #[tokio::test]
    async fn test_invalid_count_stays_absent() {
        let mut view = CountView::new("/api/users_count");
        view.load(|| async { Ok(json!({ "total": 12 })) }).await;
        assert_eq!(view.count(), None);
    }
}
