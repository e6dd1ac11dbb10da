use serde::Serialize;
use serde_json::Value;
use std::future::Future;

use super::envelope::{decode_row, decode_rows};
use super::task::{TaskPoll, ViewTask};
use super::{ListItem, ViewError};
use crate::api::{ApiClient, ApiError};

/// Where a list page reads from and writes to
#[derive(Debug, Clone, PartialEq)]
pub struct ListSource {
    pub endpoint: String,
    pub create_endpoint: Option<String>,
    /// Localized message shown when the gateway cannot be reached
    pub failure_message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

/// Case-insensitive substring match; the empty term matches everything
pub fn matches(text: &str, term: &str) -> bool {
    term.is_empty() || text.to_lowercase().contains(&term.to_lowercase())
}

pub fn filter_items<'a, T: ListItem>(items: &'a [T], term: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches(&item.search_text(), term))
        .collect()
}

/// Remote collection held by one mounted page
pub struct RemoteList<T: ListItem> {
    source: ListSource,
    state: LoadState<T>,
    filter_term: String,
    pending: Option<ViewTask<Result<Value, ApiError>>>,
}

impl<T: ListItem> RemoteList<T> {
    pub fn new(source: ListSource) -> Self {
        Self {
            source,
            state: LoadState::Idle,
            filter_term: String::new(),
            pending: None,
        }
    }

    pub fn source(&self) -> &ListSource {
        &self.source
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Run `fetch` and settle the list. Only the first call on an instance
    /// does anything.
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

    /// Load from the configured endpoint and wait for the outcome
    pub async fn fetch(&mut self, client: &ApiClient) {
        let endpoint = self.source.endpoint.clone();
        self.load(|| client.get_json(&endpoint)).await
    }

    /// Start loading in the background; [`RemoteList::poll`] settles it
    pub fn mount(&mut self, client: &ApiClient) {
        if !self.begin_load() {
            return;
        }
        let client = client.clone();
        let endpoint = self.source.endpoint.clone();
        self.pending = Some(ViewTask::spawn(async move { client.get_json(&endpoint).await }));
    }

    /// Apply a finished background load. Returns true when the state changed.
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
                tracing::error!("Load task for {} ended without a result", self.source.endpoint);
                self.state = LoadState::Failed(self.source.failure_message.to_string());
                true
            }
        }
    }

    fn begin_load(&mut self) -> bool {
        if !matches!(self.state, LoadState::Idle) {
            tracing::debug!("{} already loaded for this mount", self.source.endpoint);
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    fn finish_load(&mut self, response: Result<Value, ApiError>) {
        if !self.is_loading() {
            return;
        }

        let rows = response
            .map_err(ViewError::from)
            .and_then(|payload| decode_rows::<T>(&payload, T::FIELD));

        self.state = match rows {
            Ok(items) => {
                tracing::debug!("Loaded {} {}", items.len(), T::FIELD);
                LoadState::Ready(items)
            }
            Err(err) => {
                tracing::error!("Failed to load {}: {}", self.source.endpoint, err);
                LoadState::Failed(err.user_message(self.source.failure_message))
            }
        };
    }

    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }

    /// Change the search term; never refetches
    pub fn set_filter_term(&mut self, term: impl Into<String>) {
        self.filter_term = term.into();
    }

    /// Every loaded row; empty unless the list is ready
    pub fn items(&self) -> &[T] {
        match &self.state {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }

    /// Loaded rows matching the current filter term
    pub fn visible(&self) -> Vec<&T> {
        filter_items(self.items(), &self.filter_term)
    }

    /// Send a create request with `create` and append the returned row.
    ///
    /// On failure the collection is left untouched and the error returned.
    pub async fn submit_create<F, Fut>(&mut self, create: F) -> Result<T, ViewError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ApiError>>,
    {
        if !matches!(self.state, LoadState::Ready(_)) {
            return Err(ViewError::NotReady);
        }
        let response = create().await;
        self.apply_created(response)
    }

    /// POST `payload` to the create endpoint of this page
    pub async fn create<P>(&mut self, client: &ApiClient, payload: &P) -> Result<T, ViewError>
    where
        P: Serialize + ?Sized,
    {
        let endpoint = self
            .source
            .create_endpoint
            .clone()
            .ok_or(ViewError::CreateUnavailable)?;
        self.submit_create(|| client.post_json(&endpoint, payload)).await
    }

    /// Append the row returned by a create call that ran elsewhere
    pub fn apply_created(&mut self, response: Result<Value, ApiError>) -> Result<T, ViewError> {
        let LoadState::Ready(items) = &mut self.state else {
            return Err(ViewError::NotReady);
        };

        let created = response
            .map_err(ViewError::from)
            .and_then(|row| decode_row::<T>(&row, T::FIELD));

        match created {
            Ok(item) => {
                items.push(item.clone());
                Ok(item)
            }
            Err(err) => {
                tracing::error!("Create on {} failed: {}", self.source.endpoint, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::borrow::Cow;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    impl ListItem for Row {
        const FIELD: &'static str = "rows";

        fn search_text(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.name)
        }
    }

    fn source() -> ListSource {
        ListSource {
            endpoint: "/api/rows".into(),
            create_endpoint: Some("/api/rows".into()),
            failure_message: "Échec de la récupération des lignes",
        }
    }

    async fn ready_list() -> RemoteList<Row> {
        let mut list = RemoteList::new(source());
        list.load(|| async {
            Ok(json!({ "rows": [{ "id": 1, "name": "Plank" }, { "id": 2, "name": "Squat" }] }))
        })
        .await;
        list
    }

    #[tokio::test]
    async fn test_load_settles_ready() {
        let list = ready_list().await;
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_load_runs_once_per_instance() {
        let mut list = ready_list().await;
        list.load(|| async { Ok(json!({ "rows": [] })) }).await;
        assert_eq!(list.items().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_uses_page_message() {
        let mut list: RemoteList<Row> = RemoteList::new(source());
        list.load(|| async { Err(ApiError::NetworkError("connection refused".into())) })
            .await;

        assert_eq!(
            list.state(),
            &LoadState::Failed("Échec de la récupération des lignes".into())
        );
    }

    #[tokio::test]
    async fn test_undecodable_row_fails_load() {
        let mut list: RemoteList<Row> = RemoteList::new(source());
        list.load(|| async { Ok(json!({ "rows": [{ "id": "one" }] })) }).await;

        assert_eq!(list.state(), &LoadState::Failed(crate::view::INVALID_FORMAT.into()));
    }

    #[tokio::test]
    async fn test_filter_is_case_insensitive() {
        let mut list = ready_list().await;
        list.set_filter_term("SQU");

        let visible: Vec<i64> = list.visible().iter().map(|row| row.id).collect();
        assert_eq!(visible, vec![2]);
        assert_eq!(list.items().len(), 2);
    }

    #[tokio::test]
    async fn test_create_before_ready_is_rejected() {
        let mut list: RemoteList<Row> = RemoteList::new(source());
        let result = list
            .submit_create(|| async { Ok(json!({ "id": 3, "name": "Lunge" })) })
            .await;

        assert_eq!(result, Err(ViewError::NotReady));
        assert_eq!(list.state(), &LoadState::Idle);
    }

    #[tokio::test]
    async fn test_created_row_shows_under_matching_filter() {
        let mut list = ready_list().await;
        list.set_filter_term("lun");

        list.submit_create(|| async { Ok(json!({ "id": 3, "name": "Lunge" })) })
            .await
            .unwrap();
        list.submit_create(|| async { Ok(json!({ "id": 4, "name": "Burpee" })) })
            .await
            .unwrap();

        assert_eq!(list.items().len(), 4);
        let visible: Vec<i64> = list.visible().iter().map(|row| row.id).collect();
        assert_eq!(visible, vec![3]);
    }

    #[test]
    fn test_matches() {
        assert!(matches("Anabelle", ""));
        assert!(matches("Anabelle", "BEL"));
        assert!(!matches("Anabelle", "bo"));
    }
}
