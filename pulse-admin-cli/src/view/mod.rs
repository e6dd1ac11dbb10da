//! View state shared by every dashboard page and one-shot command.
//!
//! A page is a [`RemoteList`] (or a [`DetailView`] / [`CountView`]) configured
//! with a [`ListSource`]. Loads run once per mount and are never retried; a
//! failed load stays failed until the page is mounted again.

use serde::de::DeserializeOwned;
use std::borrow::Cow;
use thiserror::Error;

use crate::api::ApiError;

mod count;
mod detail;
mod envelope;
mod remote_list;
mod task;

pub use count::CountView;
pub use detail::{DetailItem, DetailState, DetailView};
pub(crate) use envelope::decode_row;
pub use envelope::{unwrap_count, unwrap_detail, unwrap_envelope};
pub use remote_list::{filter_items, matches, ListSource, LoadState, RemoteList};
pub use task::{TaskPoll, ViewTask};

/// Shown when a payload does not have the expected envelope
pub const INVALID_FORMAT: &str = "Format de réponse invalide";

pub const LOADING: &str = "Chargement...";

/// A row type that can be loaded from a list envelope and filtered locally
pub trait ListItem: DeserializeOwned + Clone + Send + 'static {
    /// Name of the array field in the list envelope, e.g. `users`
    const FIELD: &'static str;

    /// Text the search filter matches against
    fn search_text(&self) -> Cow<'_, str>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error(transparent)]
    Transport(#[from] ApiError),

    #[error("Format de réponse invalide")]
    Shape { field: String },

    #[error("Format de réponse invalide")]
    Decode(String),

    #[error("La liste n'est pas encore chargée")]
    NotReady,

    #[error("Ajout impossible sur cette page")]
    CreateUnavailable,
}

impl ViewError {
    /// Message displayed to the user; transport failures collapse to the
    /// page's localized message, payload problems to [`INVALID_FORMAT`]
    pub fn user_message(&self, failure_message: &str) -> String {
        match self {
            ViewError::Transport(err) if err.is_malformed_payload() => INVALID_FORMAT.to_string(),
            ViewError::Transport(_) => failure_message.to_string(),
            other => other.to_string(),
        }
    }
}
