//! Per-entity configuration of the generic list and detail views.

use uuid::Uuid;

use crate::models::{Comment, User};
use crate::view::{DetailView, ListSource};

fn list(endpoint: impl Into<String>, failure_message: &'static str) -> ListSource {
    ListSource {
        endpoint: endpoint.into(),
        create_endpoint: None,
        failure_message,
    }
}

pub fn users() -> ListSource {
    list("/api/users", "Échec de la récupération des utilisateurs")
}

pub fn trainings() -> ListSource {
    list("/api/trainings", "Échec de la récupération des entraînements")
}

pub fn exercises() -> ListSource {
    ListSource {
        create_endpoint: Some("/api/exercises".to_string()),
        ..list("/api/exercises", "Échec de la récupération des exercices")
    }
}

pub fn challenges() -> ListSource {
    ListSource {
        create_endpoint: Some("/api/challenges".to_string()),
        ..list("/api/challenges", "Échec de la récupération des défis")
    }
}

pub fn reports() -> ListSource {
    list("/api/reports", "Échec de la récupération des rapports")
}

pub fn user_trainings(uid: &Uuid) -> ListSource {
    list(format!("/api/user_training/{}", uid), "Échec de la récupération des formations")
}

pub fn user_created_challenges(uid: &Uuid) -> ListSource {
    list(format!("/api/challenges_user/{}", uid), "Échec de la récupération des défis")
}

pub fn user_joined_challenges(uid: &Uuid) -> ListSource {
    list(format!("/api/defis/{}", uid), "Échec de la récupération des défis")
}

pub const USERS_COUNT: &str = "/api/users_count";
pub const TRAININGS_COUNT: &str = "/api/trainings_count";

pub const COMMENT_DELETE_FAILED: &str = "Échec de la suppression du commentaire";
pub const REPORT_DELETE_FAILED: &str = "Échec de la suppression du report";

pub fn comment(id: i64) -> DetailView<Comment> {
    DetailView::new(comment_path(id), "Échec de la récupération du commentaire")
}

pub fn comment_path(id: i64) -> String {
    format!("/api/comment/{}", id)
}

/// Dismissing reports is addressed by the reported comment's id
pub fn comment_reports_path(comment_id: i64) -> String {
    format!("/api/report/{}", comment_id)
}

pub fn user(id: i64) -> DetailView<User> {
    DetailView::new(format!("/api/users/{}", id), "Échec de la récupération de l'utilisateur")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_catalog_pages_accept_creates() {
        assert!(exercises().create_endpoint.is_some());
        assert!(challenges().create_endpoint.is_some());
        assert!(users().create_endpoint.is_none());
        assert!(reports().create_endpoint.is_none());
    }

    #[test]
    fn test_user_scoped_endpoints() {
        let uid = Uuid::nil();
        assert_eq!(
            user_joined_challenges(&uid).endpoint,
            "/api/defis/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(comment_reports_path(14), "/api/report/14");
    }
}
