use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::error::method_not_allowed;
use super::health::health_check;
use super::{challenges, exercises, moderation, trainings, users};
use crate::services::Accessors;

#[derive(Clone)]
pub struct AppState {
    pub accessors: Accessors,
}

impl AppState {
    pub fn new(accessors: Accessors) -> Self {
        Self { accessors }
    }
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Users
        .route(
            "/api/users",
            get(users::list_users).fallback(method_not_allowed),
        )
        .route(
            "/api/users/:id",
            get(users::get_user).fallback(method_not_allowed),
        )
        .route(
            "/api/users_count",
            get(users::count_users).fallback(method_not_allowed),
        )
        // Trainings
        .route(
            "/api/trainings",
            get(trainings::list_trainings).fallback(method_not_allowed),
        )
        .route(
            "/api/trainings_count",
            get(trainings::count_trainings).fallback(method_not_allowed),
        )
        .route(
            "/api/user_training/:uid",
            get(trainings::list_user_trainings).fallback(method_not_allowed),
        )
        // Catalog
        .route(
            "/api/exercises",
            get(exercises::list_exercises)
                .post(exercises::create_exercise)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/challenges",
            get(challenges::list_challenges)
                .post(challenges::create_challenge)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/challenges_user/:uid",
            get(challenges::list_created_challenges).fallback(method_not_allowed),
        )
        .route(
            "/api/defis/:uid",
            get(challenges::list_joined_challenges).fallback(method_not_allowed),
        )
        // Moderation
        .route(
            "/api/reports",
            get(moderation::list_reports).fallback(method_not_allowed),
        )
        .route(
            "/api/comment/:id",
            get(moderation::get_comment)
                .delete(moderation::delete_comment)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/report/:id",
            delete(moderation::dismiss_reports).fallback(method_not_allowed),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
