use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{debug, warn};

use crate::database::SharedStore;
use crate::error::ActivityError;
use crate::models::MessageResponse;
use crate::services::signup_service;

/// Raw query pairs, so a repeated `email` does not reject the request.
pub type QueryPairs = Vec<(String, String)>;

/// An identifier the router cannot decode names no activity.
fn activity_identifier(
    path: Result<Path<String>, PathRejection>,
) -> Result<String, ActivityError> {
    path.map(|Path(identifier)| identifier).map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "undecodable activity identifier");
        ActivityError::NotFound
    })
}

/// Last `email` value wins when the parameter is repeated.
fn email_param(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<String, ActivityError> {
    let Query(pairs) =
        query.map_err(|rejection| ActivityError::InvalidQuery(rejection.body_text()))?;
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .ok_or(ActivityError::MissingEmail)
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(store): State<SharedStore>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let activity_id = activity_identifier(path)?;
    let email = email_param(query)?;

    // Resolve, check and append under one write guard.
    let mut store = store.write().await;
    signup_service::signup(&mut store, &activity_id, &email)
        .map(|message| Json(MessageResponse { message }))
        .inspect_err(|e| {
            warn!(identifier = %activity_id, email = %email, "signup rejected: {}", e)
        })
}

pub async fn activity_unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(store): State<SharedStore>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let activity_id = activity_identifier(path)?;
    let email = email_param(query)?;

    let mut store = store.write().await;
    signup_service::unregister(&mut store, &activity_id, &email)
        .map(|message| Json(MessageResponse { message }))
        .inspect_err(|e| {
            warn!(identifier = %activity_id, email = %email, "unregister rejected: {}", e)
        })
}
