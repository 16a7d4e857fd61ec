use axum::{extract::State, Json};

use crate::database::SharedStore;
use crate::models::ActivityListing;
use crate::services::activities_service;

pub async fn activities_handler(State(store): State<SharedStore>) -> Json<ActivityListing> {
    let store = store.read().await;
    Json(activities_service::list_activities(&store))
}
