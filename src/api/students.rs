use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::student::{StudentListResponse, StudentOverviewResponse};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_students))
}

async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<StudentListResponse>, ApiError> {
    let rows = repositories::users::list_student_overview(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list students"))?;

    Ok(Json(StudentListResponse {
        students: rows.into_iter().map(StudentOverviewResponse::from).collect(),
    }))
}
