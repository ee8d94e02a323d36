use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::types::EnrollmentStatus;
use crate::repositories;
use crate::repositories::enrollments::CreateEnrollment;
use crate::schemas::enrollment::{
    EnrollmentCreate, EnrollmentListResponse, EnrollmentOverviewResponse, EnrollmentResponse,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ListEnrollmentsQuery {
    #[serde(default)]
    course_id: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route("/:enrollment_id", axum::routing::delete(delete_enrollment))
}

async fn list_enrollments(
    Query(params): Query<ListEnrollmentsQuery>,
    State(state): State<AppState>,
) -> Result<Json<EnrollmentListResponse>, ApiError> {
    let rows = repositories::enrollments::list_overview(
        state.db(),
        params.course_id.as_deref(),
        params.user_id.as_deref(),
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to list enrollments"))?;

    Ok(Json(EnrollmentListResponse {
        enrollments: rows.into_iter().map(EnrollmentOverviewResponse::from).collect(),
    }))
}

async fn create_enrollment(
    State(state): State<AppState>,
    Json(payload): Json<EnrollmentCreate>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = repositories::users::find_name_by_id(state.db(), &payload.user_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch user"))?;
    if user.is_none() {
        return Err(ApiError::NotFound(format!("User {} not found", payload.user_id)));
    }

    let course = repositories::courses::find_by_id(state.db(), &payload.course_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch course"))?;
    if course.is_none() {
        return Err(ApiError::NotFound(format!("Course {} not found", payload.course_id)));
    }

    let existing = repositories::enrollments::find_by_user_and_course(
        state.db(),
        &payload.user_id,
        &payload.course_id,
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to check enrollment"))?;
    if existing.is_some() {
        return Err(ApiError::BadRequest(
            "User is already enrolled in this course".to_string(),
        ));
    }

    let enrollment = repositories::enrollments::create(
        state.db(),
        CreateEnrollment {
            id: &Uuid::new_v4().to_string(),
            user_id: &payload.user_id,
            course_id: &payload.course_id,
            role: payload.role,
            status: EnrollmentStatus::Active,
            enrolled_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create enrollment"))?;

    Ok((StatusCode::CREATED, Json(EnrollmentResponse::from(enrollment))))
}

async fn delete_enrollment(
    Path(enrollment_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = repositories::enrollments::delete_by_id(state.db(), &enrollment_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete enrollment"))?;

    match deleted {
        Some(id) => Ok(Json(serde_json::json!({
            "message": "Enrollment deleted successfully",
            "enrollment_id": id,
        }))),
        None => Err(ApiError::NotFound(format!("Enrollment {enrollment_id} not found"))),
    }
}
