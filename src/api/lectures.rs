use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use time::Duration;
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::types::LectureType;
use crate::repositories;
use crate::repositories::lectures::{CreateLecture, UpdateLecture};
use crate::schemas::lecture::{
    LectureCreate, LectureListResponse, LectureOverviewResponse, LectureResponse, LectureUpdate,
};

const DEFAULT_MAX_POINTS: f64 = 100.0;
const DEFAULT_DUE_DAYS: i64 = 7;

#[derive(Debug, Deserialize)]
pub(crate) struct ListLecturesQuery {
    module_id: String,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_lectures).post(create_lecture))
        .route("/:lecture_id", axum::routing::put(update_lecture).delete(delete_lecture))
}

async fn list_lectures(
    Query(params): Query<ListLecturesQuery>,
    State(state): State<AppState>,
) -> Result<Json<LectureListResponse>, ApiError> {
    let rows = repositories::lectures::list_by_module(state.db(), &params.module_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list lectures"))?;

    Ok(Json(LectureListResponse {
        lectures: rows.into_iter().map(LectureOverviewResponse::from).collect(),
    }))
}

async fn create_lecture(
    State(state): State<AppState>,
    Json(payload): Json<LectureCreate>,
) -> Result<(StatusCode, Json<LectureResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let module = repositories::modules::find_by_id(state.db(), &payload.module_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch module"))?;
    if module.is_none() {
        return Err(ApiError::NotFound(format!("Module {} not found", payload.module_id)));
    }

    let now = primitive_now_utc();
    let is_assignment = payload.lecture_type == LectureType::Assignment;
    let max_points =
        is_assignment.then(|| payload.max_points.unwrap_or(DEFAULT_MAX_POINTS));
    let due_date = is_assignment.then(|| {
        now + Duration::days(payload.due_days.unwrap_or(DEFAULT_DUE_DAYS))
    });

    let lecture = repositories::lectures::create(
        state.db(),
        CreateLecture {
            id: &Uuid::new_v4().to_string(),
            module_id: &payload.module_id,
            title: &payload.title,
            description: payload.description.as_deref(),
            instructions: payload.instructions.as_deref(),
            lecture_type: payload.lecture_type,
            order_num: payload.order_num,
            max_points,
            due_date,
            late_submission_allowed: true,
            late_penalty_percent: 0.0,
            created_at: now,
            updated_at: now,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create lecture"))?;

    Ok((StatusCode::CREATED, Json(LectureResponse::from(lecture))))
}

async fn update_lecture(
    Path(lecture_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<LectureUpdate>,
) -> Result<Json<LectureResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let due_date = payload.due_days.map(|days| primitive_now_utc() + Duration::days(days));

    let updated = repositories::lectures::update(
        state.db(),
        &lecture_id,
        UpdateLecture {
            title: payload.title.as_deref(),
            description: payload.description.as_deref(),
            instructions: payload.instructions.as_deref(),
            order_num: payload.order_num,
            max_points: payload.max_points,
            due_date,
            late_submission_allowed: payload.late_submission_allowed,
            late_penalty_percent: payload.late_penalty_percent,
            updated_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update lecture"))?;

    match updated {
        Some(lecture) => Ok(Json(LectureResponse::from(lecture))),
        None => Err(ApiError::NotFound(format!("Lecture {lecture_id} not found"))),
    }
}

async fn delete_lecture(
    Path(lecture_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = repositories::lectures::delete_by_id(state.db(), &lecture_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete lecture"))?;

    match deleted {
        Some(id) => Ok(Json(serde_json::json!({
            "message": "Lecture deleted successfully",
            "lecture_id": id,
        }))),
        None => Err(ApiError::NotFound(format!("Lecture {lecture_id} not found"))),
    }
}
