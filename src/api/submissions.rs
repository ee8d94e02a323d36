use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::pagination;
use crate::core::state::AppState;
use crate::db::types::SubmissionStatus;
use crate::repositories;
use crate::repositories::submissions::SubmissionFilters;
use crate::schemas::submission::{
    GradeSubmissionRequest, SubmissionDetail, SubmissionListItem, SubmissionListResponse,
    SubmissionStats,
};
use crate::services::grading::{self, GradeCommand, GradingError};

#[derive(Debug, Deserialize)]
pub(crate) struct ListSubmissionsQuery {
    #[serde(default)]
    course_id: Option<String>,
    #[serde(default)]
    assignment_id: Option<String>,
    #[serde(default)]
    status: Option<SubmissionStatus>,
    #[serde(default)]
    is_late: Option<bool>,
    #[serde(default)]
    student_email: Option<String>,
    #[serde(default = "pagination::default_limit")]
    limit: i64,
    #[serde(default)]
    offset: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsQuery {
    #[serde(default)]
    course_id: Option<String>,
    #[serde(default)]
    assignment_id: Option<String>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_submissions))
        .route("/stats/overview", get(stats_overview))
        .route("/:submission_id", get(get_submission))
        .route("/:submission_id/grade", put(grade_submission))
}

async fn list_submissions(
    Query(params): Query<ListSubmissionsQuery>,
    State(state): State<AppState>,
) -> Result<Json<SubmissionListResponse>, ApiError> {
    pagination::validate(params.limit, params.offset)?;

    let filters = SubmissionFilters {
        course_id: params.course_id,
        assignment_id: params.assignment_id,
        status: params.status,
        is_late: params.is_late,
        student_email: params.student_email,
    };

    let total = repositories::submissions::count(state.db(), &filters)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to count submissions"))?;
    let rows =
        repositories::submissions::list(state.db(), &filters, params.limit, params.offset)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to list submissions"))?;

    Ok(Json(SubmissionListResponse {
        total,
        submissions: rows.into_iter().map(SubmissionListItem::from).collect(),
    }))
}

async fn get_submission(
    Path(submission_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SubmissionDetail>, ApiError> {
    let detail = repositories::submissions::find_detail(state.db(), &submission_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch submission"))?;

    match detail {
        Some(detail) => Ok(Json(SubmissionDetail::from(detail))),
        None => Err(ApiError::NotFound(format!("Submission {submission_id} not found"))),
    }
}

async fn grade_submission(
    Path(submission_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<GradeSubmissionRequest>,
) -> Result<Json<SubmissionDetail>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let grader = repositories::users::find_name_by_id(state.db(), &payload.graded_by)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch grader"))?;
    if grader.is_none() {
        return Err(ApiError::BadRequest(format!(
            "graded_by '{}' does not name a known user",
            payload.graded_by
        )));
    }

    let detail = grading::grade_submission(
        state.db(),
        &submission_id,
        GradeCommand {
            manual_score: payload.manual_score,
            feedback: payload.feedback.as_deref(),
            rubric_scores: payload.rubric_scores.as_ref(),
            graded_by: &payload.graded_by,
        },
    )
    .await
    .map_err(|err| match &err {
        GradingError::NotFound(_) => ApiError::NotFound(err.to_string()),
        GradingError::InvalidState { .. } | GradingError::ScoreExceedsMax { .. } => {
            ApiError::BadRequest(err.to_string())
        }
        GradingError::Db(db_err) => ApiError::internal(db_err, "Failed to grade submission"),
    })?;

    Ok(Json(SubmissionDetail::from(detail)))
}

async fn stats_overview(
    Query(params): Query<StatsQuery>,
    State(state): State<AppState>,
) -> Result<Json<SubmissionStats>, ApiError> {
    let filters = SubmissionFilters {
        course_id: params.course_id,
        assignment_id: params.assignment_id,
        ..SubmissionFilters::default()
    };

    let stats = repositories::submissions::stats(state.db(), &filters)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to compute submission stats"))?;

    Ok(Json(SubmissionStats::from(stats)))
}
