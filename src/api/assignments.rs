use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::core::time::format_primitive;
use crate::repositories;
use crate::schemas::lecture::{AssignmentListResponse, AssignmentOverviewResponse};

#[derive(Debug, Deserialize)]
pub(crate) struct ListAssignmentsQuery {
    #[serde(default)]
    course_id: Option<String>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_assignments))
}

async fn list_assignments(
    Query(params): Query<ListAssignmentsQuery>,
    State(state): State<AppState>,
) -> Result<Json<AssignmentListResponse>, ApiError> {
    let rows =
        repositories::lectures::list_assignment_overview(state.db(), params.course_id.as_deref())
            .await
            .map_err(|e| ApiError::internal(e, "Failed to list assignments"))?;

    let assignments = rows
        .into_iter()
        .map(|row| AssignmentOverviewResponse {
            assignment_id: row.assignment_id,
            title: row.title,
            description: row.description,
            max_points: row.max_points,
            due_date: row.due_date.map(format_primitive),
            course_id: row.course_id,
            course_code: row.course_code,
            course_title: row.course_title,
            module_id: row.module_id,
            module_title: row.module_title,
            total_submissions: row.total_submissions,
            graded_count: row.graded_count,
            pending_count: row.pending_count,
            grading_count: row.grading_count,
        })
        .collect();

    Ok(Json(AssignmentListResponse { assignments }))
}
