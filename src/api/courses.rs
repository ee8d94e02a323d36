use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::pagination;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::types::{CourseStatus, DifficultyLevel};
use crate::repositories;
use crate::repositories::courses::{CourseFilters, CreateCourse, UpdateCourse};
use crate::schemas::course::{CourseCreate, CourseListResponse, CourseResponse, CourseUpdate};

#[derive(Debug, Deserialize)]
pub(crate) struct ListCoursesQuery {
    #[serde(default)]
    status: Option<CourseStatus>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<DifficultyLevel>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default = "pagination::default_limit")]
    limit: i64,
    #[serde(default)]
    offset: i64,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/:course_id", get(get_course).put(update_course).delete(delete_course))
}

async fn list_courses(
    Query(params): Query<ListCoursesQuery>,
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, ApiError> {
    pagination::validate(params.limit, params.offset)?;

    let filters = CourseFilters {
        status: params.status,
        category: params.category,
        difficulty: params.difficulty,
        search: params.search,
    };

    let total = repositories::courses::count(state.db(), &filters)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to count courses"))?;
    let rows = repositories::courses::list(state.db(), &filters, params.limit, params.offset)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list courses"))?;

    let courses = rows.into_iter().map(CourseResponse::from).collect();
    Ok(Json(CourseListResponse { total, courses }))
}

async fn get_course(
    Path(course_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = repositories::courses::find_by_id(state.db(), &course_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch course"))?;

    match course {
        Some(course) => Ok(Json(CourseResponse::from(course))),
        None => Err(ApiError::NotFound(format!("Course {course_id} not found"))),
    }
}

async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CourseCreate>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let existing = repositories::courses::exists_by_code(state.db(), &payload.code)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to check course code"))?;
    if existing.is_some() {
        return Err(ApiError::BadRequest(format!(
            "Course code '{}' already exists",
            payload.code
        )));
    }

    let now = primitive_now_utc();
    let status = payload.status.unwrap_or(CourseStatus::Draft);
    let course = repositories::courses::create(
        state.db(),
        CreateCourse {
            id: &Uuid::new_v4().to_string(),
            code: &payload.code,
            title: &payload.title,
            description: payload.description.as_deref(),
            short_description: payload.short_description.as_deref(),
            thumbnail_url: payload.thumbnail_url.as_deref(),
            category: payload.category.as_deref(),
            difficulty_level: payload.difficulty_level.unwrap_or(DifficultyLevel::Beginner),
            estimated_hours: payload.estimated_hours,
            status,
            published_at: (status == CourseStatus::Published).then_some(now),
            created_at: now,
            updated_at: now,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create course"))?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

async fn update_course(
    Path(course_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CourseUpdate>,
) -> Result<Json<CourseResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if let Some(code) = &payload.code {
        let conflict = repositories::courses::code_conflict(state.db(), code, &course_id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to check course code"))?;
        if conflict.is_some() {
            return Err(ApiError::BadRequest(format!("Course code '{code}' already exists")));
        }
    }

    let updated = repositories::courses::update(
        state.db(),
        &course_id,
        UpdateCourse {
            code: payload.code.as_deref(),
            title: payload.title.as_deref(),
            description: payload.description.as_deref(),
            short_description: payload.short_description.as_deref(),
            thumbnail_url: payload.thumbnail_url.as_deref(),
            category: payload.category.as_deref(),
            difficulty_level: payload.difficulty_level,
            estimated_hours: payload.estimated_hours,
            status: payload.status,
            updated_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update course"))?;

    match updated {
        Some(course) => Ok(Json(CourseResponse::from(course))),
        None => Err(ApiError::NotFound(format!("Course {course_id} not found"))),
    }
}

async fn delete_course(
    Path(course_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let existing = repositories::courses::find_by_id(state.db(), &course_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch course"))?;
    if existing.is_none() {
        return Err(ApiError::NotFound(format!("Course {course_id} not found")));
    }

    let enrollments = repositories::courses::count_enrollments(state.db(), &course_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to count enrollments"))?;
    if enrollments > 0 {
        return Err(ApiError::Conflict(format!(
            "Cannot delete course with {enrollments} enrollments; archive it instead"
        )));
    }

    repositories::courses::delete_by_id(state.db(), &course_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete course"))?;

    Ok(StatusCode::NO_CONTENT)
}
