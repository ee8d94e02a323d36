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
use crate::repositories;
use crate::repositories::modules::{CreateModule, UpdateModule};
use crate::schemas::module::{
    ModuleCreate, ModuleListResponse, ModuleOverviewResponse, ModuleResponse, ModuleUpdate,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ListModulesQuery {
    course_id: String,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_modules).post(create_module))
        .route("/:module_id", axum::routing::put(update_module).delete(delete_module))
}

async fn list_modules(
    Query(params): Query<ListModulesQuery>,
    State(state): State<AppState>,
) -> Result<Json<ModuleListResponse>, ApiError> {
    let rows = repositories::modules::list_by_course(state.db(), &params.course_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list modules"))?;

    Ok(Json(ModuleListResponse {
        modules: rows.into_iter().map(ModuleOverviewResponse::from).collect(),
    }))
}

async fn create_module(
    State(state): State<AppState>,
    Json(payload): Json<ModuleCreate>,
) -> Result<(StatusCode, Json<ModuleResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let course = repositories::courses::find_by_id(state.db(), &payload.course_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch course"))?;
    if course.is_none() {
        return Err(ApiError::NotFound(format!("Course {} not found", payload.course_id)));
    }

    let now = primitive_now_utc();
    let module = repositories::modules::create(
        state.db(),
        CreateModule {
            id: &Uuid::new_v4().to_string(),
            course_id: &payload.course_id,
            title: &payload.title,
            description: payload.description.as_deref(),
            order_num: payload.order_num,
            created_at: now,
            updated_at: now,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create module"))?;

    Ok((StatusCode::CREATED, Json(ModuleResponse::from(module))))
}

async fn update_module(
    Path(module_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<ModuleUpdate>,
) -> Result<Json<ModuleResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let updated = repositories::modules::update(
        state.db(),
        &module_id,
        UpdateModule {
            title: payload.title.as_deref(),
            description: payload.description.as_deref(),
            order_num: payload.order_num,
            updated_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update module"))?;

    match updated {
        Some(module) => Ok(Json(ModuleResponse::from(module))),
        None => Err(ApiError::NotFound(format!("Module {module_id} not found"))),
    }
}

async fn delete_module(
    Path(module_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = repositories::modules::delete_by_id(state.db(), &module_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete module"))?;

    match deleted {
        Some(id) => Ok(Json(serde_json::json!({
            "message": "Module deleted successfully",
            "module_id": id,
        }))),
        None => Err(ApiError::NotFound(format!("Module {module_id} not found"))),
    }
}
