use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::Module;
use crate::db::types::LectureType;

pub(crate) const COLUMNS: &str =
    "id, course_id, title, description, order_num, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ModuleOverviewRow {
    pub(crate) id: String,
    pub(crate) course_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) order_num: i32,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
    pub(crate) lecture_count: i64,
    pub(crate) assignment_count: i64,
}

pub(crate) async fn list_by_course(
    pool: &PgPool,
    course_id: &str,
) -> Result<Vec<ModuleOverviewRow>, sqlx::Error> {
    sqlx::query_as::<_, ModuleOverviewRow>(
        "SELECT m.id, m.course_id, m.title, m.description, m.order_num,
                m.created_at, m.updated_at,
                COUNT(l.id) AS lecture_count,
                COUNT(l.id) FILTER (WHERE l.type = $2) AS assignment_count
         FROM modules m
         LEFT JOIN lectures l ON l.module_id = m.id
         WHERE m.course_id = $1
         GROUP BY m.id
         ORDER BY m.order_num, m.created_at",
    )
    .bind(course_id)
    .bind(LectureType::Assignment)
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Module>, sqlx::Error> {
    sqlx::query_as::<_, Module>(&format!("SELECT {COLUMNS} FROM modules WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) struct CreateModule<'a> {
    pub(crate) id: &'a str,
    pub(crate) course_id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) order_num: i32,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateModule<'_>) -> Result<Module, sqlx::Error> {
    sqlx::query_as::<_, Module>(&format!(
        "INSERT INTO modules (id, course_id, title, description, order_num, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.course_id)
    .bind(params.title)
    .bind(params.description)
    .bind(params.order_num)
    .bind(params.created_at)
    .bind(params.updated_at)
    .fetch_one(pool)
    .await
}

pub(crate) struct UpdateModule<'a> {
    pub(crate) title: Option<&'a str>,
    pub(crate) description: Option<&'a str>,
    pub(crate) order_num: Option<i32>,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn update(
    pool: &PgPool,
    id: &str,
    params: UpdateModule<'_>,
) -> Result<Option<Module>, sqlx::Error> {
    sqlx::query_as::<_, Module>(&format!(
        "UPDATE modules
         SET title = COALESCE($1, title),
             description = COALESCE($2, description),
             order_num = COALESCE($3, order_num),
             updated_at = $4
         WHERE id = $5
         RETURNING {COLUMNS}"
    ))
    .bind(params.title)
    .bind(params.description)
    .bind(params.order_num)
    .bind(params.updated_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn delete_by_id(pool: &PgPool, id: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("DELETE FROM modules WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await
}
