use sqlx::{PgPool, Postgres, QueryBuilder};
use time::PrimitiveDateTime;

use crate::db::models::Course;
use crate::db::types::{CourseStatus, DifficultyLevel};

pub(crate) const COLUMNS: &str = "\
    id, code, title, description, short_description, thumbnail_url, category, \
    difficulty_level, estimated_hours, status, published_at, created_by, created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub(crate) struct CourseFilters {
    pub(crate) status: Option<CourseStatus>,
    pub(crate) category: Option<String>,
    pub(crate) difficulty: Option<DifficultyLevel>,
    pub(crate) search: Option<String>,
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &CourseFilters) {
    if let Some(status) = filters.status {
        builder.push(" AND status = ");
        builder.push_bind(status);
    }
    if let Some(category) = &filters.category {
        builder.push(" AND category = ");
        builder.push_bind(category.clone());
    }
    if let Some(difficulty) = filters.difficulty {
        builder.push(" AND difficulty_level = ");
        builder.push_bind(difficulty);
    }
    if let Some(search) = &filters.search {
        let pattern = format!("%{search}%");
        builder.push(" AND (title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

pub(crate) async fn count(pool: &PgPool, filters: &CourseFilters) -> Result<i64, sqlx::Error> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM courses WHERE TRUE");
    push_filters(&mut builder, filters);

    builder.build_query_scalar::<i64>().fetch_one(pool).await
}

pub(crate) async fn list(
    pool: &PgPool,
    filters: &CourseFilters,
    limit: i64,
    offset: i64,
) -> Result<Vec<Course>, sqlx::Error> {
    let mut builder =
        QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM courses WHERE TRUE"));
    push_filters(&mut builder, filters);

    builder.push(" ORDER BY created_at DESC LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);

    builder.build_query_as::<Course>().fetch_all(pool).await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(&format!("SELECT {COLUMNS} FROM courses WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn exists_by_code(pool: &PgPool, code: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT id FROM courses WHERE code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn code_conflict(
    pool: &PgPool,
    code: &str,
    exclude_id: &str,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT id FROM courses WHERE code = $1 AND id != $2")
        .bind(code)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await
}

pub(crate) struct CreateCourse<'a> {
    pub(crate) id: &'a str,
    pub(crate) code: &'a str,
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) short_description: Option<&'a str>,
    pub(crate) thumbnail_url: Option<&'a str>,
    pub(crate) category: Option<&'a str>,
    pub(crate) difficulty_level: DifficultyLevel,
    pub(crate) estimated_hours: Option<f64>,
    pub(crate) status: CourseStatus,
    pub(crate) published_at: Option<PrimitiveDateTime>,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateCourse<'_>) -> Result<Course, sqlx::Error> {
    sqlx::query_as::<_, Course>(&format!(
        "INSERT INTO courses (
            id, code, title, description, short_description, thumbnail_url, category,
            difficulty_level, estimated_hours, status, published_at, created_at, updated_at
         )
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.code)
    .bind(params.title)
    .bind(params.description)
    .bind(params.short_description)
    .bind(params.thumbnail_url)
    .bind(params.category)
    .bind(params.difficulty_level)
    .bind(params.estimated_hours)
    .bind(params.status)
    .bind(params.published_at)
    .bind(params.created_at)
    .bind(params.updated_at)
    .fetch_one(pool)
    .await
}

pub(crate) struct UpdateCourse<'a> {
    pub(crate) code: Option<&'a str>,
    pub(crate) title: Option<&'a str>,
    pub(crate) description: Option<&'a str>,
    pub(crate) short_description: Option<&'a str>,
    pub(crate) thumbnail_url: Option<&'a str>,
    pub(crate) category: Option<&'a str>,
    pub(crate) difficulty_level: Option<DifficultyLevel>,
    pub(crate) estimated_hours: Option<f64>,
    pub(crate) status: Option<CourseStatus>,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn update(
    pool: &PgPool,
    id: &str,
    params: UpdateCourse<'_>,
) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(&format!(
        "UPDATE courses
         SET code = COALESCE($1, code),
             title = COALESCE($2, title),
             description = COALESCE($3, description),
             short_description = COALESCE($4, short_description),
             thumbnail_url = COALESCE($5, thumbnail_url),
             category = COALESCE($6, category),
             difficulty_level = COALESCE($7, difficulty_level),
             estimated_hours = COALESCE($8, estimated_hours),
             status = COALESCE($9, status),
             updated_at = $10
         WHERE id = $11
         RETURNING {COLUMNS}"
    ))
    .bind(params.code)
    .bind(params.title)
    .bind(params.description)
    .bind(params.short_description)
    .bind(params.thumbnail_url)
    .bind(params.category)
    .bind(params.difficulty_level)
    .bind(params.estimated_hours)
    .bind(params.status)
    .bind(params.updated_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn count_enrollments(pool: &PgPool, course_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments WHERE course_id = $1")
        .bind(course_id)
        .fetch_one(pool)
        .await
}

pub(crate) async fn delete_by_id(pool: &PgPool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM courses WHERE id = $1").bind(id).execute(pool).await?;
    Ok(())
}
