use sqlx::{PgPool, Postgres, QueryBuilder};
use time::PrimitiveDateTime;

use crate::db::models::Lecture;
use crate::db::types::{LectureType, SubmissionStatus};

pub(crate) const COLUMNS: &str = "\
    id, module_id, title, description, instructions, type, order_num, max_points, due_date, \
    late_submission_allowed, late_penalty_percent, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LectureOverviewRow {
    pub(crate) id: String,
    pub(crate) module_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    #[sqlx(rename = "type")]
    pub(crate) lecture_type: LectureType,
    pub(crate) order_num: i32,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<PrimitiveDateTime>,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) submission_count: i64,
}

pub(crate) async fn list_by_module(
    pool: &PgPool,
    module_id: &str,
) -> Result<Vec<LectureOverviewRow>, sqlx::Error> {
    sqlx::query_as::<_, LectureOverviewRow>(
        "SELECT l.id, l.module_id, l.title, l.description, l.type, l.order_num,
                l.max_points, l.due_date, l.created_at,
                COUNT(s.id) AS submission_count
         FROM lectures l
         LEFT JOIN submissions s ON s.lecture_id = l.id
         WHERE l.module_id = $1
         GROUP BY l.id
         ORDER BY l.order_num, l.created_at",
    )
    .bind(module_id)
    .fetch_all(pool)
    .await
}

pub(crate) struct CreateLecture<'a> {
    pub(crate) id: &'a str,
    pub(crate) module_id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) instructions: Option<&'a str>,
    pub(crate) lecture_type: LectureType,
    pub(crate) order_num: i32,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<PrimitiveDateTime>,
    pub(crate) late_submission_allowed: bool,
    pub(crate) late_penalty_percent: f64,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateLecture<'_>) -> Result<Lecture, sqlx::Error> {
    sqlx::query_as::<_, Lecture>(&format!(
        "INSERT INTO lectures (
            id, module_id, title, description, instructions, type, order_num,
            max_points, due_date, late_submission_allowed, late_penalty_percent,
            created_at, updated_at
         )
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.module_id)
    .bind(params.title)
    .bind(params.description)
    .bind(params.instructions)
    .bind(params.lecture_type)
    .bind(params.order_num)
    .bind(params.max_points)
    .bind(params.due_date)
    .bind(params.late_submission_allowed)
    .bind(params.late_penalty_percent)
    .bind(params.created_at)
    .bind(params.updated_at)
    .fetch_one(pool)
    .await
}

pub(crate) struct UpdateLecture<'a> {
    pub(crate) title: Option<&'a str>,
    pub(crate) description: Option<&'a str>,
    pub(crate) instructions: Option<&'a str>,
    pub(crate) order_num: Option<i32>,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<PrimitiveDateTime>,
    pub(crate) late_submission_allowed: Option<bool>,
    pub(crate) late_penalty_percent: Option<f64>,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn update(
    pool: &PgPool,
    id: &str,
    params: UpdateLecture<'_>,
) -> Result<Option<Lecture>, sqlx::Error> {
    sqlx::query_as::<_, Lecture>(&format!(
        "UPDATE lectures
         SET title = COALESCE($1, title),
             description = COALESCE($2, description),
             instructions = COALESCE($3, instructions),
             order_num = COALESCE($4, order_num),
             max_points = COALESCE($5, max_points),
             due_date = COALESCE($6, due_date),
             late_submission_allowed = COALESCE($7, late_submission_allowed),
             late_penalty_percent = COALESCE($8, late_penalty_percent),
             updated_at = $9
         WHERE id = $10
         RETURNING {COLUMNS}"
    ))
    .bind(params.title)
    .bind(params.description)
    .bind(params.instructions)
    .bind(params.order_num)
    .bind(params.max_points)
    .bind(params.due_date)
    .bind(params.late_submission_allowed)
    .bind(params.late_penalty_percent)
    .bind(params.updated_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn delete_by_id(pool: &PgPool, id: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("DELETE FROM lectures WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AssignmentOverviewRow {
    pub(crate) assignment_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<PrimitiveDateTime>,
    pub(crate) course_id: String,
    pub(crate) course_code: String,
    pub(crate) course_title: String,
    pub(crate) module_id: String,
    pub(crate) module_title: String,
    pub(crate) total_submissions: i64,
    pub(crate) graded_count: i64,
    pub(crate) pending_count: i64,
    pub(crate) grading_count: i64,
}

pub(crate) async fn list_assignment_overview(
    pool: &PgPool,
    course_id: Option<&str>,
) -> Result<Vec<AssignmentOverviewRow>, sqlx::Error> {
    let mut builder = QueryBuilder::<Postgres>::new(
        "SELECT l.id AS assignment_id, l.title, l.description, l.max_points, l.due_date,
                c.id AS course_id, c.code AS course_code, c.title AS course_title,
                m.id AS module_id, m.title AS module_title,
                COUNT(s.id) AS total_submissions,
                COUNT(s.id) FILTER (WHERE s.status = ",
    );
    builder.push_bind(SubmissionStatus::Graded);
    builder.push(
        ") AS graded_count,
                COUNT(s.id) FILTER (WHERE s.status = ",
    );
    builder.push_bind(SubmissionStatus::Submitted);
    builder.push(
        ") AS pending_count,
                COUNT(s.id) FILTER (WHERE s.status = ",
    );
    builder.push_bind(SubmissionStatus::Grading);
    builder.push(
        ") AS grading_count
         FROM lectures l
         JOIN modules m ON m.id = l.module_id
         JOIN courses c ON c.id = m.course_id
         LEFT JOIN submissions s ON s.lecture_id = l.id
         WHERE l.type = ",
    );
    builder.push_bind(LectureType::Assignment);

    if let Some(course_id) = course_id {
        builder.push(" AND c.id = ");
        builder.push_bind(course_id);
    }

    builder.push(" GROUP BY l.id, c.id, m.id ORDER BY c.code, m.order_num, l.order_num");

    builder.build_query_as::<AssignmentOverviewRow>().fetch_all(pool).await
}
