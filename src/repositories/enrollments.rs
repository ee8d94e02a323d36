use sqlx::{PgPool, Postgres, QueryBuilder};
use time::PrimitiveDateTime;

use crate::db::models::Enrollment;
use crate::db::types::{EnrollmentRole, EnrollmentStatus, SubmissionStatus};

pub(crate) const COLUMNS: &str =
    "id, user_id, course_id, role, status, enrolled_at, final_grade";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct EnrollmentOverviewRow {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) course_id: String,
    pub(crate) role: EnrollmentRole,
    pub(crate) status: EnrollmentStatus,
    pub(crate) enrolled_at: PrimitiveDateTime,
    pub(crate) final_grade: Option<f64>,
    pub(crate) student_email: String,
    pub(crate) student_name: String,
    pub(crate) course_code: String,
    pub(crate) course_title: String,
    pub(crate) submission_count: i64,
    pub(crate) avg_score: Option<f64>,
}

pub(crate) async fn list_overview(
    pool: &PgPool,
    course_id: Option<&str>,
    user_id: Option<&str>,
) -> Result<Vec<EnrollmentOverviewRow>, sqlx::Error> {
    let mut builder = QueryBuilder::<Postgres>::new(
        "SELECT e.id, e.user_id, e.course_id, e.role, e.status, e.enrolled_at, e.final_grade,
                u.email AS student_email,
                CONCAT(u.first_name, ' ', u.last_name) AS student_name,
                c.code AS course_code, c.title AS course_title,
                COUNT(s.id) AS submission_count,
                AVG(s.score) FILTER (WHERE s.status = ",
    );
    builder.push_bind(SubmissionStatus::Graded);
    builder.push(
        ") AS avg_score
         FROM enrollments e
         JOIN users u ON u.id = e.user_id
         JOIN courses c ON c.id = e.course_id
         LEFT JOIN submissions s ON s.enrollment_id = e.id
         WHERE TRUE",
    );

    if let Some(course_id) = course_id {
        builder.push(" AND e.course_id = ");
        builder.push_bind(course_id);
    }
    if let Some(user_id) = user_id {
        builder.push(" AND e.user_id = ");
        builder.push_bind(user_id);
    }

    builder.push(
        " GROUP BY e.id, u.email, u.first_name, u.last_name, c.code, c.title
          ORDER BY e.enrolled_at DESC",
    );

    builder.build_query_as::<EnrollmentOverviewRow>().fetch_all(pool).await
}

pub(crate) async fn find_by_user_and_course(
    pool: &PgPool,
    user_id: &str,
    course_id: &str,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT id FROM enrollments WHERE user_id = $1 AND course_id = $2",
    )
    .bind(user_id)
    .bind(course_id)
    .fetch_optional(pool)
    .await
}

pub(crate) struct CreateEnrollment<'a> {
    pub(crate) id: &'a str,
    pub(crate) user_id: &'a str,
    pub(crate) course_id: &'a str,
    pub(crate) role: EnrollmentRole,
    pub(crate) status: EnrollmentStatus,
    pub(crate) enrolled_at: PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateEnrollment<'_>,
) -> Result<Enrollment, sqlx::Error> {
    sqlx::query_as::<_, Enrollment>(&format!(
        "INSERT INTO enrollments (id, user_id, course_id, role, status, enrolled_at)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.user_id)
    .bind(params.course_id)
    .bind(params.role)
    .bind(params.status)
    .bind(params.enrolled_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn delete_by_id(pool: &PgPool, id: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("DELETE FROM enrollments WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await
}
