use sqlx::PgPool;

use crate::db::types::{AccountStatus, EnrollmentRole, SubmissionStatus};

pub(crate) async fn find_name_by_id(pool: &PgPool, id: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT CONCAT(first_name, ' ', last_name) FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct StudentOverviewRow {
    pub(crate) id: String,
    pub(crate) email: String,
    pub(crate) full_name: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) account_status: AccountStatus,
    pub(crate) total_submissions: i64,
    pub(crate) graded_count: i64,
    pub(crate) pending_count: i64,
    pub(crate) avg_score: Option<f64>,
    pub(crate) late_count: i64,
    pub(crate) enrolled_courses: i64,
}

pub(crate) async fn list_student_overview(
    pool: &PgPool,
) -> Result<Vec<StudentOverviewRow>, sqlx::Error> {
    sqlx::query_as::<_, StudentOverviewRow>(
        "SELECT u.id, u.email,
                CONCAT(u.first_name, ' ', u.last_name) AS full_name,
                u.first_name, u.last_name, u.account_status,
                COUNT(DISTINCT s.id) AS total_submissions,
                COUNT(DISTINCT s.id) FILTER (WHERE s.status = $1) AS graded_count,
                COUNT(DISTINCT s.id) FILTER (WHERE s.status IN ($2, $3)) AS pending_count,
                AVG(s.score) FILTER (WHERE s.status = $1) AS avg_score,
                COUNT(DISTINCT s.id) FILTER (WHERE s.is_late) AS late_count,
                COUNT(DISTINCT e.id) AS enrolled_courses
         FROM users u
         LEFT JOIN submissions s ON s.user_id = u.id
         LEFT JOIN enrollments e ON e.user_id = u.id
         WHERE EXISTS (
             SELECT 1 FROM enrollments se
             WHERE se.user_id = u.id AND se.role = $4
         )
         GROUP BY u.id
         ORDER BY u.last_name, u.first_name",
    )
    .bind(SubmissionStatus::Graded)
    .bind(SubmissionStatus::Submitted)
    .bind(SubmissionStatus::Grading)
    .bind(EnrollmentRole::Student)
    .fetch_all(pool)
    .await
}
