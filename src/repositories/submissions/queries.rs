use sqlx::{Arguments, PgPool};

use crate::db::types::{LectureType, SubmissionStatus};

use super::filters::SubmissionFilters;
use super::types::{GradingRow, SubmissionDetailRow, SubmissionListRow, SubmissionStatsRow};

const JOINS: &str = "\
    FROM submissions s
    JOIN users u ON u.id = s.user_id
    JOIN lectures l ON l.id = s.lecture_id
    JOIN modules m ON m.id = l.module_id
    JOIN courses c ON c.id = m.course_id
    LEFT JOIN users grader ON grader.id = s.graded_by";

const LIST_COLUMNS: &str = "\
    s.id, s.submission_number, s.submitted_at, s.content, s.is_late, s.days_late, s.status, \
    s.auto_score, s.manual_score, s.score, s.penalty_applied, s.feedback, s.graded_at, \
    u.id AS student_id, u.email AS student_email, \
    CONCAT(u.first_name, ' ', u.last_name) AS student_name, \
    l.id AS assignment_id, l.title AS assignment_title, l.max_points, l.due_date, \
    m.id AS module_id, m.title AS module_title, \
    c.id AS course_id, c.code AS course_code, c.title AS course_title, \
    CASE WHEN grader.id IS NULL THEN NULL \
         ELSE CONCAT(grader.first_name, ' ', grader.last_name) END AS graded_by_name";

const DETAIL_COLUMNS: &str = "\
    s.id, s.submission_number, s.submitted_at, s.content, s.code_submission, s.file_urls, \
    s.is_late, s.days_late, s.status, s.auto_score, s.manual_score, s.score, \
    s.penalty_applied, s.rubric_scores, s.feedback, s.graded_at, s.graded_by, \
    u.id AS student_id, u.email AS student_email, \
    CONCAT(u.first_name, ' ', u.last_name) AS student_name, \
    l.id AS assignment_id, l.title AS assignment_title, \
    l.description AS assignment_description, l.instructions AS assignment_instructions, \
    l.max_points, l.due_date, l.late_submission_allowed, l.late_penalty_percent, \
    m.id AS module_id, m.title AS module_title, \
    c.id AS course_id, c.code AS course_code, c.title AS course_title, \
    c.description AS course_description, \
    CASE WHEN grader.id IS NULL THEN NULL \
         ELSE CONCAT(grader.first_name, ' ', grader.last_name) END AS graded_by_name";

pub(crate) async fn count(
    pool: &PgPool,
    filters: &SubmissionFilters,
) -> Result<i64, sqlx::Error> {
    let predicate = filters.predicate();
    let sql = format!("SELECT COUNT(*) {JOINS} {}", predicate.where_clause());
    let arguments = predicate.arguments()?;

    sqlx::query_scalar_with::<_, i64, _>(&sql, arguments).fetch_one(pool).await
}

pub(crate) async fn list(
    pool: &PgPool,
    filters: &SubmissionFilters,
    limit: i64,
    offset: i64,
) -> Result<Vec<SubmissionListRow>, sqlx::Error> {
    let predicate = filters.predicate();
    let limit_placeholder = predicate.next_placeholder();
    let offset_placeholder = limit_placeholder + 1;
    let sql = format!(
        "SELECT {LIST_COLUMNS} {JOINS} {} \
         ORDER BY s.submitted_at DESC \
         LIMIT ${limit_placeholder} OFFSET ${offset_placeholder}",
        predicate.where_clause()
    );

    let mut arguments = predicate.arguments()?;
    arguments.add(limit).map_err(sqlx::Error::Encode)?;
    arguments.add(offset).map_err(sqlx::Error::Encode)?;

    sqlx::query_as_with::<_, SubmissionListRow, _>(&sql, arguments).fetch_all(pool).await
}

pub(crate) async fn find_detail(
    pool: &PgPool,
    submission_id: &str,
) -> Result<Option<SubmissionDetailRow>, sqlx::Error> {
    let sql = format!("SELECT {DETAIL_COLUMNS} {JOINS} WHERE s.id = $1 AND l.type = $2");

    sqlx::query_as::<_, SubmissionDetailRow>(&sql)
        .bind(submission_id)
        .bind(LectureType::Assignment)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn stats(
    pool: &PgPool,
    filters: &SubmissionFilters,
) -> Result<SubmissionStatsRow, sqlx::Error> {
    let predicate = filters.predicate();
    let submitted_placeholder = predicate.next_placeholder();
    let graded_placeholder = submitted_placeholder + 1;
    let grading_placeholder = graded_placeholder + 1;
    let sql = format!(
        "SELECT COUNT(*) AS total_submissions, \
                COUNT(*) FILTER (WHERE s.status = ${submitted_placeholder}) AS submitted, \
                COUNT(*) FILTER (WHERE s.status = ${graded_placeholder}) AS graded, \
                COUNT(*) FILTER (WHERE s.status IN (${submitted_placeholder}, ${grading_placeholder})) AS pending, \
                AVG(s.score) FILTER (WHERE s.status = ${graded_placeholder}) AS average_score, \
                COUNT(*) FILTER (WHERE s.is_late) AS late_submissions, \
                COUNT(*) FILTER (WHERE NOT s.is_late) AS on_time_submissions \
         {JOINS} {}",
        predicate.where_clause()
    );

    let mut arguments = predicate.arguments()?;
    arguments.add(SubmissionStatus::Submitted).map_err(sqlx::Error::Encode)?;
    arguments.add(SubmissionStatus::Graded).map_err(sqlx::Error::Encode)?;
    arguments.add(SubmissionStatus::Grading).map_err(sqlx::Error::Encode)?;

    sqlx::query_as_with::<_, SubmissionStatsRow, _>(&sql, arguments).fetch_one(pool).await
}

pub(crate) async fn find_for_grading(
    pool: &PgPool,
    submission_id: &str,
) -> Result<Option<GradingRow>, sqlx::Error> {
    sqlx::query_as::<_, GradingRow>(
        "SELECT s.status, s.auto_score, s.penalty_applied, l.max_points
         FROM submissions s
         JOIN lectures l ON l.id = s.lecture_id
         WHERE s.id = $1
           AND l.type = $2",
    )
    .bind(submission_id)
    .bind(LectureType::Assignment)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn find_status(
    pool: &PgPool,
    submission_id: &str,
) -> Result<Option<SubmissionStatus>, sqlx::Error> {
    sqlx::query_scalar::<_, SubmissionStatus>("SELECT status FROM submissions WHERE id = $1")
        .bind(submission_id)
        .fetch_optional(pool)
        .await
}
