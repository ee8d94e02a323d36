use sqlx::types::Json;
use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::types::SubmissionStatus;

pub(crate) struct ApplyGrade<'a> {
    pub(crate) manual_score: f64,
    pub(crate) score: f64,
    pub(crate) feedback: Option<&'a str>,
    pub(crate) rubric_scores: Option<&'a serde_json::Value>,
    pub(crate) graded_by: &'a str,
    pub(crate) graded_at: PrimitiveDateTime,
}

/// Status-guarded grade write. Returns false when the row was not in a
/// gradable status at write time, i.e. it changed between read and write.
pub(crate) async fn apply_grade(
    pool: &PgPool,
    submission_id: &str,
    params: ApplyGrade<'_>,
) -> Result<bool, sqlx::Error> {
    let updated = sqlx::query(
        "UPDATE submissions
         SET manual_score = $1,
             score = $2,
             feedback = $3,
             rubric_scores = $4,
             status = $5,
             graded_at = $6,
             graded_by = $7,
             updated_at = $6
         WHERE id = $8
           AND status IN ($9, $10)",
    )
    .bind(params.manual_score)
    .bind(params.score)
    .bind(params.feedback)
    .bind(params.rubric_scores.map(Json))
    .bind(SubmissionStatus::Graded)
    .bind(params.graded_at)
    .bind(params.graded_by)
    .bind(submission_id)
    .bind(SubmissionStatus::Submitted)
    .bind(SubmissionStatus::Grading)
    .execute(pool)
    .await?;

    Ok(updated.rows_affected() > 0)
}
