use sqlx::PgPool;
use thiserror::Error;

use crate::core::time::primitive_now_utc;
use crate::db::types::SubmissionStatus;
use crate::repositories::submissions::{self, ApplyGrade, SubmissionDetailRow};

/// Assignments created without an explicit ceiling default to 100 points.
const DEFAULT_MAX_POINTS: f64 = 100.0;

#[derive(Debug, Error)]
pub(crate) enum GradingError {
    #[error("Submission {0} not found")]
    NotFound(String),
    #[error("Cannot grade a submission with status '{}'; only SUBMITTED or GRADING can be graded", status.as_str())]
    InvalidState { status: SubmissionStatus },
    #[error("manual_score ({manual_score}) cannot exceed max_points ({max_points})")]
    ScoreExceedsMax { manual_score: f64, max_points: f64 },
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

pub(crate) struct GradeCommand<'a> {
    pub(crate) manual_score: f64,
    pub(crate) feedback: Option<&'a str>,
    pub(crate) rubric_scores: Option<&'a serde_json::Value>,
    pub(crate) graded_by: &'a str,
}

/// Moves a submission from SUBMITTED or GRADING to GRADED. Steps 1-3 are pure
/// reads; the single write is guarded on the expected prior status so two
/// concurrent graders cannot both win.
pub(crate) async fn grade_submission(
    pool: &PgPool,
    submission_id: &str,
    command: GradeCommand<'_>,
) -> Result<SubmissionDetailRow, GradingError> {
    let Some(current) = submissions::find_for_grading(pool, submission_id).await? else {
        return Err(GradingError::NotFound(submission_id.to_string()));
    };

    check_gradable(current.status)?;

    let max_points = current.max_points.unwrap_or(DEFAULT_MAX_POINTS);
    check_ceiling(command.manual_score, max_points)?;

    let score = final_score(current.auto_score, command.manual_score, current.penalty_applied);
    let now = primitive_now_utc();

    let updated = submissions::apply_grade(
        pool,
        submission_id,
        ApplyGrade {
            manual_score: command.manual_score,
            score,
            feedback: command.feedback,
            rubric_scores: command.rubric_scores,
            graded_by: command.graded_by,
            graded_at: now,
        },
    )
    .await?;

    if !updated {
        // The row left the gradable set between our read and the write.
        return match submissions::find_status(pool, submission_id).await? {
            Some(status) => Err(GradingError::InvalidState { status }),
            None => Err(GradingError::NotFound(submission_id.to_string())),
        };
    }

    metrics::counter!("submissions_graded_total").increment(1);
    tracing::info!(
        submission_id = %submission_id,
        graded_by = %command.graded_by,
        score = score,
        "Submission graded"
    );

    match submissions::find_detail(pool, submission_id).await? {
        Some(detail) => Ok(detail),
        None => Err(GradingError::NotFound(submission_id.to_string())),
    }
}

fn check_gradable(status: SubmissionStatus) -> Result<(), GradingError> {
    if status.is_gradable() {
        Ok(())
    } else {
        Err(GradingError::InvalidState { status })
    }
}

fn check_ceiling(manual_score: f64, max_points: f64) -> Result<(), GradingError> {
    if manual_score > max_points {
        Err(GradingError::ScoreExceedsMax { manual_score, max_points })
    } else {
        Ok(())
    }
}

/// Manual grading augments any automated pre-score and subtracts any
/// previously applied lateness penalty, never going negative.
pub(crate) fn final_score(auto_score: Option<f64>, manual_score: f64, penalty_applied: f64) -> f64 {
    (auto_score.unwrap_or(0.0) + manual_score - penalty_applied).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_score_adds_auto_and_manual_minus_penalty() {
        assert_eq!(final_score(Some(10.0), 5.0, 3.0), 12.0);
    }

    #[test]
    fn final_score_defaults_missing_auto_score_to_zero() {
        assert_eq!(final_score(None, 40.0, 0.0), 40.0);
    }

    #[test]
    fn final_score_is_floored_at_zero() {
        assert_eq!(final_score(Some(10.0), 5.0, 20.0), 0.0);
    }

    #[test]
    fn only_submitted_and_grading_pass_the_state_check() {
        assert!(check_gradable(SubmissionStatus::Submitted).is_ok());
        assert!(check_gradable(SubmissionStatus::Grading).is_ok());

        for status in
            [SubmissionStatus::Graded, SubmissionStatus::Draft, SubmissionStatus::Returned]
        {
            assert!(matches!(
                check_gradable(status),
                Err(GradingError::InvalidState { status: rejected }) if rejected == status
            ));
        }
    }

    #[test]
    fn manual_score_equal_to_ceiling_is_accepted() {
        assert!(check_ceiling(100.0, 100.0).is_ok());
    }

    #[test]
    fn manual_score_above_ceiling_is_rejected() {
        assert!(matches!(
            check_ceiling(100.5, 100.0),
            Err(GradingError::ScoreExceedsMax { .. })
        ));
    }
}
