use sqlx::types::Json;
use time::PrimitiveDateTime;

use crate::db::types::SubmissionStatus;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SubmissionListRow {
    pub(crate) id: String,
    pub(crate) submission_number: i32,
    pub(crate) submitted_at: PrimitiveDateTime,
    pub(crate) content: Option<String>,
    pub(crate) is_late: bool,
    pub(crate) days_late: i32,
    pub(crate) status: SubmissionStatus,
    pub(crate) auto_score: Option<f64>,
    pub(crate) manual_score: Option<f64>,
    pub(crate) score: Option<f64>,
    pub(crate) penalty_applied: f64,
    pub(crate) feedback: Option<String>,
    pub(crate) graded_at: Option<PrimitiveDateTime>,
    pub(crate) student_id: String,
    pub(crate) student_email: String,
    pub(crate) student_name: String,
    pub(crate) assignment_id: String,
    pub(crate) assignment_title: String,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<PrimitiveDateTime>,
    pub(crate) module_id: String,
    pub(crate) module_title: String,
    pub(crate) course_id: String,
    pub(crate) course_code: String,
    pub(crate) course_title: String,
    pub(crate) graded_by_name: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SubmissionDetailRow {
    pub(crate) id: String,
    pub(crate) submission_number: i32,
    pub(crate) submitted_at: PrimitiveDateTime,
    pub(crate) content: Option<String>,
    pub(crate) code_submission: Option<String>,
    pub(crate) file_urls: Option<Json<serde_json::Value>>,
    pub(crate) is_late: bool,
    pub(crate) days_late: i32,
    pub(crate) status: SubmissionStatus,
    pub(crate) auto_score: Option<f64>,
    pub(crate) manual_score: Option<f64>,
    pub(crate) score: Option<f64>,
    pub(crate) penalty_applied: f64,
    pub(crate) rubric_scores: Option<Json<serde_json::Value>>,
    pub(crate) feedback: Option<String>,
    pub(crate) graded_at: Option<PrimitiveDateTime>,
    pub(crate) graded_by: Option<String>,
    pub(crate) student_id: String,
    pub(crate) student_email: String,
    pub(crate) student_name: String,
    pub(crate) assignment_id: String,
    pub(crate) assignment_title: String,
    pub(crate) assignment_description: Option<String>,
    pub(crate) assignment_instructions: Option<String>,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<PrimitiveDateTime>,
    pub(crate) late_submission_allowed: bool,
    pub(crate) late_penalty_percent: f64,
    pub(crate) module_id: String,
    pub(crate) module_title: String,
    pub(crate) course_id: String,
    pub(crate) course_code: String,
    pub(crate) course_title: String,
    pub(crate) course_description: Option<String>,
    pub(crate) graded_by_name: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct GradingRow {
    pub(crate) status: SubmissionStatus,
    pub(crate) auto_score: Option<f64>,
    pub(crate) penalty_applied: f64,
    pub(crate) max_points: Option<f64>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SubmissionStatsRow {
    pub(crate) total_submissions: i64,
    pub(crate) submitted: i64,
    pub(crate) graded: i64,
    pub(crate) pending: i64,
    pub(crate) average_score: Option<f64>,
    pub(crate) late_submissions: i64,
    pub(crate) on_time_submissions: i64,
}
