use serde::{Deserialize, Serialize};
use validator::Validate;

pub(crate) use crate::core::time::format_primitive;
use crate::db::types::SubmissionStatus;
use crate::repositories::submissions::{
    SubmissionDetailRow, SubmissionListRow, SubmissionStatsRow,
};

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionListItem {
    pub(crate) id: String,
    pub(crate) submission_number: i32,
    pub(crate) submitted_at: String,
    pub(crate) content: Option<String>,
    pub(crate) is_late: bool,
    pub(crate) days_late: i32,
    pub(crate) status: SubmissionStatus,
    pub(crate) auto_score: Option<f64>,
    pub(crate) manual_score: Option<f64>,
    pub(crate) score: Option<f64>,
    pub(crate) penalty_applied: f64,
    pub(crate) feedback: Option<String>,
    pub(crate) graded_at: Option<String>,
    pub(crate) student_id: String,
    pub(crate) student_email: String,
    pub(crate) student_name: String,
    pub(crate) assignment_id: String,
    pub(crate) assignment_title: String,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<String>,
    pub(crate) module_id: String,
    pub(crate) module_title: String,
    pub(crate) course_id: String,
    pub(crate) course_code: String,
    pub(crate) course_title: String,
    pub(crate) graded_by_name: Option<String>,
}

impl From<SubmissionListRow> for SubmissionListItem {
    fn from(row: SubmissionListRow) -> Self {
        Self {
            id: row.id,
            submission_number: row.submission_number,
            submitted_at: format_primitive(row.submitted_at),
            content: row.content,
            is_late: row.is_late,
            days_late: row.days_late,
            status: row.status,
            auto_score: row.auto_score,
            manual_score: row.manual_score,
            score: row.score,
            penalty_applied: row.penalty_applied,
            feedback: row.feedback,
            graded_at: row.graded_at.map(format_primitive),
            student_id: row.student_id,
            student_email: row.student_email,
            student_name: row.student_name,
            assignment_id: row.assignment_id,
            assignment_title: row.assignment_title,
            max_points: row.max_points,
            due_date: row.due_date.map(format_primitive),
            module_id: row.module_id,
            module_title: row.module_title,
            course_id: row.course_id,
            course_code: row.course_code,
            course_title: row.course_title,
            graded_by_name: row.graded_by_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionDetail {
    pub(crate) id: String,
    pub(crate) submission_number: i32,
    pub(crate) submitted_at: String,
    pub(crate) content: Option<String>,
    pub(crate) code_submission: Option<String>,
    pub(crate) file_urls: Option<serde_json::Value>,
    pub(crate) is_late: bool,
    pub(crate) days_late: i32,
    pub(crate) status: SubmissionStatus,
    pub(crate) auto_score: Option<f64>,
    pub(crate) manual_score: Option<f64>,
    pub(crate) score: Option<f64>,
    pub(crate) penalty_applied: f64,
    pub(crate) rubric_scores: Option<serde_json::Value>,
    pub(crate) feedback: Option<String>,
    pub(crate) graded_at: Option<String>,
    pub(crate) graded_by: Option<String>,
    pub(crate) graded_by_name: Option<String>,
    pub(crate) student_id: String,
    pub(crate) student_email: String,
    pub(crate) student_name: String,
    pub(crate) assignment_id: String,
    pub(crate) assignment_title: String,
    pub(crate) assignment_description: Option<String>,
    pub(crate) assignment_instructions: Option<String>,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<String>,
    pub(crate) late_submission_allowed: bool,
    pub(crate) late_penalty_percent: f64,
    pub(crate) module_id: String,
    pub(crate) module_title: String,
    pub(crate) course_id: String,
    pub(crate) course_code: String,
    pub(crate) course_title: String,
    pub(crate) course_description: Option<String>,
}

impl From<SubmissionDetailRow> for SubmissionDetail {
    fn from(row: SubmissionDetailRow) -> Self {
        Self {
            id: row.id,
            submission_number: row.submission_number,
            submitted_at: format_primitive(row.submitted_at),
            content: row.content,
            code_submission: row.code_submission,
            file_urls: row.file_urls.map(|value| value.0),
            is_late: row.is_late,
            days_late: row.days_late,
            status: row.status,
            auto_score: row.auto_score,
            manual_score: row.manual_score,
            score: row.score,
            penalty_applied: row.penalty_applied,
            rubric_scores: row.rubric_scores.map(|value| value.0),
            feedback: row.feedback,
            graded_at: row.graded_at.map(format_primitive),
            graded_by: row.graded_by,
            graded_by_name: row.graded_by_name,
            student_id: row.student_id,
            student_email: row.student_email,
            student_name: row.student_name,
            assignment_id: row.assignment_id,
            assignment_title: row.assignment_title,
            assignment_description: row.assignment_description,
            assignment_instructions: row.assignment_instructions,
            max_points: row.max_points,
            due_date: row.due_date.map(format_primitive),
            late_submission_allowed: row.late_submission_allowed,
            late_penalty_percent: row.late_penalty_percent,
            module_id: row.module_id,
            module_title: row.module_title,
            course_id: row.course_id,
            course_code: row.course_code,
            course_title: row.course_title,
            course_description: row.course_description,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionListResponse {
    pub(crate) total: i64,
    pub(crate) submissions: Vec<SubmissionListItem>,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct GradeSubmissionRequest {
    #[validate(range(min = 0.0, message = "manual_score must be non-negative"))]
    pub(crate) manual_score: f64,
    pub(crate) feedback: Option<String>,
    pub(crate) rubric_scores: Option<serde_json::Value>,
    #[validate(length(min = 1, message = "graded_by must not be empty"))]
    pub(crate) graded_by: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionStats {
    pub(crate) total_submissions: i64,
    pub(crate) submitted: i64,
    pub(crate) graded: i64,
    pub(crate) pending: i64,
    pub(crate) average_score: Option<f64>,
    pub(crate) late_submissions: i64,
    pub(crate) on_time_submissions: i64,
}

impl From<SubmissionStatsRow> for SubmissionStats {
    fn from(row: SubmissionStatsRow) -> Self {
        Self {
            total_submissions: row.total_submissions,
            submitted: row.submitted,
            graded: row.graded,
            pending: row.pending,
            average_score: row.average_score,
            late_submissions: row.late_submissions,
            on_time_submissions: row.on_time_submissions,
        }
    }
}
