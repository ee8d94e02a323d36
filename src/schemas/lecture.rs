use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::Lecture;
use crate::db::types::LectureType;
use crate::repositories::lectures::LectureOverviewRow;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct LectureCreate {
    #[validate(length(min = 1, message = "module_id must not be empty"))]
    pub(crate) module_id: String,
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) instructions: Option<String>,
    #[serde(default = "default_lecture_type", rename = "type")]
    pub(crate) lecture_type: LectureType,
    #[serde(default = "default_order_num")]
    pub(crate) order_num: i32,
    #[validate(range(min = 0.0, message = "max_points must be non-negative"))]
    pub(crate) max_points: Option<f64>,
    #[validate(range(min = 0, message = "due_days must be non-negative"))]
    pub(crate) due_days: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct LectureUpdate {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) instructions: Option<String>,
    pub(crate) order_num: Option<i32>,
    #[validate(range(min = 0.0, message = "max_points must be non-negative"))]
    pub(crate) max_points: Option<f64>,
    #[validate(range(min = 0, message = "due_days must be non-negative"))]
    pub(crate) due_days: Option<i64>,
    pub(crate) late_submission_allowed: Option<bool>,
    #[validate(range(min = 0.0, max = 100.0, message = "late_penalty_percent must be 0-100"))]
    pub(crate) late_penalty_percent: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LectureResponse {
    pub(crate) id: String,
    pub(crate) module_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) instructions: Option<String>,
    #[serde(rename = "type")]
    pub(crate) lecture_type: LectureType,
    pub(crate) order_num: i32,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<String>,
    pub(crate) late_submission_allowed: bool,
    pub(crate) late_penalty_percent: f64,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl From<Lecture> for LectureResponse {
    fn from(lecture: Lecture) -> Self {
        Self {
            id: lecture.id,
            module_id: lecture.module_id,
            title: lecture.title,
            description: lecture.description,
            instructions: lecture.instructions,
            lecture_type: lecture.lecture_type,
            order_num: lecture.order_num,
            max_points: lecture.max_points,
            due_date: lecture.due_date.map(format_primitive),
            late_submission_allowed: lecture.late_submission_allowed,
            late_penalty_percent: lecture.late_penalty_percent,
            created_at: format_primitive(lecture.created_at),
            updated_at: format_primitive(lecture.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LectureOverviewResponse {
    pub(crate) id: String,
    pub(crate) module_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    #[serde(rename = "type")]
    pub(crate) lecture_type: LectureType,
    pub(crate) order_num: i32,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<String>,
    pub(crate) created_at: String,
    pub(crate) submission_count: i64,
}

impl From<LectureOverviewRow> for LectureOverviewResponse {
    fn from(row: LectureOverviewRow) -> Self {
        Self {
            id: row.id,
            module_id: row.module_id,
            title: row.title,
            description: row.description,
            lecture_type: row.lecture_type,
            order_num: row.order_num,
            max_points: row.max_points,
            due_date: row.due_date.map(format_primitive),
            created_at: format_primitive(row.created_at),
            submission_count: row.submission_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LectureListResponse {
    pub(crate) lectures: Vec<LectureOverviewResponse>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssignmentOverviewResponse {
    pub(crate) assignment_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<String>,
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

#[derive(Debug, Serialize)]
pub(crate) struct AssignmentListResponse {
    pub(crate) assignments: Vec<AssignmentOverviewResponse>,
}

fn default_lecture_type() -> LectureType {
    LectureType::Video
}

fn default_order_num() -> i32 {
    1
}
