use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::db::types::{
    CourseStatus, DifficultyLevel, EnrollmentRole, EnrollmentStatus, LectureType,
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Course {
    pub(crate) id: String,
    pub(crate) code: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) short_description: Option<String>,
    pub(crate) thumbnail_url: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) difficulty_level: DifficultyLevel,
    pub(crate) estimated_hours: Option<f64>,
    pub(crate) status: CourseStatus,
    pub(crate) published_at: Option<PrimitiveDateTime>,
    pub(crate) created_by: Option<String>,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Module {
    pub(crate) id: String,
    pub(crate) course_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) order_num: i32,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Lecture {
    pub(crate) id: String,
    pub(crate) module_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) instructions: Option<String>,
    #[sqlx(rename = "type")]
    pub(crate) lecture_type: LectureType,
    pub(crate) order_num: i32,
    pub(crate) max_points: Option<f64>,
    pub(crate) due_date: Option<PrimitiveDateTime>,
    pub(crate) late_submission_allowed: bool,
    pub(crate) late_penalty_percent: f64,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Enrollment {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) course_id: String,
    pub(crate) role: EnrollmentRole,
    pub(crate) status: EnrollmentStatus,
    pub(crate) enrolled_at: PrimitiveDateTime,
    pub(crate) final_grade: Option<f64>,
}
