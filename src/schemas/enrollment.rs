use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::Enrollment;
use crate::db::types::{EnrollmentRole, EnrollmentStatus};
use crate::repositories::enrollments::EnrollmentOverviewRow;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct EnrollmentCreate {
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub(crate) user_id: String,
    #[validate(length(min = 1, message = "course_id must not be empty"))]
    pub(crate) course_id: String,
    #[serde(default = "default_role")]
    pub(crate) role: EnrollmentRole,
}

#[derive(Debug, Serialize)]
pub(crate) struct EnrollmentResponse {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) course_id: String,
    pub(crate) role: EnrollmentRole,
    pub(crate) status: EnrollmentStatus,
    pub(crate) enrolled_at: String,
    pub(crate) final_grade: Option<f64>,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            user_id: enrollment.user_id,
            course_id: enrollment.course_id,
            role: enrollment.role,
            status: enrollment.status,
            enrolled_at: format_primitive(enrollment.enrolled_at),
            final_grade: enrollment.final_grade,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EnrollmentOverviewResponse {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) course_id: String,
    pub(crate) role: EnrollmentRole,
    pub(crate) status: EnrollmentStatus,
    pub(crate) enrolled_at: String,
    pub(crate) final_grade: Option<f64>,
    pub(crate) student_email: String,
    pub(crate) student_name: String,
    pub(crate) course_code: String,
    pub(crate) course_title: String,
    pub(crate) submission_count: i64,
    pub(crate) avg_score: Option<f64>,
}

impl From<EnrollmentOverviewRow> for EnrollmentOverviewResponse {
    fn from(row: EnrollmentOverviewRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            course_id: row.course_id,
            role: row.role,
            status: row.status,
            enrolled_at: format_primitive(row.enrolled_at),
            final_grade: row.final_grade,
            student_email: row.student_email,
            student_name: row.student_name,
            course_code: row.course_code,
            course_title: row.course_title,
            submission_count: row.submission_count,
            avg_score: row.avg_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EnrollmentListResponse {
    pub(crate) enrollments: Vec<EnrollmentOverviewResponse>,
}

fn default_role() -> EnrollmentRole {
    EnrollmentRole::Student
}
