use serde::Serialize;

use crate::db::types::AccountStatus;
use crate::repositories::users::StudentOverviewRow;

#[derive(Debug, Serialize)]
pub(crate) struct StudentOverviewResponse {
    pub(crate) user_id: String,
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

impl From<StudentOverviewRow> for StudentOverviewResponse {
    fn from(row: StudentOverviewRow) -> Self {
        Self {
            user_id: row.id,
            email: row.email,
            full_name: row.full_name,
            first_name: row.first_name,
            last_name: row.last_name,
            account_status: row.account_status,
            total_submissions: row.total_submissions,
            graded_count: row.graded_count,
            pending_count: row.pending_count,
            avg_score: row.avg_score,
            late_count: row.late_count,
            enrolled_courses: row.enrolled_courses,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StudentListResponse {
    pub(crate) students: Vec<StudentOverviewResponse>,
}
