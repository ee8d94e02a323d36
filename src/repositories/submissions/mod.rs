mod commands;
mod filters;
mod queries;
mod types;

pub(crate) use commands::{apply_grade, ApplyGrade};
pub(crate) use filters::SubmissionFilters;
pub(crate) use queries::{count, find_detail, find_for_grading, find_status, list, stats};
pub(crate) use types::{SubmissionDetailRow, SubmissionListRow, SubmissionStatsRow};
