use serde::{Deserialize, Serialize};
use sqlx::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "accountstatus", rename_all = "UPPERCASE")]
pub(crate) enum AccountStatus {
    Active,
    Suspended,
    Deactivated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "coursestatus", rename_all = "UPPERCASE")]
pub(crate) enum CourseStatus {
    Draft,
    Published,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "difficultylevel", rename_all = "UPPERCASE")]
pub(crate) enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "lecturetype", rename_all = "UPPERCASE")]
pub(crate) enum LectureType {
    Video,
    Reading,
    Assignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "enrollmentrole", rename_all = "UPPERCASE")]
pub(crate) enum EnrollmentRole {
    Student,
    Ta,
    Instructor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "enrollmentstatus", rename_all = "UPPERCASE")]
pub(crate) enum EnrollmentStatus {
    Active,
    Completed,
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "submissionstatus", rename_all = "UPPERCASE")]
pub(crate) enum SubmissionStatus {
    Submitted,
    Grading,
    Graded,
    Draft,
    Returned,
}

impl SubmissionStatus {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Grading => "GRADING",
            Self::Graded => "GRADED",
            Self::Draft => "DRAFT",
            Self::Returned => "RETURNED",
        }
    }

    /// Only freshly submitted or in-progress submissions accept a grade.
    pub(crate) fn is_gradable(self) -> bool {
        matches!(self, Self::Submitted | Self::Grading)
    }
}

#[cfg(test)]
mod tests {
    use super::SubmissionStatus;

    #[test]
    fn gradable_statuses() {
        assert!(SubmissionStatus::Submitted.is_gradable());
        assert!(SubmissionStatus::Grading.is_gradable());
        assert!(!SubmissionStatus::Graded.is_gradable());
        assert!(!SubmissionStatus::Draft.is_gradable());
        assert!(!SubmissionStatus::Returned.is_gradable());
    }
}
