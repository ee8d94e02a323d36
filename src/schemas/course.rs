use serde::{Deserialize, Serialize};
use validator::Validate;

pub(crate) use crate::core::time::format_primitive;
use crate::db::models::Course;
use crate::db::types::{CourseStatus, DifficultyLevel};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CourseCreate {
    #[validate(length(min = 2, max = 50, message = "code must be 2-50 characters"))]
    pub(crate) code: String,
    #[validate(length(min = 3, max = 200, message = "title must be 3-200 characters"))]
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    #[validate(length(max = 500))]
    pub(crate) short_description: Option<String>,
    #[validate(length(max = 500))]
    pub(crate) thumbnail_url: Option<String>,
    #[validate(length(max = 100))]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) difficulty_level: Option<DifficultyLevel>,
    #[validate(range(min = 0.0, message = "estimated_hours must be non-negative"))]
    pub(crate) estimated_hours: Option<f64>,
    #[serde(default)]
    pub(crate) status: Option<CourseStatus>,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CourseUpdate {
    #[validate(length(min = 2, max = 50, message = "code must be 2-50 characters"))]
    pub(crate) code: Option<String>,
    #[validate(length(min = 3, max = 200, message = "title must be 3-200 characters"))]
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    #[validate(length(max = 500))]
    pub(crate) short_description: Option<String>,
    #[validate(length(max = 500))]
    pub(crate) thumbnail_url: Option<String>,
    #[validate(length(max = 100))]
    pub(crate) category: Option<String>,
    pub(crate) difficulty_level: Option<DifficultyLevel>,
    #[validate(range(min = 0.0, message = "estimated_hours must be non-negative"))]
    pub(crate) estimated_hours: Option<f64>,
    pub(crate) status: Option<CourseStatus>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CourseResponse {
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
    pub(crate) published_at: Option<String>,
    pub(crate) created_by: Option<String>,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            code: course.code,
            title: course.title,
            description: course.description,
            short_description: course.short_description,
            thumbnail_url: course.thumbnail_url,
            category: course.category,
            difficulty_level: course.difficulty_level,
            estimated_hours: course.estimated_hours,
            status: course.status,
            published_at: course.published_at.map(format_primitive),
            created_by: course.created_by,
            created_at: format_primitive(course.created_at),
            updated_at: format_primitive(course.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CourseListResponse {
    pub(crate) total: i64,
    pub(crate) courses: Vec<CourseResponse>,
}
