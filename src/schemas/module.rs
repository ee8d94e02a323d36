use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::Module;
use crate::repositories::modules::ModuleOverviewRow;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ModuleCreate {
    #[validate(length(min = 1, message = "course_id must not be empty"))]
    pub(crate) course_id: String,
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    #[serde(default = "default_order_num")]
    pub(crate) order_num: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ModuleUpdate {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) order_num: Option<i32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ModuleResponse {
    pub(crate) id: String,
    pub(crate) course_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) order_num: i32,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl From<Module> for ModuleResponse {
    fn from(module: Module) -> Self {
        Self {
            id: module.id,
            course_id: module.course_id,
            title: module.title,
            description: module.description,
            order_num: module.order_num,
            created_at: format_primitive(module.created_at),
            updated_at: format_primitive(module.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ModuleOverviewResponse {
    pub(crate) id: String,
    pub(crate) course_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) order_num: i32,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
    pub(crate) lecture_count: i64,
    pub(crate) assignment_count: i64,
}

impl From<ModuleOverviewRow> for ModuleOverviewResponse {
    fn from(row: ModuleOverviewRow) -> Self {
        Self {
            id: row.id,
            course_id: row.course_id,
            title: row.title,
            description: row.description,
            order_num: row.order_num,
            created_at: format_primitive(row.created_at),
            updated_at: format_primitive(row.updated_at),
            lecture_count: row.lecture_count,
            assignment_count: row.assignment_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ModuleListResponse {
    pub(crate) modules: Vec<ModuleOverviewResponse>,
}

fn default_order_num() -> i32 {
    1
}
