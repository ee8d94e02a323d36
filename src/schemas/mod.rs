use std::collections::HashMap;

use serde::Serialize;

pub(crate) mod course;
pub(crate) mod enrollment;
pub(crate) mod lecture;
pub(crate) mod module;
pub(crate) mod student;
pub(crate) mod submission;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) service: String,
    pub(crate) status: String,
    pub(crate) components: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RootResponse {
    pub(crate) message: String,
    pub(crate) version: String,
    pub(crate) api_prefix: String,
}
