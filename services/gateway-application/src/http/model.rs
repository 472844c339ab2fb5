// Health check models

use crate::processor::model::ModuleStatus;

#[derive(Debug, serde::Serialize)]
pub struct ModuleHealthResponse {
    module: String,
    data: ModuleStatus,
}

impl ModuleHealthResponse {
    pub fn new(module: impl Into<String>, data: ModuleStatus) -> Self {
        Self {
            module: module.into(),
            data,
        }
    }
}

/// The gateway is up whenever it answers, so `code` is always 0; processor states live in `data`.
#[derive(Debug, serde::Serialize)]
pub struct AggregatedHealthResponse {
    code: i32,
    data: Vec<ModuleHealthResponse>,
}

impl AggregatedHealthResponse {
    const SUCCESS_CODE: i32 = 0;

    pub const fn new(data: Vec<ModuleHealthResponse>) -> Self {
        Self {
            code: Self::SUCCESS_CODE,
            data,
        }
    }
}
