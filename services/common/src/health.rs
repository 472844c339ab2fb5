// Health check models

/// Liveness payload answered by a processor: the HTTP layer is up and serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct HealthStatus {
    code: i32,
    message: &'static str,
}

impl HealthStatus {
    pub const SUCCESS_CODE: i32 = 0;
    pub const SUCCESS_MESSAGE: &'static str = "success";

    pub const fn success() -> Self {
        Self {
            code: Self::SUCCESS_CODE,
            message: Self::SUCCESS_MESSAGE,
        }
    }

    pub const fn code(&self) -> i32 {
        self.code
    }

    pub const fn message(&self) -> &'static str {
        self.message
    }
}
