pub mod health_check_controller;
pub mod router;
