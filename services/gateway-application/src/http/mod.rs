pub mod health_check_controller;
pub mod model;
pub mod router;
