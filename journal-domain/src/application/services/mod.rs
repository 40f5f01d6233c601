pub mod doctor_service;
pub mod employee_service;
pub mod patient_service;
pub mod user_service;

pub use doctor_service::*;
pub use employee_service::*;
pub use patient_service::*;
pub use user_service::*;
