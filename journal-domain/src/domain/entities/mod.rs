pub mod common;
pub mod doctor;
pub mod employee;
pub mod patient;
pub mod user;

pub use common::*;
pub use doctor::*;
pub use employee::*;
pub use patient::*;
pub use user::*;
