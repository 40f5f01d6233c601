pub mod accounts;
pub mod doctors;
pub mod employees;
pub mod health;
pub mod patients;
