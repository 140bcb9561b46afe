pub mod dashboard;
pub mod reset_password;
