//! Value Object Module

pub mod credential;
pub mod password_salt;
pub mod session_id;
pub mod session_token;
pub mod user_id;
