//! Application Layer
//!
//! Session policy and the use cases built on it.

pub mod change_password;
pub mod config;
pub mod session_manager;
pub mod sign_in;
pub mod sign_out;

pub use change_password::{ChangePasswordOutput, ChangePasswordUseCase};
pub use config::SessionConfig;
pub use session_manager::SessionManager;
pub use sign_in::{SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
