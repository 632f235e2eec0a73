//! Presentation Layer
//!
//! HTTP header plumbing for the session cookie.

pub mod cookie;
