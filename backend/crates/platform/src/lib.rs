//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (CSPRNG, SHA-256, Base64)
//! - Salted password hashing (Argon2id plus a per-password numeric salt)
//! - Cookie header handling

pub mod cookie;
pub mod crypto;
pub mod password;
