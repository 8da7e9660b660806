//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id with configurable cost)
//! - Signed token encoding/decoding (JWT)
//! - Cookie management
//! - Credential extraction from request headers
//! - Startup readiness probing

pub mod client;
pub mod cookie;
pub mod password;
pub mod readiness;
pub mod token;
