//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password policy enforcement and bcrypt hashing
//! - Cryptographic utilities (random codes)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
