//! Entity Module

pub mod account;
pub mod role_record;
pub mod session_info;
