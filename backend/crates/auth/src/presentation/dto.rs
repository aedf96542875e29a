//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::account::PreferencesPatch;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request (student and faculty variants share the shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Accepted for wire compatibility but ignored; signup always seeds
    /// the default preferences.
    #[serde(default)]
    pub preferences: Option<PreferencesPatch>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub account_id: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign in response
///
/// Never carries the password hash or internal record ids.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub first_name: String,
    pub last_name: String,
    pub session_token: String,
    pub ui_theme: String,
    pub editor_theme: String,
    pub wants_email_notifications: bool,
    pub is_student: bool,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_student: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
}

impl SessionStatusResponse {
    /// The unauthenticated shape
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            account_id: None,
            is_student: None,
            student_id: None,
            faculty_id: None,
        }
    }
}

// ============================================================================
// Profile Update
// ============================================================================

/// Sparse profile update request
///
/// Absent fields are left untouched; the password pair only applies when
/// both halves are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    pub preferences: Option<PreferencesPatch>,
}
