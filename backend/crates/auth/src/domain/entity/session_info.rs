//! Session Info Entity
//!
//! The ephemeral payload stored against a session token at login and
//! read back on every authenticated request. Lives only in the session
//! store; no durability across store restarts.

use kernel::id::{AccountId, FacultyId, StudentId};
use serde::{Deserialize, Serialize};

/// Authenticated-session payload
///
/// Exactly one of `student_id`/`faculty_id` is set, matching the
/// `is_student` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub account_id: AccountId,
    pub is_student: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<FacultyId>,
}

impl SessionInfo {
    /// Session payload for a student account
    pub fn for_student(account_id: AccountId, student_id: StudentId) -> Self {
        Self {
            account_id,
            is_student: true,
            student_id: Some(student_id),
            faculty_id: None,
        }
    }

    /// Session payload for a faculty account
    pub fn for_faculty(account_id: AccountId, faculty_id: FacultyId) -> Self {
        Self {
            account_id,
            is_student: false,
            student_id: None,
            faculty_id: Some(faculty_id),
        }
    }
}
