//! API DTOs (Data Transfer Objects)

use kernel::id::{ClassId, FacultyId, StudentId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insert class request (faculty only)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertClassRequest {
    /// Faculty id of the creator
    pub entity_id: FacultyId,
    pub is_student: bool,
    pub name: String,
}

/// Insert class response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertClassResponse {
    /// Join code handed out to students
    pub code: String,
}

/// Join class request (students only)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinClassRequest {
    /// Student id of the joiner
    pub entity_id: StudentId,
    pub code: String,
    pub is_student: bool,
}

/// Rename class request (owning faculty only)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameClassRequest {
    pub id: ClassId,
    /// Faculty id of the caller
    pub entity_id: FacultyId,
    pub is_student: bool,
    pub new_name: String,
}

/// Query for member listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersQuery {
    pub id: ClassId,
}

/// Member listing response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersResponse {
    pub student_ids: Vec<StudentId>,
}

/// Query for per-entity class listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassesQuery {
    /// Student or faculty id, per `is_student`
    pub entity_id: Uuid,
    pub is_student: bool,
}
