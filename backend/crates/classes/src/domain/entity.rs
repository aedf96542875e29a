//! Class Entity

use kernel::id::{ClassId, FacultyId};
use serde::Serialize;

/// Join codes are short enough to read out loud in a classroom.
pub const JOIN_CODE_LENGTH: usize = 6;

/// Class entity
///
/// Owned by one faculty member; students attach through the membership
/// table using the join code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub class_id: ClassId,
    /// Owning faculty member
    pub faculty_id: FacultyId,
    pub name: String,
    /// Random join code handed out to students
    pub code: String,
}

impl Class {
    /// Create a new class with a fresh join code
    pub fn new(faculty_id: FacultyId, name: String) -> Self {
        Self {
            class_id: ClassId::new(),
            faculty_id,
            name,
            code: platform::crypto::random_code(JOIN_CODE_LENGTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_class_generates_join_code() {
        let class = Class::new(FacultyId::new(), "Systems Programming".to_string());
        assert_eq!(class.code.len(), JOIN_CODE_LENGTH);
    }

    #[test]
    fn test_join_codes_differ_between_classes() {
        let faculty_id = FacultyId::new();
        let a = Class::new(faculty_id, "A".to_string());
        let b = Class::new(faculty_id, "B".to_string());
        assert_ne!(a.code, b.code);
    }
}
