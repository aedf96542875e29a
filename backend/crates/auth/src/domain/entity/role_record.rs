//! Role Record Entities
//!
//! Exactly one role record exists per account, created in the same
//! signup operation as the account itself. The account reference is a
//! relation only; deleting the account does not cascade through here.

use kernel::id::{AccountId, FacultyId, StudentId};

/// Student-specific record
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub student_id: StudentId,
    /// Back-reference to the owning account
    pub account_id: AccountId,
}

impl StudentRecord {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            student_id: StudentId::new(),
            account_id,
        }
    }
}

/// Faculty-specific record
#[derive(Debug, Clone)]
pub struct FacultyRecord {
    pub faculty_id: FacultyId,
    /// Back-reference to the owning account
    pub account_id: AccountId,
}

impl FacultyRecord {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            faculty_id: FacultyId::new(),
            account_id,
        }
    }
}

/// Tagged union over the two role variants
///
/// A record never switches variant after creation.
#[derive(Debug, Clone)]
pub enum RoleRecord {
    Student(StudentRecord),
    Faculty(FacultyRecord),
}

impl RoleRecord {
    pub fn is_student(&self) -> bool {
        matches!(self, RoleRecord::Student(_))
    }

    pub fn account_id(&self) -> &AccountId {
        match self {
            RoleRecord::Student(s) => &s.account_id,
            RoleRecord::Faculty(f) => &f.account_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_reference_their_account() {
        let account_id = AccountId::new();

        let student = RoleRecord::Student(StudentRecord::new(account_id));
        assert!(student.is_student());
        assert_eq!(student.account_id(), &account_id);

        let faculty = RoleRecord::Faculty(FacultyRecord::new(account_id));
        assert!(!faculty.is_student());
        assert_eq!(faculty.account_id(), &account_id);
    }
}
