use serde::{Deserialize, Serialize};

pub type UserId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum UserRole {
    Student,
    Teacher,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
    pub bio: String,
    pub profile_photo: String,
    pub created_at: u64,
}

impl User {
    pub fn new(
        id: &str,
        name: &str,
        role: UserRole,
        bio: &str,
        profile_photo: &str,
        created_at: u64,
    ) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            role,
            bio: bio.to_string(),
            profile_photo: profile_photo.to_string(),
            created_at,
        }
    }

    pub fn is_teacher(&self) -> bool {
        matches!(self.role, UserRole::Teacher)
    }

    pub fn is_student(&self) -> bool {
        matches!(self.role, UserRole::Student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("caller-1", "Ada", UserRole::Teacher, "bio", "", 42);
        assert_eq!(user.id, "caller-1");
        assert_eq!(user.name, "Ada");
        assert!(user.is_teacher());
        assert!(!user.is_student());
        assert_eq!(user.created_at, 42);
    }

    #[test]
    fn user_role_round_trip_serialization() {
        for role in [UserRole::Student, UserRole::Teacher] {
            let json = serde_json::to_string(&role).expect("role should serialize");
            let parsed: UserRole = serde_json::from_str(&json).expect("role should deserialize");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn user_role_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<UserRole>("\"Admin\"");
        assert!(parsed.is_err());
    }
}
