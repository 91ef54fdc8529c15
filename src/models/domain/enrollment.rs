use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::domain::course::CourseId;
use crate::models::domain::user::UserId;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Enrollment {
    pub student_id: UserId,
    pub course_id: CourseId,
    pub enrolled_at: u64,
    pub completed_lessons: BTreeSet<String>,
    pub progress_percentage: u32, // derived, never set by callers
    pub completed: bool,          // derived, true iff progress is 100
    pub certificate_issued: bool,
}

impl Enrollment {
    pub fn new(student_id: &str, course_id: &str, enrolled_at: u64) -> Self {
        Enrollment {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
            enrolled_at,
            completed_lessons: BTreeSet::new(),
            progress_percentage: 0,
            completed: false,
            certificate_issued: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_starts_empty() {
        let enrollment = Enrollment::new("s-1", "c-1", 5);
        assert_eq!(enrollment.enrolled_at, 5);
        assert!(enrollment.completed_lessons.is_empty());
        assert_eq!(enrollment.progress_percentage, 0);
        assert!(!enrollment.completed);
        assert!(!enrollment.certificate_issued);
    }

    #[test]
    fn completed_lessons_behave_as_a_set() {
        let mut enrollment = Enrollment::new("s-1", "c-1", 5);
        enrollment.completed_lessons.insert("l-1".to_string());
        enrollment.completed_lessons.insert("l-1".to_string());
        assert_eq!(enrollment.completed_lessons.len(), 1);
    }
}
