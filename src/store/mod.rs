use std::collections::HashMap;

use crate::models::domain::{
    Certificate, Course, Discussion, Enrollment, Quiz, QuizAttempt, User,
};

/// Composite key for enrollment-shaped records: one per (student, course).
pub type EnrollmentKey = (String, String);

/// The single owner of all persistent entities. Pure data access; every
/// business rule lives in the services that call into it.
#[derive(Default)]
pub struct EntityStore {
    users: HashMap<String, User>,
    courses: HashMap<String, Course>,
    course_order: Vec<String>, // creation order, for stable listings
    quizzes: HashMap<String, Quiz>,
    enrollments: HashMap<EnrollmentKey, Enrollment>,
    quiz_attempts: Vec<QuizAttempt>, // append-only history
    discussions: HashMap<String, Discussion>,
    certificates: Vec<Certificate>, // append-only, at most one per (student, course)
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Users

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    // Courses

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn course_mut(&mut self, id: &str) -> Option<&mut Course> {
        self.courses.get_mut(id)
    }

    pub fn insert_course(&mut self, course: Course) {
        self.course_order.push(course.id.clone());
        self.courses.insert(course.id.clone(), course);
    }

    /// All courses in creation order.
    pub fn all_courses(&self) -> Vec<Course> {
        self.course_order
            .iter()
            .filter_map(|id| self.courses.get(id))
            .cloned()
            .collect()
    }

    // Quizzes

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.get(id)
    }

    pub fn insert_quiz(&mut self, quiz: Quiz) {
        self.quizzes.insert(quiz.id.clone(), quiz);
    }

    // Enrollments

    pub fn enrollment(&self, student_id: &str, course_id: &str) -> Option<&Enrollment> {
        self.enrollments
            .get(&(student_id.to_string(), course_id.to_string()))
    }

    pub fn enrollment_mut(&mut self, student_id: &str, course_id: &str) -> Option<&mut Enrollment> {
        self.enrollments
            .get_mut(&(student_id.to_string(), course_id.to_string()))
    }

    pub fn insert_enrollment(&mut self, enrollment: Enrollment) {
        let key = (enrollment.student_id.clone(), enrollment.course_id.clone());
        self.enrollments.insert(key, enrollment);
    }

    pub fn enrollments_for_student(&self, student_id: &str) -> Vec<Enrollment> {
        let mut items: Vec<Enrollment> = self
            .enrollments
            .values()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect();
        items.sort_by_key(|e| e.enrolled_at);
        items
    }

    // Quiz attempts

    pub fn push_attempt(&mut self, attempt: QuizAttempt) {
        self.quiz_attempts.push(attempt);
    }

    pub fn attempts_for_student(&self, student_id: &str) -> Vec<QuizAttempt> {
        self.quiz_attempts
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect()
    }

    // Discussions

    pub fn discussion_mut(&mut self, id: &str) -> Option<&mut Discussion> {
        self.discussions.get_mut(id)
    }

    pub fn insert_discussion(&mut self, discussion: Discussion) {
        self.discussions.insert(discussion.id.clone(), discussion);
    }

    pub fn discussions_for_course(&self, course_id: &str) -> Vec<Discussion> {
        let mut items: Vec<Discussion> = self
            .discussions
            .values()
            .filter(|d| d.course_id == course_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        items
    }

    // Certificates

    pub fn push_certificate(&mut self, certificate: Certificate) {
        self.certificates.push(certificate);
    }

    pub fn certificate_by_hash(&self, hash: &str) -> Option<&Certificate> {
        self.certificates
            .iter()
            .find(|c| c.certificate_hash == hash)
    }

    pub fn certificates_for_student(&self, student_id: &str) -> Vec<Certificate> {
        self.certificates
            .iter()
            .filter(|c| c.student_id == student_id)
            .cloned()
            .collect()
    }
}
