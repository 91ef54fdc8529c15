//! The call surface of the engine. Every operation takes the opaque caller
//! identity as its first argument. Mutating operations borrow the engine
//! exclusively (`&mut self`), so the borrow checker serialises them, and
//! each one runs validate, compute, commit to completion with no suspension
//! points. Read-only queries borrow shared (`&self`) and always observe a
//! fully committed store.

use crate::auth;
use crate::clock::{Clock, MonotonicClock, SystemClock};
use crate::errors::AppResult;
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::models::domain::{
    Certificate, Course, Discussion, Enrollment, Quiz, QuizAttempt, User,
};
use crate::models::dto::{
    AddLessonInput, CreateCourseInput, CreateDiscussionInput, CreateQuizInput, CreateUserInput,
    UpdateProfileInput,
};
use crate::services::{
    CertificateService, CourseService, DiscussionService, EnrollmentService, QuizAttemptService,
    QuizService, UserService,
};
use crate::store::EntityStore;

pub struct Engine {
    store: EntityStore,
    clock: MonotonicClock,
    ids: Box<dyn IdGenerator>,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_parts(Box::new(SystemClock), Box::new(UuidIdGenerator))
    }

    /// Builds an engine with caller-supplied clock and id sources, so tests
    /// can pin timestamps and ids.
    pub fn with_parts(clock: Box<dyn Clock>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store: EntityStore::new(),
            clock: MonotonicClock::new(clock),
            ids,
        }
    }

    // User management

    pub fn create_user(&mut self, caller: &str, input: CreateUserInput) -> AppResult<User> {
        let now = self.clock.next();
        UserService::create_user(&mut self.store, caller, input, now)
    }

    pub fn update_user_profile(
        &mut self,
        caller: &str,
        input: UpdateProfileInput,
    ) -> AppResult<User> {
        UserService::update_profile(&mut self.store, caller, input)
    }

    pub fn get_user(&self, caller: &str) -> Option<User> {
        self.store.user(caller).cloned()
    }

    // Course management

    pub fn create_course(&mut self, caller: &str, input: CreateCourseInput) -> AppResult<Course> {
        let instructor = auth::require_teacher(&self.store, caller)?.clone();
        let now = self.clock.next();
        let course_id = self.ids.next_id();
        CourseService::create_course(&mut self.store, &instructor, input, course_id, now)
    }

    pub fn add_lesson_to_course(&mut self, caller: &str, input: AddLessonInput) -> AppResult<()> {
        auth::require_teacher(&self.store, caller)?;
        let now = self.clock.next();
        CourseService::add_lesson(&mut self.store, caller, input, self.ids.as_mut(), now)
    }

    pub fn get_course(&self, course_id: &str) -> Option<Course> {
        self.store.course(course_id).cloned()
    }

    pub fn get_all_courses(&self) -> Vec<Course> {
        self.store.all_courses()
    }

    pub fn search_courses(&self, query: &str) -> Vec<Course> {
        CourseService::search(&self.store, query)
    }

    // Enrollment management

    pub fn enroll_in_course(&mut self, caller: &str, course_id: &str) -> AppResult<Enrollment> {
        let student = auth::require_student(&self.store, caller)?.clone();
        let now = self.clock.next();
        EnrollmentService::enroll(&mut self.store, &student, course_id, now)
    }

    pub fn mark_lesson_completed(
        &mut self,
        caller: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> AppResult<()> {
        auth::require_student(&self.store, caller)?;
        EnrollmentService::mark_lesson_completed(&mut self.store, caller, course_id, lesson_id)
    }

    pub fn get_student_enrollments(&self, caller: &str) -> Vec<Enrollment> {
        self.store.enrollments_for_student(caller)
    }

    // Quiz management

    pub fn create_quiz(&mut self, caller: &str, input: CreateQuizInput) -> AppResult<Quiz> {
        auth::require_teacher(&self.store, caller)?;
        let now = self.clock.next();
        QuizService::create_quiz(&mut self.store, caller, input, self.ids.as_mut(), now)
    }

    pub fn get_quiz(&self, quiz_id: &str) -> Option<Quiz> {
        self.store.quiz(quiz_id).cloned()
    }

    pub fn attempt_quiz(
        &mut self,
        caller: &str,
        quiz_id: &str,
        answers: Vec<u32>,
    ) -> AppResult<QuizAttempt> {
        let student = auth::require_student(&self.store, caller)?.clone();
        let now = self.clock.next();
        QuizAttemptService::attempt(&mut self.store, &student, quiz_id, answers, now)
    }

    // Certificate management

    pub fn issue_certificate(&mut self, caller: &str, course_id: &str) -> AppResult<Certificate> {
        let student = auth::require_student(&self.store, caller)?.clone();
        let now = self.clock.next();
        CertificateService::issue(&mut self.store, &student, course_id, now)
    }

    pub fn verify_certificate(&self, certificate_hash: &str) -> Option<Certificate> {
        CertificateService::verify(&self.store, certificate_hash)
    }

    pub fn get_student_certificates(&self, caller: &str) -> Vec<Certificate> {
        self.store.certificates_for_student(caller)
    }

    // Discussion management

    pub fn create_discussion(
        &mut self,
        caller: &str,
        input: CreateDiscussionInput,
    ) -> AppResult<Discussion> {
        let author = auth::require_user(&self.store, caller)?.clone();
        let now = self.clock.next();
        let discussion_id = self.ids.next_id();
        DiscussionService::create_discussion(&mut self.store, &author, input, discussion_id, now)
    }

    pub fn reply_to_discussion(
        &mut self,
        caller: &str,
        discussion_id: &str,
        content: &str,
    ) -> AppResult<()> {
        let author = auth::require_user(&self.store, caller)?.clone();
        let now = self.clock.next();
        let reply_id = self.ids.next_id();
        DiscussionService::reply(&mut self.store, &author, discussion_id, content, reply_id, now)
    }

    pub fn get_course_discussions(&self, course_id: &str) -> Vec<Discussion> {
        self.store.discussions_for_course(course_id)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::ids::SequentialIdGenerator;
    use crate::models::domain::UserRole;
    use crate::test_utils::fixtures;

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn timestamps_never_decrease_across_mutations() {
        let mut engine = fixtures::deterministic_engine();
        let user = engine
            .create_user("t-1", fixtures::user_input("Ada", UserRole::Teacher))
            .expect("create user should succeed");
        let course = engine
            .create_course("t-1", fixtures::course_input("Rust Basics"))
            .expect("create course should succeed");

        assert!(course.created_at >= user.created_at);
    }

    #[test]
    fn student_cannot_create_course() {
        let mut engine = fixtures::deterministic_engine();
        engine
            .create_user("s-1", fixtures::user_input("Grace", UserRole::Student))
            .expect("create user should succeed");

        let result = engine.create_course("s-1", fixtures::course_input("Nope"));
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn teacher_cannot_enroll() {
        let mut engine = fixtures::deterministic_engine();
        engine
            .create_user("t-1", fixtures::user_input("Ada", UserRole::Teacher))
            .expect("create user should succeed");
        let course = engine
            .create_course("t-1", fixtures::course_input("Rust Basics"))
            .expect("create course should succeed");

        let result = engine.enroll_in_course("t-1", &course.id);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn unknown_caller_gets_no_user() {
        let engine = Engine::with_parts(
            Box::new(crate::clock::SystemClock),
            Box::new(SequentialIdGenerator::new("id")),
        );
        assert!(engine.get_user("nobody").is_none());
        assert!(engine.get_student_enrollments("nobody").is_empty());
        assert!(engine.get_student_certificates("nobody").is_empty());
    }

    #[test]
    fn enrollments_are_scoped_to_the_caller() {
        let mut engine = fixtures::deterministic_engine();
        engine
            .create_user("t-1", fixtures::user_input("Ada", UserRole::Teacher))
            .expect("create user should succeed");
        let course = engine
            .create_course("t-1", fixtures::course_input("Rust Basics"))
            .expect("create course should succeed");
        engine
            .create_user("s-1", fixtures::user_input("Grace", UserRole::Student))
            .expect("create user should succeed");
        engine
            .create_user("s-2", fixtures::user_input("Linus", UserRole::Student))
            .expect("create user should succeed");
        engine
            .enroll_in_course("s-1", &course.id)
            .expect("enroll should succeed");

        assert_eq!(engine.get_student_enrollments("s-1").len(), 1);
        assert!(engine.get_student_enrollments("s-2").is_empty());
    }
}
