pub mod certificate_service;
pub mod course_service;
pub mod discussion_service;
pub mod enrollment_service;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod user_service;

pub use certificate_service::CertificateService;
pub use course_service::CourseService;
pub use discussion_service::DiscussionService;
pub use enrollment_service::EnrollmentService;
pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_service::QuizService;
pub use user_service::UserService;
