pub mod certificate;
pub mod course;
pub mod discussion;
pub mod enrollment;
pub mod quiz;
pub mod quiz_attempt;
pub mod user;

pub use certificate::Certificate;
pub use course::{Course, Lesson};
pub use discussion::{Discussion, Reply};
pub use enrollment::Enrollment;
pub use quiz::{Question, Quiz};
pub use quiz_attempt::QuizAttempt;
pub use user::{User, UserRole};
