use serde::Deserialize;
use validator::Validate;

use crate::models::domain::user::UserRole;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub role: UserRole,

    #[validate(length(max = 1000))]
    pub bio: String,

    #[validate(length(max = 2048))]
    pub profile_photo: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub bio: String,

    #[validate(length(max = 2048))]
    pub profile_photo: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 5000))]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddLessonInput {
    pub course_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 50000))]
    pub content: String,

    #[validate(url)]
    pub video_url: Option<String>,

    pub order: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizInput {
    pub course_id: String,
    pub lesson_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(nested)]
    pub questions: Vec<QuestionInput>,

    #[validate(range(min = 0, max = 100))]
    pub passing_score: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionInput {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,

    /// At least two options; `correct_answer` must index into them.
    #[validate(length(min = 2))]
    pub options: Vec<String>,

    pub correct_answer: u32,

    #[validate(range(min = 1))]
    pub points: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDiscussionInput {
    pub course_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 10000))]
    pub content: String,
}
