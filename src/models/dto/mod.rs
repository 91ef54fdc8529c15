pub mod request;

pub use request::{
    AddLessonInput, CreateCourseInput, CreateDiscussionInput, CreateQuizInput, CreateUserInput,
    QuestionInput, UpdateProfileInput,
};
