use validator::Validate;

use crate::auth;
use crate::errors::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::models::domain::{Question, Quiz};
use crate::models::dto::CreateQuizInput;
use crate::store::EntityStore;

pub struct QuizService;

impl QuizService {
    /// Creates a quiz attached to one lesson of the caller's course, and
    /// sets the lesson's back-reference in the same call.
    pub fn create_quiz(
        store: &mut EntityStore,
        caller: &str,
        input: CreateQuizInput,
        ids: &mut dyn IdGenerator,
        now: u64,
    ) -> AppResult<Quiz> {
        input.validate()?;

        let course = store.course(&input.course_id).ok_or_else(|| {
            AppError::NotFound(format!("Course with id '{}' not found", input.course_id))
        })?;
        auth::require_course_instructor(course, caller)?;

        if course.lesson(&input.lesson_id).is_none() {
            return Err(AppError::InvalidArgument(format!(
                "Lesson '{}' does not belong to course '{}'",
                input.lesson_id, input.course_id
            )));
        }

        for (index, question) in input.questions.iter().enumerate() {
            if question.correct_answer as usize >= question.options.len() {
                return Err(AppError::InvalidArgument(format!(
                    "Question {}: correct_answer {} is out of range for {} options",
                    index,
                    question.correct_answer,
                    question.options.len()
                )));
            }
        }

        let quiz_id = ids.next_id();
        let questions: Vec<Question> = input
            .questions
            .into_iter()
            .map(|q| Question {
                id: ids.next_id(),
                question: q.question,
                options: q.options,
                correct_answer: q.correct_answer,
                points: q.points,
            })
            .collect();

        let quiz = Quiz {
            id: quiz_id,
            course_id: input.course_id.clone(),
            lesson_id: input.lesson_id.clone(),
            title: input.title,
            questions,
            passing_score: input.passing_score,
            created_at: now,
        };
        store.insert_quiz(quiz.clone());

        // Back-reference from the lesson; existence was checked above.
        if let Some(course) = store.course_mut(&input.course_id) {
            if let Some(lesson) = course.lesson_mut(&input.lesson_id) {
                lesson.quiz_id = Some(quiz.id.clone());
            }
        }
        log::info!("created quiz '{}' ({}) on lesson {}", quiz.title, quiz.id, quiz.lesson_id);

        Ok(quiz)
    }
}
