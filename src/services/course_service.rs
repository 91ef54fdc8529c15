use validator::Validate;

use crate::auth;
use crate::errors::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::models::domain::{Course, Lesson, User};
use crate::models::dto::{AddLessonInput, CreateCourseInput};
use crate::store::EntityStore;

pub struct CourseService;

impl CourseService {
    pub fn create_course(
        store: &mut EntityStore,
        instructor: &User,
        input: CreateCourseInput,
        course_id: String,
        now: u64,
    ) -> AppResult<Course> {
        input.validate()?;

        let course = Course::new(
            &course_id,
            &input.title,
            &input.description,
            &instructor.id,
            &instructor.name,
            now,
        );
        store.insert_course(course.clone());
        log::info!("created course '{}' ({})", course.title, course.id);

        Ok(course)
    }

    /// Appends a lesson to a course owned by the caller. Lesson order values
    /// must be unique within the course; the list stays sorted by order.
    pub fn add_lesson(
        store: &mut EntityStore,
        caller: &str,
        input: AddLessonInput,
        ids: &mut dyn IdGenerator,
        now: u64,
    ) -> AppResult<()> {
        input.validate()?;

        let course = store.course(&input.course_id).ok_or_else(|| {
            AppError::NotFound(format!("Course with id '{}' not found", input.course_id))
        })?;
        auth::require_course_instructor(course, caller)?;

        if course.has_lesson_order(input.order) {
            return Err(AppError::InvalidArgument(format!(
                "A lesson with order {} already exists in this course",
                input.order
            )));
        }

        let lesson = Lesson {
            id: ids.next_id(),
            title: input.title,
            content: input.content,
            video_url: input.video_url,
            quiz_id: None,
            order: input.order,
        };

        // Checks passed; commit.
        let course = store
            .course_mut(&input.course_id)
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", input.course_id)))?;
        course.push_lesson(lesson);
        course.updated_at = now;

        Ok(())
    }

    /// Case-insensitive substring match over title, description and
    /// instructor name; any field matching includes the course.
    pub fn search(store: &EntityStore, query: &str) -> Vec<Course> {
        let needle = query.to_lowercase();
        store
            .all_courses()
            .into_iter()
            .filter(|course| {
                course.title.to_lowercase().contains(&needle)
                    || course.description.to_lowercase().contains(&needle)
                    || course.instructor_name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
