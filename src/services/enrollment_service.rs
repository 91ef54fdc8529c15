use crate::errors::{AppError, AppResult};
use crate::models::domain::{Enrollment, User};
use crate::store::EntityStore;

pub struct EnrollmentService;

impl EnrollmentService {
    pub fn enroll(
        store: &mut EntityStore,
        student: &User,
        course_id: &str,
        now: u64,
    ) -> AppResult<Enrollment> {
        if store.course(course_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                course_id
            )));
        }
        if store.enrollment(&student.id, course_id).is_some() {
            return Err(AppError::AlreadyExists(
                "Already enrolled in this course".to_string(),
            ));
        }

        let enrollment = Enrollment::new(&student.id, course_id, now);
        store.insert_enrollment(enrollment.clone());
        log::info!("student {} enrolled in course {}", student.id, course_id);

        Ok(enrollment)
    }

    /// Marks a lesson complete and recomputes derived progress state in the
    /// same call. Re-marking an already-completed lesson is a no-op.
    pub fn mark_lesson_completed(
        store: &mut EntityStore,
        student_id: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> AppResult<()> {
        let course = store.course(course_id).ok_or_else(|| {
            AppError::NotFound(format!("Course with id '{}' not found", course_id))
        })?;
        if course.lesson(lesson_id).is_none() {
            return Err(AppError::InvalidArgument(format!(
                "Lesson '{}' does not belong to course '{}'",
                lesson_id, course_id
            )));
        }
        let total_lessons = course.lessons.len();

        let enrollment = store
            .enrollment_mut(student_id, course_id)
            .ok_or_else(|| AppError::NotEnrolled("Caller is not enrolled in this course".to_string()))?;

        enrollment.completed_lessons.insert(lesson_id.to_string());

        let progress = Self::progress_percentage(enrollment.completed_lessons.len(), total_lessons);
        enrollment.progress_percentage = progress;
        enrollment.completed = progress == 100;

        Ok(())
    }

    /// round(100 * completed / total), half rounded up; 0 for an empty course.
    pub fn progress_percentage(completed: usize, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((completed as f64 / total as f64) * 100.0).round() as u32
    }
}
