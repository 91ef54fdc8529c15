//! Caller resolution and role gates. The engine receives an opaque,
//! already-authenticated caller id; everything here maps that id onto a
//! stored profile and checks what the operation demands of it.

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Course, User, UserRole};
use crate::store::EntityStore;

/// Resolves the caller to their profile, for operations that require one.
pub fn require_user<'a>(store: &'a EntityStore, caller: &str) -> AppResult<&'a User> {
    store.user(caller).ok_or_else(|| {
        AppError::Unauthorized("No profile exists for this caller".to_string())
    })
}

pub fn require_teacher<'a>(store: &'a EntityStore, caller: &str) -> AppResult<&'a User> {
    let user = require_user(store, caller)?;
    if user.role != UserRole::Teacher {
        return Err(AppError::Unauthorized(
            "Only teachers can perform this action".to_string(),
        ));
    }
    Ok(user)
}

pub fn require_student<'a>(store: &'a EntityStore, caller: &str) -> AppResult<&'a User> {
    let user = require_user(store, caller)?;
    if user.role != UserRole::Student {
        return Err(AppError::Unauthorized(
            "Only students can perform this action".to_string(),
        ));
    }
    Ok(user)
}

/// Course mutations (lessons, quizzes) are reserved for the instructor who
/// owns the course, not just any teacher.
pub fn require_course_instructor(course: &Course, caller: &str) -> AppResult<()> {
    if course.instructor_id != caller {
        return Err(AppError::Unauthorized(
            "Only the course instructor can perform this action".to_string(),
        ));
    }
    Ok(())
}
