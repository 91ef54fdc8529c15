use serde::{Deserialize, Serialize};

use crate::models::domain::user::UserId;

pub type CourseId = String;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor_id: UserId,
    pub instructor_name: String, // snapshot of the instructor's name at creation
    pub lessons: Vec<Lesson>,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub content: String,
    pub video_url: Option<String>,
    pub quiz_id: Option<String>,
    pub order: u32,
}

impl Course {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        instructor_id: &str,
        instructor_name: &str,
        created_at: u64,
    ) -> Self {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            instructor_id: instructor_id.to_string(),
            instructor_name: instructor_name.to_string(),
            lessons: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn lesson_mut(&mut self, lesson_id: &str) -> Option<&mut Lesson> {
        self.lessons.iter_mut().find(|l| l.id == lesson_id)
    }

    pub fn has_lesson_order(&self, order: u32) -> bool {
        self.lessons.iter().any(|l| l.order == order)
    }

    /// Inserts a lesson and keeps the list sorted by its `order` position.
    pub fn push_lesson(&mut self, lesson: Lesson) {
        self.lessons.push(lesson);
        self.lessons.sort_by(|a, b| a.order.cmp(&b.order));
    }
}
