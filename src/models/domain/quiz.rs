use serde::{Deserialize, Serialize};

use crate::models::domain::course::CourseId;

pub type QuizId = String;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: QuizId,
    pub course_id: CourseId,
    pub lesson_id: String,
    pub title: String,
    pub questions: Vec<Question>,
    pub passing_score: u32, // percentage of total points, 0-100
    pub created_at: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u32, // index into options
    pub points: u32,
}

impl Quiz {
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}
