use serde::{Deserialize, Serialize};

use crate::models::domain::quiz::QuizId;
use crate::models::domain::user::UserId;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub student_id: UserId,
    pub quiz_id: QuizId,
    pub answers: Vec<u32>, // selected option index per question, in question order
    pub score: u32,        // recomputed by the engine, never trusted from callers
    pub passed: bool,
    pub attempted_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_attempt_round_trip_serialization_preserves_grading_fields() {
        let attempt = QuizAttempt {
            student_id: "s-1".to_string(),
            quiz_id: "q-1".to_string(),
            answers: vec![0, 2, 1],
            score: 20,
            passed: true,
            attempted_at: 99,
        };

        let json = serde_json::to_string(&attempt).expect("attempt should serialize");
        let parsed: QuizAttempt = serde_json::from_str(&json).expect("attempt should deserialize");

        assert_eq!(parsed.answers, vec![0, 2, 1]);
        assert_eq!(parsed.score, 20);
        assert!(parsed.passed);
        assert_eq!(parsed.attempted_at, 99);
    }
}
