use crate::errors::{AppError, AppResult};
use crate::models::domain::{Quiz, QuizAttempt, User};
use crate::store::EntityStore;

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade submitted answers against the quiz's answer key.
    ///
    /// Returns (score, total_points, passed). A question earns its points
    /// iff the selected option index equals the answer key; the pass mark is
    /// `score / total_points * 100 >= passing_score`, evaluated in integer
    /// arithmetic. A quiz with zero total points passes trivially.
    pub fn grade(quiz: &Quiz, answers: &[u32]) -> AppResult<(u32, u32, bool)> {
        if answers.len() != quiz.questions.len() {
            return Err(AppError::InvalidArgument(
                "Number of answers doesn't match number of questions".to_string(),
            ));
        }

        let mut score: u32 = 0;
        let mut total_points: u32 = 0;

        for (i, question) in quiz.questions.iter().enumerate() {
            total_points += question.points;
            if answers[i] == question.correct_answer {
                score += question.points;
            }
        }

        let passed = if total_points == 0 {
            true
        } else {
            score as u64 * 100 >= quiz.passing_score as u64 * total_points as u64
        };

        Ok((score, total_points, passed))
    }

    /// Grades and records an attempt. Attempts are append-only history; a
    /// new attempt never overwrites an earlier one.
    pub fn attempt(
        store: &mut EntityStore,
        student: &User,
        quiz_id: &str,
        answers: Vec<u32>,
        now: u64,
    ) -> AppResult<QuizAttempt> {
        let quiz = store
            .quiz(quiz_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        if store.enrollment(&student.id, &quiz.course_id).is_none() {
            return Err(AppError::NotEnrolled(
                "Caller is not enrolled in the course for this quiz".to_string(),
            ));
        }

        let (score, _total_points, passed) = Self::grade(quiz, &answers)?;

        let attempt = QuizAttempt {
            student_id: student.id.clone(),
            quiz_id: quiz_id.to_string(),
            answers,
            score,
            passed,
            attempted_at: now,
        };
        store.push_attempt(attempt.clone());
        log::debug!(
            "student {} scored {} on quiz {} (passed: {})",
            student.id,
            score,
            quiz_id,
            passed
        );

        Ok(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Course, Enrollment, Question, UserRole};

    fn make_quiz(questions: Vec<(u32, u32)>, passing_score: u32) -> Quiz {
        // (correct_answer, points) per question
        Quiz {
            id: "q-1".to_string(),
            course_id: "c-1".to_string(),
            lesson_id: "l-1".to_string(),
            title: "Checkpoint".to_string(),
            questions: questions
                .into_iter()
                .enumerate()
                .map(|(i, (correct_answer, points))| Question {
                    id: format!("qq-{}", i),
                    question: format!("Question {}", i),
                    options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                    correct_answer,
                    points,
                })
                .collect(),
            passing_score,
            created_at: 1,
        }
    }

    fn student() -> User {
        User::new("student-1", "Grace", UserRole::Student, "", "", 1)
    }

    #[test]
    fn grade_rejects_answer_count_mismatch() {
        let quiz = make_quiz(vec![(0, 10), (1, 20)], 60);
        let result = QuizAttemptService::grade(&quiz, &[0]);
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn grade_sums_points_for_exact_matches_only() {
        // Two questions worth 10 and 20, passing at 60%. Only the second
        // answered correctly: 20/30 is 66.67%, which passes.
        let quiz = make_quiz(vec![(0, 10), (1, 20)], 60);
        let (score, total, passed) =
            QuizAttemptService::grade(&quiz, &[2, 1]).expect("grading should succeed");

        assert_eq!(score, 20);
        assert_eq!(total, 30);
        assert!(passed);
    }

    #[test]
    fn grade_fails_below_passing_percentage() {
        // 10/30 is 33.33%, short of 60%.
        let quiz = make_quiz(vec![(0, 10), (1, 20)], 60);
        let (score, _, passed) =
            QuizAttemptService::grade(&quiz, &[0, 0]).expect("grading should succeed");

        assert_eq!(score, 10);
        assert!(!passed);
    }

    #[test]
    fn grade_exact_boundary_passes() {
        // 30/50 is exactly 60%.
        let quiz = make_quiz(vec![(0, 30), (1, 20)], 60);
        let (_, _, passed) =
            QuizAttemptService::grade(&quiz, &[0, 0]).expect("grading should succeed");
        assert!(passed);
    }

    #[test]
    fn grade_out_of_range_answer_is_just_incorrect() {
        let quiz = make_quiz(vec![(0, 10)], 0);
        let (score, _, _) =
            QuizAttemptService::grade(&quiz, &[99]).expect("grading should succeed");
        assert_eq!(score, 0);
    }

    #[test]
    fn quiz_with_zero_total_points_passes_trivially() {
        let quiz = make_quiz(vec![], 80);
        let (score, total, passed) =
            QuizAttemptService::grade(&quiz, &[]).expect("grading should succeed");

        assert_eq!(score, 0);
        assert_eq!(total, 0);
        assert!(passed);
    }

    #[test]
    fn attempt_requires_enrollment() {
        let mut store = EntityStore::new();
        store.insert_course(Course::new("c-1", "Rust", "", "teacher-1", "Ada", 1));
        store.insert_quiz(make_quiz(vec![(0, 10)], 50));

        let result = QuizAttemptService::attempt(&mut store, &student(), "q-1", vec![0], 5);
        assert!(matches!(result, Err(AppError::NotEnrolled(_))));
    }

    #[test]
    fn attempts_accumulate_as_history() {
        let mut store = EntityStore::new();
        store.insert_course(Course::new("c-1", "Rust", "", "teacher-1", "Ada", 1));
        store.insert_quiz(make_quiz(vec![(0, 10)], 50));
        store.insert_enrollment(Enrollment::new("student-1", "c-1", 2));

        let first = QuizAttemptService::attempt(&mut store, &student(), "q-1", vec![1], 5)
            .expect("attempt should succeed");
        assert!(!first.passed);

        let second = QuizAttemptService::attempt(&mut store, &student(), "q-1", vec![0], 6)
            .expect("attempt should succeed");
        assert!(second.passed);

        let history = store.attempts_for_student("student-1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].attempted_at, 5);
        assert_eq!(history[1].attempted_at, 6);
    }

    #[test]
    fn attempt_on_missing_quiz_is_not_found() {
        let mut store = EntityStore::new();
        let result = QuizAttemptService::attempt(&mut store, &student(), "q-404", vec![], 5);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
