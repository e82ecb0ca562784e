use std::collections::{HashMap, HashSet};

use crate::dto::quiz_dto::{AnswerResult, QuizResponse, QuizSubmission};
use crate::models::question::Question;

/// Percentage at or above which a submission is marked passed.
pub const PASS_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("Submission must contain at least one answer")]
    EmptySubmission,

    #[error("Duplicate answer for question {question_id}")]
    DuplicateAnswer { question_id: i32 },

    #[error("Question {question_id} does not exist")]
    UnknownQuestion { question_id: i32 },

    #[error("Answer {answer} is out of range for question {question_id}")]
    AnswerOutOfRange { question_id: i32, answer: i32 },
}

pub struct ScoringService;

impl ScoringService {
    /// Validates a submission against the current question set and scores it.
    ///
    /// Validation is fail-fast: the first offending answer, in submission
    /// order, determines the error and no partial report is ever returned.
    /// The duplicate check deliberately runs before the existence and range
    /// checks so that error output stays stable for existing clients.
    pub fn score(
        submission: &QuizSubmission,
        questions: &[Question],
    ) -> Result<QuizResponse, ScoringError> {
        if submission.answers.is_empty() {
            return Err(ScoringError::EmptySubmission);
        }

        let by_id: HashMap<i32, &Question> = questions.iter().map(|q| (q.id, q)).collect();

        let mut seen: HashSet<i32> = HashSet::with_capacity(submission.answers.len());
        let mut correct_count: i32 = 0;
        let mut results: Vec<AnswerResult> = Vec::with_capacity(submission.answers.len());

        for answer in &submission.answers {
            if !seen.insert(answer.question_id) {
                return Err(ScoringError::DuplicateAnswer {
                    question_id: answer.question_id,
                });
            }

            let question = match by_id.get(&answer.question_id) {
                Some(q) => q,
                None => {
                    return Err(ScoringError::UnknownQuestion {
                        question_id: answer.question_id,
                    })
                }
            };

            if answer.answer < 0 || answer.answer as usize >= question.options().len() {
                return Err(ScoringError::AnswerOutOfRange {
                    question_id: answer.question_id,
                    answer: answer.answer,
                });
            }

            let is_correct = answer.answer == question.answer;
            if is_correct {
                correct_count += 1;
            }

            results.push(AnswerResult {
                question_id: answer.question_id,
                user_answer: answer.answer,
                correct_answer: question.answer,
                is_correct,
                question: Some(question.text.clone()),
            });
        }

        let total = submission.answers.len() as i32;
        let percentage = 100.0 * f64::from(correct_count) / f64::from(total);

        Ok(QuizResponse {
            score: correct_count,
            total,
            percentage,
            passed: percentage >= PASS_THRESHOLD,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::quiz_dto::QuizAnswer;
    use chrono::Utc;
    use sqlx::types::Json;

    fn question(id: i32, text: &str, options: &[&str], answer: i32) -> Question {
        let now = Utc::now();
        Question {
            id,
            text: text.to_string(),
            options: Json(options.iter().map(|s| s.to_string()).collect()),
            answer,
            category: "General".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    // Four questions with correct indices [2, 1, 1, 1], mirroring the seed data.
    fn fixture() -> Vec<Question> {
        vec![
            question(
                1,
                "What is the capital of France?",
                &["London", "Berlin", "Paris", "Madrid"],
                2,
            ),
            question(
                2,
                "Which programming language is known for its simplicity and efficiency?",
                &["Java", "Go", "C++", "Python"],
                1,
            ),
            question(3, "What is 2 + 2?", &["3", "4", "5", "6"], 1),
            question(
                4,
                "Who wrote 'Romeo and Juliet'?",
                &[
                    "Charles Dickens",
                    "William Shakespeare",
                    "Jane Austen",
                    "Mark Twain",
                ],
                1,
            ),
        ]
    }

    fn submission(pairs: &[(i32, i32)]) -> QuizSubmission {
        QuizSubmission {
            answers: pairs
                .iter()
                .map(|&(question_id, answer)| QuizAnswer {
                    question_id,
                    answer,
                })
                .collect(),
        }
    }

    #[test]
    fn three_of_four_correct_passes() {
        let report =
            ScoringService::score(&submission(&[(1, 2), (2, 1), (3, 0), (4, 1)]), &fixture())
                .unwrap();

        assert_eq!(report.score, 3);
        assert_eq!(report.total, 4);
        assert_eq!(report.percentage, 75.0);
        assert!(report.passed);
        assert_eq!(report.results.len(), 4);
    }

    #[test]
    fn one_of_four_correct_fails() {
        let report =
            ScoringService::score(&submission(&[(1, 2), (2, 0), (3, 0), (4, 0)]), &fixture())
                .unwrap();

        assert_eq!(report.score, 1);
        assert_eq!(report.total, 4);
        assert_eq!(report.percentage, 25.0);
        assert!(!report.passed);
    }

    #[test]
    fn exactly_at_threshold_passes() {
        // 3 of 5 correct = 60.0 exactly.
        let mut questions = fixture();
        questions.push(question(5, "Is water wet?", &["Yes", "No"], 0));

        let report = ScoringService::score(
            &submission(&[(1, 2), (2, 1), (3, 1), (4, 0), (5, 1)]),
            &questions,
        )
        .unwrap();

        assert_eq!(report.percentage, 60.0);
        assert!(report.passed);
    }

    #[test]
    fn empty_submission_is_rejected() {
        let err = ScoringService::score(&submission(&[]), &fixture()).unwrap_err();
        assert_eq!(err, ScoringError::EmptySubmission);
    }

    #[test]
    fn duplicate_question_is_rejected_regardless_of_answers() {
        let err = ScoringService::score(&submission(&[(1, 0), (1, 1)]), &fixture()).unwrap_err();
        assert_eq!(err, ScoringError::DuplicateAnswer { question_id: 1 });
    }

    #[test]
    fn duplicate_check_precedes_range_check() {
        // The second answer is both a duplicate and out of range; the
        // duplicate wins.
        let err = ScoringService::score(&submission(&[(1, 0), (1, 99)]), &fixture()).unwrap_err();
        assert_eq!(err, ScoringError::DuplicateAnswer { question_id: 1 });
    }

    #[test]
    fn unknown_question_is_rejected() {
        let err = ScoringService::score(&submission(&[(1, 2), (99, 0)]), &fixture()).unwrap_err();
        assert_eq!(err, ScoringError::UnknownQuestion { question_id: 99 });
    }

    #[test]
    fn answer_past_last_option_is_out_of_range() {
        let err = ScoringService::score(&submission(&[(1, 4)]), &fixture()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::AnswerOutOfRange {
                question_id: 1,
                answer: 4
            }
        );
    }

    #[test]
    fn negative_answer_is_out_of_range() {
        let err = ScoringService::score(&submission(&[(1, -1)]), &fixture()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::AnswerOutOfRange {
                question_id: 1,
                answer: -1
            }
        );
    }

    #[test]
    fn last_option_index_is_accepted() {
        let report = ScoringService::score(&submission(&[(1, 3)]), &fixture()).unwrap();
        assert_eq!(report.score, 0);
        assert_eq!(report.total, 1);
    }

    #[test]
    fn first_invalid_answer_in_order_determines_the_error() {
        // Both an unknown id and a duplicate appear; the unknown id comes
        // first in submission order.
        let err = ScoringService::score(&submission(&[(1, 0), (99, 0), (1, 0)]), &fixture())
            .unwrap_err();
        assert_eq!(err, ScoringError::UnknownQuestion { question_id: 99 });
    }

    #[test]
    fn results_preserve_submission_order() {
        let report =
            ScoringService::score(&submission(&[(3, 1), (1, 2), (4, 0)]), &fixture()).unwrap();

        let ids: Vec<i32> = report.results.iter().map(|r| r.question_id).collect();
        assert_eq!(ids, vec![3, 1, 4]);
        assert_eq!(
            report.results[0].question.as_deref(),
            Some("What is 2 + 2?")
        );
        assert_eq!(report.results[0].correct_answer, 1);
        assert!(report.results[0].is_correct);
        assert!(!report.results[2].is_correct);
    }

    #[test]
    fn scoring_is_idempotent() {
        let sub = submission(&[(1, 2), (2, 1), (3, 0), (4, 1)]);
        let questions = fixture();

        let first = ScoringService::score(&sub, &questions).unwrap();
        let second = ScoringService::score(&sub, &questions).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn perfect_and_zero_scores() {
        let all_right =
            ScoringService::score(&submission(&[(1, 2), (2, 1), (3, 1), (4, 1)]), &fixture())
                .unwrap();
        assert_eq!(all_right.percentage, 100.0);
        assert!(all_right.passed);

        let all_wrong =
            ScoringService::score(&submission(&[(1, 0), (2, 0), (3, 0), (4, 0)]), &fixture())
                .unwrap();
        assert_eq!(all_wrong.score, 0);
        assert_eq!(all_wrong.percentage, 0.0);
        assert!(!all_wrong.passed);
    }
}
