//! True/false quiz.

use kit_core::error::{KitError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_QUESTIONS: &str = include_str!("../data/questions.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    /// `"True"` or `"False"`
    #[serde(rename = "correct_answer")]
    pub answer: String,
}

fn parse_bank(json: &str, origin: &str) -> Result<Vec<Question>> {
    let questions: Vec<Question> = serde_json::from_str(json)
        .map_err(|e| KitError::Serialization(format!("Invalid question file {origin}: {e}")))?;
    if questions.is_empty() {
        return Err(KitError::Validation(format!("{origin} contains no questions.")));
    }
    if let Some(bad) = questions
        .iter()
        .find(|q| !matches!(q.answer.as_str(), "True" | "False"))
    {
        return Err(KitError::Validation(format!(
            "Answer to \"{}\" must be True or False, got \"{}\".",
            bad.text, bad.answer
        )));
    }
    Ok(questions)
}

/// Load `[{"question": ..., "correct_answer": "True"|"False"}, ...]`.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let content = fs::read_to_string(path)?;
    parse_bank(&content, &path.display().to_string())
}

/// The built-in question bank.
pub fn default_questions() -> Result<Vec<Question>> {
    parse_bank(DEFAULT_QUESTIONS, "built-in bank")
}

/// Result of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub correct_answer: String,
    pub score: usize,
    pub asked: usize,
}

/// Walks the questions in order and keeps score.
pub struct QuizBrain {
    questions: Vec<Question>,
    asked: usize,
    score: usize,
}

impl QuizBrain {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            asked: 0,
            score: 0,
        }
    }

    pub fn still_has_questions(&self) -> bool {
        self.asked < self.questions.len()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Advance to the next question; returns it with its 1-based number.
    pub fn next_question(&mut self) -> Option<(usize, &Question)> {
        let question = self.questions.get(self.asked)?;
        self.asked += 1;
        Some((self.asked, question))
    }

    /// Score the answer to the question last returned by `next_question`.
    pub fn check_answer(&mut self, input: &str) -> Result<Verdict> {
        let current = self
            .asked
            .checked_sub(1)
            .and_then(|i| self.questions.get(i))
            .ok_or_else(|| KitError::validation("No question has been asked yet."))?;

        let correct = input.trim().eq_ignore_ascii_case(&current.answer);
        let correct_answer = current.answer.clone();
        if correct {
            self.score += 1;
        }
        Ok(Verdict {
            correct,
            correct_answer,
            score: self.score,
            asked: self.asked,
        })
    }

    /// `(correct, asked)`
    pub fn final_score(&self) -> (usize, usize) {
        (self.score, self.asked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn bank() -> Vec<Question> {
        vec![
            Question {
                text: "Water is wet.".to_string(),
                answer: "True".to_string(),
            },
            Question {
                text: "Fish can fly.".to_string(),
                answer: "False".to_string(),
            },
        ]
    }

    #[test]
    fn walks_questions_and_scores() {
        let mut quiz = QuizBrain::new(bank());
        assert!(quiz.still_has_questions());

        let (n, q) = quiz.next_question().expect("first question");
        assert_eq!(n, 1);
        assert_eq!(q.text, "Water is wet.");
        let verdict = quiz.check_answer("true").expect("should check");
        assert!(verdict.correct);
        assert_eq!((verdict.score, verdict.asked), (1, 1));

        quiz.next_question().expect("second question");
        let verdict = quiz.check_answer("TRUE").expect("should check");
        assert!(!verdict.correct);
        assert_eq!(verdict.correct_answer, "False");

        assert!(!quiz.still_has_questions());
        assert!(quiz.next_question().is_none());
        assert_eq!(quiz.final_score(), (1, 2));
    }

    #[test]
    fn checking_before_asking_fails() {
        let mut quiz = QuizBrain::new(bank());
        assert!(quiz.check_answer("True").is_err());
    }

    #[test]
    fn builtin_bank_is_valid() {
        let questions = default_questions().expect("embedded bank should parse");
        assert!(questions.len() >= 10);
    }

    #[test]
    fn loads_question_file() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("q.json");
        fs::write(&path, r#"[{"question": "Q?", "correct_answer": "False"}]"#)
            .expect("should write");
        let questions = load_questions(&path).expect("should load");
        assert_eq!(questions[0].answer, "False");
    }

    #[test]
    fn rejects_non_boolean_answers_and_empty_banks() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("q.json");
        fs::write(&path, r#"[{"question": "Q?", "correct_answer": "Maybe"}]"#)
            .expect("should write");
        assert!(load_questions(&path).unwrap_err().is_validation());

        fs::write(&path, "[]").expect("should write");
        assert!(load_questions(&path).is_err());
    }
}
