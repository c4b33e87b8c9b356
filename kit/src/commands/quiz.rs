//! `kit quiz`

use super::prompt;
use crate::error::CliResult;
use colored::Colorize;
use kit_core::error::Result as KitResult;
use kit_core::{kit_println, kit_success, KitError};
use kit_games::quiz::{default_questions, load_questions};
use kit_games::QuizBrain;
use kit_messages::{msg, MESSAGES};
use std::path::Path;

pub fn handle_quiz(questions: Option<&Path>) -> CliResult<()> {
    let bank = match questions {
        Some(path) => load_questions(path)?,
        None => default_questions()?,
    };
    let mut quiz = QuizBrain::new(bank);
    let total = quiz.total();

    while let Some((number, question)) = quiz.next_question() {
        let text = question.text.clone();
        let prompt_text = msg!(
            MESSAGES.games.quiz_question,
            number = number.to_string(),
            total = total.to_string(),
            question = text
        );
        let answer = prompt::ask_parsed(&prompt_text, parse_answer)?;
        let verdict = quiz.check_answer(answer)?;
        if verdict.correct {
            kit_println!("{}", MESSAGES.games.quiz_correct.green());
        } else {
            kit_println!(
                "{}",
                msg!(MESSAGES.games.quiz_wrong, answer = verdict.correct_answer).red()
            );
        }
        kit_println!(
            "{}",
            msg!(
                MESSAGES.games.quiz_running_score,
                score = verdict.score.to_string(),
                asked = verdict.asked.to_string()
            )
        );
    }

    let (score, asked) = quiz.final_score();
    kit_success!(
        "{}",
        msg!(
            MESSAGES.games.quiz_final,
            score = score.to_string(),
            asked = asked.to_string()
        )
    );
    Ok(())
}

/// `true`/`t`/`false`/`f`, any case.
fn parse_answer(input: &str) -> KitResult<&'static str> {
    match input.trim().to_lowercase().as_str() {
        "true" | "t" => Ok("True"),
        "false" | "f" => Ok("False"),
        _ => Err(KitError::validation(MESSAGES.games.quiz_answer_invalid)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_accept_short_forms() {
        assert_eq!(parse_answer("T").expect("valid"), "True");
        assert_eq!(parse_answer(" false ").expect("valid"), "False");
        assert!(parse_answer("maybe").unwrap_err().is_validation());
    }
}
