//! Profile Quiz logic: answering, feedback delay and progression.

use super::types::*;
use crate::constants::QUIZ_FEEDBACK_DELAY_MS;
use crate::games::timer::Timer;
use crate::games::Lifecycle;

/// UI-agnostic input actions for the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    /// Choose an option by its position.
    Answer(usize),
    Up,
    Down,
    /// Answer with the option under the cursor.
    Select,
    Reset,
}

pub fn process_input(game: &mut QuizGame, input: QuizInput) {
    match input {
        QuizInput::Answer(option) => {
            answer_index(game, option);
        }
        QuizInput::Up => game.cursor = game.cursor.saturating_sub(1),
        QuizInput::Down => {
            let last = game.options().len().saturating_sub(1);
            game.cursor = (game.cursor + 1).min(last);
        }
        QuizInput::Select => {
            let option = game.cursor;
            answer_index(game, option);
        }
        QuizInput::Reset => reset_quiz(game),
    }
}

/// Answer with the option at `option`. Out-of-range indices are ignored.
pub fn answer_index(game: &mut QuizGame, option: usize) -> bool {
    let Some(text) = game.options().get(option).cloned() else {
        return false;
    };
    game.cursor = option;
    answer(game, &text)
}

/// Submit an answer. Returns true if it was accepted for grading.
///
/// Ignored when there is no question, once the quiz is complete, or while a
/// correct answer is waiting to advance.
pub fn answer(game: &mut QuizGame, option: &str) -> bool {
    if matches!(
        game.feedback,
        Some(QuizFeedback::Complete) | Some(QuizFeedback::Correct)
    ) {
        return false;
    }
    let Some(question) = game.current() else {
        return false;
    };

    if question.is_correct(option) {
        game.score += 1;
        if game.is_last_question() {
            game.feedback = Some(QuizFeedback::Complete);
            game.feedback_timer.cancel();
            log::debug!("quiz: complete with {}/{}", game.score, game.total());
        } else {
            game.feedback = Some(QuizFeedback::Correct);
            game.feedback_timer = Timer::once(QUIZ_FEEDBACK_DELAY_MS);
        }
    } else {
        game.feedback = Some(QuizFeedback::Retry);
        game.feedback_timer = Timer::once(QUIZ_FEEDBACK_DELAY_MS);
    }
    true
}

/// Advance by `dt_ms`. Returns true if pending feedback was applied.
pub fn tick_quiz(game: &mut QuizGame, dt_ms: u64) -> bool {
    game.feedback_timer.advance(dt_ms);
    if game.feedback_timer.poll() {
        apply_pending_feedback(game);
        return true;
    }
    false
}

/// Clear transient feedback; a correct answer also moves to the next question.
fn apply_pending_feedback(game: &mut QuizGame) {
    if game.feedback == Some(QuizFeedback::Correct) {
        let last = game.questions.len().saturating_sub(1);
        game.index = (game.index + 1).min(last);
        game.cursor = 0;
    }
    if game.feedback != Some(QuizFeedback::Complete) {
        game.feedback = None;
    }
}

/// Back to the first question with a zero score.
pub fn reset_quiz(game: &mut QuizGame) {
    game.feedback_timer.cancel();
    game.index = 0;
    game.score = 0;
    game.feedback = None;
    game.cursor = 0;
}

impl Lifecycle for QuizGame {
    /// Pending feedback is applied immediately so a scored answer always advances.
    fn suspend(&mut self) {
        if self.feedback_timer.is_armed() {
            self.feedback_timer.cancel();
            apply_pending_feedback(self);
        }
    }

    fn resume(&mut self) {}
}
