//! Turn-based game session
//!
//! Holds the target, one guess slot per attempt, the verdict of every accepted
//! guess, and the accumulated letter classification. Input events (letter,
//! delete, submit) mutate it one at a time; presentation layers read it back to
//! render.
//!
//! # State Machine
//! `AwaitingInput` → `ReadyToSubmit` → submit → either back to input with the
//! rejected flag set, or evaluated → next attempt, `Won`, or `Lost`.
//!
//! Submission can be split in two for callers that validate off-thread:
//! [`Game::begin_submit`] captures the guess, and [`Game::complete_submit`]
//! applies the answer unless the session has moved on in the meantime.

use crate::core::{KeyState, LetterClassification, Verdict, Word, alphabet};
use crate::services::{Services, WordSource, WordValidator};
use log::{debug, info};
use std::fmt;
use std::sync::Arc;

/// Number of guesses per session
pub const MAX_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Current guess is shorter than the target
    AwaitingInput,
    /// Current guess has every letter and can be submitted
    ReadyToSubmit,
    Won,
    Lost,
}

/// Result of applying a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Game finished or guess incomplete, nothing happened
    Ignored,
    /// The session changed while the guess was being validated
    Stale,
    /// Not an accepted word; the guess stays editable
    Rejected,
    Continue(Verdict),
    Won(Verdict),
    Lost(Verdict),
}

/// A guess captured for validation
#[derive(Debug, Clone)]
pub struct Submission {
    generation: u64,
    attempt: usize,
    guess: Word,
    target: Word,
}

impl Submission {
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// Run the validity check for this guess. May block on the network.
    #[must_use]
    pub fn validate(&self, validator: &dyn WordValidator) -> bool {
        validator.check(self.guess.text(), &self.target)
    }
}

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub won: bool,
    pub attempts: usize,
    pub target: Word,
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub word_length: usize,
    pub attempt: usize,
    pub guesses: Vec<String>,
    pub verdicts: Vec<Option<Verdict>>,
    pub exact: Vec<char>,
    pub elsewhere: Vec<char>,
    pub absent: Vec<char>,
    pub finished: bool,
    pub won: bool,
    pub rejected: bool,
}

pub struct Game {
    target: Word,
    validator: Arc<dyn WordValidator>,
    guesses: Vec<String>,
    verdicts: Vec<Option<Verdict>>,
    attempt: usize,
    classification: LetterClassification,
    finished: bool,
    won: bool,
    rejected: bool,
    generation: u64,
}

impl Game {
    #[must_use]
    pub fn new(target: Word, validator: Arc<dyn WordValidator>) -> Self {
        let mut game = Self {
            target: target.clone(),
            validator,
            guesses: Vec::new(),
            verdicts: Vec::new(),
            attempt: 0,
            classification: LetterClassification::new(),
            finished: false,
            won: false,
            rejected: false,
            generation: 0,
        };
        game.initialize(target);
        game
    }

    /// Fetch a target of `length` letters and start a session
    #[must_use]
    pub fn start(services: &Services, length: usize) -> Self {
        Self::new(services.source.fetch(length), Arc::clone(&services.validator))
    }

    /// Reset every piece of session state and record a new target
    pub fn initialize(&mut self, target: Word) {
        self.generation += 1;
        debug!(
            "session {} started, {}-letter target {target}",
            self.generation,
            target.len()
        );

        self.target = target;
        self.guesses = vec![String::new(); MAX_ATTEMPTS];
        self.verdicts = vec![None; MAX_ATTEMPTS];
        self.attempt = 0;
        self.classification.clear();
        self.finished = false;
        self.won = false;
        self.rejected = false;
    }

    /// Fetch a new target of the same length and start over
    pub fn restart(&mut self, source: &dyn WordSource) {
        let target = source.fetch(self.word_length());
        self.initialize(target);
    }

    /// Append a letter to the current guess
    ///
    /// Ignored when the game is over, the guess is full, or `letter` is not in
    /// the alphabet.
    pub fn add_letter(&mut self, letter: char) {
        if self.finished {
            return;
        }
        let Some(letter) = alphabet::normalize_letter(letter) else {
            return;
        };
        let length = self.word_length();
        let guess = &mut self.guesses[self.attempt];
        if guess.len() < length {
            guess.push(letter);
        }
    }

    /// Remove the last letter of the current guess, if any
    pub fn delete_letter(&mut self) {
        if self.finished {
            return;
        }
        self.guesses[self.attempt].pop();
    }

    /// Validate and evaluate the current guess with the session's validator
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(submission) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };
        let accepted = submission.validate(self.validator.as_ref());
        self.complete_submit(submission, accepted)
    }

    /// Capture the current guess for validation
    ///
    /// Returns `None` when the game is over or the guess is incomplete.
    #[must_use]
    pub fn begin_submit(&self) -> Option<Submission> {
        if self.finished || !self.is_word_complete() {
            return None;
        }
        let guess = Word::new(self.current_guess()).ok()?;
        Some(Submission {
            generation: self.generation,
            attempt: self.attempt,
            guess,
            target: self.target.clone(),
        })
    }

    /// Apply the validity answer for a captured guess
    pub fn complete_submit(&mut self, submission: Submission, accepted: bool) -> SubmitOutcome {
        if submission.generation != self.generation
            || submission.attempt != self.attempt
            || self.finished
            || self.current_guess() != submission.guess.text()
        {
            debug!(
                "discarding stale submission {} for session {}",
                submission.guess, submission.generation
            );
            return SubmitOutcome::Stale;
        }

        if !accepted {
            debug!("guess {} rejected", submission.guess);
            self.rejected = true;
            return SubmitOutcome::Rejected;
        }
        self.rejected = false;

        let verdict = Verdict::calculate(&submission.guess, &self.target);
        self.classification.record(&submission.guess, &verdict);
        self.verdicts[self.attempt] = Some(verdict.clone());

        if verdict.is_all_exact() {
            self.finished = true;
            self.won = true;
            info!("solved in {} attempts", self.attempt + 1);
            SubmitOutcome::Won(verdict)
        } else if self.attempt == MAX_ATTEMPTS - 1 {
            self.finished = true;
            self.won = false;
            info!("out of attempts, target was {}", self.target);
            SubmitOutcome::Lost(verdict)
        } else {
            self.attempt += 1;
            SubmitOutcome::Continue(verdict)
        }
    }

    #[must_use]
    pub fn validator(&self) -> Arc<dyn WordValidator> {
        Arc::clone(&self.validator)
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// Zero-based index of the attempt being played
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// Attempts left after the current one
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.attempt - 1
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.guesses[self.attempt]
    }

    #[must_use]
    pub fn is_word_complete(&self) -> bool {
        self.current_guess().len() == self.word_length()
    }

    /// Every guess slot, submitted or not
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Verdicts per attempt, `None` until that attempt is accepted
    #[must_use]
    pub fn verdicts(&self) -> &[Option<Verdict>] {
        &self.verdicts
    }

    #[must_use]
    pub fn verdict(&self, attempt: usize) -> Option<&Verdict> {
        self.verdicts.get(attempt).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn classification(&self) -> &LetterClassification {
        &self.classification
    }

    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        self.classification.key_state(letter)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Set when the last submission was not an accepted word
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.finished, self.won) {
            (true, true) => Phase::Won,
            (true, false) => Phase::Lost,
            _ if self.is_word_complete() => Phase::ReadyToSubmit,
            _ => Phase::AwaitingInput,
        }
    }

    /// The target, once the session is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.finished.then_some(&self.target)
    }

    /// First `revealed` letters of the target, the rest masked
    #[must_use]
    pub fn hint(&self, revealed: usize) -> String {
        self.target.hint(revealed)
    }

    /// Hint that grows by one letter per attempt used, never giving the whole word away
    #[must_use]
    pub fn progressive_hint(&self) -> String {
        let revealed = (self.attempt + 1).min(self.word_length().saturating_sub(1));
        self.hint(revealed)
    }

    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.finished.then(|| GameSummary {
            won: self.won,
            attempts: self.attempt + 1,
            target: self.target.clone(),
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let sorted = |set: &rustc_hash::FxHashSet<u8>| {
            let mut letters: Vec<char> = set.iter().map(|&b| char::from(b)).collect();
            letters.sort_unstable();
            letters
        };

        GameSnapshot {
            word_length: self.word_length(),
            attempt: self.attempt,
            guesses: self.guesses.clone(),
            verdicts: self.verdicts.clone(),
            exact: sorted(self.classification.exact()),
            elsewhere: sorted(self.classification.elsewhere()),
            absent: sorted(self.classification.absent()),
            finished: self.finished,
            won: self.won,
            rejected: self.rejected,
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("generation", &self.generation)
            .field("attempt", &self.attempt)
            .field("guesses", &self.guesses)
            .field("finished", &self.finished)
            .field("won", &self.won)
            .field("rejected", &self.rejected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::services::{AcceptAll, ServiceError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Rejects every word except the target, counting lookups
    #[derive(Default)]
    struct Strict {
        lookups: AtomicUsize,
    }

    impl WordValidator for Strict {
        fn lookup(&self, _candidate: &str) -> Result<bool, ServiceError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }
    }

    fn game(target: &str) -> Game {
        Game::new(Word::new(target).unwrap(), Arc::new(AcceptAll))
    }

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.add_letter(ch);
        }
    }

    fn play(game: &mut Game, word: &str) -> SubmitOutcome {
        type_word(game, word);
        game.submit()
    }

    #[test]
    fn new_game_is_awaiting_input() {
        let game = game("WORD");
        assert_eq!(game.phase(), Phase::AwaitingInput);
        assert_eq!(game.attempt(), 0);
        assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS - 1);
        assert_eq!(game.guesses().len(), MAX_ATTEMPTS);
        assert!(game.verdicts().iter().all(Option::is_none));
        assert!(game.revealed_target().is_none());
    }

    #[test]
    fn add_letter_uppercases_and_caps_length() {
        let mut game = game("WORD");
        type_word(&mut game, "wordy");
        assert_eq!(game.current_guess(), "WORD");
        assert_eq!(game.phase(), Phase::ReadyToSubmit);
    }

    #[test]
    fn add_letter_ignores_non_letters() {
        let mut game = game("WORD");
        type_word(&mut game, "w1 ?o");
        assert_eq!(game.current_guess(), "WO");
    }

    #[test]
    fn delete_letter_on_empty_is_noop() {
        let mut game = game("WORD");
        game.delete_letter();
        assert_eq!(game.current_guess(), "");

        type_word(&mut game, "wo");
        game.delete_letter();
        assert_eq!(game.current_guess(), "W");
    }

    #[test]
    fn submit_incomplete_is_ignored() {
        let mut game = game("WORD");
        type_word(&mut game, "wor");
        assert_eq!(game.submit(), SubmitOutcome::Ignored);
        assert_eq!(game.attempt(), 0);
        assert!(game.verdict(0).is_none());
    }

    #[test]
    fn win_on_first_guess() {
        let mut game = game("WORD");
        let outcome = play(&mut game, "word");

        let verdict = game.verdict(0).unwrap().clone();
        assert_eq!(verdict.marks(), &[Mark::Exact; 4]);
        assert_eq!(outcome, SubmitOutcome::Won(verdict));
        assert!(game.is_finished());
        assert!(game.is_won());
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.attempt(), 0);
    }

    #[test]
    fn loss_after_max_attempts_reveals_target() {
        let mut game = game("WORD");
        for (i, guess) in ["PLAY", "GAME", "TEST", "LOOK", "DROW"].iter().enumerate() {
            assert!(!game.is_finished());
            assert_eq!(game.attempt(), i);
            let outcome = play(&mut game, guess);
            if i < MAX_ATTEMPTS - 1 {
                assert!(matches!(outcome, SubmitOutcome::Continue(_)));
            } else {
                assert!(matches!(outcome, SubmitOutcome::Lost(_)));
            }
        }

        assert!(game.is_finished());
        assert!(!game.is_won());
        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.revealed_target().unwrap().text(), "WORD");
        assert!(game.verdicts().iter().all(Option::is_some));
    }

    #[test]
    fn input_ignored_after_finish() {
        let mut game = game("WORD");
        play(&mut game, "word");

        game.add_letter('A');
        game.delete_letter();
        assert_eq!(game.current_guess(), "WORD");
        assert_eq!(game.submit(), SubmitOutcome::Ignored);
    }

    #[test]
    fn rejected_guess_keeps_attempt_and_slot() {
        let mut game = Game::new(Word::new("WORD").unwrap(), Arc::new(Strict::default()));
        let outcome = play(&mut game, "wxyz");

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(game.is_rejected());
        assert_eq!(game.attempt(), 0);
        assert_eq!(game.current_guess(), "WXYZ");
        assert!(game.verdict(0).is_none());

        // Still editable, and the target itself is always accepted
        game.delete_letter();
        assert_eq!(game.current_guess(), "WXY");
        for _ in 0..3 {
            game.delete_letter();
        }
        let outcome = play(&mut game, "word");
        assert!(matches!(outcome, SubmitOutcome::Won(_)));
        assert!(!game.is_rejected());
    }

    #[test]
    fn accepted_guess_clears_rejection() {
        let mut game = Game::new(Word::new("WORD").unwrap(), Arc::new(Strict::default()));
        play(&mut game, "wxyz");
        assert!(game.is_rejected());

        let submission = game.begin_submit().unwrap();
        assert!(matches!(
            game.complete_submit(submission, true),
            SubmitOutcome::Continue(_)
        ));
        assert!(!game.is_rejected());
        assert_eq!(game.attempt(), 1);
    }

    #[test]
    fn initialize_twice_is_idempotent() {
        let mut fresh = game("WORD");
        fresh.initialize(Word::new("GAME").unwrap());
        let expected = fresh.snapshot();

        let mut used = game("WORD");
        play(&mut used, "play");
        play(&mut used, "wxyz");
        type_word(&mut used, "ga");
        used.initialize(Word::new("GAME").unwrap());
        assert_eq!(used.snapshot(), expected);

        used.initialize(Word::new("GAME").unwrap());
        assert_eq!(used.snapshot(), expected);
    }

    #[test]
    fn classification_exact_beats_earlier_elsewhere() {
        let mut game = game("WORD");
        play(&mut game, "oxxx");
        assert_eq!(game.key_state('O'), KeyState::Elsewhere);
        play(&mut game, "xoxx");
        assert_eq!(game.key_state('O'), KeyState::Exact);
        assert_eq!(game.key_state('X'), KeyState::Absent);
    }

    #[test]
    fn restart_between_begin_and_complete_is_stale() {
        let mut game = game("WORD");
        type_word(&mut game, "play");
        let submission = game.begin_submit().unwrap();

        game.initialize(Word::new("GAME").unwrap());
        assert_eq!(game.complete_submit(submission, true), SubmitOutcome::Stale);
        assert_eq!(game.attempt(), 0);
        assert!(game.verdict(0).is_none());
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn edited_guess_makes_submission_stale() {
        let mut game = game("WORD");
        type_word(&mut game, "play");
        let submission = game.begin_submit().unwrap();
        game.delete_letter();
        game.add_letter('N');

        assert_eq!(game.complete_submit(submission, true), SubmitOutcome::Stale);
        assert_eq!(game.attempt(), 0);
    }

    #[test]
    fn duplicate_submission_is_stale() {
        let mut game = game("WORD");
        type_word(&mut game, "play");
        let first = game.begin_submit().unwrap();
        let second = first.clone();

        assert!(matches!(
            game.complete_submit(first, true),
            SubmitOutcome::Continue(_)
        ));
        assert_eq!(game.complete_submit(second, true), SubmitOutcome::Stale);
        assert_eq!(game.attempt(), 1);
    }

    #[test]
    fn submission_validates_against_target() {
        let validator = Strict::default();
        let mut game = game("WORD");
        type_word(&mut game, "word");
        let submission = game.begin_submit().unwrap();

        assert!(submission.validate(&validator));
        assert_eq!(validator.lookups.load(Ordering::SeqCst), 0);
        assert_eq!(submission.attempt(), 0);
        assert_eq!(submission.guess().text(), "WORD");
    }

    #[test]
    fn start_uses_injected_source() {
        let game = Game::start(&Services::offline(), 6);
        assert_eq!(game.word_length(), 6);
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn restart_keeps_length_and_bumps_generation() {
        let mut game = game("WORD");
        play(&mut game, "play");
        game.restart(&crate::services::FallbackWords);

        assert_eq!(game.word_length(), 4);
        assert_eq!(game.generation(), 2);
        assert_eq!(game.attempt(), 0);
    }

    #[test]
    fn summary_only_when_finished() {
        let mut game = game("WORD");
        assert!(game.summary().is_none());
        play(&mut game, "play");
        play(&mut game, "word");

        let summary = game.summary().unwrap();
        assert!(summary.won);
        assert_eq!(summary.attempts, 2);
        assert_eq!(summary.target.text(), "WORD");
    }

    #[test]
    fn hint_reveals_prefix() {
        let game = game("WORLD");
        assert_eq!(game.hint(1), "W****");
    }

    #[test]
    fn progressive_hint_keeps_last_letter_masked() {
        let mut game = Game::new(Word::new("WORD").unwrap(), Arc::new(AcceptAll));
        assert_eq!(game.progressive_hint(), "W***");
        for guess in ["play", "game", "test", "look"] {
            play(&mut game, guess);
        }
        assert_eq!(game.attempt(), 4);
        assert_eq!(game.progressive_hint(), "WOR*");
    }
}
