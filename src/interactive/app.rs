//! TUI application state and logic

use crate::game::{Game, MAX_ATTEMPTS, Statistics, SubmitOutcome, Submission};
use crate::services::Services;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// How long the event loop waits for a key before checking on validation
const TICK: Duration = Duration::from_millis(100);

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    services: Services,
    pending: Option<Receiver<(Submission, bool)>>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Start a session with a freshly fetched target
    #[must_use]
    pub fn new(services: Services, word_length: usize) -> Self {
        let game = Game::start(&services, word_length);
        let mut app = Self {
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            services,
            pending: None,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {MAX_ATTEMPTS} tries.",
                app.game.word_length()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Whether a guess is out for validation
    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.pending.is_some()
    }

    /// Guesses the player can still make, counting the one being typed
    #[must_use]
    pub fn tries_left(&self) -> usize {
        if self.game.is_finished() {
            0
        } else {
            MAX_ATTEMPTS - self.game.attempt()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('h') if ctrl => self.show_hint(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.game.is_finished() => self.should_quit = true,
            KeyCode::Char('n') if self.game.is_finished() => self.new_game(),
            KeyCode::Char(letter) if !ctrl => self.game.add_letter(letter),
            KeyCode::Backspace => self.game.delete_letter(),
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    /// Send the current guess off for validation on a worker thread
    ///
    /// The validator may block on the network, so the answer comes back
    /// through a channel and is applied by [`App::poll_validation`].
    pub fn submit_guess(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if self.game.is_finished() {
            return;
        }
        let Some(submission) = self.game.begin_submit() else {
            self.add_message(
                &format!("Enter {} letters first.", self.game.word_length()),
                MessageStyle::Error,
            );
            return;
        };

        let validator = self.game.validator();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let accepted = submission.validate(validator.as_ref());
            // The app may have exited already
            let _ = tx.send((submission, accepted));
        });
        self.pending = Some(rx);
    }

    /// Apply a finished validation, if one has arrived
    ///
    /// Returns true when a result was consumed.
    pub fn poll_validation(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };

        match rx.try_recv() {
            Ok((submission, accepted)) => {
                self.pending = None;
                let outcome = self.game.complete_submit(submission, accepted);
                self.apply_outcome(&outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.add_message("Validation failed, try again.", MessageStyle::Error);
                true
            }
        }
    }

    fn apply_outcome(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rejected => {
                self.add_message("Please enter a valid word!", MessageStyle::Error);
            }
            SubmitOutcome::Continue(verdict) => {
                debug!("verdict {verdict}");
                let left = self.tries_left();
                self.add_message(
                    &format!(
                        "{} {} left",
                        left,
                        if left == 1 { "attempt" } else { "attempts" }
                    ),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::Won(_) | SubmitOutcome::Lost(_) => {
                let Some(summary) = self.game.summary() else {
                    return;
                };
                self.stats.record(&summary);
                if summary.won {
                    let celebration = match summary.attempts {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        _ => "😅 PHEW! Got it on the last try! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                } else {
                    self.add_message(
                        &format!("Out of attempts. The word was {}.", summary.target),
                        MessageStyle::Error,
                    );
                }
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SubmitOutcome::Stale => debug!("dropped a validation result from an old guess"),
            SubmitOutcome::Ignored => {}
        }
    }

    /// Abandon the current session and start another of the same length
    ///
    /// A validation still in flight is left to finish; its result no longer
    /// matches the session and gets dropped.
    pub fn new_game(&mut self) {
        self.game.restart(self.services.source.as_ref());
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Reveal one more letter of the target per attempt used
    pub fn show_hint(&mut self) {
        if self.game.is_finished() {
            return;
        }
        let hint = self.game.progressive_hint();
        self.add_message(&format!("💡 Hint: {hint}"), MessageStyle::Info);
    }

    /// Statistics of every game finished in this run, handed back on exit
    #[must_use]
    pub fn finish(self) -> Statistics {
        self.stats
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        app.poll_validation();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(app.finish());
        }
    }
}
