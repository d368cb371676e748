//! TUI application state and logic
//!
//! The engine lives on a [`Worker`] thread. The event loop polls the keyboard
//! with a short timeout and drains worker responses between frames, so the
//! build gauge and ranking progress keep moving while the engine works.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::core::{Pattern, WORD_LEN};
use crate::game::{GameSession, GameStatus};
use crate::solver::{
    BuildProgress, EngineConfig, EngineError, Ranking, Response, SearchMode, Worker,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const MAX_MESSAGES: usize = 5;

/// Engine lifecycle as seen by the interface
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Matrix is being built
    Loading,
    Ready,
    /// Init failed; nothing else can run
    Failed(String),
}

/// Request currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Busy {
    Idle,
    Filtering,
    Ranking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Guess,
    /// Typing the feedback for the pending guess
    Feedback,
    /// Solved or dead end; only new game or quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub worker: Worker,
    pub session: GameSession,
    pub phase: Phase,
    pub busy: Busy,
    pub build_progress: Option<BuildProgress>,
    pub compute_progress: Option<f64>,
    pub status_message: String,
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Highlighted row in the candidates list
    pub selected: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    /// Start the engine worker and queue matrix construction
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread cannot be started.
    pub fn new(
        solutions: Vec<String>,
        dictionary: Vec<String>,
        config: EngineConfig,
        mode: SearchMode,
    ) -> Result<Self> {
        let mut session = GameSession::new(solutions.clone(), &dictionary);
        session.set_mode(mode);
        let worker = Worker::spawn()?;
        worker.init(solutions, dictionary, config)?;

        Ok(Self {
            worker,
            session,
            phase: Phase::Loading,
            busy: Busy::Idle,
            build_progress: None,
            compute_progress: None,
            status_message: "Starting engine...".to_string(),
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            selected: 0,
            messages: vec![Message {
                text: "Type the word you played, or press Tab for the best move.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        })
    }

    /// Apply every response the worker has produced so far
    pub fn poll_worker(&mut self) {
        loop {
            match self.worker.try_recv() {
                Ok(Some(response)) => self.handle_response(response),
                Ok(None) => break,
                Err(err) => {
                    self.fail(&err);
                    break;
                }
            }
        }
    }

    fn handle_response(&mut self, response: Response) {
        match response {
            Response::Progress(progress) => self.build_progress = Some(progress),
            Response::Status(message) => self.status_message = message,
            Response::ComputeProgress(percent) => self.compute_progress = Some(percent),
            Response::Ready => {
                self.phase = Phase::Ready;
                self.build_progress = None;
                self.request_ranking();
            }
            Response::Filtered(indices) => {
                self.busy = Busy::Idle;
                self.session.apply_filtered(indices);
                self.after_filter();
            }
            Response::BestCandidates(ranking) => {
                self.busy = Busy::Idle;
                self.compute_progress = None;
                self.apply_ranking(ranking);
            }
            Response::Error(err) => {
                if self.busy == Busy::Filtering {
                    self.input_mode = InputMode::Guess;
                }
                self.busy = Busy::Idle;
                if self.phase == Phase::Loading {
                    self.fail(&err);
                } else {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
            }
        }
    }

    fn fail(&mut self, err: &EngineError) {
        log::error!("engine failed: {err}");
        self.phase = Phase::Failed(err.to_string());
        self.busy = Busy::Idle;
    }

    fn apply_ranking(&mut self, ranking: Ranking) {
        // Mode changed while the pass was running; rank again
        if ranking.mode != self.session.mode() {
            self.request_ranking();
            return;
        }
        self.session.apply_ranking(ranking);
        self.selected = 0;
    }

    fn after_filter(&mut self) {
        let remaining = self.session.candidates().len();
        match self.session.status() {
            GameStatus::Solved(word) => {
                let guesses = self.session.guesses().len();
                self.add_message(
                    &format!(
                        "Solution found: {} ({guesses} guess{})",
                        word.to_uppercase(),
                        if guesses == 1 { "" } else { "es" }
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            GameStatus::DeadEnd => {
                self.add_message(
                    "No solutions match. Check your feedback patterns.",
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' to start over.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            GameStatus::InProgress => {
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
                self.input_mode = InputMode::Guess;
                self.request_ranking();
            }
        }
    }

    /// Ask the worker for a ranking if one is due and nothing is in flight
    pub fn request_ranking(&mut self) {
        if self.phase != Phase::Ready || self.busy != Busy::Idle || !self.session.needs_ranking() {
            return;
        }
        match self
            .worker
            .find_best(self.session.candidates().to_vec(), self.session.mode())
        {
            Ok(()) => {
                self.busy = Busy::Ranking;
                self.compute_progress = None;
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Submit the typed word, or the highlighted candidate if nothing is typed
    pub fn submit_guess(&mut self) {
        let word = if self.input_buffer.is_empty() {
            match self.session.visible_candidates().get(self.selected) {
                Some(candidate) => candidate.word.clone(),
                None => return,
            }
        } else {
            self.input_buffer.clone()
        };

        match self.session.submit_guess(&word) {
            Ok(()) => {
                self.input_buffer.clear();
                self.input_mode = InputMode::Feedback;
                self.add_message(
                    &format!("Enter feedback for {}", word.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Parse the typed feedback and send it to the worker
    pub fn submit_feedback(&mut self) {
        let Some(pattern) = Pattern::from_str(&self.input_buffer) else {
            self.add_message("Invalid pattern! Use G/Y/- or 🟩🟨⬜", MessageStyle::Error);
            return;
        };

        match self.session.record_feedback(pattern) {
            Ok(guess) => {
                self.input_buffer.clear();
                match self
                    .worker
                    .filter(guess, pattern, self.session.candidates().to_vec())
                {
                    Ok(()) => self.busy = Busy::Filtering,
                    Err(err) => self.fail(&err),
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Put the top recommendation in the input box
    pub fn use_best_move(&mut self) {
        if let Some(best) = self.session.best_move() {
            self.input_buffer = best.to_string();
        }
    }

    pub fn toggle_mode(&mut self) {
        self.session.toggle_mode();
        self.add_message(
            &format!("Mode: {}", self.session.mode()),
            MessageStyle::Info,
        );
        self.request_ranking();
    }

    pub fn toggle_hide_solutions(&mut self) {
        self.session.toggle_hide_solutions();
        self.selected = 0;
    }

    /// Start over; ignored while a filter or ranking is in flight
    pub fn new_game(&mut self) {
        if self.busy != Busy::Idle {
            self.add_message("Wait for the current search to finish", MessageStyle::Info);
            return;
        }
        self.session.reset();
        self.input_buffer.clear();
        self.input_mode = InputMode::Guess;
        self.selected = 0;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.request_ranking();
    }

    pub fn move_selection(&mut self, down: bool) {
        let len = self.session.visible_candidates().len();
        if len == 0 {
            self.selected = 0;
        } else if down {
            self.selected = (self.selected + 1).min(len - 1);
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('n'), true) => {
                self.new_game();
                return;
            }
            (KeyCode::Char('t'), true) => {
                self.toggle_mode();
                return;
            }
            (KeyCode::Char('b'), true) => {
                self.toggle_hide_solutions();
                return;
            }
            _ => {}
        }

        // Input stays disabled until the engine answers
        if self.phase != Phase::Ready || self.busy == Busy::Filtering {
            if key.code == KeyCode::Esc {
                self.should_quit = true;
            }
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.use_best_move(),
                KeyCode::Up => self.move_selection(false),
                KeyCode::Down => self.move_selection(true),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LEN {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Esc => {
                    if let Some(word) = self.session.cancel_pending() {
                        self.add_message(
                            &format!("Cancelled {}", word.to_uppercase()),
                            MessageStyle::Info,
                        );
                    }
                    self.input_buffer.clear();
                    self.input_mode = InputMode::Guess;
                }
                KeyCode::Char(c) if Pattern::from_str(&c.to_string().repeat(WORD_LEN)).is_some() => {
                    if self.input_buffer.chars().count() < WORD_LEN {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_feedback(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_worker();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
