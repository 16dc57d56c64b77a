use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{GameResult, GameState, MoveOutcome, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info};

use super::computer::ComputerPlayer;
use super::game_view::{self, ViewState};
use super::Palette;

/// Interactive session: owns one long-lived [`GameState`] and maps key
/// presses to moves.
pub struct App {
    game_state: GameState,
    palette: Palette,
    computer: Option<ComputerPlayer>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    computer_note: Option<String>,
}

impl App {
    pub fn new(game_state: GameState, palette: Palette, computer: Option<ComputerPlayer>) -> Self {
        let selected_column = game_state.width() / 2; // Start in middle
        App {
            game_state,
            palette,
            computer,
            selected_column,
            should_quit: false,
            message: None,
            computer_note: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let game_state = GameState::initialize(config.board.height, config.board.width)?;
        let palette = Palette::from_config(config)?;
        let computer = config.computer.enabled.then(ComputerPlayer::new);
        Ok(Self::new(game_state, palette, computer))
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn computer_note(&self) -> Option<&str> {
        self.computer_note.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        info!(
            height = self.game_state.height(),
            width = self.game_state.width(),
            "session started"
        );
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!("session ended");
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear messages on any key press
        self.message = None;
        self.computer_note = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column + 1 < self.game_state.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.game_state.width() {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char('r') | KeyCode::Char('n') => {
                self.new_game();
            }
            _ => {}
        }
    }

    fn new_game(&mut self) {
        self.game_state.reset();
        if let Some(computer) = self.computer.as_mut() {
            computer.reroll();
        }
        self.selected_column = self.game_state.width() / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Drop piece in `column` for the current player
    fn drop_piece(&mut self, column: usize) {
        match self.game_state.apply_move(column) {
            Ok(MoveOutcome::Applied(placement)) => {
                if placement.player == Player::Two {
                    self.computer_note = self.computer.as_ref().map(ComputerPlayer::announce);
                }
                self.message = match placement.result {
                    GameResult::Won(player) => Some(format!("{player} won!")),
                    GameResult::Tie => Some("Tie!".to_string()),
                    GameResult::InProgress => None,
                };
            }
            Ok(MoveOutcome::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameAlreadyOver { .. }) => {
                self.message = Some("Game over! Press 'r' to start a new game.".to_string());
            }
        }
        if let Some(message) = &self.message {
            debug!(column, message = %message, "move feedback");
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let view = ViewState {
            selected_column: self.selected_column,
            message: self.message.as_deref(),
            computer_note: self.computer_note.as_deref(),
        };
        game_view::render(frame, &self.game_state, &self.palette, &view);
    }
}
