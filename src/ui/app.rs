use crate::config::AppConfig;
use crate::game::{GameState, MoveError, Outcome, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Interactive game session. Owns the game state and passes it to the
/// renderer explicitly; restarting builds a fresh state from the same
/// configuration.
pub struct App {
    config: AppConfig,
    game: GameState,
    selected_column: usize,
    last_drop: Option<(usize, usize)>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let game = new_game(&config);
        let selected_column = game.board().cols() / 2; // Start in middle
        App {
            config,
            game,
            selected_column,
            last_drop: None,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game = new_game(&self.config);
                self.selected_column = self.game.board().cols() / 2;
                self.last_drop = None;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game.drop_piece(self.selected_column) {
            Ok((row, col)) => {
                self.last_drop = Some((row, col));
                match self.game.outcome() {
                    Outcome::Win(side) => {
                        self.message = Some(format!(
                            "Player {} ({}) wins!",
                            side.number(),
                            self.game.player(side).color()
                        ));
                    }
                    Outcome::Tie => {
                        self.message = Some("It's a tie!".to_string());
                    }
                    Outcome::InProgress => {}
                }
            }
            Err(MoveError::ColumnFull(col)) => {
                self.message = Some(format!("Column {} is full!", col + 1));
            }
            Err(MoveError::InvalidColumn(col)) => {
                self.message = Some(format!("Column {} is off the board!", col + 1));
            }
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            self.last_drop,
            &self.message,
        );
    }
}

/// Build a game from validated configuration: board dimensions plus the
/// two contestants' display colors.
fn new_game(config: &AppConfig) -> GameState {
    GameState::with_board_size(
        Player::new(config.players.one.color.clone()),
        Player::new(config.players.two.color.clone()),
        config.board.rows,
        config.board.cols,
    )
}
