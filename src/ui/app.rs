use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{GameEngine, MoveOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    config: AppConfig,
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Create the app and start the first game. Fails if the configured board
    /// size is unusable.
    pub fn new(config: AppConfig) -> Result<Self, GameError> {
        let engine = Self::fresh_engine(&config)?;
        let selected_column = engine.board().width() / 2;
        Ok(App {
            config,
            engine,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    fn fresh_engine(config: &AppConfig) -> Result<GameEngine, GameError> {
        GameEngine::new(config.players.first, config.board.rows, config.board.cols)
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

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
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.engine.board().width() {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        match Self::fresh_engine(&self.config) {
            Ok(engine) => {
                self.selected_column = engine.board().width() / 2;
                self.engine = engine;
                self.message = Some("New game started!".to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let players = &self.config.players;
        self.message = match self.engine.drop_piece(self.selected_column) {
            Ok(MoveOutcome::Placed { .. }) => None,
            Ok(MoveOutcome::Won { player, .. }) => Some(format!("{} wins!", players.name(player))),
            Ok(MoveOutcome::Tied) => Some("It's a draw!".to_string()),
            Ok(MoveOutcome::ColumnFull) => Some("Column is full!".to_string()),
            Ok(MoveOutcome::GameAlreadyOver) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
            Err(e) => {
                debug!(error = %e, "drop rejected");
                Some(e.to_string())
            }
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            &self.config.players,
            self.selected_column,
            self.message.as_deref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_app_selects_middle_column() {
        let app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.engine().active_player(), Player::One);
    }

    #[test]
    fn test_new_app_rejects_bad_board() {
        let mut config = AppConfig::default();
        config.board.rows = 2;
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_column_selection_is_clamped() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_enter_drops_piece() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.engine().occupant_at(5, 3), Some(Player::One));
        assert_eq!(app.engine().active_player(), Player::Two);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_number_keys_drop_in_column() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.engine().occupant_at(5, 0), Some(Player::One));
        assert_eq!(app.selected_column(), 0);

        // Column 9 does not exist on a 7-wide board
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.engine().moves().len(), 1);
    }

    #[test]
    fn test_win_message_uses_configured_name() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for c in ['4', '5', '4', '5', '4', '5', '4'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Player::One));
        assert_eq!(app.message(), Some("Red wins!"));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..6 {
            app.handle_key(key(KeyCode::Enter));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.engine().moves().len(), 6);
    }

    #[test]
    fn test_restart_starts_new_game() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.engine().moves().is_empty());
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default()).unwrap();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
