use crate::cli::Settings;
use crate::theme::Theme;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;
use wordsearch_core::{Difficulty, GeneratorConfig, InputEvent, Puzzle, SelectionOutcome};

/// Redraw rate while playing (~60 FPS)
pub const TICK_RATE: Duration = Duration::from_millis(16);

/// Ticks a status message stays up (~3 seconds)
const MESSAGE_TICKS: u32 = 180;

/// Result of handling an input event
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal gameplay
    Playing,
    /// Every word found
    Win,
}

/// Menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    None,
    NewGame,
}

/// The main application state
pub struct App {
    /// Current puzzle
    pub puzzle: Puzzle,
    /// Tier of the current puzzle
    pub difficulty: Difficulty,
    /// Words found so far, in the order found
    pub found: Vec<String>,
    /// Color theme
    pub theme: Theme,
    theme_index: usize,
    /// Message to display
    pub message: Option<String>,
    /// Whether the message reports a failure
    pub message_is_error: bool,
    message_timer: u32,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Current menu state
    pub menu: MenuState,
    /// Selected menu item
    pub menu_selection: usize,
    /// Terminal cell of the grid's top-left letter, set by the renderer
    pub grid_origin: (u16, u16),
    settings: Settings,
    games_started: u64,
}

impl App {
    /// Start the first game with the configured tier
    pub fn new(settings: Settings) -> Result<Self> {
        let difficulty = settings.difficulty;
        let puzzle = Self::build_puzzle(&settings, difficulty, 0)
            .with_context(|| format!("starting a {} game", difficulty))?;

        Ok(Self {
            puzzle,
            difficulty,
            found: Vec::new(),
            theme: Theme::dark(),
            theme_index: 0,
            message: None,
            message_is_error: false,
            message_timer: 0,
            screen_state: ScreenState::Playing,
            menu: MenuState::None,
            menu_selection: 0,
            grid_origin: (1, 1),
            settings,
            games_started: 1,
        })
    }

    /// Each new game in a seeded session gets its own derived seed
    fn build_puzzle(
        settings: &Settings,
        difficulty: Difficulty,
        game_number: u64,
    ) -> wordsearch_core::Result<Puzzle> {
        let config = GeneratorConfig {
            seed: settings.config.seed.map(|s| s.wrapping_add(game_number)),
            ..settings.config.clone()
        };
        Puzzle::from_difficulty(&settings.bank, difficulty, &config)?.with_cell_size(
            settings.cell_width.into(),
            settings.cell_height.into(),
        )
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the puzzle with a fresh one, keeping the old one on failure
    pub fn new_game(&mut self, difficulty: Difficulty) {
        match Self::build_puzzle(&self.settings, difficulty, self.games_started) {
            Ok(puzzle) => {
                self.games_started += 1;
                self.puzzle = puzzle;
                self.difficulty = difficulty;
                self.found.clear();
                self.screen_state = ScreenState::Playing;
                self.menu = MenuState::None;
                self.show_message(&format!("New {} game", difficulty));
            }
            Err(e) => {
                tracing::error!(error = %e, %difficulty, "Could not start game");
                self.show_error(&format!("Could not start: {}", e));
            }
        }
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_is_error = false;
        self.message_timer = MESSAGE_TICKS;
    }

    fn show_error(&mut self, msg: &str) {
        self.show_message(msg);
        self.message_is_error = true;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.menu != MenuState::None {
            return self.handle_menu_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('n') => {
                self.puzzle.cancel_drag();
                self.menu = MenuState::NewGame;
                self.menu_selection = Difficulty::all_levels()
                    .iter()
                    .position(|&d| d == self.difficulty)
                    .unwrap_or(0);
            }
            KeyCode::Enter if self.screen_state == ScreenState::Win => {
                self.new_game(self.difficulty);
            }
            KeyCode::Char('r') => self.new_game(self.difficulty),
            KeyCode::Char('t') => {
                let themes = Theme::all();
                self.theme_index = (self.theme_index + 1) % themes.len();
                self.theme = themes[self.theme_index].clone();
                self.show_message(&format!("{} theme", self.theme.name));
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> AppAction {
        let levels = Difficulty::all_levels();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.menu = MenuState::None,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_selection = self.menu_selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_selection = (self.menu_selection + 1).min(levels.len() - 1);
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.new_game(levels[index]);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let difficulty = levels[self.menu_selection.min(levels.len() - 1)];
                self.new_game(difficulty);
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Translate a mouse event into puzzle input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.menu != MenuState::None || self.screen_state != ScreenState::Playing {
            self.puzzle.cancel_drag();
            return;
        }

        let x = i32::from(mouse.column) - i32::from(self.grid_origin.0);
        let y = i32::from(mouse.row) - i32::from(self.grid_origin.1);

        let outcome = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.puzzle.handle_event(InputEvent::DragStart);
                self.puzzle.handle_event(InputEvent::PointerMoved { x, y })
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.puzzle.handle_event(InputEvent::PointerMoved { x, y })
            }
            MouseEventKind::Up(MouseButton::Left) => self.puzzle.handle_event(InputEvent::DragEnd),
            _ => return,
        };

        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: SelectionOutcome) {
        match outcome {
            SelectionOutcome::Tracking | SelectionOutcome::Miss | SelectionOutcome::Finished => {}
            SelectionOutcome::Found(placement) => {
                let remaining = self.puzzle.remaining().len();
                self.show_message(&format!(
                    "Found {}! {} {} left",
                    placement.word(),
                    remaining,
                    if remaining == 1 { "word" } else { "words" }
                ));
                self.found.push(placement.word().to_string());
            }
            SelectionOutcome::Completed(placement) => {
                self.found.push(placement.word().to_string());
                self.screen_state = ScreenState::Win;
                self.show_message("Congrats! Every word found");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use wordsearch_core::{Alphabet, Position, WordBank};

    fn settings(seed: u64) -> Settings {
        Settings {
            difficulty: Difficulty::Easy,
            bank: WordBank::builtin().unwrap(),
            config: GeneratorConfig::default().seeded(seed),
            cell_width: 3,
            cell_height: 1,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Drag across a word's cells from its last cell to its first
    fn drag_word(app: &mut App, cells: &[Position]) {
        let (ox, oy) = app.grid_origin;
        let at = |pos: &Position| (ox + pos.x as u16 * 3 + 1, oy + pos.y as u16);

        let mut path = cells.iter().rev();
        let first = path.next().unwrap();
        let (c, r) = at(first);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), c, r));
        for pos in path {
            let (c, r) = at(pos);
            app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), c, r));
        }
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), c, r));
    }

    #[test]
    fn test_new_app() {
        let app = App::new(settings(1)).unwrap();
        assert_eq!(app.difficulty, Difficulty::Easy);
        assert_eq!(app.screen_state, ScreenState::Playing);
        assert!(app.found.is_empty());
        assert_eq!(app.puzzle.dimension(), 12);
    }

    #[test]
    fn test_mouse_drag_finds_words_and_wins() {
        let mut app = App::new(settings(3)).unwrap();
        app.grid_origin = (5, 2);

        let placements = app.puzzle.remaining().to_vec();
        for placement in &placements {
            drag_word(&mut app, placement.cells());
        }

        assert_eq!(app.found.len(), placements.len());
        assert_eq!(app.screen_state, ScreenState::Win);
        assert!(app.puzzle.is_complete());
    }

    #[test]
    fn test_drag_off_grid_misses() {
        let mut app = App::new(settings(4)).unwrap();
        app.grid_origin = (5, 2);
        let cells = app.puzzle.remaining()[0].cells().to_vec();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        for pos in &cells {
            let column = 5 + pos.x as u16 * 3;
            let row = 2 + pos.y as u16;
            app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), column, row));
        }
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));

        assert!(app.found.is_empty());
        assert_eq!(app.puzzle.found_count(), 0);
    }

    #[test]
    fn test_new_game_menu() {
        let mut app = App::new(settings(5)).unwrap();
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.menu, MenuState::NewGame);
        assert_eq!(app.menu_selection, 0);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.menu, MenuState::None);
        assert_eq!(app.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_menu_mid_drag_drops_highlight() {
        let mut app = App::new(settings(5)).unwrap();
        let (ox, oy) = app.grid_origin;
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), ox + 1, oy));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), ox + 4, oy));
        assert!(app.puzzle.is_dragging());

        app.handle_key(key(KeyCode::Char('n')));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), ox + 4, oy));
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.menu, MenuState::None);
        assert!(!app.puzzle.is_dragging());
        assert!(app.puzzle.trace().is_empty());
    }

    #[test]
    fn test_restart_changes_seeded_board() {
        let mut app = App::new(settings(6)).unwrap();
        let before = app.puzzle.grid().to_string();
        app.handle_key(key(KeyCode::Char('r')));
        assert_ne!(app.puzzle.grid().to_string(), before);
    }

    #[test]
    fn test_failed_new_game_keeps_puzzle() {
        let mut settings = settings(7);
        settings.bank = WordBank::from_json(r#"{"Easy": ["CAT", "DOG"]}"#).unwrap();
        let mut app = App::new(settings).unwrap();

        app.new_game(Difficulty::Hard);
        assert_eq!(app.difficulty, Difficulty::Easy);
        assert!(app.message_is_error);
    }

    #[test]
    fn test_theme_cycles() {
        let mut app = App::new(settings(8)).unwrap();
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme.name, "Light");
        app.handle_key(key(KeyCode::Char('t')));
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme.name, "Dark");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(settings(9)).unwrap();
        assert!(matches!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit));
    }

    #[test]
    fn test_filler_setting_reaches_board() {
        let mut settings = settings(10);
        settings.config.filler = Alphabet::from_letters("Q").unwrap();
        let app = App::new(settings).unwrap();
        let filler_letters: Vec<char> = app
            .puzzle
            .rows()
            .flatten()
            .filter(|t| t.source() == wordsearch_core::TileSource::Filler)
            .map(|t| t.letter())
            .collect();
        assert!(filler_letters.iter().all(|&c| c == 'Q'));
    }
}
