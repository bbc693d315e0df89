use crate::app::{App, MenuState, ScreenState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use wordsearch_core::{Difficulty, Position};

/// Width of the panel to the right of the grid
const INFO_WIDTH: u16 = 24;

/// Gap between the grid frame and the info panel
const PANEL_GAP: u16 = 3;

/// Framed grid size in terminal cells, or `None` if the screen layout
/// would not fit in terminal coordinates
pub fn grid_frame_size(dimension: usize, cell_width: u16, cell_height: u16) -> Option<(u16, u16)> {
    let dimension = u16::try_from(dimension).ok()?;
    let width = dimension.checked_mul(cell_width)?.checked_add(2)?;
    let height = dimension.checked_mul(cell_height)?.checked_add(2)?;
    // Room for the info panel, the controls below the grid and centering offsets
    width.checked_add(PANEL_GAP + INFO_WIDTH + 64)?;
    height.checked_add(64)?;
    Some((width, height))
}

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    queue!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;
    render_game_screen(stdout, app, term_width, term_height)?;
    queue!(stdout, Show)?;
    stdout.flush()
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let Some((grid_width, grid_height)) = grid_frame_size(
        app.puzzle.dimension(),
        app.settings().cell_width,
        app.settings().cell_height,
    ) else {
        return Ok(());
    };

    // Center the grid horizontally, leave room for info panel
    let total_width = grid_width + PANEL_GAP + INFO_WIDTH;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > grid_height + 8 { 2 } else { 1 };

    // Mouse input is measured from the first letter cell, inside the frame
    app.grid_origin = (start_x + 1, start_y + 1);

    render_grid(stdout, app, start_x, start_y)?;
    render_info_panel(stdout, app, start_x + grid_width + PANEL_GAP, start_y)?;
    render_controls(stdout, app, start_x, start_y + grid_height + 1)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width, term_height)?;
    }

    if app.screen_state == ScreenState::Win {
        render_win_banner(stdout, app, start_x, start_y, grid_width, grid_height)?;
    }

    if app.menu != MenuState::None {
        render_menu(stdout, app, term_width, term_height)?;
    }

    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let cell_width = app.settings().cell_width as usize;
    let cell_height = app.settings().cell_height;
    let dimension = app.puzzle.dimension();

    let edge = format!("+{}+", "-".repeat(dimension * cell_width));
    queue!(
        stdout,
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        MoveTo(x, y),
        Print(&edge)
    )?;

    for (row, tiles) in app.puzzle.rows().enumerate() {
        for line in 0..cell_height {
            let cell_y = y + 1 + row as u16 * cell_height + line;
            queue!(
                stdout,
                MoveTo(x, cell_y),
                SetBackgroundColor(theme.bg),
                SetForegroundColor(theme.border),
                Print("|")
            )?;

            for (col, tile) in tiles.iter().enumerate() {
                let pos = Position::new(col, row);
                let bg = if app.puzzle.trace().contains(pos) {
                    theme.selected_bg
                } else if tile.is_cleared() {
                    theme.found_bg
                } else {
                    theme.bg
                };

                // Letter sits on the middle line of tall cells
                let text = match tile.visible() {
                    Some(letter) if line == cell_height / 2 => {
                        format!("{:^width$}", letter, width = cell_width)
                    }
                    _ => " ".repeat(cell_width),
                };
                queue!(
                    stdout,
                    SetBackgroundColor(bg),
                    SetForegroundColor(theme.letter),
                    Print(text)
                )?;
            }

            queue!(
                stdout,
                SetBackgroundColor(theme.bg),
                SetForegroundColor(theme.border),
                Print("|")
            )?;
        }
    }

    let bottom_y = y + 1 + dimension as u16 * cell_height;
    queue!(stdout, MoveTo(x, bottom_y), Print(&edge))?;
    Ok(())
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let puzzle = &app.puzzle;

    // Title
    queue!(
        stdout,
        SetBackgroundColor(theme.bg),
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print("═══ WORD SEARCH ═══")
    )?;

    queue!(
        stdout,
        MoveTo(x, y + 2),
        SetForegroundColor(theme.info),
        Print(format!("Level: {:>12}", app.difficulty.to_string())),
        MoveTo(x, y + 3),
        Print(format!(
            "Grid: {:>13}",
            format!("{0}x{0}", puzzle.dimension())
        )),
        MoveTo(x, y + 4),
        Print(format!(
            "Found: {:>12}",
            format!("{}/{}", puzzle.found_count(), puzzle.total_words())
        ))
    )?;

    queue!(
        stdout,
        MoveTo(x, y + 6),
        SetForegroundColor(theme.border),
        Print("───────────────────")
    )?;

    // Words left to find, then the ones already found
    let mut line = y + 8;
    queue!(
        stdout,
        MoveTo(x, y + 7),
        SetForegroundColor(theme.info),
        Print("Words:")
    )?;
    for word in puzzle.remaining_words() {
        queue!(
            stdout,
            MoveTo(x + 2, line),
            SetForegroundColor(theme.fg),
            Print(word)
        )?;
        line += 1;
    }
    for word in &app.found {
        queue!(
            stdout,
            MoveTo(x + 2, line),
            SetForegroundColor(theme.success),
            Print(format!("{} ✓", word))
        )?;
        line += 1;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    let controls = [
        ("Drag", "Select word"),
        ("n", "New game"),
        ("r", "Restart"),
        ("t", "Theme"),
        ("q", "Quit"),
    ];

    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 3;
        let row = i % 3;
        let cx = x + (col as u16) * 20;
        let cy = y + row as u16;

        queue!(
            stdout,
            MoveTo(cx, cy),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.key),
            Print(format!("{:>5}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let color = if app.message_is_error {
        theme.error
    } else {
        theme.success
    };

    let width = msg.chars().count() as u16;
    let x = term_width.saturating_sub(width) / 2;
    let y = term_height.saturating_sub(2);

    queue!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(color),
        Print(msg)
    )?;
    Ok(())
}

fn render_win_banner(
    stdout: &mut io::Stdout,
    app: &App,
    grid_x: u16,
    grid_y: u16,
    grid_width: u16,
    grid_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let lines = [
        String::new(),
        "CONGRATS!".to_string(),
        format!("All {} words found", app.puzzle.total_words()),
        String::new(),
        "Enter/r: play again".to_string(),
        "n: new game  q: quit".to_string(),
        String::new(),
    ];

    let box_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 4;
    let box_x = grid_x + grid_width.saturating_sub(box_width) / 2;
    let box_y = grid_y + grid_height.saturating_sub(lines.len() as u16) / 2;

    for (i, text) in lines.iter().enumerate() {
        let color = if i == 1 { theme.success } else { theme.fg };
        queue!(
            stdout,
            MoveTo(box_x, box_y + i as u16),
            SetBackgroundColor(theme.found_bg),
            SetForegroundColor(color),
            Print(format!("{:^width$}", text, width = box_width as usize))
        )?;
    }
    Ok(())
}

fn render_menu(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let levels = Difficulty::all_levels();

    let box_width: u16 = 26;
    let box_height = levels.len() as u16 + 4;
    let x = term_width.saturating_sub(box_width) / 2;
    let y = term_height.saturating_sub(box_height) / 2;

    let blank = " ".repeat(box_width as usize);
    for row in 0..box_height {
        queue!(
            stdout,
            MoveTo(x, y + row),
            SetBackgroundColor(theme.selected_bg),
            Print(&blank)
        )?;
    }

    queue!(
        stdout,
        MoveTo(x + 2, y + 1),
        SetForegroundColor(theme.key),
        Print("New game")
    )?;

    for (i, level) in levels.iter().enumerate() {
        let selected = i == app.menu_selection;
        let marker = if selected { ">" } else { " " };
        let color = if selected { theme.letter } else { theme.info };
        queue!(
            stdout,
            MoveTo(x + 2, y + 2 + i as u16),
            SetForegroundColor(color),
            Print(format!("{} {}. {}", marker, i + 1, level))
        )?;
    }

    queue!(
        stdout,
        MoveTo(x + 2, y + box_height - 1),
        SetForegroundColor(Color::Grey),
        Print("Enter: start  Esc: back")
    )?;
    Ok(())
}

/// Leave the terminal clean after the app exits
pub fn clear(stdout: &mut io::Stdout) -> io::Result<()> {
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
}
