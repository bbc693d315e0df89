use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name shown when cycling
    pub name: &'static str,
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid frame color
    pub border: Color,
    /// Letter tile color
    pub letter: Color,
    /// Background of cells in the drag in progress
    pub selected_bg: Color,
    /// Background of cells whose word was found
    pub found_bg: Color,
    /// Found words and the win banner
    pub success: Color,
    /// Info panel text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Error message color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "Dark",
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 75, g: 75, b: 75 },
            letter: Color::Rgb { r: 255, g: 255, b: 255 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            found_bg: Color::Rgb { r: 30, g: 60, b: 40 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "Light",
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            letter: Color::Rgb { r: 0, g: 0, b: 0 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            found_bg: Color::Rgb { r: 200, g: 235, b: 205 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            name: "High contrast",
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            letter: Color::Yellow,
            selected_bg: Color::Blue,
            found_bg: Color::DarkGreen,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
            error: Color::Red,
        }
    }

    /// All themes in cycling order
    pub fn all() -> [Theme; 3] {
        [Self::dark(), Self::light(), Self::high_contrast()]
    }
}
