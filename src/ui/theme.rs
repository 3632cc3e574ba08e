use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme - defines all semantic colors used in the selector
#[derive(Debug, Clone)]
pub struct ThemePalette {
    // Primary UI colors
    pub primary: Color,
    pub border: Color,
    pub highlight: Color,
    pub background: Color,

    // Result label colors
    pub name: Color,
    pub language: Color,
    pub stars: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_dim: Color,

    // Special colors
    pub preview_border: Color,
    pub help_section: Color,
}

impl ThemePalette {
    /// Palette for terminals where color is disabled
    pub fn plain() -> Self {
        Self {
            primary: Color::Reset,
            border: Color::Reset,
            highlight: Color::Reset,
            background: Color::Reset,
            name: Color::Reset,
            language: Color::Reset,
            stars: Color::Reset,
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            text_dim: Color::Reset,
            preview_border: Color::Reset,
            help_section: Color::Reset,
        }
    }
}

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Default,
    Nord,
    Dracula,
}

impl Theme {
    /// Get the color palette for this theme
    pub fn palette(&self) -> ThemePalette {
        match self {
            Theme::Default => ThemePalette {
                primary: Color::Cyan,
                border: Color::White,
                highlight: Color::DarkGray,
                background: Color::Black,

                name: Color::Green,
                language: Color::Blue,
                stars: Color::Yellow,

                text_primary: Color::White,
                text_secondary: Color::Gray,
                text_dim: Color::DarkGray,

                preview_border: Color::Green,
                help_section: Color::Yellow,
            },

            Theme::Nord => ThemePalette {
                // Nord color palette (https://www.nordtheme.com/)
                primary: Color::Rgb(136, 192, 208),    // Nord Frost - #88C0D0
                border: Color::Rgb(76, 86, 106),       // Nord Polar Night - #4C566A
                highlight: Color::Rgb(59, 66, 82),     // Nord Polar Night - #3B4252
                background: Color::Rgb(46, 52, 64),    // Nord Polar Night - #2E3440

                name: Color::Rgb(163, 190, 140),       // Nord Aurora Green - #A3BE8C
                language: Color::Rgb(129, 161, 193),   // Nord Frost Blue - #81A1C1
                stars: Color::Rgb(235, 203, 139),      // Nord Aurora Yellow - #EBCB8B

                text_primary: Color::Rgb(236, 239, 244),   // Nord Snow Storm - #ECEFF4
                text_secondary: Color::Rgb(216, 222, 233), // Nord Snow Storm - #D8DEE9
                text_dim: Color::Rgb(76, 86, 106),         // Nord Polar Night - #4C566A

                preview_border: Color::Rgb(163, 190, 140), // Nord Aurora Green - #A3BE8C
                help_section: Color::Rgb(235, 203, 139),   // Nord Aurora Yellow - #EBCB8B
            },

            Theme::Dracula => ThemePalette {
                // Dracula color palette (https://draculatheme.com/)
                primary: Color::Rgb(189, 147, 249),    // Purple - #BD93F9
                border: Color::Rgb(68, 71, 90),        // Current Line - #44475A
                highlight: Color::Rgb(68, 71, 90),     // Current Line - #44475A
                background: Color::Rgb(40, 42, 54),    // Background - #282A36

                name: Color::Rgb(80, 250, 123),        // Green - #50FA7B
                language: Color::Rgb(139, 233, 253),   // Cyan - #8BE9FD
                stars: Color::Rgb(241, 250, 140),      // Yellow - #F1FA8C

                text_primary: Color::Rgb(248, 248, 242),  // Foreground - #F8F8F2
                text_secondary: Color::Rgb(98, 114, 164), // Comment - #6272A4
                text_dim: Color::Rgb(68, 71, 90),         // Current Line - #44475A

                preview_border: Color::Rgb(80, 250, 123), // Green - #50FA7B
                help_section: Color::Rgb(241, 250, 140),  // Yellow - #F1FA8C
            },
        }
    }
}
