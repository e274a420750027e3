use crate::model::ElementState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub comparing: Color, // Yellow
    pub swapping: Color,  // Red
    pub sorted: Color,    // Green
    pub pivot: Color,     // Purple
    pub number: Color,
}

impl Theme {
    /// Bar color for an element state
    pub fn state_color(&self, state: ElementState) -> Color {
        match state {
            ElementState::Default => self.primary,
            ElementState::Comparing => self.comparing,
            ElementState::Swapping => self.swapping,
            ElementState::Sorted => self.sorted,
            ElementState::Pivot => self.pivot,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
    comparing: Color::Rgb(249, 226, 175),
    swapping: Color::Rgb(243, 139, 168),
    sorted: Color::Rgb(166, 227, 161),
    pivot: Color::Rgb(203, 166, 247),
    number: Color::Rgb(250, 179, 135), // Orange for numbers
};
