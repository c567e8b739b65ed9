//! Theme-aware styling
//!
//! Every widget pulls its colors from a `Palette` built for the active
//! theme, so toggling light/dark restyles the whole dashboard on the next
//! frame without touching any other state.

use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Colors used to distinguish category bars, assigned by position and
/// recycled when there are more categories than colors
pub const CHART_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

/// Color for the n-th category slice
pub fn chart_color(index: usize) -> Color {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Resolved color set for the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Default text
    pub fg: Color,
    /// Dashboard background
    pub bg: Color,
    /// Secondary text (hints, separators, empty states)
    pub muted: Color,
    /// Titles and focused borders
    pub accent: Color,
    /// Unfocused borders
    pub border: Color,
    /// Income amounts
    pub income: Color,
    /// Expense amounts and negative balances
    pub expense: Color,
    /// Overspend alert
    pub warning: Color,
}

impl Palette {
    /// Build the palette for a theme
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                income: Color::Green,
                expense: Color::Red,
                warning: Color::Yellow,
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                income: Color::Green,
                expense: Color::Red,
                warning: Color::Magenta,
            },
        }
    }

    /// Style for block titles
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Border style, highlighted when the panel is focused
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Secondary text style
    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for a signed amount
    pub fn amount(&self, negative: bool) -> Style {
        if negative {
            Style::default().fg(self.expense)
        } else {
            Style::default().fg(self.income)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.fg, light.fg);
        assert_ne!(dark.bg, light.bg);
    }

    #[test]
    fn test_chart_colors_cycle() {
        assert_eq!(chart_color(0), chart_color(CHART_COLORS.len()));
        assert_ne!(chart_color(0), chart_color(1));
    }
}
