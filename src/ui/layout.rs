//! Layout management and calculations

use crate::constants::FORM_MAX_WIDTH;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header (1 line), form body and status bar (2 lines)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(2)])
            .split(area)
            .to_vec()
    }

    /// Horizontally centered column the fields are stacked in
    #[must_use]
    pub fn form_column(area: Rect) -> Rect {
        let width = area.width.min(FORM_MAX_WIDTH);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    /// Stack fields of the given heights top to bottom inside `area`.
    ///
    /// When they don't all fit, the stack is scrolled just enough to keep the
    /// focused field visible. Fields that end up off screen get `None`.
    #[must_use]
    pub fn field_layout(area: Rect, heights: &[u16], focused: usize) -> Vec<Option<Rect>> {
        let focused = focused.min(heights.len().saturating_sub(1));
        let mut start = 0;
        while start < focused && Self::span(&heights[start..=focused]) > u32::from(area.height) {
            start += 1;
        }

        let mut rects = vec![None; heights.len()];
        let bottom = area.y + area.height;
        let mut y = area.y;
        for (i, height) in heights.iter().enumerate().skip(start) {
            if y + height > bottom {
                break;
            }
            rects[i] = Some(Rect::new(area.x, y, area.width, *height));
            y += height;
        }
        rects
    }

    fn span(heights: &[u16]) -> u32 {
        heights.iter().map(|h| u32::from(*h)).sum()
    }

    /// Helper function to create a centered rectangle
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
