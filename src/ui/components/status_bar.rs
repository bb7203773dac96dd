//! Bottom line: keyboard shortcuts and the outcome of the last submit.

use super::common::{create_instructions_paragraph, shortcuts};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: Rect, message: Option<&StatusMessage>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        if let Some(message) = message {
            let (text, color) = match message {
                StatusMessage::Info(text) => (text.as_str(), Color::Green),
                StatusMessage::Error(text) => (text.as_str(), Color::Red),
            };
            f.render_widget(
                Paragraph::new(text.to_string()).style(Style::default().fg(color)),
                chunks[0],
            );
        }

        let instructions = create_instructions_paragraph(&[
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ARROWS_NAVIGATE,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::CTRL_R_RESET,
            shortcuts::SEPARATOR,
            shortcuts::CTRL_L_LOGS,
            shortcuts::SEPARATOR,
            shortcuts::CTRL_Q_QUIT,
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}
