use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Rows taken by a bordered input box
pub const INPUT_HEIGHT: u16 = 3;

/// Border color for a field in the given state; errors win over focus
pub fn field_color(focused: bool, invalid: bool) -> Color {
    if invalid {
        Color::Red
    } else if focused {
        Color::Cyan
    } else {
        Color::Gray
    }
}

/// Creates the bordered block around an input, outlined in red when invalid
pub fn create_field_block(label: &str, focused: bool, invalid: bool) -> Block<'static> {
    let color = field_color(focused, invalid);
    let title_style = if focused {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", label))
        .title_style(title_style)
        .border_style(Style::default().fg(color))
}

/// Creates an input field paragraph with a visual cursor when focused
pub fn create_input_paragraph(text: &str, cursor: Option<usize>, block: Block<'static>) -> Paragraph<'static> {
    let line = match cursor {
        Some(position) => {
            let split = text.char_indices().nth(position).map(|(i, _)| i).unwrap_or(text.len());
            let (before, after) = text.split_at(split);
            let mut rest = after.chars();
            let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled(under_cursor, Style::default().add_modifier(Modifier::REVERSED)),
                Span::raw(rest.as_str().to_string()),
            ])
        }
        None => Line::from(text.to_string()),
    };

    Paragraph::new(line).block(block).style(Style::default().fg(Color::White))
}

/// Creates the alert line shown under an invalid field
pub fn create_error_paragraph(message: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("✗ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
    ]))
}

/// Splits a field area into input box and optional error line
pub fn split_field_area(area: Rect, with_error: bool) -> (Rect, Option<Rect>) {
    let input_height = INPUT_HEIGHT.min(area.height);
    let input = Rect::new(area.x, area.y, area.width, input_height);
    let error = (with_error && area.height > input_height)
        .then(|| Rect::new(area.x, area.y + input_height, area.width, 1));
    (input, error)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used by the status bar
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_NAVIGATE: InstructionShortcut = ("↑↓", Color::Cyan, " Suggestions");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const CTRL_L_LOGS: InstructionShortcut = ("Ctrl+L", Color::Yellow, " Logs");
    pub const CTRL_R_RESET: InstructionShortcut = ("Ctrl+R", Color::Yellow, " Reset");
    pub const CTRL_Q_QUIT: InstructionShortcut = ("Ctrl+Q", Color::Red, " Quit");
}
