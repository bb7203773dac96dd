//! Month-grid date picker used by the date selector.

use crate::ui::core::component::rect_contains;
use crate::utils::date::{days_in_month, first_of_month, shift_days, shift_months, today};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub const CALENDAR_WIDTH: u16 = 23;
pub const CALENDAR_HEIGHT: u16 = 10;

/// Month title and weekday names above the day rows
const HEADER_ROWS: u16 = 2;
const DAY_CELL_WIDTH: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    cursor: NaiveDate,
    open: bool,
    /// Where the grid was last drawn, while open
    area: Option<Rect>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(today())
    }
}

impl Calendar {
    pub fn new(cursor: NaiveDate) -> Self {
        Self {
            cursor,
            open: false,
            area: None,
        }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the grid, starting from `selected` when there is one
    pub fn open(&mut self, selected: Option<NaiveDate>) {
        if let Some(date) = selected {
            self.cursor = date;
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.area = None;
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Whether a screen cell falls inside the drawn grid, border included
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.open && rect_contains(self.area, column, row)
    }

    /// Day drawn at a screen cell; `None` for the border, the headings and blank cells
    pub fn date_at(&self, column: u16, row: u16) -> Option<NaiveDate> {
        let area = self.area.filter(|_| self.open)?;
        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        if !rect_contains(Some(inner), column, row) {
            return None;
        }

        let week = (row - inner.y).checked_sub(HEADER_ROWS)?;
        let weekday = (column - inner.x) / DAY_CELL_WIDTH;
        if weekday >= 7 {
            return None;
        }

        let first = first_of_month(self.cursor);
        let lead = first.weekday().num_days_from_sunday();
        let day = (u32::from(week) * 7 + u32::from(weekday) + 1).checked_sub(lead)?;
        if day == 0 || day > days_in_month(self.cursor) {
            return None;
        }
        first.with_day(day)
    }

    pub fn move_days(&mut self, days: i64) {
        self.cursor = shift_days(self.cursor, days);
    }

    pub fn move_months(&mut self, months: i32) {
        self.cursor = shift_months(self.cursor, months);
    }

    /// Draw the month around the cursor, highlighting it and `selected`
    pub fn render(&mut self, f: &mut Frame, area: Rect, selected: Option<NaiveDate>) {
        self.area = Some(area);
        let first = first_of_month(self.cursor);
        let lead = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(self.cursor);

        let mut lines = vec![Line::from(Span::styled(
            first.format("%B %Y").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)];
        lines.push(Line::from(Span::styled(
            "Su Mo Tu We Th Fr Sa",
            Style::default().fg(Color::DarkGray),
        )));

        let mut week: Vec<Span> = vec![Span::raw("   "); lead];
        for day in 1..=days {
            let Some(date) = first.with_day(day) else {
                continue;
            };
            let mut style = Style::default();
            if Some(date) == selected {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if date == self.cursor {
                style = style.fg(Color::Black).bg(Color::Cyan);
            }
            week.push(Span::styled(format!("{:>2} ", day), style));
            if (lead + day as usize) % 7 == 0 {
                lines.push(Line::from(std::mem::take(&mut week)));
            }
        }
        if !week.is_empty() {
            lines.push(Line::from(week));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
