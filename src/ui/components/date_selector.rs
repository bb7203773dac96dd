//! Date field: a controlled input bound to a month-grid calendar.
//!
//! Digits and `/` edit the stored text directly. Arrow keys open the calendar
//! and move its cursor; Enter or a click on a day commits that date, stored as
//! `MM/DD/YYYY`.

use super::calendar::{Calendar, CALENDAR_HEIGHT, CALENDAR_WIDTH};
use super::common::{create_error_paragraph, create_field_block, create_input_paragraph, split_field_area, INPUT_HEIGHT};
use super::props::FieldProps;
use crate::constants::ROLE_ALERT;
use crate::form::{FieldName, FormContext};
use crate::ui::core::accessibility::{bool_attr, error_message_id, Accessibility, ErrorRegion};
use crate::ui::core::component::rect_contains;
use crate::ui::core::{Action, Component};
use crate::utils::date::{format_form_date, parse_form_date, FORM_DATE_LEN};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, text::Line, Frame};

pub struct DateSelector {
    props: FieldProps,
    /// Extra content drawn with the label, e.g. a format hint
    hint: Option<String>,
    calendar: Calendar,
    area: Option<Rect>,
}

impl DateSelector {
    pub fn new(props: FieldProps) -> Self {
        Self {
            props,
            hint: None,
            calendar: Calendar::default(),
            area: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Start the calendar cursor somewhere other than today
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Date currently held by the field, if it parses
    pub fn selected(&self, ctx: &FormContext) -> Option<NaiveDate> {
        ctx.get_value(self.props.input_for)
            .and_then(|v| v.value.as_deref())
            .and_then(|text| parse_form_date(text).ok())
    }

    /// Calendar change callback: store the picked date as text, or clear the field
    pub fn handle_change(&mut self, date: Option<NaiveDate>, ctx: &mut FormContext) {
        let value = date.map(format_form_date);
        if let Err(e) = ctx.set_value(self.props.input_for, value) {
            log::warn!("{}", e);
        }
    }

    fn current_text(&self, ctx: &FormContext) -> String {
        ctx.get_value(self.props.input_for)
            .map(|v| v.text().to_string())
            .unwrap_or_default()
    }

    fn store_text(&self, text: String, ctx: &mut FormContext) {
        let value = (!text.is_empty()).then_some(text);
        if let Err(e) = ctx.set_value(self.props.input_for, value) {
            log::warn!("{}", e);
        }
    }

    fn open_calendar(&mut self, ctx: &FormContext) {
        if !self.calendar.is_open() {
            let selected = self.selected(ctx);
            self.calendar.open(selected);
        }
    }

    fn input_id(&self) -> String {
        format!("{}-{}Id", self.props.component_name, self.props.field_key())
    }

    fn calendar_area(&self, frame: Rect) -> Option<Rect> {
        let input = self.area?;
        let width = CALENDAR_WIDTH.min(frame.width);
        let below = input.y + input.height;
        let y = if below + CALENDAR_HEIGHT <= frame.y + frame.height {
            below
        } else {
            input.y.saturating_sub(CALENDAR_HEIGHT).max(frame.y)
        };
        let height = CALENDAR_HEIGHT.min(frame.height);
        Some(Rect::new(input.x, y, width, height))
    }
}

impl Component for DateSelector {
    fn field(&self) -> FieldName {
        self.props.input_for
    }

    fn id(&self) -> String {
        self.input_id()
    }

    fn handle_key_events(&mut self, key: KeyEvent, ctx: &mut FormContext) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.calendar.close();
                Action::FocusNext
            }
            KeyCode::BackTab => {
                self.calendar.close();
                Action::FocusPrevious
            }
            KeyCode::Esc => {
                self.calendar.close();
                Action::None
            }
            KeyCode::Enter if self.calendar.is_open() => {
                let picked = self.calendar.cursor();
                self.handle_change(Some(picked), ctx);
                self.calendar.close();
                Action::None
            }
            KeyCode::Enter => Action::Submit,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                let was_open = self.calendar.is_open();
                self.open_calendar(ctx);
                if was_open {
                    match key.code {
                        KeyCode::Left => self.calendar.move_days(-1),
                        KeyCode::Right => self.calendar.move_days(1),
                        KeyCode::Up => self.calendar.move_days(-7),
                        KeyCode::Down => self.calendar.move_days(7),
                        KeyCode::PageUp => self.calendar.move_months(-1),
                        KeyCode::PageDown => self.calendar.move_months(1),
                        _ => {}
                    }
                }
                Action::None
            }
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Action::None,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '/' => {
                let mut text = self.current_text(ctx);
                if text.chars().count() < FORM_DATE_LEN {
                    text.push(c);
                    self.store_text(text, ctx);
                }
                Action::None
            }
            KeyCode::Backspace => {
                let mut text = self.current_text(ctx);
                text.pop();
                self.store_text(text, ctx);
                Action::None
            }
            KeyCode::Delete => {
                self.handle_change(None, ctx);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, ctx: &mut FormContext) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        if self.calendar.contains(mouse.column, mouse.row) {
            if let Some(date) = self.calendar.date_at(mouse.column, mouse.row) {
                self.handle_change(Some(date), ctx);
                self.calendar.close();
            }
        } else if rect_contains(self.area, mouse.column, mouse.row) {
            self.open_calendar(ctx);
        }
        Action::None
    }

    fn height(&self, ctx: &FormContext) -> u16 {
        INPUT_HEIGHT + u16::from(ctx.field_error(self.props.input_for).is_some())
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row) || self.calendar.contains(column, row)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &FormContext, focused: bool) {
        let error = ctx.field_error(self.props.input_for);
        let (input_area, error_area) = split_field_area(rect, error.is_some());
        self.area = Some(input_area);

        let text = self.current_text(ctx);
        let cursor = focused.then(|| text.chars().count());
        let mut block = create_field_block(&self.props.label_text, focused, error.is_some());
        if let Some(hint) = &self.hint {
            block = block.title_bottom(Line::from(format!(" {} ", hint)).right_aligned());
        }
        f.render_widget(create_input_paragraph(&text, cursor, block), input_area);

        if let (Some(err), Some(area)) = (error, error_area) {
            f.render_widget(create_error_paragraph(&err.error_msg), area);
        }
    }

    fn render_overlay(&mut self, f: &mut Frame, ctx: &FormContext) {
        if !self.calendar.is_open() {
            return;
        }
        let selected = self.selected(ctx);
        if let Some(area) = self.calendar_area(f.area()) {
            self.calendar.render(f, area, selected);
        }
    }

    fn accessibility(&self, ctx: &FormContext) -> Accessibility {
        let error = ctx.field_error(self.props.input_for);
        let key = self.props.field_key();
        let mut a11y = Accessibility {
            container_class: format!("{}-dateSelectorContainer", self.props.component_name),
            label_for: self.input_id(),
            label_text: self.props.label_text.clone(),
            input_id: self.input_id(),
            input_name: key.to_string(),
            ..Default::default()
        };
        a11y.set_aria("aria-required", "true");
        a11y.set_aria("aria-invalid", bool_attr(error.is_some()));
        a11y.set_aria("aria-describedby", error.map(|_| error_message_id(key)).unwrap_or_default());
        a11y.error_region = error.map(|err| ErrorRegion {
            id: error_message_id(key),
            role: ROLE_ALERT,
            message: err.error_msg.clone(),
        });
        a11y
    }

    fn on_blur(&mut self, _ctx: &mut FormContext) {
        self.calendar.close();
    }

    fn unmount(&mut self) {
        self.area = None;
        self.calendar.close();
    }
}
