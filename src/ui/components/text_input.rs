//! Single-line text field with cursor editing.

use super::common::{create_error_paragraph, create_field_block, create_input_paragraph, split_field_area, INPUT_HEIGHT};
use super::props::FieldProps;
use crate::constants::ROLE_ALERT;
use crate::form::{FieldName, FormContext};
use crate::ui::core::accessibility::{bool_attr, error_message_id, Accessibility, ErrorRegion};
use crate::ui::core::component::rect_contains;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct TextInput {
    props: FieldProps,
    masked: bool,
    cursor_position: usize,
    area: Option<Rect>,
}

impl TextInput {
    pub fn new(props: FieldProps) -> Self {
        Self {
            props,
            masked: false,
            cursor_position: 0,
            area: None,
        }
    }

    /// Render `•` instead of the typed characters
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn current_text(&self, ctx: &FormContext) -> String {
        ctx.get_value(self.props.input_for)
            .map(|v| v.text().to_string())
            .unwrap_or_default()
    }

    fn store(&self, ctx: &mut FormContext, text: String) {
        if let Err(e) = ctx.set_value(self.props.input_for, Some(text)) {
            log::warn!("{}", e);
        }
    }

    fn input_id(&self) -> String {
        format!("{}-{}Id", self.props.component_name, self.props.field_key())
    }

    fn edit(&mut self, key: KeyEvent, ctx: &mut FormContext) {
        let mut chars: Vec<char> = self.current_text(ctx).chars().collect();
        self.cursor_position = self.cursor_position.min(chars.len());

        match key.code {
            KeyCode::Char(c) => {
                chars.insert(self.cursor_position, c);
                self.cursor_position += 1;
            }
            KeyCode::Backspace => {
                if self.cursor_position == 0 {
                    return;
                }
                self.cursor_position -= 1;
                chars.remove(self.cursor_position);
            }
            KeyCode::Delete => {
                if self.cursor_position >= chars.len() {
                    return;
                }
                chars.remove(self.cursor_position);
            }
            _ => return,
        }

        self.store(ctx, chars.into_iter().collect());
    }
}

impl Component for TextInput {
    fn field(&self) -> FieldName {
        self.props.input_for
    }

    fn id(&self) -> String {
        self.input_id()
    }

    fn handle_key_events(&mut self, key: KeyEvent, ctx: &mut FormContext) -> Action {
        let len = self.current_text(ctx).chars().count();
        match key.code {
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Enter => Action::Submit,
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Action::None,
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete => {
                self.edit(key, ctx);
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.min(len).saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(len);
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = len;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn height(&self, ctx: &FormContext) -> u16 {
        INPUT_HEIGHT + u16::from(ctx.field_error(self.props.input_for).is_some())
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &FormContext, focused: bool) {
        let error = ctx.field_error(self.props.input_for);
        let (input_area, error_area) = split_field_area(rect, error.is_some());
        self.area = Some(input_area);

        let text = self.current_text(ctx);
        let display = if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text
        };

        let block = create_field_block(&self.props.label_text, focused, error.is_some());
        let cursor = focused.then_some(self.cursor_position);
        f.render_widget(create_input_paragraph(&display, cursor, block), input_area);

        if let (Some(err), Some(area)) = (error, error_area) {
            f.render_widget(create_error_paragraph(&err.error_msg), area);
        }
    }

    fn accessibility(&self, ctx: &FormContext) -> Accessibility {
        let error = ctx.field_error(self.props.input_for);
        let key = self.props.field_key();
        let mut a11y = Accessibility {
            container_class: format!("{}-{}Container", self.props.component_name, key),
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

    fn on_focus(&mut self, ctx: &mut FormContext) {
        self.cursor_position = self.current_text(ctx).chars().count();
    }

    fn unmount(&mut self) {
        self.area = None;
    }
}
