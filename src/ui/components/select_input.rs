//! Option cycler for fields with a short fixed choice list.

use super::common::{create_error_paragraph, create_field_block, split_field_area, INPUT_HEIGHT};
use super::props::FieldProps;
use crate::constants::ROLE_ALERT;
use crate::form::{FieldName, FormContext};
use crate::ui::core::accessibility::{bool_attr, error_message_id, Accessibility, ErrorRegion};
use crate::ui::core::component::rect_contains;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct SelectInput {
    props: FieldProps,
    options: Vec<String>,
    area: Option<Rect>,
}

impl SelectInput {
    pub fn new(props: FieldProps, options: &[&str]) -> Self {
        Self {
            props,
            options: options.iter().map(|o| (*o).to_string()).collect(),
            area: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    fn selected_index(&self, ctx: &FormContext) -> Option<usize> {
        let current = ctx.get_value(self.props.input_for)?.value.as_deref()?;
        self.options.iter().position(|o| o == current)
    }

    /// Step through the options, wrapping at both ends
    fn cycle(&self, ctx: &mut FormContext, forward: bool) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        let next = match (self.selected_index(ctx), forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) if i >= last => 0,
            (Some(i), true) => i + 1,
            (Some(0), false) => last,
            (Some(i), false) => i - 1,
        };
        let value = self.options.get(next).cloned();
        if let Err(e) = ctx.set_value(self.props.input_for, value) {
            log::warn!("{}", e);
        }
    }

    fn input_id(&self) -> String {
        format!("{}-{}Id", self.props.component_name, self.props.field_key())
    }
}

impl Component for SelectInput {
    fn field(&self) -> FieldName {
        self.props.input_for
    }

    fn id(&self) -> String {
        self.input_id()
    }

    fn handle_key_events(&mut self, key: KeyEvent, ctx: &mut FormContext) -> Action {
        match key.code {
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Enter => Action::Submit,
            KeyCode::Right | KeyCode::Char(' ') => {
                self.cycle(ctx, true);
                Action::None
            }
            KeyCode::Left => {
                self.cycle(ctx, false);
                Action::None
            }
            KeyCode::Backspace | KeyCode::Delete => {
                if let Err(e) = ctx.set_value(self.props.input_for, None) {
                    log::warn!("{}", e);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, ctx: &mut FormContext) -> Action {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && self.contains(mouse.column, mouse.row) {
            self.cycle(ctx, true);
        }
        Action::None
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

        let selected = self.selected_index(ctx);
        let label = selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
            .unwrap_or("Select…");
        let arrow_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::styled("◀ ", arrow_style),
            Span::styled(
                label.to_string(),
                Style::default().fg(if selected.is_some() { Color::White } else { Color::DarkGray }),
            ),
            Span::styled(" ▶", arrow_style),
        ]);

        let block = create_field_block(&self.props.label_text, focused, error.is_some());
        f.render_widget(Paragraph::new(line).block(block), input_area);

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
            role: Some("radiogroup"),
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

    fn unmount(&mut self) {
        self.area = None;
    }
}
