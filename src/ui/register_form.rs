//! The registration form: owns the shared state, the field components and
//! the form-wide listeners, and runs validation on submit.

use crate::config::Config;
use crate::constants::{ACCOUNT_TYPES, AGE_RANGES, ERROR_SUBMIT_FAILED, SUCCESS_SUBMITTED};
use crate::form::{FieldName, FormContext, FormInputValues, RegisterModel};
use crate::logger::Logger;
use crate::ui::components::{DateSelector, DropdownInput, FieldProps, SelectInput, StatusBar, StatusMessage, TextInput};
use crate::ui::core::{Accessibility, Action, Component, DocumentEvent, DocumentListeners, EventType};
use crate::ui::layout::LayoutManager;
use crate::utils::date;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::BTreeMap;

pub struct RegisterForm {
    ctx: FormContext,
    listeners: DocumentListeners,
    fields: Vec<Box<dyn Component>>,
    focus: usize,
    valid_states: Vec<String>,
    status: Option<StatusMessage>,
    submission: Option<FormInputValues>,
    logger: Logger,
    show_logs: bool,
    should_quit: bool,
}

impl RegisterForm {
    /// Build the standard registration form from config
    pub fn new(config: &Config, logger: Logger) -> Self {
        let listeners = DocumentListeners::new();
        let name = config.form.component_name.as_str();
        let props = |field: FieldName, label: &str| FieldProps::new(name, field, label);

        let fields: Vec<Box<dyn Component>> = vec![
            Box::new(TextInput::new(props(FieldName::Username, "Username"))),
            Box::new(TextInput::new(props(FieldName::Email, "Email"))),
            Box::new(TextInput::new(props(FieldName::Password, "Password")).masked()),
            Box::new(TextInput::new(props(FieldName::PasswordConfirm, "Confirm password")).masked()),
            Box::new(TextInput::new(props(FieldName::Place, "Place"))),
            Box::new(
                DropdownInput::new(
                    props(FieldName::State, "State"),
                    config.form.valid_states.clone(),
                    listeners.clone(),
                )
                .with_list_max_height(config.ui.list_max_height),
            ),
            Box::new(SelectInput::new(props(FieldName::AgeRange, "Age range"), AGE_RANGES)),
            Box::new(SelectInput::new(props(FieldName::AccountType, "Account type"), ACCOUNT_TYPES)),
            Box::new(DateSelector::new(props(FieldName::Dob, "Date of birth")).with_hint("MM/DD/YYYY")),
            Box::new(DateSelector::new(props(FieldName::ExpectedDate, "Expected date")).with_hint("MM/DD/YYYY")),
        ];

        Self::with_fields(
            FormContext::registration(),
            listeners,
            fields,
            config.form.valid_states.clone(),
            logger,
        )
    }

    /// Assemble a form from already-built parts
    pub fn with_fields(
        ctx: FormContext,
        listeners: DocumentListeners,
        fields: Vec<Box<dyn Component>>,
        valid_states: Vec<String>,
        logger: Logger,
    ) -> Self {
        Self {
            ctx,
            listeners,
            fields,
            focus: 0,
            valid_states,
            status: None,
            submission: None,
            logger,
            show_logs: false,
            should_quit: false,
        }
    }

    pub fn context(&self) -> &FormContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut FormContext {
        &mut self.ctx
    }

    pub fn listeners(&self) -> &DocumentListeners {
        &self.listeners
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn submission(&self) -> Option<&FormInputValues> {
        self.submission.as_ref()
    }

    /// Last successful submission as field key -> value
    pub fn submitted_values(&self) -> Option<BTreeMap<&'static str, String>> {
        let submission = self.submission.as_ref()?;
        Some(
            FieldName::ALL
                .into_iter()
                .filter_map(|name| submission.get(name).map(|v| (name.key(), v.text().to_string())))
                .collect(),
        )
    }

    pub fn is_showing_logs(&self) -> bool {
        self.show_logs
    }

    pub fn focused_field(&self) -> Option<FieldName> {
        self.fields.get(self.focus).map(|c| c.field())
    }

    pub fn accessibility(&self, name: FieldName) -> Option<Accessibility> {
        self.fields
            .iter()
            .find(|c| c.field() == name)
            .map(|c| c.accessibility(&self.ctx))
    }

    /// Move focus to the field at `index`, firing blur/focus hooks
    pub fn focus(&mut self, index: usize) {
        if index >= self.fields.len() || index == self.focus {
            return;
        }
        if let Some(current) = self.fields.get_mut(self.focus) {
            current.on_blur(&mut self.ctx);
        }
        self.focus = index;
        if let Some(next) = self.fields.get_mut(self.focus) {
            next.on_focus(&mut self.ctx);
        }
    }

    pub fn focus_field(&mut self, name: FieldName) {
        if let Some(index) = self.fields.iter().position(|c| c.field() == name) {
            self.focus(index);
        }
    }

    pub fn handle_event(&mut self, event: EventType) -> Action {
        let action = match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Action::None,
        };
        self.update(action)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return Action::Quit,
                KeyCode::Char('s') => return Action::Submit,
                KeyCode::Char('r') => return Action::Reset,
                KeyCode::Char('l') => return Action::ToggleLogs,
                _ => {}
            }
        }

        let action = match self.fields.get_mut(self.focus) {
            Some(field) => field.handle_key_events(key, &mut self.ctx),
            None => Action::None,
        };
        self.dispatch_document_event(DocumentEvent::KeyDown(key));
        action
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        // The focused field first: its popup may cover the fields below it
        let focused_hit = self
            .fields
            .get(self.focus)
            .is_some_and(|c| c.contains(mouse.column, mouse.row));
        let target = if focused_hit {
            Some(self.focus)
        } else {
            self.fields.iter().position(|c| c.contains(mouse.column, mouse.row))
        };

        let mut action = Action::None;
        if let Some(index) = target {
            self.focus(index);
            if let Some(field) = self.fields.get_mut(index) {
                action = field.handle_mouse_events(mouse, &mut self.ctx);
            }
        }

        self.dispatch_document_event(DocumentEvent::Click {
            column: mouse.column,
            row: mouse.row,
        });
        action
    }

    /// Deliver a form-wide event to every component currently subscribed to it
    pub fn dispatch_document_event(&mut self, event: DocumentEvent) {
        let owners = self.listeners.subscribers(event.kind());
        if owners.is_empty() {
            return;
        }
        for field in self.fields.iter_mut() {
            if owners.contains(&field.id()) {
                field.handle_document_event(&event, &mut self.ctx);
            }
        }
    }

    pub fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FocusNext => {
                let next = (self.focus + 1) % self.fields.len().max(1);
                self.focus(next);
                Action::None
            }
            Action::FocusPrevious => {
                let len = self.fields.len().max(1);
                let previous = (self.focus + len - 1) % len;
                self.focus(previous);
                Action::None
            }
            Action::Submit => {
                self.submit();
                Action::None
            }
            Action::Reset => {
                self.reset();
                Action::None
            }
            Action::ToggleLogs => {
                self.show_logs = !self.show_logs;
                Action::None
            }
            Action::Quit => {
                self.logger.log("Quit requested".to_string());
                self.should_quit = true;
                Action::Quit
            }
            Action::None => Action::None,
        }
    }

    /// Validate against today's date. Returns true if any field has errors.
    pub fn submit(&mut self) -> bool {
        self.submit_at(date::today())
    }

    /// Validate the current values with a fresh model and publish its errors
    pub fn submit_at(&mut self, today: NaiveDate) -> bool {
        let mut model = RegisterModel::new(self.ctx.input_values());
        let failed = model.validate_at(&self.valid_states, today);
        model.write_back(&mut self.ctx);

        if failed {
            let failed_fields = model.failed_fields();
            self.logger.log(format!("Submit rejected: {} field(s) invalid", failed_fields.len()));
            log::info!("submit rejected, invalid fields: {:?}", failed_fields);
            self.status = Some(StatusMessage::Error(ERROR_SUBMIT_FAILED.to_string()));
            if let Some(first) = failed_fields.first() {
                self.focus_field(*first);
            }
        } else {
            self.logger.log("Submit accepted".to_string());
            log::info!("submit accepted");
            self.submission = Some(self.ctx.input_values());
            self.status = Some(StatusMessage::Info(SUCCESS_SUBMITTED.to_string()));
        }
        failed
    }

    /// Clear every value and error and go back to the first field
    pub fn reset(&mut self) {
        let declared: Vec<FieldName> = self.ctx.declared_fields().collect();
        self.ctx = FormContext::new(&declared);
        for field in self.fields.iter_mut() {
            field.unmount();
        }
        self.status = None;
        self.submission = None;
        self.focus = 0;
        if let Some(first) = self.fields.first_mut() {
            first.on_focus(&mut self.ctx);
        }
        self.logger.log("Form reset".to_string());
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = LayoutManager::main_layout(f.area());

        let title = Paragraph::new(Line::from(vec![Span::styled(
            "Create your account",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let column = LayoutManager::form_column(chunks[1]);
        let heights: Vec<u16> = self.fields.iter().map(|c| c.height(&self.ctx)).collect();
        let rects = LayoutManager::field_layout(column, &heights, self.focus);

        for (i, (field, rect)) in self.fields.iter_mut().zip(rects).enumerate() {
            match rect {
                Some(rect) => field.render(f, rect, &self.ctx, i == self.focus),
                None => field.unmount(),
            }
        }

        // Popups after every field, the focused one last so it stays on top
        for (i, field) in self.fields.iter_mut().enumerate() {
            if i != self.focus {
                field.render_overlay(f, &self.ctx);
            }
        }
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.render_overlay(f, &self.ctx);
        }

        StatusBar::render(f, chunks[2], self.status.as_ref());

        if self.show_logs {
            self.render_logs(f);
        }
    }

    fn render_logs(&self, f: &mut Frame) {
        let area = LayoutManager::centered_rect(80, 70, f.area());
        let lines: Vec<Line> = self
            .logger
            .get_logs()
            .into_iter()
            .take(usize::from(area.height.saturating_sub(2)))
            .map(Line::from)
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Logs (Ctrl+L to close) ")
            .border_style(Style::default().fg(Color::Yellow));
        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Drop for RegisterForm {
    fn drop(&mut self) {
        for field in self.fields.iter_mut() {
            field.unmount();
        }
        if !self.listeners.is_empty() {
            log::warn!("{} form listener(s) still registered at teardown", self.listeners.len());
        }
    }
}
