//! Combobox: a text input paired with a filtered, keyboard-navigable suggestion list.
//!
//! The list closes on Tab, on Escape anywhere in the form, and on a click
//! outside both the input and the list. The last two are form-wide listeners
//! that are only held while the list is open.

use super::common::{create_error_paragraph, create_field_block, create_input_paragraph, split_field_area, INPUT_HEIGHT};
use super::props::FieldProps;
use crate::constants::{DROPDOWN_LIST_ID, LIST_MAX_HEIGHT_DEFAULT, ROLE_ALERT, ROLE_COMBOBOX, ROLE_LISTBOX};
use crate::form::{FieldName, FormContext};
use crate::ui::core::accessibility::{bool_attr, error_message_id, Accessibility, ErrorRegion, Listbox};
use crate::ui::core::component::rect_contains;
use crate::ui::core::{Action, Component, DocumentEvent, DocumentListeners, ListenerKind, Subscription};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct DropdownInput {
    props: FieldProps,
    /// Full candidate list
    items: Vec<String>,
    is_list_hidden: bool,
    /// Candidates matching the current text
    item_list: Vec<String>,
    /// Focused suggestion; `None` while the input itself has focus
    list_index: Option<usize>,
    listeners: DocumentListeners,
    subscriptions: Vec<Subscription>,
    input_area: Option<Rect>,
    list_area: Option<Rect>,
    list_max_height: u16,
    scroll_offset: usize,
}

impl DropdownInput {
    pub fn new(props: FieldProps, items: Vec<String>, listeners: DocumentListeners) -> Self {
        Self {
            props,
            items,
            is_list_hidden: true,
            item_list: Vec::new(),
            list_index: None,
            listeners,
            subscriptions: Vec::new(),
            input_area: None,
            list_area: None,
            list_max_height: LIST_MAX_HEIGHT_DEFAULT,
            scroll_offset: 0,
        }
    }

    pub fn with_list_max_height(mut self, rows: u16) -> Self {
        self.list_max_height = rows.max(1);
        self
    }

    pub fn is_list_hidden(&self) -> bool {
        self.is_list_hidden
    }

    /// True when the list is open and has something to show
    pub fn is_list_visible(&self) -> bool {
        !self.is_list_hidden && !self.item_list.is_empty()
    }

    pub fn item_list(&self) -> &[String] {
        &self.item_list
    }

    pub fn list_index(&self) -> Option<usize> {
        self.list_index
    }

    /// Whether the form-wide click and Escape listeners are currently held
    pub fn has_listeners(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// New input text: store it, refilter, and open the list if there is any text
    pub fn handle_user_input(&mut self, text: String, ctx: &mut FormContext) {
        self.set_list_hidden(text.is_empty());
        self.list_index = None;

        let needle = text.to_lowercase();
        self.item_list = self
            .items
            .iter()
            .filter(|item| item.to_lowercase().starts_with(&needle))
            .cloned()
            .collect();

        if let Err(e) = ctx.set_value(self.props.input_for, Some(text)) {
            log::warn!("{}", e);
        }
    }

    /// Pick the suggestion at `index`, put focus back on the input and close the list
    pub fn handle_item_selection(&mut self, index: usize, ctx: &mut FormContext) {
        let Some(item) = self.item_list.get(index).cloned() else {
            return;
        };
        log::debug!("{} selected '{}'", self.props.input_for, item);
        if let Err(e) = ctx.set_value(self.props.input_for, Some(item)) {
            log::warn!("{}", e);
        }
        self.set_list_hidden(true);
        self.list_index = None;
    }

    /// Reopen on focus or click, but only when the field holds text
    pub fn handle_reopen_list(&mut self, ctx: &FormContext) {
        let has_text = ctx.get_value(self.props.input_for).is_some_and(|v| !v.is_blank());
        if has_text {
            self.set_list_hidden(false);
        }
    }

    /// Up/Down through the suggestions. Returns true if the key was consumed.
    pub fn handle_arrow_nav(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up => {
                self.list_index = match self.list_index {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
                true
            }
            KeyCode::Down => {
                let next = self.list_index.map_or(0, |i| i + 1);
                if self.is_list_visible() && next < self.item_list.len() {
                    self.list_index = Some(next);
                }
                true
            }
            _ => false,
        }
    }

    /// Tab moves focus out of the component, so close the list
    pub fn handle_tab_nav(&mut self) {
        if !self.is_list_hidden {
            self.set_list_hidden(true);
        }
    }

    fn set_list_hidden(&mut self, hidden: bool) {
        self.is_list_hidden = hidden;
        self.sync_listeners();
    }

    /// Hold the form-wide listeners exactly while the list is open
    fn sync_listeners(&mut self) {
        if self.is_list_hidden {
            self.release_listeners();
        } else if self.subscriptions.is_empty() {
            let owner = self.id();
            self.subscriptions.push(self.listeners.subscribe(&owner, ListenerKind::Click));
            self.subscriptions.push(self.listeners.subscribe(&owner, ListenerKind::KeyDown));
        }
    }

    fn release_listeners(&mut self) {
        for mut subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
    }

    fn current_text(&self, ctx: &FormContext) -> String {
        ctx.get_value(self.props.input_for)
            .map(|v| v.text().to_string())
            .unwrap_or_default()
    }

    fn input_id(&self) -> String {
        format!("{}Input-id", self.props.field_key())
    }

    /// Suggestion under a screen row, accounting for the list's border and scroll
    fn item_at_row(&self, row: u16) -> Option<usize> {
        let area = self.list_area?;
        let first_row = area.y + 1;
        if row < first_row || row >= area.y + area.height.saturating_sub(1) {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - first_row);
        (index < self.item_list.len()).then_some(index)
    }
}

impl Component for DropdownInput {
    fn field(&self) -> FieldName {
        self.props.input_for
    }

    fn id(&self) -> String {
        self.input_id()
    }

    fn handle_key_events(&mut self, key: KeyEvent, ctx: &mut FormContext) -> Action {
        if self.handle_arrow_nav(key.code) {
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.handle_tab_nav();
                Action::FocusNext
            }
            KeyCode::BackTab => {
                self.handle_tab_nav();
                Action::FocusPrevious
            }
            KeyCode::Enter => match self.list_index {
                Some(index) => {
                    self.handle_item_selection(index, ctx);
                    Action::None
                }
                None => Action::Submit,
            },
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Action::None,
            // Typing only reaches the input, not a focused suggestion
            KeyCode::Char(c) if self.list_index.is_none() => {
                let mut text = self.current_text(ctx);
                text.push(c);
                self.handle_user_input(text, ctx);
                Action::None
            }
            KeyCode::Backspace if self.list_index.is_none() => {
                let mut text = self.current_text(ctx);
                if text.pop().is_some() {
                    self.handle_user_input(text, ctx);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, ctx: &mut FormContext) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        if self.is_list_visible() {
            if let Some(index) = self.item_at_row(mouse.row) {
                if rect_contains(self.list_area, mouse.column, mouse.row) {
                    self.handle_item_selection(index, ctx);
                    return Action::None;
                }
            }
        }

        if rect_contains(self.input_area, mouse.column, mouse.row) {
            self.list_index = None;
            self.handle_reopen_list(ctx);
        }
        Action::None
    }

    fn handle_document_event(&mut self, event: &DocumentEvent, _ctx: &mut FormContext) {
        if self.subscriptions.is_empty() {
            return;
        }

        // Not rendered: nothing to measure clicks against
        if self.input_area.is_none() {
            self.set_list_hidden(true);
            self.list_index = None;
            return;
        }

        match event {
            DocumentEvent::Click { column, row } => {
                let in_list = self.is_list_visible() && rect_contains(self.list_area, *column, *row);
                let in_input = rect_contains(self.input_area, *column, *row);
                if !in_list && !in_input {
                    self.set_list_hidden(true);
                    self.list_index = None;
                }
            }
            DocumentEvent::KeyDown(key) => {
                if key.code == KeyCode::Esc {
                    self.set_list_hidden(true);
                    self.list_index = None;
                }
            }
        }
    }

    fn height(&self, ctx: &FormContext) -> u16 {
        INPUT_HEIGHT + u16::from(ctx.field_error(self.props.input_for).is_some())
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.input_area, column, row)
            || (self.is_list_visible() && rect_contains(self.list_area, column, row))
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &FormContext, focused: bool) {
        let error = ctx.field_error(self.props.input_for);
        let (input_area, error_area) = split_field_area(rect, error.is_some());
        self.input_area = Some(input_area);

        let text = self.current_text(ctx);
        let cursor = (focused && self.list_index.is_none()).then(|| text.chars().count());
        let block = create_field_block(&self.props.label_text, focused, error.is_some());
        f.render_widget(create_input_paragraph(&text, cursor, block), input_area);

        if let (Some(err), Some(area)) = (error, error_area) {
            f.render_widget(create_error_paragraph(&err.error_msg), area);
        }
    }

    fn render_overlay(&mut self, f: &mut Frame, _ctx: &FormContext) {
        let Some(input_area) = self.input_area else {
            self.list_area = None;
            return;
        };
        if !self.is_list_visible() {
            self.list_area = None;
            return;
        }

        let frame_area = f.area();
        let top = input_area.y + input_area.height;
        let rows = u16::try_from(self.item_list.len())
            .unwrap_or(u16::MAX)
            .min(self.list_max_height);
        let available = frame_area.height.saturating_sub(top);
        let height = rows.saturating_add(2).min(available);
        if height < 3 {
            self.list_area = None;
            return;
        }
        let area = Rect::new(input_area.x, top, input_area.width, height);
        self.list_area = Some(area);

        let visible_rows = usize::from(height - 2);
        self.scroll_offset = match self.list_index {
            Some(i) if i >= visible_rows => i + 1 - visible_rows,
            _ => 0,
        };

        let items: Vec<ListItem> = self
            .item_list
            .iter()
            .skip(self.scroll_offset)
            .take(visible_rows)
            .map(|item| ListItem::new(item.clone()))
            .collect();

        let mut state = ListState::default();
        state.select(self.list_index.map(|i| i - self.scroll_offset));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");

        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, &mut state);
    }

    fn accessibility(&self, ctx: &FormContext) -> Accessibility {
        let error = ctx.field_error(self.props.input_for);
        let key = self.props.field_key();
        let mut a11y = Accessibility {
            container_class: format!("{}_{}InputDiv", self.props.component_name, key),
            label_for: self.input_id(),
            label_text: self.props.label_text.clone(),
            input_id: self.input_id(),
            input_name: key.to_string(),
            role: Some(ROLE_COMBOBOX),
            ..Default::default()
        };
        a11y.set_aria("aria-controls", DROPDOWN_LIST_ID);
        a11y.set_aria("aria-expanded", bool_attr(!self.is_list_hidden));
        a11y.set_aria("aria-autocomplete", "list");
        a11y.set_aria("aria-required", "true");
        a11y.set_aria("aria-invalid", bool_attr(error.is_some()));
        a11y.set_aria("aria-errormessage", error.map(|_| error_message_id(key)).unwrap_or_default());
        a11y.error_region = error.map(|err| ErrorRegion {
            id: error_message_id(key),
            role: ROLE_ALERT,
            message: err.error_msg.clone(),
        });
        a11y.listbox = Some(Listbox {
            id: DROPDOWN_LIST_ID.to_string(),
            role: ROLE_LISTBOX,
            hidden: !self.is_list_visible(),
            items: self.item_list.clone(),
        });
        a11y
    }

    fn on_focus(&mut self, ctx: &mut FormContext) {
        self.list_index = None;
        self.handle_reopen_list(ctx);
    }

    fn unmount(&mut self) {
        self.input_area = None;
        self.list_area = None;
        self.list_index = None;
        self.set_list_hidden(true);
    }
}
