use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use regform::constants::{DROPDOWN_LIST_ID, ERROR_INVALID_STATE};
use regform::ui::components::{DropdownInput, FieldProps};
use regform::ui::core::{Action, Component, DocumentEvent, DocumentListeners, ListenerKind};
use regform::{FieldError, FieldName, FormContext};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn dropdown(items: &[&str], listeners: &DocumentListeners) -> DropdownInput {
    let props = FieldProps::new("register", FieldName::State, "State");
    DropdownInput::new(props, items.iter().map(|s| s.to_string()).collect(), listeners.clone())
}

fn type_text(dropdown: &mut DropdownInput, text: &str, ctx: &mut FormContext) {
    for c in text.chars() {
        dropdown.handle_key_events(key(KeyCode::Char(c)), ctx);
    }
}

/// Draw the input at the top-left of a 40x20 screen, with its list under it
fn render(dropdown: &mut DropdownInput, ctx: &FormContext) {
    let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
    terminal
        .draw(|f| {
            dropdown.render(f, Rect::new(0, 0, 30, 3), ctx, true);
            dropdown.render_overlay(f, ctx);
        })
        .unwrap();
}

fn value(ctx: &FormContext) -> String {
    ctx.get_value(FieldName::State).unwrap().text().to_string()
}

#[test]
fn test_filter_is_case_insensitive_prefix() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY", "TX"], &listeners);

    dropdown.handle_user_input("c".to_string(), &mut ctx);
    assert_eq!(dropdown.item_list(), ["CA"]);
    assert!(!dropdown.is_list_hidden());
    assert_eq!(value(&ctx), "c");
}

#[test]
fn test_filter_prefix_not_substring() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["New York", "Kansas", "Arkansas"], &listeners);

    type_text(&mut dropdown, "kan", &mut ctx);
    assert_eq!(dropdown.item_list(), ["Kansas"]);
}

#[test]
fn test_empty_text_closes_list() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY", "TX"], &listeners);

    type_text(&mut dropdown, "n", &mut ctx);
    assert!(!dropdown.is_list_hidden());
    assert_eq!(listeners.len(), 2);

    dropdown.handle_key_events(key(KeyCode::Backspace), &mut ctx);
    assert!(dropdown.is_list_hidden());
    assert_eq!(value(&ctx), "");
    assert!(listeners.is_empty());
}

#[test]
fn test_arrow_navigation_bounds() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "CO", "CT", "NY"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    assert_eq!(dropdown.item_list().len(), 3);
    assert_eq!(dropdown.list_index(), None);

    dropdown.handle_key_events(key(KeyCode::Down), &mut ctx);
    assert_eq!(dropdown.list_index(), Some(0));

    dropdown.handle_key_events(key(KeyCode::Down), &mut ctx);
    dropdown.handle_key_events(key(KeyCode::Down), &mut ctx);
    assert_eq!(dropdown.list_index(), Some(2));

    // Last item: no-op
    dropdown.handle_key_events(key(KeyCode::Down), &mut ctx);
    assert_eq!(dropdown.list_index(), Some(2));

    dropdown.handle_key_events(key(KeyCode::Up), &mut ctx);
    dropdown.handle_key_events(key(KeyCode::Up), &mut ctx);
    assert_eq!(dropdown.list_index(), Some(0));

    // Above the first suggestion focus goes back to the input
    dropdown.handle_key_events(key(KeyCode::Up), &mut ctx);
    assert_eq!(dropdown.list_index(), None);
}

#[test]
fn test_arrow_down_ignored_while_list_hidden() {
    let listeners = DocumentListeners::new();
    let mut dropdown = dropdown(&["CA", "NY", "TX"], &listeners);

    assert!(dropdown.handle_arrow_nav(KeyCode::Down));
    assert_eq!(dropdown.list_index(), None);
    assert!(!dropdown.handle_arrow_nav(KeyCode::Left));
}

#[test]
fn test_typing_resets_index() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "CO", "CT"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    dropdown.handle_key_events(key(KeyCode::Down), &mut ctx);
    assert_eq!(dropdown.list_index(), Some(0));

    dropdown.handle_user_input("co".to_string(), &mut ctx);
    assert_eq!(dropdown.list_index(), None);
    assert_eq!(dropdown.item_list(), ["CO"]);
}

#[test]
fn test_typing_ignored_while_suggestion_focused() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "CO", "CT"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    dropdown.handle_key_events(key(KeyCode::Down), &mut ctx);

    dropdown.handle_key_events(key(KeyCode::Char('x')), &mut ctx);
    assert_eq!(value(&ctx), "c");
    assert_eq!(dropdown.list_index(), Some(0));
}

#[test]
fn test_enter_selects_focused_suggestion() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "CO", "CT"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    dropdown.handle_key_events(key(KeyCode::Down), &mut ctx);
    dropdown.handle_key_events(key(KeyCode::Down), &mut ctx);

    let action = dropdown.handle_key_events(key(KeyCode::Enter), &mut ctx);
    assert_eq!(action, Action::None);
    assert_eq!(value(&ctx), "CO");
    assert!(dropdown.is_list_hidden());
    assert_eq!(dropdown.list_index(), None);
    assert!(listeners.is_empty());
}

#[test]
fn test_enter_on_input_submits() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    assert_eq!(dropdown.handle_key_events(key(KeyCode::Enter), &mut ctx), Action::Submit);
}

#[test]
fn test_selection_out_of_range_is_ignored() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);

    dropdown.handle_item_selection(5, &mut ctx);
    assert_eq!(value(&ctx), "c");
    assert!(!dropdown.is_list_hidden());
}

#[test]
fn test_tab_closes_list() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY"], &listeners);
    type_text(&mut dropdown, "n", &mut ctx);

    assert_eq!(dropdown.handle_key_events(key(KeyCode::Tab), &mut ctx), Action::FocusNext);
    assert!(dropdown.is_list_hidden());
    assert!(listeners.is_empty());

    type_text(&mut dropdown, "y", &mut ctx);
    let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
    assert_eq!(dropdown.handle_key_events(back_tab, &mut ctx), Action::FocusPrevious);
    assert!(dropdown.is_list_hidden());
}

#[test]
fn test_reopen_requires_text() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY"], &listeners);

    dropdown.on_focus(&mut ctx);
    assert!(dropdown.is_list_hidden());
    assert!(listeners.is_empty());

    type_text(&mut dropdown, "n", &mut ctx);
    dropdown.handle_tab_nav();
    assert!(dropdown.is_list_hidden());

    dropdown.on_focus(&mut ctx);
    assert!(!dropdown.is_list_hidden());
    assert_eq!(dropdown.item_list(), ["NY"]);
    assert_eq!(listeners.len(), 2);
}

#[test]
fn test_listeners_follow_visibility() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY"], &listeners);
    assert!(!dropdown.has_listeners());

    type_text(&mut dropdown, "c", &mut ctx);
    assert!(dropdown.has_listeners());
    assert_eq!(listeners.subscribers(ListenerKind::Click), vec!["stateInput-id".to_string()]);
    assert_eq!(listeners.subscribers(ListenerKind::KeyDown), vec!["stateInput-id".to_string()]);

    // Further keystrokes while open don't stack subscriptions
    type_text(&mut dropdown, "a", &mut ctx);
    assert_eq!(listeners.count_for("stateInput-id"), 2);

    for _ in 0..3 {
        dropdown.handle_tab_nav();
        dropdown.handle_reopen_list(&ctx);
    }
    assert_eq!(listeners.len(), 2);
}

#[test]
fn test_outside_click_closes_list_and_removes_listeners() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY", "TX"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    render(&mut dropdown, &ctx);
    assert_eq!(listeners.len(), 2);

    dropdown.handle_document_event(&DocumentEvent::Click { column: 35, row: 15 }, &mut ctx);
    assert!(dropdown.is_list_hidden());
    assert!(!dropdown.has_listeners());
    assert!(listeners.is_empty());
    assert!(listeners.subscribers(ListenerKind::Click).is_empty());
    assert!(listeners.subscribers(ListenerKind::KeyDown).is_empty());

    // Typing again reopens and subscribes once more
    dropdown.handle_user_input("t".to_string(), &mut ctx);
    assert_eq!(listeners.len(), 2);
}

#[test]
fn test_click_inside_input_or_list_keeps_list_open() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY", "TX"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    render(&mut dropdown, &ctx);

    dropdown.handle_document_event(&DocumentEvent::Click { column: 5, row: 1 }, &mut ctx);
    assert!(!dropdown.is_list_hidden());

    // The list sits right under the 3-row input: border on row 3, "CA" on row 4
    dropdown.handle_document_event(&DocumentEvent::Click { column: 5, row: 4 }, &mut ctx);
    assert!(!dropdown.is_list_hidden());
    assert_eq!(listeners.len(), 2);
}

#[test]
fn test_click_on_suggestion_selects_it() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "CO", "NY"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    render(&mut dropdown, &ctx);
    assert!(dropdown.contains(5, 5));

    dropdown.handle_mouse_events(click(5, 5), &mut ctx);
    assert_eq!(value(&ctx), "CO");
    assert!(dropdown.is_list_hidden());
    assert!(listeners.is_empty());
}

#[test]
fn test_click_on_input_reopens_list() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    dropdown.handle_tab_nav();
    render(&mut dropdown, &ctx);

    dropdown.handle_mouse_events(click(2, 1), &mut ctx);
    assert!(!dropdown.is_list_hidden());
}

#[test]
fn test_escape_closes_list() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);
    render(&mut dropdown, &ctx);

    dropdown.handle_document_event(&DocumentEvent::KeyDown(key(KeyCode::Char('z'))), &mut ctx);
    assert!(!dropdown.is_list_hidden());

    dropdown.handle_document_event(&DocumentEvent::KeyDown(key(KeyCode::Esc)), &mut ctx);
    assert!(dropdown.is_list_hidden());
    assert!(listeners.is_empty());
}

#[test]
fn test_events_without_anchor_close_list() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);

    // Never rendered
    dropdown.handle_document_event(&DocumentEvent::Click { column: 35, row: 15 }, &mut ctx);
    assert!(listeners.is_empty());
    // Closed along with the listeners, so it never shows unguarded
    assert!(dropdown.is_list_hidden());

    render(&mut dropdown, &ctx);
    assert!(listeners.is_empty());
    assert_eq!(dropdown.accessibility(&ctx).aria("aria-expanded"), Some("false"));

    // Typing again reopens it with fresh listeners
    type_text(&mut dropdown, "a", &mut ctx);
    assert_eq!(listeners.len(), 2);
}

#[test]
fn test_unmount_and_drop_release_listeners() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut first = dropdown(&["CA", "NY"], &listeners);
    type_text(&mut first, "c", &mut ctx);
    assert_eq!(listeners.len(), 2);
    first.unmount();
    assert!(first.is_list_hidden());
    assert!(listeners.is_empty());

    let mut second = dropdown(&["CA", "NY"], &listeners);
    type_text(&mut second, "n", &mut ctx);
    assert_eq!(listeners.len(), 2);
    drop(second);
    assert!(listeners.is_empty());
}

#[test]
fn test_list_rendered_under_input() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["California", "Colorado"], &listeners);
    type_text(&mut dropdown, "c", &mut ctx);

    let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
    terminal
        .draw(|f| {
            dropdown.render(f, Rect::new(0, 0, 30, 3), &ctx, true);
            dropdown.render_overlay(f, &ctx);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let row = |y: u16| -> String { (0..30).map(|x| buffer[(x, y)].symbol().to_string()).collect() };
    assert!(row(0).contains("State"));
    assert!(row(4).contains("California"));
    assert!(row(5).contains("Colorado"));
}

#[test]
fn test_accessibility_reflects_state() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let mut dropdown = dropdown(&["CA", "NY"], &listeners);

    let a11y = dropdown.accessibility(&ctx);
    assert_eq!(a11y.container_class, "register_stateInputDiv");
    assert_eq!(a11y.input_id, "stateInput-id");
    assert_eq!(a11y.label_for, "stateInput-id");
    assert_eq!(a11y.role, Some("combobox"));
    assert_eq!(a11y.aria("aria-controls"), Some(DROPDOWN_LIST_ID));
    assert_eq!(a11y.aria("aria-expanded"), Some("false"));
    assert_eq!(a11y.aria("aria-invalid"), Some("false"));
    assert!(a11y.error_region.is_none());
    assert!(a11y.listbox.as_ref().unwrap().hidden);

    type_text(&mut dropdown, "c", &mut ctx);
    ctx.set_errors(FieldName::State, vec![FieldError::new(ERROR_INVALID_STATE)]).unwrap();
    let a11y = dropdown.accessibility(&ctx);
    assert_eq!(a11y.aria("aria-expanded"), Some("true"));
    assert_eq!(a11y.aria("aria-invalid"), Some("true"));
    assert_eq!(a11y.aria("aria-errormessage"), Some("state-errorMsg-id"));
    let region = a11y.error_region.unwrap();
    assert_eq!(region.role, "alert");
    assert_eq!(region.message, ERROR_INVALID_STATE);
    let listbox = a11y.listbox.unwrap();
    assert_eq!(listbox.id, DROPDOWN_LIST_ID);
    assert_eq!(listbox.role, "listbox");
    assert!(!listbox.hidden);
    assert_eq!(listbox.items, vec!["CA".to_string()]);
}

#[test]
fn test_error_line_adds_height() {
    let listeners = DocumentListeners::new();
    let mut ctx = FormContext::registration();
    let dropdown = dropdown(&["CA"], &listeners);
    assert_eq!(dropdown.height(&ctx), 3);
    ctx.set_errors(FieldName::State, vec![FieldError::new(ERROR_INVALID_STATE)]).unwrap();
    assert_eq!(dropdown.height(&ctx), 4);
}
